//! Weekly reset scheduling.
//!
//! One background task sleeps until the next Wednesday 06:00 boundary,
//! runs the reset use case, and goes back to sleep for the following week.

use std::sync::Arc;

use raidledger_domain::reset_week;

use crate::infrastructure::ports::ClockPort;
use crate::use_cases::reset::WeeklyReset;

/// Spawn the weekly reset worker. The task runs until the handle is
/// aborted or the runtime shuts down.
pub fn spawn_weekly_reset(
    weekly_reset: Arc<WeeklyReset>,
    clock: Arc<dyn ClockPort>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            let now = clock.now();
            let next = reset_week::next_reset(now);
            let wait = (next - now).to_std().unwrap_or_default();
            tracing::info!(
                next_reset = %next,
                countdown = %reset_week::until_reset(now),
                "weekly reset scheduled"
            );
            tokio::time::sleep(wait).await;

            match weekly_reset.execute().await {
                Ok(summary) => tracing::info!(
                    parties_deleted = summary.parties_deleted,
                    gates_deleted = summary.gates_deleted,
                    weeklies_deleted = summary.weeklies_deleted,
                    checklists_generated = summary.checklists_generated,
                    failures = summary.failures,
                    "weekly reset finished"
                ),
                Err(e) => tracing::error!(error = %e, "weekly reset failed"),
            }
        }
    })
}
