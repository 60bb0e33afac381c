//! Gate un-completion.
//!
//! Reverses a mistaken completion in place and re-derives the raid-group's
//! weekly state. Records are never deleted; the gate walks back to
//! incomplete and the group's weekly records follow whichever difficulty
//! still holds real gate completions.

use std::sync::Arc;

use raidledger_domain::{GateCompletion, GateCompletionId, WeeklyCompletion};

use crate::infrastructure::locks::GroupLocks;
use crate::infrastructure::ports::{CompletionRepo, RaidRepo};

use super::error::ChecklistError;

#[derive(Debug, Clone)]
pub struct UncompletedGate {
    pub gate: GateCompletion,
    pub weekly: WeeklyCompletion,
}

pub struct UncompleteGate {
    raid_repo: Arc<dyn RaidRepo>,
    completion_repo: Arc<dyn CompletionRepo>,
    locks: Arc<GroupLocks>,
}

impl UncompleteGate {
    pub fn new(
        raid_repo: Arc<dyn RaidRepo>,
        completion_repo: Arc<dyn CompletionRepo>,
        locks: Arc<GroupLocks>,
    ) -> Self {
        Self {
            raid_repo,
            completion_repo,
            locks,
        }
    }

    pub async fn execute(
        &self,
        gate_id: GateCompletionId,
    ) -> Result<UncompletedGate, ChecklistError> {
        let record = self
            .completion_repo
            .get_gate(gate_id)
            .await?
            .ok_or(ChecklistError::GateNotFound)?;
        let weekly = self
            .completion_repo
            .get_weekly(record.weekly_completion_id)
            .await?
            .ok_or(ChecklistError::GateNotFound)?;
        let raid = self
            .raid_repo
            .get(weekly.raid_id)
            .await?
            .ok_or(ChecklistError::RaidNotFound)?;

        let _guard = self
            .locks
            .lock_character_group(weekly.character_id, &raid.raid_group)
            .await;

        let mut record = self
            .completion_repo
            .get_gate(gate_id)
            .await?
            .ok_or(ChecklistError::GateNotFound)?;
        record.reset();
        self.completion_repo.save_gate(&record).await?;

        let mut weekly = weekly;
        let gates = self.completion_repo.list_gates_for_weekly(weekly.id).await?;
        weekly.recompute_from_gates(&gates);
        self.completion_repo.save_weekly(&weekly).await?;

        self.resync_group(&weekly, &raid.raid_group).await?;

        let weekly = self
            .completion_repo
            .get_weekly(weekly.id)
            .await?
            .ok_or(ChecklistError::GateNotFound)?;
        tracing::debug!(
            raid = %raid.display_name(),
            gate = record.gate_number,
            "gate uncompleted"
        );
        Ok(UncompletedGate {
            gate: record,
            weekly,
        })
    }

    /// Re-derive the group's weekly records after an un-completion. The
    /// difficulty that still holds completed gates is authoritative; every
    /// other difficulty syncs to its total. With no completed gates left
    /// anywhere in the group, every record clears.
    async fn resync_group(
        &self,
        weekly: &WeeklyCompletion,
        raid_group: &str,
    ) -> Result<(), ChecklistError> {
        let mut group_weeklies = Vec::new();
        let mut authoritative: Option<WeeklyCompletion> = None;

        for raid in self.raid_repo.list_by_group(raid_group).await? {
            let Some(sibling) = self
                .completion_repo
                .find_weekly(weekly.character_id, raid.id, weekly.week_start)
                .await?
            else {
                continue;
            };
            let gates = self
                .completion_repo
                .list_gates_for_weekly(sibling.id)
                .await?;
            if gates.iter().any(|g| g.completed) {
                authoritative = Some(sibling.clone());
            }
            group_weeklies.push(sibling);
        }

        match authoritative {
            Some(actual) => {
                for mut sibling in group_weeklies {
                    if sibling.id == actual.id {
                        continue;
                    }
                    sibling.sync_to(actual.earned_gold);
                    self.completion_repo.save_weekly(&sibling).await?;
                }
            }
            None => {
                for mut sibling in group_weeklies {
                    if !sibling.completed && sibling.earned_gold == 0 {
                        continue;
                    }
                    sibling.clear();
                    self.completion_repo.save_weekly(&sibling).await?;
                }
            }
        }
        Ok(())
    }
}
