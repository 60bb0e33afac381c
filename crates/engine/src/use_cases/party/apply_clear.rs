//! Ledger application of a party clear.
//!
//! Booking a party records who ran together; this use case moves each
//! member's own checklist forward, completing every remaining gate of the
//! raid. Members without a checklist yet get one generated first.

use std::sync::Arc;

use raidledger_domain::{reset_week, CharacterId, RaidId};

use crate::infrastructure::ports::{CharacterRepo, ClockPort, CompletionRepo};
use crate::use_cases::checklist::{ChecklistError, CompleteGate, GenerateChecklist};

use super::error::PartyError;

pub struct CompletePartyRaid {
    character_repo: Arc<dyn CharacterRepo>,
    completion_repo: Arc<dyn CompletionRepo>,
    clock: Arc<dyn ClockPort>,
    generate: Arc<GenerateChecklist>,
    complete_gate: Arc<CompleteGate>,
}

impl CompletePartyRaid {
    pub fn new(
        character_repo: Arc<dyn CharacterRepo>,
        completion_repo: Arc<dyn CompletionRepo>,
        clock: Arc<dyn ClockPort>,
        generate: Arc<GenerateChecklist>,
        complete_gate: Arc<CompleteGate>,
    ) -> Self {
        Self {
            character_repo,
            completion_repo,
            clock,
            generate,
            complete_gate,
        }
    }

    pub async fn execute(
        &self,
        raid_id: RaidId,
        member_ids: &[CharacterId],
        extra_reward: bool,
    ) -> Result<(), PartyError> {
        if member_ids.is_empty() {
            return Err(PartyError::EmptyParty);
        }
        let week_start = reset_week::week_start(self.clock.now());

        for &member_id in member_ids {
            self.character_repo
                .get(member_id)
                .await?
                .ok_or(PartyError::CharacterNotFound)?;

            let weekly = match self
                .completion_repo
                .find_weekly(member_id, raid_id, week_start)
                .await?
            {
                Some(weekly) => weekly,
                None => {
                    self.generate.execute(member_id).await?;
                    self.completion_repo
                        .find_weekly(member_id, raid_id, week_start)
                        .await?
                        .ok_or(PartyError::ChecklistUnavailable)?
                }
            };

            for gate in self.completion_repo.list_gates_for_weekly(weekly.id).await? {
                if gate.completed {
                    continue;
                }
                match self.complete_gate.execute(gate.id, extra_reward).await {
                    Ok(_) => {}
                    // Lost a race to another writer; the gate is done either way.
                    Err(ChecklistError::AlreadyCompleted) => {}
                    Err(e) => return Err(e.into()),
                }
            }
        }
        Ok(())
    }
}
