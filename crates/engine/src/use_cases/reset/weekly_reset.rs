//! The Wednesday 06:00 reset.
//!
//! Wipes every weekly record (parties first, then gate records, then the
//! weekly rows they hang off) and regenerates a fresh checklist for every
//! character. A character whose regeneration fails is logged and skipped;
//! one bad roster entry must not leave the rest of the roster without a
//! checklist.

use std::sync::Arc;

use crate::infrastructure::ports::{CharacterRepo, CompletionRepo, PartyRepo, RepoError};
use crate::use_cases::checklist::GenerateChecklist;

/// Counters from one reset run.
#[derive(Debug, Clone, Default)]
pub struct ResetSummary {
    pub parties_deleted: u64,
    pub gates_deleted: u64,
    pub weeklies_deleted: u64,
    pub characters_total: usize,
    pub checklists_generated: usize,
    pub failures: usize,
}

pub struct WeeklyReset {
    character_repo: Arc<dyn CharacterRepo>,
    completion_repo: Arc<dyn CompletionRepo>,
    party_repo: Arc<dyn PartyRepo>,
    generate: Arc<GenerateChecklist>,
}

impl WeeklyReset {
    pub fn new(
        character_repo: Arc<dyn CharacterRepo>,
        completion_repo: Arc<dyn CompletionRepo>,
        party_repo: Arc<dyn PartyRepo>,
        generate: Arc<GenerateChecklist>,
    ) -> Self {
        Self {
            character_repo,
            completion_repo,
            party_repo,
            generate,
        }
    }

    pub async fn execute(&self) -> Result<ResetSummary, RepoError> {
        let mut summary = ResetSummary {
            parties_deleted: self.party_repo.delete_all().await?,
            gates_deleted: self.completion_repo.delete_all_gates().await?,
            weeklies_deleted: self.completion_repo.delete_all_weekly().await?,
            ..ResetSummary::default()
        };

        let characters = self.character_repo.list().await?;
        summary.characters_total = characters.len();
        for character in characters {
            match self.generate.execute(character.id).await {
                Ok(_) => summary.checklists_generated += 1,
                Err(e) => {
                    summary.failures += 1;
                    tracing::warn!(
                        character = %character.name,
                        error = %e,
                        "checklist regeneration failed, continuing"
                    );
                }
            }
        }
        Ok(summary)
    }
}
