//! Weekly checklist generation.

use std::sync::Arc;

use raidledger_domain::{reset_week, CharacterId, GateCompletion, WeeklyCompletion};

use crate::infrastructure::ports::{CharacterRepo, ClockPort, CompletionRepo, RaidRepo};

use super::error::ChecklistError;
use super::types::ChecklistEntry;

/// Build (or top up) the current week's checklist for a character.
///
/// Eligible raids are those whose item level requirement the character
/// meets. Existing weekly records for this week are kept as-is; missing
/// ones are created untouched, one gate record per gate definition.
/// Idempotent within a week.
pub struct GenerateChecklist {
    character_repo: Arc<dyn CharacterRepo>,
    raid_repo: Arc<dyn RaidRepo>,
    completion_repo: Arc<dyn CompletionRepo>,
    clock: Arc<dyn ClockPort>,
}

impl GenerateChecklist {
    pub fn new(
        character_repo: Arc<dyn CharacterRepo>,
        raid_repo: Arc<dyn RaidRepo>,
        completion_repo: Arc<dyn CompletionRepo>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            character_repo,
            raid_repo,
            completion_repo,
            clock,
        }
    }

    pub async fn execute(
        &self,
        character_id: CharacterId,
    ) -> Result<Vec<ChecklistEntry>, ChecklistError> {
        let character = self
            .character_repo
            .get(character_id)
            .await?
            .ok_or(ChecklistError::CharacterNotFound)?;

        let week_start = reset_week::week_start(self.clock.now());
        let eligible = self
            .raid_repo
            .list_by_max_item_level(character.item_level)
            .await?;

        let mut entries = Vec::with_capacity(eligible.len());
        for raid in eligible {
            let weekly = match self
                .completion_repo
                .find_weekly(character_id, raid.id, week_start)
                .await?
            {
                Some(existing) => existing,
                None => {
                    let weekly = WeeklyCompletion::new(character_id, raid.id, week_start);
                    self.completion_repo.save_weekly(&weekly).await?;
                    for gate in &raid.gates {
                        let record = GateCompletion::new(weekly.id, gate);
                        self.completion_repo.save_gate(&record).await?;
                    }
                    weekly
                }
            };
            let gates = self.completion_repo.list_gates_for_weekly(weekly.id).await?;
            entries.push(ChecklistEntry {
                raid,
                completion: weekly,
                gates,
            });
        }

        tracing::debug!(
            character = %character.name,
            raids = entries.len(),
            week_start = %week_start,
            "checklist generated"
        );
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use raidledger_domain::{AccountId, Character, Difficulty, PartyShape, Raid};

    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::memory::{
        InMemoryCharacterRepo, InMemoryCompletionRepo, InMemoryRaidRepo,
    };

    use super::*;

    fn fixed_clock() -> Arc<FixedClock> {
        Arc::new(FixedClock(
            Utc.with_ymd_and_hms(2025, 1, 2, 12, 0, 0).unwrap(),
        ))
    }

    async fn setup() -> (
        GenerateChecklist,
        Arc<InMemoryCompletionRepo>,
        CharacterId,
        Raid,
    ) {
        let characters = Arc::new(InMemoryCharacterRepo::new());
        let raids = Arc::new(InMemoryRaidRepo::new());
        let completions = Arc::new(InMemoryCompletionRepo::new());

        let character = Character::new(
            AccountId::new(),
            "Sorrel",
            "Gunlancer",
            1700.0,
            fixed_clock().now(),
        );
        characters.save(&character).await.unwrap();

        let eligible = Raid::new("Kazeros Act 2", Difficulty::Normal, 1670.0, PartyShape::Eight, 1, 16500)
            .with_gate(1, 5500, 1820)
            .with_gate(2, 11000, 3720);
        let too_high =
            Raid::new("Serka", Difficulty::Nightmare, 1750.0, PartyShape::Eight, 2, 54000)
                .with_gate(1, 21000, 6720);
        raids.save(&eligible).await.unwrap();
        raids.save(&too_high).await.unwrap();

        let generate = GenerateChecklist::new(
            characters,
            raids,
            Arc::clone(&completions) as Arc<dyn CompletionRepo>,
            fixed_clock(),
        );
        (generate, completions, character.id, eligible)
    }

    #[tokio::test]
    async fn when_character_is_missing_then_fails() {
        let (generate, _, _, _) = setup().await;
        let err = generate.execute(CharacterId::new()).await.unwrap_err();
        assert!(matches!(err, ChecklistError::CharacterNotFound));
    }

    #[tokio::test]
    async fn when_the_directory_fails_then_the_error_propagates() {
        use crate::infrastructure::ports::{
            MockCharacterRepo, MockCompletionRepo, MockRaidRepo, RepoError,
        };

        let mut characters = MockCharacterRepo::new();
        characters
            .expect_get()
            .returning(|_| Err(RepoError::Database("connection reset".into())));

        let generate = GenerateChecklist::new(
            Arc::new(characters),
            Arc::new(MockRaidRepo::new()),
            Arc::new(MockCompletionRepo::new()),
            fixed_clock(),
        );
        let err = generate.execute(CharacterId::new()).await.unwrap_err();
        assert!(matches!(err, ChecklistError::Repo(RepoError::Database(_))));
    }

    #[tokio::test]
    async fn when_generated_then_only_eligible_raids_get_records() {
        let (generate, _, character_id, eligible) = setup().await;
        let entries = generate.execute(character_id).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].raid.id, eligible.id);
        assert_eq!(entries[0].gates.len(), 2);
        assert!(!entries[0].completion.completed);
    }

    #[tokio::test]
    async fn when_run_twice_then_existing_records_survive() {
        let (generate, completions, character_id, _) = setup().await;
        let first = generate.execute(character_id).await.unwrap();

        // Mark a gate completed between runs; regeneration must not clobber it.
        let mut gate = first[0].gates[0].clone();
        gate.complete(false, 5500);
        completions.save_gate(&gate).await.unwrap();

        let second = generate.execute(character_id).await.unwrap();
        assert_eq!(second[0].completion.id, first[0].completion.id);
        assert!(second[0].gates[0].completed);
        assert_eq!(second[0].gates[0].earned_gold, 5500);
    }
}
