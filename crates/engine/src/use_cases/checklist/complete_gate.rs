//! Gate completion.
//!
//! The one mutation that moves gold. Serialized per (character,
//! raid-group) so the earnability check, the write, and the sibling
//! propagation are atomic with respect to other completions for the same
//! character and group.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use raidledger_domain::{reset_week, GateCompletion, GateCompletionId, WeeklyCompletion};

use crate::infrastructure::locks::GroupLocks;
use crate::infrastructure::ports::{ClockPort, CompletionRepo, RaidRepo};

use super::error::ChecklistError;

/// Outcome of a single gate completion.
#[derive(Debug, Clone)]
pub struct CompletedGate {
    pub gate: GateCompletion,
    pub weekly: WeeklyCompletion,
    /// False when the three-raid gold cap zeroed the payout.
    pub earnable: bool,
}

pub struct CompleteGate {
    raid_repo: Arc<dyn RaidRepo>,
    completion_repo: Arc<dyn CompletionRepo>,
    clock: Arc<dyn ClockPort>,
    locks: Arc<GroupLocks>,
}

impl CompleteGate {
    /// Distinct raid-groups a character may earn gold from per week.
    pub const GOLD_EARNING_CAP: usize = 3;

    pub fn new(
        raid_repo: Arc<dyn RaidRepo>,
        completion_repo: Arc<dyn CompletionRepo>,
        clock: Arc<dyn ClockPort>,
        locks: Arc<GroupLocks>,
    ) -> Self {
        Self {
            raid_repo,
            completion_repo,
            clock,
            locks,
        }
    }

    pub async fn execute(
        &self,
        gate_id: GateCompletionId,
        extra_reward: bool,
    ) -> Result<CompletedGate, ChecklistError> {
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
        let gate_def = self
            .raid_repo
            .get_gate(record.raid_gate_id)
            .await?
            .ok_or(ChecklistError::GateNotFound)?;

        let _guard = self
            .locks
            .lock_character_group(weekly.character_id, &raid.raid_group)
            .await;

        // Re-read under the lock: a concurrent completion may have won.
        let mut record = self
            .completion_repo
            .get_gate(gate_id)
            .await?
            .ok_or(ChecklistError::GateNotFound)?;
        if record.completed {
            return Err(ChecklistError::AlreadyCompleted);
        }

        let earnable = self.can_earn_gold(&weekly, &raid.raid_group).await?;
        let earned = if earnable {
            gate_def.earned_gold(extra_reward)
        } else {
            0
        };

        record.complete(extra_reward, earned);
        self.completion_repo.save_gate(&record).await?;

        let mut weekly = weekly;
        let gates = self.completion_repo.list_gates_for_weekly(weekly.id).await?;
        weekly.recompute_from_gates(&gates);
        self.completion_repo.save_weekly(&weekly).await?;

        self.propagate_to_siblings(&weekly, &raid.raid_group).await?;

        tracing::debug!(
            raid = %raid.display_name(),
            gate = record.gate_number,
            earned,
            earnable,
            "gate completed"
        );
        Ok(CompletedGate {
            gate: record,
            weekly,
            earnable,
        })
    }

    /// A raid-group earns gold when the character already started it this
    /// week, or when fewer than three distinct groups have been completed.
    async fn can_earn_gold(
        &self,
        weekly: &WeeklyCompletion,
        raid_group: &str,
    ) -> Result<bool, ChecklistError> {
        let group_by_raid: HashMap<_, _> = self
            .raid_repo
            .list()
            .await?
            .into_iter()
            .map(|r| (r.id, r.raid_group))
            .collect();

        let week_start = reset_week::week_start(self.clock.now());
        let weeklies = self
            .completion_repo
            .list_weekly_for_character(weekly.character_id, week_start)
            .await?;

        let completed_groups: HashSet<&str> = weeklies
            .iter()
            .filter(|w| w.completed)
            .filter_map(|w| group_by_raid.get(&w.raid_id).map(String::as_str))
            .collect();

        Ok(completed_groups.contains(raid_group)
            || completed_groups.len() < Self::GOLD_EARNING_CAP)
    }

    /// Cross-difficulty exclusivity: completing any difficulty of a
    /// raid-group marks every sibling difficulty completed with the same
    /// weekly total.
    async fn propagate_to_siblings(
        &self,
        weekly: &WeeklyCompletion,
        raid_group: &str,
    ) -> Result<(), ChecklistError> {
        for sibling in self.raid_repo.list_by_group(raid_group).await? {
            if sibling.id == weekly.raid_id {
                continue;
            }
            if let Some(mut sib) = self
                .completion_repo
                .find_weekly(weekly.character_id, sibling.id, weekly.week_start)
                .await?
            {
                sib.sync_to(weekly.earned_gold);
                self.completion_repo.save_weekly(&sib).await?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use raidledger_domain::{
        AccountId, Character, CharacterId, Difficulty, PartyShape, Raid, RaidId,
    };

    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::memory::{
        InMemoryCharacterRepo, InMemoryCompletionRepo, InMemoryRaidRepo,
    };
    use crate::infrastructure::ports::CharacterRepo;
    use crate::use_cases::checklist::generate::GenerateChecklist;
    use crate::use_cases::checklist::types::ChecklistEntry;

    use super::*;

    struct Harness {
        generate: GenerateChecklist,
        complete: CompleteGate,
        completions: Arc<InMemoryCompletionRepo>,
        character_id: CharacterId,
    }

    fn clock() -> Arc<FixedClock> {
        Arc::new(FixedClock(
            Utc.with_ymd_and_hms(2025, 1, 2, 12, 0, 0).unwrap(),
        ))
    }

    fn raid(name: &str, difficulty: Difficulty, order: i32) -> Raid {
        Raid::new(name, difficulty, 1600.0, PartyShape::Eight, order, 15000)
            .with_gate(1, 5000, 1500)
            .with_gate(2, 10000, 3000)
    }

    async fn harness(raids_to_seed: Vec<Raid>) -> Harness {
        let characters = Arc::new(InMemoryCharacterRepo::new());
        let raids = Arc::new(InMemoryRaidRepo::new());
        let completions = Arc::new(InMemoryCompletionRepo::new());
        let clock = clock();

        let character = Character::new(AccountId::new(), "Sorrel", "Gunlancer", 1700.0, clock.now());
        characters.save(&character).await.unwrap();
        for r in &raids_to_seed {
            raids.save(r).await.unwrap();
        }

        let generate = GenerateChecklist::new(
            characters,
            Arc::clone(&raids) as Arc<dyn RaidRepo>,
            Arc::clone(&completions) as Arc<dyn CompletionRepo>,
            Arc::clone(&clock) as Arc<dyn ClockPort>,
        );
        let complete = CompleteGate::new(
            raids,
            Arc::clone(&completions) as Arc<dyn CompletionRepo>,
            clock,
            Arc::new(GroupLocks::new()),
        );
        Harness {
            generate,
            complete,
            completions,
            character_id: character.id,
        }
    }

    fn entry_for<'a>(entries: &'a [ChecklistEntry], raid_id: RaidId) -> &'a ChecklistEntry {
        entries.iter().find(|e| e.raid.id == raid_id).unwrap()
    }

    #[tokio::test]
    async fn when_the_ledger_store_fails_then_the_error_propagates() {
        use crate::infrastructure::ports::{
            MockClockPort, MockCompletionRepo, MockRaidRepo, RepoError,
        };

        let mut completions = MockCompletionRepo::new();
        completions
            .expect_get_gate()
            .returning(|_| Err(RepoError::Serialization("bad record".into())));
        let mut mock_clock = MockClockPort::new();
        mock_clock
            .expect_now()
            .return_const(Utc.with_ymd_and_hms(2025, 1, 2, 12, 0, 0).unwrap());

        let complete = CompleteGate::new(
            Arc::new(MockRaidRepo::new()),
            Arc::new(completions),
            Arc::new(mock_clock),
            Arc::new(GroupLocks::new()),
        );
        let err = complete
            .execute(GateCompletionId::new(), false)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ChecklistError::Repo(RepoError::Serialization(_))
        ));
    }

    #[tokio::test]
    async fn when_gate_record_is_missing_then_fails() {
        let h = harness(vec![raid("Serka", Difficulty::Normal, 1)]).await;
        let err = h
            .complete
            .execute(GateCompletionId::new(), false)
            .await
            .unwrap_err();
        assert!(matches!(err, ChecklistError::GateNotFound));
    }

    #[tokio::test]
    async fn when_completed_twice_then_second_fails() {
        let h = harness(vec![raid("Serka", Difficulty::Normal, 1)]).await;
        let entries = h.generate.execute(h.character_id).await.unwrap();
        let gate_id = entries[0].gates[0].id;

        h.complete.execute(gate_id, false).await.unwrap();
        let err = h.complete.execute(gate_id, false).await.unwrap_err();
        assert!(matches!(err, ChecklistError::AlreadyCompleted));
    }

    #[tokio::test]
    async fn when_completed_then_weekly_totals_update() {
        let h = harness(vec![raid("Serka", Difficulty::Normal, 1)]).await;
        let entries = h.generate.execute(h.character_id).await.unwrap();

        let first = h
            .complete
            .execute(entries[0].gates[0].id, false)
            .await
            .unwrap();
        assert!(first.earnable);
        assert_eq!(first.gate.earned_gold, 5000);
        assert_eq!(first.weekly.earned_gold, 5000);
        assert!(first.weekly.completed);

        let second = h
            .complete
            .execute(entries[0].gates[1].id, true)
            .await
            .unwrap();
        assert_eq!(second.gate.earned_gold, 7000);
        assert_eq!(second.weekly.earned_gold, 12000);
    }

    #[tokio::test]
    async fn when_fourth_group_is_cleared_then_it_earns_nothing() {
        let h = harness(vec![
            raid("Alpha", Difficulty::Normal, 1),
            raid("Bravo", Difficulty::Normal, 2),
            raid("Charlie", Difficulty::Normal, 3),
            raid("Delta", Difficulty::Normal, 4),
        ])
        .await;
        let entries = h.generate.execute(h.character_id).await.unwrap();

        for entry in entries.iter().take(3) {
            let done = h.complete.execute(entry.gates[0].id, false).await.unwrap();
            assert!(done.earnable);
            assert_eq!(done.gate.earned_gold, 5000);
        }

        let fourth = entry_for(&entries, entries[3].raid.id);
        let done = h.complete.execute(fourth.gates[0].id, false).await.unwrap();
        assert!(!done.earnable);
        assert_eq!(done.gate.earned_gold, 0);
        assert!(done.weekly.completed);
        assert_eq!(done.weekly.earned_gold, 0);
    }

    #[tokio::test]
    async fn when_group_already_started_then_it_keeps_earning_past_the_cap() {
        let h = harness(vec![
            raid("Alpha", Difficulty::Normal, 1),
            raid("Bravo", Difficulty::Normal, 2),
            raid("Charlie", Difficulty::Normal, 3),
        ])
        .await;
        let entries = h.generate.execute(h.character_id).await.unwrap();

        // Start all three groups, then finish them: the started groups stay
        // earnable even though three are already completed.
        for entry in &entries {
            h.complete.execute(entry.gates[0].id, false).await.unwrap();
        }
        for entry in &entries {
            let done = h.complete.execute(entry.gates[1].id, false).await.unwrap();
            assert!(done.earnable);
            assert_eq!(done.gate.earned_gold, 10000);
        }
    }

    #[tokio::test]
    async fn when_one_difficulty_completes_then_siblings_sync() {
        let h = harness(vec![
            raid("Serka", Difficulty::Normal, 1),
            raid("Serka", Difficulty::Hard, 2).with_group("Serka"),
        ])
        .await;
        // Share the raid-group across difficulties.
        let entries = h.generate.execute(h.character_id).await.unwrap();
        let normal = &entries[0];
        let hard = &entries[1];

        h.complete.execute(normal.gates[0].id, false).await.unwrap();

        let synced = h
            .completions
            .get_weekly(hard.completion.id)
            .await
            .unwrap()
            .unwrap();
        assert!(synced.completed);
        assert_eq!(synced.earned_gold, 5000);

        // The sibling's own gate records stay untouched.
        let hard_gates = h
            .completions
            .list_gates_for_weekly(hard.completion.id)
            .await
            .unwrap();
        assert!(hard_gates.iter().all(|g| !g.completed));
    }
}
