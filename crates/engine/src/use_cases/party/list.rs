//! Completed party listing.

use std::sync::Arc;

use raidledger_domain::{reset_week, RaidId};

use crate::infrastructure::ports::{CharacterRepo, ClockPort, PartyRepo, RaidRepo};

use super::error::PartyError;
use super::types::CompletedParty;

/// This week's actually-completed parties for a raid, members resolved to
/// full characters. Members deleted from the roster since the clear are
/// skipped rather than failing the listing.
pub struct ListCompletedParties {
    character_repo: Arc<dyn CharacterRepo>,
    raid_repo: Arc<dyn RaidRepo>,
    party_repo: Arc<dyn PartyRepo>,
    clock: Arc<dyn ClockPort>,
}

impl ListCompletedParties {
    pub fn new(
        character_repo: Arc<dyn CharacterRepo>,
        raid_repo: Arc<dyn RaidRepo>,
        party_repo: Arc<dyn PartyRepo>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            character_repo,
            raid_repo,
            party_repo,
            clock,
        }
    }

    pub async fn execute(&self, raid_id: RaidId) -> Result<Vec<CompletedParty>, PartyError> {
        self.raid_repo
            .get(raid_id)
            .await?
            .ok_or(PartyError::RaidNotFound)?;

        let week_start = reset_week::week_start(self.clock.now());
        let mut result = Vec::new();
        for record in self.party_repo.list_for_raid(raid_id, week_start).await? {
            if !record.actual_completed {
                continue;
            }
            let mut members = Vec::with_capacity(record.member_ids.len());
            for member_id in &record.member_ids {
                if let Some(character) = self.character_repo.get(*member_id).await? {
                    members.push(character);
                }
            }
            result.push(CompletedParty {
                id: record.id,
                completed_at: record.completed_at,
                extra_reward: record.extra_reward,
                members,
            });
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use raidledger_domain::{AccountId, Character, CharacterId, Difficulty, PartyShape, Raid};

    use crate::infrastructure::clock::FixedClock;
    use crate::infrastructure::locks::GroupLocks;
    use crate::infrastructure::memory::{
        InMemoryCharacterRepo, InMemoryPartyRepo, InMemoryRaidRepo,
    };
    use crate::use_cases::party::complete::CompleteParty;

    use super::*;

    #[tokio::test]
    async fn lists_only_actual_completions_with_resolved_members() {
        let characters = Arc::new(InMemoryCharacterRepo::new());
        let raids = Arc::new(InMemoryRaidRepo::new());
        let parties = Arc::new(InMemoryPartyRepo::new());
        let clock = Arc::new(FixedClock(
            Utc.with_ymd_and_hms(2025, 1, 2, 12, 0, 0).unwrap(),
        ));

        let normal = Raid::new("Serka", Difficulty::Normal, 1600.0, PartyShape::Eight, 1, 15000)
            .with_gate(1, 5000, 1500);
        let hard = Raid::new("Serka", Difficulty::Hard, 1650.0, PartyShape::Eight, 2, 21000)
            .with_gate(1, 7000, 2200);
        raids.save(&normal).await.unwrap();
        raids.save(&hard).await.unwrap();

        let member = Character::new(AccountId::new(), "Sorrel", "Gunlancer", 1700.0, clock.0);
        characters.save(&member).await.unwrap();
        let ghost = CharacterId::new();

        let complete = CompleteParty::new(
            Arc::clone(&raids) as Arc<dyn RaidRepo>,
            Arc::clone(&parties) as Arc<dyn PartyRepo>,
            Arc::clone(&clock) as Arc<dyn ClockPort>,
            Arc::new(GroupLocks::new()),
        );
        complete
            .execute(normal.id, vec![member.id, ghost], false)
            .await
            .unwrap();

        let list = ListCompletedParties::new(
            characters,
            Arc::clone(&raids) as Arc<dyn RaidRepo>,
            Arc::clone(&parties) as Arc<dyn PartyRepo>,
            clock,
        );

        // The sibling difficulty only has the bookkeeping record.
        assert!(list.execute(hard.id).await.unwrap().is_empty());

        let completed = list.execute(normal.id).await.unwrap();
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].members.len(), 1);
        assert_eq!(completed[0].members[0].id, member.id);
    }
}
