//! Matching pool construction.
//!
//! A character is available for a raid this week when it meets the item
//! level requirement, is not booked into any party across the raid-group,
//! and has not used up the raid-group on its own checklist.

use std::collections::HashSet;
use std::sync::Arc;

use raidledger_domain::{reset_week, Character, CharacterId, RaidId, Role};

use crate::infrastructure::ports::{
    CharacterRepo, ClockPort, CompletionRepo, PartyRepo, RaidRepo,
};

use super::error::PartyError;
use super::types::AvailablePool;

pub struct AvailableCharacters {
    character_repo: Arc<dyn CharacterRepo>,
    raid_repo: Arc<dyn RaidRepo>,
    completion_repo: Arc<dyn CompletionRepo>,
    party_repo: Arc<dyn PartyRepo>,
    clock: Arc<dyn ClockPort>,
}

impl AvailableCharacters {
    pub fn new(
        character_repo: Arc<dyn CharacterRepo>,
        raid_repo: Arc<dyn RaidRepo>,
        completion_repo: Arc<dyn CompletionRepo>,
        party_repo: Arc<dyn PartyRepo>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            character_repo,
            raid_repo,
            completion_repo,
            party_repo,
            clock,
        }
    }

    pub async fn execute(&self, raid_id: RaidId) -> Result<AvailablePool, PartyError> {
        let raid = self
            .raid_repo
            .get(raid_id)
            .await?
            .ok_or(PartyError::RaidNotFound)?;
        let week_start = reset_week::week_start(self.clock.now());

        let group_raids = self.raid_repo.list_by_group(&raid.raid_group).await?;
        let group_raid_ids: HashSet<RaidId> = group_raids.iter().map(|r| r.id).collect();

        // Booked anywhere in the raid-group, any difficulty.
        let mut booked: HashSet<CharacterId> = HashSet::new();
        for group_raid in &group_raids {
            for party in self.party_repo.list_for_raid(group_raid.id, week_start).await? {
                booked.extend(party.member_ids.iter().copied());
            }
        }

        let mut available = Vec::new();
        for character in self.character_repo.list().await? {
            if booked.contains(&character.id) {
                continue;
            }
            if !character.meets_item_level(raid.required_item_level) {
                continue;
            }
            let group_used = self
                .completion_repo
                .list_weekly_for_character(character.id, week_start)
                .await?
                .iter()
                .any(|w| w.completed && group_raid_ids.contains(&w.raid_id));
            if group_used {
                continue;
            }
            available.push(character);
        }

        sort_pool(&mut available);
        let (supports, damage): (Vec<Character>, Vec<Character>) = available
            .into_iter()
            .partition(|c| c.role() == Role::Support);
        Ok(AvailablePool {
            raid,
            supports,
            damage,
        })
    }
}

/// Gold priority ascending with unset priorities last, ties broken by item
/// level descending.
fn sort_pool(pool: &mut [Character]) {
    pool.sort_by(|a, b| {
        let pa = a.gold_priority.map(|p| p.value()).unwrap_or(u8::MAX);
        let pb = b.gold_priority.map(|p| p.value()).unwrap_or(u8::MAX);
        pa.cmp(&pb)
            .then_with(|| b.item_level.total_cmp(&a.item_level))
    });
}
