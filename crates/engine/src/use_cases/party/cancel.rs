//! Party booking cancellation.
//!
//! Deleting only the actually-completed record would leave the sibling
//! bookkeeping rows blocking the members for the rest of the week, so the
//! cancel removes the whole set: every record in the raid-group for the
//! same week with the same member list.

use std::sync::Arc;

use raidledger_domain::PartyCompletionId;

use crate::infrastructure::locks::GroupLocks;
use crate::infrastructure::ports::{PartyRepo, RaidRepo};

use super::error::PartyError;

pub struct CancelPartyCompletion {
    raid_repo: Arc<dyn RaidRepo>,
    party_repo: Arc<dyn PartyRepo>,
    locks: Arc<GroupLocks>,
}

impl CancelPartyCompletion {
    pub fn new(
        raid_repo: Arc<dyn RaidRepo>,
        party_repo: Arc<dyn PartyRepo>,
        locks: Arc<GroupLocks>,
    ) -> Self {
        Self {
            raid_repo,
            party_repo,
            locks,
        }
    }

    /// Returns how many records were removed.
    pub async fn execute(&self, party_id: PartyCompletionId) -> Result<usize, PartyError> {
        let record = self
            .party_repo
            .get(party_id)
            .await?
            .ok_or(PartyError::PartyNotFound)?;
        let raid = self
            .raid_repo
            .get(record.raid_id)
            .await?
            .ok_or(PartyError::RaidNotFound)?;

        let _guard = self.locks.lock_group(&raid.raid_group).await;

        let mut deleted = 0;
        for group_raid in self.raid_repo.list_by_group(&raid.raid_group).await? {
            for sibling in self
                .party_repo
                .list_for_raid(group_raid.id, record.week_start)
                .await?
            {
                if sibling.member_ids == record.member_ids {
                    self.party_repo.delete(sibling.id).await?;
                    deleted += 1;
                }
            }
        }

        tracing::info!(raid = %raid.display_name(), deleted, "party completion cancelled");
        Ok(deleted)
    }
}
