//! Party booking.
//!
//! Records a party clear for one raid. Bookkeeping records are written for
//! every sibling difficulty too, with `actual_completed` set only on the
//! raid the party really ran, so the whole raid-group drops out of the
//! week's matching pools.

use std::sync::Arc;

use raidledger_domain::{reset_week, CharacterId, PartyCompletion, RaidId};

use crate::infrastructure::locks::GroupLocks;
use crate::infrastructure::ports::{ClockPort, PartyRepo, RaidRepo};

use super::error::PartyError;

pub struct CompleteParty {
    raid_repo: Arc<dyn RaidRepo>,
    party_repo: Arc<dyn PartyRepo>,
    clock: Arc<dyn ClockPort>,
    locks: Arc<GroupLocks>,
}

impl CompleteParty {
    pub fn new(
        raid_repo: Arc<dyn RaidRepo>,
        party_repo: Arc<dyn PartyRepo>,
        clock: Arc<dyn ClockPort>,
        locks: Arc<GroupLocks>,
    ) -> Self {
        Self {
            raid_repo,
            party_repo,
            clock,
            locks,
        }
    }

    /// Returns every record written, the actually-completed raid's first.
    pub async fn execute(
        &self,
        raid_id: RaidId,
        member_ids: Vec<CharacterId>,
        extra_reward: bool,
    ) -> Result<Vec<PartyCompletion>, PartyError> {
        if member_ids.is_empty() {
            return Err(PartyError::EmptyParty);
        }
        let raid = self
            .raid_repo
            .get(raid_id)
            .await?
            .ok_or(PartyError::RaidNotFound)?;

        let _guard = self.locks.lock_group(&raid.raid_group).await;

        let now = self.clock.now();
        let week_start = reset_week::week_start(now);
        let mut records = Vec::new();
        for group_raid in self.raid_repo.list_by_group(&raid.raid_group).await? {
            let record = PartyCompletion::new(
                group_raid.id,
                member_ids.clone(),
                extra_reward,
                group_raid.id == raid.id,
                now,
                week_start,
            );
            self.party_repo.save(&record).await?;
            if record.actual_completed {
                records.insert(0, record);
            } else {
                records.push(record);
            }
        }

        tracing::info!(
            raid = %raid.display_name(),
            members = records[0].member_ids.len(),
            "party completion recorded"
        );
        Ok(records)
    }
}
