//! Party completion records.
//!
//! Immutable once created: a record of a bulk party clear for one raid.
//! Completing a party also creates bookkeeping records (with
//! `actual_completed = false`) for every sibling difficulty so the whole
//! raid-group drops out of matching for the week.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{CharacterId, PartyCompletionId, RaidId};

/// A recorded bulk party clear.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartyCompletion {
    pub id: PartyCompletionId,
    pub raid_id: RaidId,
    /// Order preserved for display; matching treats this as a set.
    pub member_ids: Vec<CharacterId>,
    pub extra_reward: bool,
    /// True only on the difficulty the party actually cleared.
    pub actual_completed: bool,
    pub completed_at: DateTime<Utc>,
    pub week_start: DateTime<Utc>,
}

impl PartyCompletion {
    pub fn new(
        raid_id: RaidId,
        member_ids: Vec<CharacterId>,
        extra_reward: bool,
        actual_completed: bool,
        completed_at: DateTime<Utc>,
        week_start: DateTime<Utc>,
    ) -> Self {
        Self {
            id: PartyCompletionId::new(),
            raid_id,
            member_ids,
            extra_reward,
            actual_completed,
            completed_at,
            week_start,
        }
    }

    /// Set-membership check used by the availability filter.
    pub fn includes(&self, character_id: CharacterId) -> bool {
        self.member_ids.contains(&character_id)
    }
}
