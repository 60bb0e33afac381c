//! Shared result types for party use cases.

use chrono::{DateTime, Utc};
use raidledger_domain::{Character, PartyCompletionId, Raid};
use serde::Serialize;

/// Matching pool for one raid, split by role and already sorted by gold
/// priority (ascending, unset last) then item level (descending).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailablePool {
    pub raid: Raid,
    pub supports: Vec<Character>,
    pub damage: Vec<Character>,
}

impl AvailablePool {
    /// How many characters can still be matched into this raid.
    pub fn total(&self) -> usize {
        self.supports.len() + self.damage.len()
    }
}

/// One recommended party, role slots filled per the raid's shape.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedParty {
    pub supports: Vec<Character>,
    pub damage: Vec<Character>,
}

impl RecommendedParty {
    pub fn size(&self) -> usize {
        self.supports.len() + self.damage.len()
    }

    pub fn members(&self) -> impl Iterator<Item = &Character> {
        self.supports.iter().chain(self.damage.iter())
    }
}

/// A booked party resolved back to its member characters.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedParty {
    pub id: PartyCompletionId,
    pub completed_at: DateTime<Utc>,
    pub extra_reward: bool,
    pub members: Vec<Character>,
}
