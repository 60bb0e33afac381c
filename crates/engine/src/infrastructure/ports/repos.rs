//! Repository port traits for ledger and catalog access.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use raidledger_domain::{
    AccountId, Character, CharacterId, GateCompletion, GateCompletionId, PartyCompletion,
    PartyCompletionId, Raid, RaidGate, RaidGateId, RaidId, WeeklyCompletion, WeeklyCompletionId,
};

use super::error::RepoError;

// =============================================================================
// Character Directory
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterRepo: Send + Sync {
    async fn get(&self, id: CharacterId) -> Result<Option<Character>, RepoError>;
    async fn list(&self) -> Result<Vec<Character>, RepoError>;
    async fn list_by_account(&self, account_id: AccountId) -> Result<Vec<Character>, RepoError>;
    async fn save(&self, character: &Character) -> Result<(), RepoError>;
}

// =============================================================================
// Raid Catalog (read-only to the core; save exists for seeding)
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RaidRepo: Send + Sync {
    async fn get(&self, id: RaidId) -> Result<Option<Raid>, RepoError>;
    /// All raids, ascending by display order.
    async fn list(&self) -> Result<Vec<Raid>, RepoError>;
    async fn list_by_group(&self, raid_group: &str) -> Result<Vec<Raid>, RepoError>;
    /// Raids whose requirement is at or below `item_level`, ascending by
    /// display order.
    async fn list_by_max_item_level(&self, item_level: f64) -> Result<Vec<Raid>, RepoError>;
    async fn get_gate(&self, id: RaidGateId) -> Result<Option<RaidGate>, RepoError>;
    /// Gates of a raid, ascending by gate number.
    async fn list_gates(&self, raid_id: RaidId) -> Result<Vec<RaidGate>, RepoError>;
    async fn save(&self, raid: &Raid) -> Result<(), RepoError>;
    async fn count(&self) -> Result<usize, RepoError>;
}

// =============================================================================
// Weekly Completion Ledger
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionRepo: Send + Sync {
    async fn get_weekly(
        &self,
        id: WeeklyCompletionId,
    ) -> Result<Option<WeeklyCompletion>, RepoError>;
    async fn find_weekly(
        &self,
        character_id: CharacterId,
        raid_id: RaidId,
        week_start: DateTime<Utc>,
    ) -> Result<Option<WeeklyCompletion>, RepoError>;
    async fn list_weekly_for_character(
        &self,
        character_id: CharacterId,
        week_start: DateTime<Utc>,
    ) -> Result<Vec<WeeklyCompletion>, RepoError>;
    /// Insert or update; the (character, raid, week) uniqueness invariant is
    /// the caller's to respect via `find_weekly` before inserting.
    async fn save_weekly(&self, weekly: &WeeklyCompletion) -> Result<(), RepoError>;

    async fn get_gate(&self, id: GateCompletionId) -> Result<Option<GateCompletion>, RepoError>;
    /// Gate records of a weekly record, ascending by gate number.
    async fn list_gates_for_weekly(
        &self,
        weekly_id: WeeklyCompletionId,
    ) -> Result<Vec<GateCompletion>, RepoError>;
    async fn save_gate(&self, gate: &GateCompletion) -> Result<(), RepoError>;

    /// Weekly reset: gates must go before weekly records. Returns the
    /// deleted count.
    async fn delete_all_gates(&self) -> Result<u64, RepoError>;
    async fn delete_all_weekly(&self) -> Result<u64, RepoError>;
}

// =============================================================================
// Party Completion Records
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PartyRepo: Send + Sync {
    async fn get(&self, id: PartyCompletionId) -> Result<Option<PartyCompletion>, RepoError>;
    async fn list_for_raid(
        &self,
        raid_id: RaidId,
        week_start: DateTime<Utc>,
    ) -> Result<Vec<PartyCompletion>, RepoError>;
    async fn save(&self, party: &PartyCompletion) -> Result<(), RepoError>;
    async fn delete(&self, id: PartyCompletionId) -> Result<(), RepoError>;
    /// Returns the deleted count.
    async fn delete_all(&self) -> Result<u64, RepoError>;
}
