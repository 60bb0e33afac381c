//! Keyed mutual exclusion for ledger mutations.
//!
//! Two concurrent gate completions for the same character and raid-group
//! can race on the "first to start the group" check and on sibling
//! propagation; party bookings can race on double-booking a character.
//! Mutations take the matching lock before their read-modify-propagate
//! sequence. Keys are not week-scoped: the records they guard are wiped at
//! every weekly reset, so a stale lock entry only costs a map slot.

use std::sync::Arc;

use dashmap::DashMap;
use raidledger_domain::CharacterId;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Async lock map for (character, raid-group) and raid-group scopes.
#[derive(Default)]
pub struct GroupLocks {
    character_group: DashMap<(CharacterId, String), Arc<Mutex<()>>>,
    group: DashMap<String, Arc<Mutex<()>>>,
}

impl GroupLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serializes ledger mutations for one character's raid-group.
    pub async fn lock_character_group(
        &self,
        character_id: CharacterId,
        raid_group: &str,
    ) -> OwnedMutexGuard<()> {
        let lock = {
            let entry = self
                .character_group
                .entry((character_id, raid_group.to_string()))
                .or_insert_with(|| Arc::new(Mutex::new(())));
            Arc::clone(entry.value())
        };
        lock.lock_owned().await
    }

    /// Serializes party booking/cancellation for a raid-group.
    pub async fn lock_group(&self, raid_group: &str) -> OwnedMutexGuard<()> {
        let lock = {
            let entry = self
                .group
                .entry(raid_group.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(())));
            Arc::clone(entry.value())
        };
        lock.lock_owned().await
    }
}
