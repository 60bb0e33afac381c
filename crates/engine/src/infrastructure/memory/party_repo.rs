//! In-memory party completion records.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use raidledger_domain::{PartyCompletion, PartyCompletionId, RaidId};

use crate::infrastructure::ports::{PartyRepo, RepoError};

/// DashMap-backed store for party completion records.
#[derive(Default)]
pub struct InMemoryPartyRepo {
    parties: DashMap<PartyCompletionId, PartyCompletion>,
}

impl InMemoryPartyRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PartyRepo for InMemoryPartyRepo {
    async fn get(&self, id: PartyCompletionId) -> Result<Option<PartyCompletion>, RepoError> {
        Ok(self.parties.get(&id).map(|p| p.clone()))
    }

    async fn list_for_raid(
        &self,
        raid_id: RaidId,
        week_start: DateTime<Utc>,
    ) -> Result<Vec<PartyCompletion>, RepoError> {
        let mut matching: Vec<PartyCompletion> = self
            .parties
            .iter()
            .filter(|p| p.raid_id == raid_id && p.week_start == week_start)
            .map(|p| p.clone())
            .collect();
        matching.sort_by_key(|p| p.completed_at);
        Ok(matching)
    }

    async fn save(&self, party: &PartyCompletion) -> Result<(), RepoError> {
        self.parties.insert(party.id, party.clone());
        Ok(())
    }

    async fn delete(&self, id: PartyCompletionId) -> Result<(), RepoError> {
        match self.parties.remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepoError::NotFound),
        }
    }

    async fn delete_all(&self) -> Result<u64, RepoError> {
        let count = self.parties.len() as u64;
        self.parties.clear();
        Ok(count)
    }
}
