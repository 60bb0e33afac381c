//! In-memory raid catalog.

use async_trait::async_trait;
use dashmap::DashMap;
use raidledger_domain::{Raid, RaidGate, RaidGateId, RaidId};

use crate::infrastructure::ports::{RaidRepo, RepoError};

/// DashMap-backed raid catalog. Gates are stored embedded in their raid.
#[derive(Default)]
pub struct InMemoryRaidRepo {
    raids: DashMap<RaidId, Raid>,
}

impl InMemoryRaidRepo {
    pub fn new() -> Self {
        Self::default()
    }

    fn sorted(mut raids: Vec<Raid>) -> Vec<Raid> {
        raids.sort_by_key(|r| r.order_index);
        raids
    }
}

#[async_trait]
impl RaidRepo for InMemoryRaidRepo {
    async fn get(&self, id: RaidId) -> Result<Option<Raid>, RepoError> {
        Ok(self.raids.get(&id).map(|r| r.clone()))
    }

    async fn list(&self) -> Result<Vec<Raid>, RepoError> {
        Ok(Self::sorted(self.raids.iter().map(|r| r.clone()).collect()))
    }

    async fn list_by_group(&self, raid_group: &str) -> Result<Vec<Raid>, RepoError> {
        Ok(Self::sorted(
            self.raids
                .iter()
                .filter(|r| r.raid_group == raid_group)
                .map(|r| r.clone())
                .collect(),
        ))
    }

    async fn list_by_max_item_level(&self, item_level: f64) -> Result<Vec<Raid>, RepoError> {
        Ok(Self::sorted(
            self.raids
                .iter()
                .filter(|r| r.required_item_level <= item_level)
                .map(|r| r.clone())
                .collect(),
        ))
    }

    async fn get_gate(&self, id: RaidGateId) -> Result<Option<RaidGate>, RepoError> {
        Ok(self
            .raids
            .iter()
            .flat_map(|r| r.gates.clone())
            .find(|g| g.id == id))
    }

    async fn list_gates(&self, raid_id: RaidId) -> Result<Vec<RaidGate>, RepoError> {
        let mut gates = match self.raids.get(&raid_id) {
            Some(raid) => raid.gates.clone(),
            None => return Err(RepoError::NotFound),
        };
        gates.sort_by_key(|g| g.gate_number);
        Ok(gates)
    }

    async fn save(&self, raid: &Raid) -> Result<(), RepoError> {
        self.raids.insert(raid.id, raid.clone());
        Ok(())
    }

    async fn count(&self) -> Result<usize, RepoError> {
        Ok(self.raids.len())
    }
}
