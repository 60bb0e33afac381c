//! In-memory weekly completion ledger.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use raidledger_domain::{
    CharacterId, GateCompletion, GateCompletionId, RaidId, WeeklyCompletion, WeeklyCompletionId,
};

use crate::infrastructure::ports::{CompletionRepo, RepoError};

/// DashMap-backed store for weekly and gate completion records.
#[derive(Default)]
pub struct InMemoryCompletionRepo {
    weeklies: DashMap<WeeklyCompletionId, WeeklyCompletion>,
    gates: DashMap<GateCompletionId, GateCompletion>,
}

impl InMemoryCompletionRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CompletionRepo for InMemoryCompletionRepo {
    async fn get_weekly(
        &self,
        id: WeeklyCompletionId,
    ) -> Result<Option<WeeklyCompletion>, RepoError> {
        Ok(self.weeklies.get(&id).map(|w| w.clone()))
    }

    async fn find_weekly(
        &self,
        character_id: CharacterId,
        raid_id: RaidId,
        week_start: DateTime<Utc>,
    ) -> Result<Option<WeeklyCompletion>, RepoError> {
        Ok(self
            .weeklies
            .iter()
            .find(|w| {
                w.character_id == character_id
                    && w.raid_id == raid_id
                    && w.week_start == week_start
            })
            .map(|w| w.clone()))
    }

    async fn list_weekly_for_character(
        &self,
        character_id: CharacterId,
        week_start: DateTime<Utc>,
    ) -> Result<Vec<WeeklyCompletion>, RepoError> {
        Ok(self
            .weeklies
            .iter()
            .filter(|w| w.character_id == character_id && w.week_start == week_start)
            .map(|w| w.clone())
            .collect())
    }

    async fn save_weekly(&self, weekly: &WeeklyCompletion) -> Result<(), RepoError> {
        self.weeklies.insert(weekly.id, weekly.clone());
        Ok(())
    }

    async fn get_gate(&self, id: GateCompletionId) -> Result<Option<GateCompletion>, RepoError> {
        Ok(self.gates.get(&id).map(|g| g.clone()))
    }

    async fn list_gates_for_weekly(
        &self,
        weekly_id: WeeklyCompletionId,
    ) -> Result<Vec<GateCompletion>, RepoError> {
        let mut gates: Vec<GateCompletion> = self
            .gates
            .iter()
            .filter(|g| g.weekly_completion_id == weekly_id)
            .map(|g| g.clone())
            .collect();
        gates.sort_by_key(|g| g.gate_number);
        Ok(gates)
    }

    async fn save_gate(&self, gate: &GateCompletion) -> Result<(), RepoError> {
        self.gates.insert(gate.id, gate.clone());
        Ok(())
    }

    async fn delete_all_gates(&self) -> Result<u64, RepoError> {
        let count = self.gates.len() as u64;
        self.gates.clear();
        Ok(count)
    }

    async fn delete_all_weekly(&self) -> Result<u64, RepoError> {
        let count = self.weeklies.len() as u64;
        self.weeklies.clear();
        Ok(count)
    }
}
