//! In-memory character directory.

use async_trait::async_trait;
use dashmap::DashMap;
use raidledger_domain::{AccountId, Character, CharacterId};

use crate::infrastructure::ports::{CharacterRepo, RepoError};

/// DashMap-backed character directory.
#[derive(Default)]
pub struct InMemoryCharacterRepo {
    characters: DashMap<CharacterId, Character>,
}

impl InMemoryCharacterRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CharacterRepo for InMemoryCharacterRepo {
    async fn get(&self, id: CharacterId) -> Result<Option<Character>, RepoError> {
        Ok(self.characters.get(&id).map(|c| c.clone()))
    }

    async fn list(&self) -> Result<Vec<Character>, RepoError> {
        let mut all: Vec<Character> = self.characters.iter().map(|c| c.clone()).collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }

    async fn list_by_account(&self, account_id: AccountId) -> Result<Vec<Character>, RepoError> {
        let mut matching: Vec<Character> = self
            .characters
            .iter()
            .filter(|c| c.account_id == account_id)
            .map(|c| c.clone())
            .collect();
        matching.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(matching)
    }

    async fn save(&self, character: &Character) -> Result<(), RepoError> {
        self.characters.insert(character.id, character.clone());
        Ok(())
    }
}
