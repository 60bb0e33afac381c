//! Character entity - a roster member owned by an account.
//!
//! The ledger never creates or deletes characters; they come from the
//! (out-of-scope) character directory and are read-mostly here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{AccountId, CharacterId};
use crate::value_objects::{GoldPriority, Role};

/// A playable character on an account's roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: CharacterId,
    pub account_id: AccountId,
    pub name: String,
    pub server: Option<String>,
    pub class_name: String,
    pub item_level: f64,
    pub guild: Option<String>,
    /// Lower priority earns gold first; `None` sorts after every set value.
    pub gold_priority: Option<GoldPriority>,
    pub created_at: DateTime<Utc>,
}

impl Character {
    pub fn new(
        account_id: AccountId,
        name: impl Into<String>,
        class_name: impl Into<String>,
        item_level: f64,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: CharacterId::new(),
            account_id,
            name: name.into(),
            server: None,
            class_name: class_name.into(),
            item_level,
            guild: None,
            gold_priority: Some(GoldPriority::default()),
            created_at: now,
        }
    }

    pub fn with_id(mut self, id: CharacterId) -> Self {
        self.id = id;
        self
    }

    pub fn with_server(mut self, server: impl Into<String>) -> Self {
        self.server = Some(server.into());
        self
    }

    pub fn with_guild(mut self, guild: impl Into<String>) -> Self {
        self.guild = Some(guild.into());
        self
    }

    pub fn with_gold_priority(mut self, priority: Option<GoldPriority>) -> Self {
        self.gold_priority = priority;
        self
    }

    /// Role this character fills in a party, derived from its class.
    pub fn role(&self) -> Role {
        Role::for_class(&self.class_name)
    }

    /// Can this character enter a raid with the given requirement?
    pub fn meets_item_level(&self, required: f64) -> bool {
        self.item_level >= required
    }
}
