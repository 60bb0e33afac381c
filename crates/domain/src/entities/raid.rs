//! Raid catalog entities.
//!
//! A raid is one difficulty of a story raid; all difficulties of the same
//! story raid share a `raid_group`, and at most one of them can be cleared
//! per character per week.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::{RaidGateId, RaidId};

/// Difficulty tier of a raid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Normal,
    Hard,
    Nightmare,
}

impl Difficulty {
    pub fn display_name(&self) -> &'static str {
        match self {
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
            Difficulty::Nightmare => "Nightmare",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Difficulty {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" | "Normal" => Ok(Difficulty::Normal),
            "hard" | "Hard" => Ok(Difficulty::Hard),
            "nightmare" | "Nightmare" => Ok(Difficulty::Nightmare),
            _ => Err(DomainError::parse(format!("Unknown difficulty: {}", s))),
        }
    }
}

/// Party composition a raid is matched for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartyShape {
    /// 8-player raid: 6 damage, 2 support. At most one party is recommended.
    Eight,
    /// 4-player raid: 3 damage, 1 support. Parties are formed greedily
    /// until a role pool runs dry.
    Four,
}

impl PartyShape {
    pub fn size(&self) -> usize {
        self.damage_slots() + self.support_slots()
    }

    pub fn damage_slots(&self) -> usize {
        match self {
            PartyShape::Eight => 6,
            PartyShape::Four => 3,
        }
    }

    pub fn support_slots(&self) -> usize {
        match self {
            PartyShape::Eight => 2,
            PartyShape::Four => 1,
        }
    }
}

impl FromStr for PartyShape {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eight" | "8" => Ok(PartyShape::Eight),
            "four" | "4" => Ok(PartyShape::Four),
            _ => Err(DomainError::parse(format!("Unknown party shape: {}", s))),
        }
    }
}

/// One gate of a raid: the unit of completion and gold.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaidGate {
    pub id: RaidGateId,
    pub raid_id: RaidId,
    pub gate_number: u8,
    pub reward_gold: i32,
    /// Gold sacrificed when the gate's bonus reward is taken.
    pub extra_cost: i32,
}

/// A raid catalog entry (one difficulty of a story raid).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Raid {
    pub id: RaidId,
    pub name: String,
    pub difficulty: Difficulty,
    pub required_item_level: f64,
    pub party_shape: PartyShape,
    /// Ascending display order in listings.
    pub order_index: i32,
    /// Base reward across all gates (catalog metadata, not ledger input).
    pub reward_gold: i32,
    /// Shared by all difficulties of the same story raid.
    pub raid_group: String,
    pub gates: Vec<RaidGate>,
}

impl Raid {
    pub fn new(
        name: impl Into<String>,
        difficulty: Difficulty,
        required_item_level: f64,
        party_shape: PartyShape,
        order_index: i32,
        reward_gold: i32,
    ) -> Self {
        let name = name.into();
        Self {
            id: RaidId::new(),
            raid_group: name.clone(),
            name,
            difficulty,
            required_item_level,
            party_shape,
            order_index,
            reward_gold,
            gates: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: RaidId) -> Self {
        let old = self.id;
        self.id = id;
        for gate in &mut self.gates {
            if gate.raid_id == old {
                gate.raid_id = id;
            }
        }
        self
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.raid_group = group.into();
        self
    }

    /// Append a gate; gate numbers are expected to arrive in order.
    pub fn with_gate(mut self, gate_number: u8, reward_gold: i32, extra_cost: i32) -> Self {
        self.gates.push(RaidGate {
            id: RaidGateId::new(),
            raid_id: self.id,
            gate_number,
            reward_gold,
            extra_cost,
        });
        self
    }

    /// "Kazeros Act 2 Hard" style label used in recommendation maps.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.name, self.difficulty)
    }
}
