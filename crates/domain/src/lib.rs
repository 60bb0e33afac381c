extern crate self as raidledger_domain;

pub mod entities;
pub mod error;
pub mod ids;
pub mod reset_week;
pub mod value_objects;

// Re-export entities (explicit list in entities/mod.rs)
pub use entities::{
    Character, Difficulty, GateCompletion, PartyCompletion, PartyShape, Raid, RaidGate,
    WeeklyCompletion,
};

pub use error::DomainError;

// Re-export ID types
pub use ids::{
    AccountId, CharacterId, GateCompletionId, PartyCompletionId, RaidGateId, RaidId,
    WeeklyCompletionId,
};

// Re-export reset clock types
pub use reset_week::ResetCountdown;

// Re-export value objects
pub use value_objects::{GoldPriority, Role};
