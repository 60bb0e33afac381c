pub mod character;
pub mod completion;
pub mod party;
pub mod raid;

pub use character::Character;
pub use completion::{GateCompletion, WeeklyCompletion};
pub use party::PartyCompletion;
pub use raid::{Difficulty, PartyShape, Raid, RaidGate};
