//! Weekly checklist use cases: generation, gate completion and reversal,
//! and read-only progress queries.

pub mod complete_gate;
pub mod error;
pub mod generate;
pub mod queries;
pub mod types;
pub mod uncomplete_gate;

pub use complete_gate::{CompleteGate, CompletedGate};
pub use error::ChecklistError;
pub use generate::GenerateChecklist;
pub use queries::{CurrentWeekProgress, IsRaidGroupCompleted, TotalEarnedGold, WeekProgress};
pub use types::ChecklistEntry;
pub use uncomplete_gate::{UncompleteGate, UncompletedGate};
