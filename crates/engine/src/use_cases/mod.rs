//! Use cases, grouped by concern.

pub mod checklist;
pub mod party;
pub mod reset;
