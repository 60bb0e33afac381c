//! Raid ledger engine.
//!
//! Weekly raid completion tracking and party matching for an account's
//! character roster.
//!
//! ## Structure
//!
//! - `use_cases/` - Checklist, party, and reset orchestration
//! - `infrastructure/` - Ports, adapters, locks, catalog, scheduler
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod use_cases;

/// End-to-end flows over the in-memory adapters.
#[cfg(test)]
mod e2e_tests;

pub use app::App;
