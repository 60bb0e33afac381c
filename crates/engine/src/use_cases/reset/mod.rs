//! Weekly reset use case.

pub mod weekly_reset;

pub use weekly_reset::{ResetSummary, WeeklyReset};
