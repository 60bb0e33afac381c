//! Testability ports for injecting time and randomness.

use chrono::{DateTime, Utc};

// =============================================================================
// Testability Ports
// =============================================================================

#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Injectable shuffle source.
///
/// Production shuffles the matching pool for fairness; tests inject an
/// identity or seeded permutation so party assembly is deterministic.
pub trait RandomPort: Send + Sync {
    /// A permutation of `0..len`, used to reorder candidate pools.
    fn permutation(&self, len: usize) -> Vec<usize>;
}
