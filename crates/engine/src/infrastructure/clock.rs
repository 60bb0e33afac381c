//! Clock and random implementations.

use chrono::{DateTime, Utc};

use crate::infrastructure::ports::{ClockPort, RandomPort};

/// System clock - uses real time.
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ClockPort for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// System random - real shuffles via `rand`.
pub struct SystemRandom;

impl SystemRandom {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomPort for SystemRandom {
    fn permutation(&self, len: usize) -> Vec<usize> {
        use rand::seq::SliceRandom;
        let mut indices: Vec<usize> = (0..len).collect();
        indices.shuffle(&mut rand::thread_rng());
        indices
    }
}

/// Fixed clock for testing.
#[cfg(test)]
pub struct FixedClock(pub DateTime<Utc>);

#[cfg(test)]
impl ClockPort for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Identity permutation for testing - keeps pools in sorted order.
#[cfg(test)]
pub struct IdentityRandom;

#[cfg(test)]
impl RandomPort for IdentityRandom {
    fn permutation(&self, len: usize) -> Vec<usize> {
        (0..len).collect()
    }
}

/// Seeded random for reproducible shuffle tests.
#[cfg(test)]
pub struct SeededRandom(pub u64);

#[cfg(test)]
impl RandomPort for SeededRandom {
    fn permutation(&self, len: usize) -> Vec<usize> {
        use rand::seq::SliceRandom;
        use rand::SeedableRng;
        let mut rng = rand::rngs::StdRng::seed_from_u64(self.0);
        let mut indices: Vec<usize> = (0..len).collect();
        indices.shuffle(&mut rng);
        indices
    }
}
