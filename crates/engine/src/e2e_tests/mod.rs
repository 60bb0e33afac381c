//! End-to-end flows over the in-memory adapters with a fixed clock and a
//! deterministic shuffle.


use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};

use crate::app::{App, Repositories};
use crate::infrastructure::clock::{FixedClock, IdentityRandom};
use crate::infrastructure::memory::{
    InMemoryCharacterRepo, InMemoryCompletionRepo, InMemoryPartyRepo, InMemoryRaidRepo,
};

/// Thursday noon UTC, mid-week in reset terms.
pub(crate) fn midweek() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 2, 12, 0, 0).unwrap()
}

pub(crate) fn test_app(now: DateTime<Utc>) -> App {
    let repositories = Repositories {
        character: Arc::new(InMemoryCharacterRepo::new()),
        raid: Arc::new(InMemoryRaidRepo::new()),
        completion: Arc::new(InMemoryCompletionRepo::new()),
        party: Arc::new(InMemoryPartyRepo::new()),
    };
    App::new(repositories, Arc::new(FixedClock(now)), Arc::new(IdentityRandom))
}
