//! In-memory repository adapters.
//!
//! The shipped storage for the ledger: concurrent maps, no persistence.
//! A durable adapter only has to implement the same port traits.

mod character_repo;
mod completion_repo;
mod party_repo;
mod raid_repo;

pub use character_repo::InMemoryCharacterRepo;
pub use completion_repo::InMemoryCompletionRepo;
pub use party_repo::InMemoryPartyRepo;
pub use raid_repo::InMemoryRaidRepo;
