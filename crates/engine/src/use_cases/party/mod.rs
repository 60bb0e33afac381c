//! Party use cases: availability pools, recommendation, booking and its
//! reversal, listing, and ledger application of a party clear.

pub mod apply_clear;
pub mod availability;
pub mod cancel;
pub mod complete;
pub mod error;
pub mod list;
pub mod recommend;
pub mod types;

pub use apply_clear::CompletePartyRaid;
pub use availability::AvailableCharacters;
pub use cancel::CancelPartyCompletion;
pub use complete::CompleteParty;
pub use error::PartyError;
pub use list::ListCompletedParties;
pub use recommend::{RecommendAllParties, RecommendParty};
pub use types::{AvailablePool, CompletedParty, RecommendedParty};
