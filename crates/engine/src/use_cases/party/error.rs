//! Party matching and booking errors.

use crate::infrastructure::ports::RepoError;
use crate::use_cases::checklist::ChecklistError;

#[derive(Debug, thiserror::Error)]
pub enum PartyError {
    #[error("Raid not found")]
    RaidNotFound,
    #[error("Party record not found")]
    PartyNotFound,
    #[error("Character not found")]
    CharacterNotFound,
    #[error("A party needs at least one member")]
    EmptyParty,
    #[error("No weekly checklist for this character and raid")]
    ChecklistUnavailable,
    #[error("Ledger error: {0}")]
    Ledger(#[from] ChecklistError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
