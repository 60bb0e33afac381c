//! Weekly checklist operation errors.

use crate::infrastructure::ports::RepoError;
use raidledger_domain::DomainError;

/// Errors that can occur during ledger operations.
#[derive(Debug, thiserror::Error)]
pub enum ChecklistError {
    #[error("Character not found")]
    CharacterNotFound,
    #[error("Raid not found")]
    RaidNotFound,
    #[error("Gate completion record not found")]
    GateNotFound,
    #[error("Gate already completed")]
    AlreadyCompleted,
    #[error("Validation error: {0}")]
    Validation(#[from] DomainError),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}
