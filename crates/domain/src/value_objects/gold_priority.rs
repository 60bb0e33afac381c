//! Gold priority - which characters get fed raid gold first.
//!
//! Lower values sort earlier in the matching pool. Characters without a
//! priority sort after every prioritized character.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Priority rank for gold-earning characters, 1 (highest) through 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GoldPriority(u8);

impl GoldPriority {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 9;

    pub fn new(value: u8) -> Result<Self, DomainError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::validation(format!(
                "gold priority must be between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                value
            )))
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for GoldPriority {
    fn default() -> Self {
        Self(6)
    }
}

impl std::fmt::Display for GoldPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
