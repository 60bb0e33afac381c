//! Party role classification.
//!
//! A character's class determines its role through a closed support-class
//! set; every other class deals damage.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Classes that fill support slots. Closed membership: anything not listed
/// here is a damage class.
const SUPPORT_CLASSES: [&str; 4] = ["Bard", "Paladin", "Artist", "Valkyrie"];

/// Role a character fills in a party.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Support,
    Damage,
}

impl Role {
    /// Classify a class name into a role.
    pub fn for_class(class_name: &str) -> Role {
        if SUPPORT_CLASSES.contains(&class_name) {
            Role::Support
        } else {
            Role::Damage
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Support => "Support",
            Role::Damage => "Damage",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "support" | "Support" => Ok(Role::Support),
            "damage" | "Damage" => Ok(Role::Damage),
            _ => Err(DomainError::parse(format!("Unknown role: {}", s))),
        }
    }
}
