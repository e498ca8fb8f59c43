//! Sector account entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use paypack_core::{AccountId, DomainError, DomainResult};

/// The type of an account and the privileges it has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Developer account.
    Dev,
    /// Beneficiary account: a sector collecting rent.
    Ben,
}

/// An account: one paying sector (or a developer tenant), with a number of
/// purchased user seats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    pub account_type: AccountType,
    pub number_of_seats: u32,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Validate an account at registration time.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("invalid account: missing name"));
        }
        if self.number_of_seats == 0 {
            return Err(DomainError::validation("invalid account: no seats"));
        }
        Ok(())
    }
}
