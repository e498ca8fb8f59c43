//! Property and owner entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use paypack_core::{Address, DomainError, DomainResult, OwnerId, PropertyId};

/// A property owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub id: OwnerId,
    pub fname: String,
    pub lname: String,
    pub phone: String,
}

impl Owner {
    /// Full name as shown on reports.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.fname, self.lname)
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.fname.is_empty() || self.lname.is_empty() {
            return Err(DomainError::validation("invalid owner: missing name"));
        }
        if self.phone.is_empty() {
            return Err(DomainError::validation("invalid owner: missing phone"));
        }
        Ok(())
    }
}

/// A property (house) with its monthly due.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: PropertyId,
    /// Monthly amount owed, in Rwandan francs.
    pub due: f64,
    pub owner: Owner,
    pub address: Address,
    /// Whether the house is rented out.
    pub occupied: bool,
    /// Username of the agent who registered it.
    pub recorded_by: String,
    pub created_at: DateTime<Utc>,
}

impl Property {
    /// Validate a property at registration time.
    pub fn validate(&self) -> DomainResult<()> {
        self.owner.validate()?;
        self.address.validate()?;
        if self.due == 0.0 {
            return Err(DomainError::validation("invalid property: no amount due"));
        }
        Ok(())
    }
}
