//! System users.

use serde::{Deserialize, Serialize};

use paypack_auth::Role;
use paypack_core::{DomainError, DomainResult, UserId};

/// A system user: an admin, manager, agent or developer operating within an
/// account. The role is carried on the user rather than inferred from which
/// collection the record lives in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    /// Stored hash of the password, never the plain text.
    pub password: String,
    pub role: Role,
    pub sector: String,
    pub cell: String,
    pub village: String,
}

impl User {
    /// Validate a user at registration time: credentials plus a complete
    /// address down to the village.
    pub fn validate(&self) -> DomainResult<()> {
        if self.username.is_empty() {
            return Err(DomainError::validation("invalid user: missing username"));
        }
        if self.password.is_empty() {
            return Err(DomainError::validation("invalid user: missing password"));
        }
        if self.sector.is_empty() || self.cell.is_empty() || self.village.is_empty() {
            return Err(DomainError::validation("invalid user: incomplete address"));
        }
        Ok(())
    }
}
