//! The closed set of account roles.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Role granted to an authenticated user.
///
/// Modeled as a closed enumeration: a token whose role claim is not one of
/// these four values fails to decode, rather than falling through to
/// undefined behavior downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Field agent; restricted to the agent view.
    Min,
    /// Cell manager.
    Basic,
    /// Sector administrator.
    Admin,
    /// Platform developer.
    Dev,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Min, Role::Basic, Role::Admin, Role::Dev];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Min => "min",
            Role::Basic => "basic",
            Role::Admin => "admin",
            Role::Dev => "dev",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A role claim outside the closed set.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown role '{0}'")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "min" => Ok(Role::Min),
            "basic" => Ok(Role::Basic),
            "admin" => Ok(Role::Admin),
            "dev" => Ok(Role::Dev),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_all_roles() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn rejects_unknown_role() {
        let err = "superuser".parse::<Role>().unwrap_err();
        assert_eq!(err, UnknownRole("superuser".to_string()));
    }

    #[test]
    fn rejects_case_variants() {
        // Role strings are exact; "Admin" is not a valid claim value.
        assert!("Admin".parse::<Role>().is_err());
    }
}
