//! Login credentials.

use serde::{Deserialize, Serialize};

use paypack_core::{DomainError, DomainResult};

/// What a user submits at the login form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.username.is_empty() {
            return Err(DomainError::validation(
                "invalid credentials: missing username",
            ));
        }
        if self.password.is_empty() {
            return Err(DomainError::validation(
                "invalid credentials: missing password",
            ));
        }
        Ok(())
    }
}
