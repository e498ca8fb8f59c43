//! Identity provider: token issuance and identity extraction.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use paypack_core::{AccountPath, DomainError, DomainResult};

use crate::user::User;

/// Issued tokens are valid for ten hours.
fn token_lifetime() -> Duration {
    Duration::hours(10)
}

/// The entity issuing and reading session tokens.
pub trait IdentityProvider: Send + Sync {
    /// Issue a bearer token for an authenticated user within an account.
    fn issue(&self, user: &User, account: &AccountPath) -> DomainResult<String>;

    /// Extract the username from a token, verifying it.
    fn identity(&self, token: &str) -> DomainResult<String>;
}

/// What goes into the token payload. Field names are the wire contract the
/// session-token decoder relies on.
#[derive(Debug, Serialize, Deserialize)]
struct WireClaims {
    username: String,
    account: String,
    role: String,
    iat: i64,
    exp: i64,
}

/// HS256 JWT identity provider.
pub struct JwtIdentityProvider {
    secret: String,
}

impl JwtIdentityProvider {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl IdentityProvider for JwtIdentityProvider {
    fn issue(&self, user: &User, account: &AccountPath) -> DomainResult<String> {
        let now = Utc::now();
        let claims = WireClaims {
            username: user.username.clone(),
            account: account.to_string(),
            role: user.role.as_str().to_string(),
            iat: now.timestamp(),
            exp: (now + token_lifetime()).timestamp(),
        };

        jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| {
            tracing::error!(error = %e, "token issuance failed");
            DomainError::Unauthorized
        })
    }

    fn identity(&self, token: &str) -> DomainResult<String> {
        let data = jsonwebtoken::decode::<WireClaims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|_| DomainError::Unauthorized)?;

        Ok(data.claims.username)
    }
}
