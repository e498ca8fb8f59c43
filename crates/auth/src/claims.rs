//! Session-token decoding.
//!
//! Tokens are JWTs issued by the backend. The client never verifies the
//! signature or the expiry window: a stale or forged token is harmless here
//! because every protected request is re-checked server-side and answered
//! with 401, which forces a logout. Decoding only recovers the claims the
//! UI needs (identity, role, account scope).

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use paypack_core::AccountPath;

use crate::role::Role;

/// Decoded payload of a session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claims {
    pub username: String,
    /// Sector scope the account operates in.
    pub account: AccountPath,
    pub role: Role,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// Wire form of the payload segment.
#[derive(Debug, Deserialize)]
struct RawClaims {
    username: String,
    account: String,
    role: String,
    iat: i64,
    exp: i64,
}

/// Decode a session token into [`Claims`].
///
/// Fails soft: any malformed input yields `None`, never a panic or an error
/// the caller has to route. The function is pure; decoding the same token
/// twice yields identical claims.
///
/// Expired tokens still decode; see the module docs for why.
pub fn decode(token: &str) -> Option<Claims> {
    let mut segments = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return None;
    };

    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    let raw: RawClaims = serde_json::from_slice(&bytes).ok()?;

    let role: Role = match raw.role.parse() {
        Ok(role) => role,
        Err(err) => {
            tracing::debug!(%err, "rejecting token");
            return None;
        }
    };
    let account: AccountPath = raw.account.parse().ok()?;

    Some(Claims {
        username: raw.username,
        account,
        role,
        issued_at: DateTime::from_timestamp(raw.iat, 0)?,
        expires_at: DateTime::from_timestamp(raw.exp, 0)?,
    })
}
