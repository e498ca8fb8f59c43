//! Per-tab session state.
//!
//! The session store is the single holder of the current token and the user
//! decoded from it. All mutation funnels through [`SessionStore::login`],
//! [`SessionStore::logout`] and [`SessionStore::refresh_user`]; nothing else
//! writes to it. The backing storage is abstracted so tests (and any host)
//! can supply their own tab-scoped key/value store.

use std::collections::HashMap;

use crate::claims::{Claims, decode};

/// Storage key under which the session token lives.
pub const TOKEN_KEY: &str = "token";

/// Tab-scoped key/value storage (the browser's `sessionStorage` shape).
pub trait SessionStorage: Send {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
    fn clear(&mut self);
}

/// In-memory [`SessionStorage`], cleared when dropped (i.e. tab close).
#[derive(Debug, Default)]
pub struct InMemorySessionStorage {
    entries: HashMap<String, String>,
}

impl InMemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for InMemorySessionStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Holder of the current token and decoded user.
///
/// At most one token exists per store; a fresh login replaces the previous
/// session. The decoded user becomes stale the instant the token is cleared.
pub struct SessionStore {
    storage: Box<dyn SessionStorage>,
    user: Option<Claims>,
}

impl SessionStore {
    pub fn new(storage: impl SessionStorage + 'static) -> Self {
        // Pick up a token persisted by a previous page load, if any.
        let storage = Box::new(storage);
        let user = storage.get(TOKEN_KEY).as_deref().and_then(decode);
        Self { storage, user }
    }

    /// The raw session token, if one is stored.
    pub fn token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY)
    }

    /// The user decoded at login / last refresh.
    pub fn user(&self) -> Option<&Claims> {
        self.user.as_ref()
    }

    /// Store a freshly issued token and derive the current user from it.
    ///
    /// A token that does not decode is not kept: the store never holds a
    /// token it cannot attribute to a user.
    pub fn login(&mut self, token: &str) {
        match decode(token) {
            Some(claims) => {
                self.storage.set(TOKEN_KEY, token);
                tracing::debug!(user = %claims.username, role = %claims.role, "session opened");
                self.user = Some(claims);
            }
            None => {
                tracing::warn!("login rejected: token does not decode");
                self.logout();
            }
        }
    }

    /// Re-derive the current user from freshly decoded claims.
    ///
    /// Called by the route guard on every authenticated navigation so the
    /// UI stays in sync even if the token was refreshed out-of-band.
    pub fn refresh_user(&mut self, claims: Claims) {
        self.user = Some(claims);
    }

    /// Clear the token and user. Idempotent.
    pub fn logout(&mut self) {
        self.storage.remove(TOKEN_KEY);
        self.user = None;
    }
}

impl core::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SessionStore")
            .field("has_token", &self.token().is_some())
            .field("user", &self.user.as_ref().map(|c| c.username.as_str()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use jsonwebtoken::{EncodingKey, Header};
    use serde::Serialize;

    #[derive(Serialize)]
    struct TestClaims<'a> {
        username: &'a str,
        account: &'a str,
        role: &'a str,
        iat: i64,
        exp: i64,
    }

    fn token(role: &str) -> String {
        let now = Utc::now().timestamp();
        jsonwebtoken::encode(
            &Header::default(),
            &TestClaims {
                username: "mukamana",
                account: "kigali.gasabo.remera",
                role,
                iat: now,
                exp: now + 36_000,
            },
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap()
    }

    #[test]
    fn login_stores_token_and_user() {
        let mut session = SessionStore::new(InMemorySessionStorage::new());
        assert!(session.token().is_none());
        assert!(session.user().is_none());

        session.login(&token("admin"));
        assert!(session.token().is_some());
        assert_eq!(session.user().unwrap().username, "mukamana");
    }

    #[test]
    fn login_with_undecodable_token_clears_the_session() {
        let mut session = SessionStore::new(InMemorySessionStorage::new());
        session.login(&token("basic"));

        session.login("garbage");
        assert!(session.token().is_none());
        assert!(session.user().is_none());
    }

    #[test]
    fn logout_is_idempotent() {
        let mut session = SessionStore::new(InMemorySessionStorage::new());
        session.login(&token("min"));

        session.logout();
        session.logout();
        assert!(session.token().is_none());
        assert!(session.user().is_none());
    }

    #[test]
    fn persisted_token_is_picked_up_on_construction() {
        let mut storage = InMemorySessionStorage::new();
        storage.set(TOKEN_KEY, &token("dev"));

        let session = SessionStore::new(storage);
        assert_eq!(
            session.user().map(|c| c.role),
            Some(crate::role::Role::Dev)
        );
    }
}
