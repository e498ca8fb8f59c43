//! The API client.

use std::sync::{Arc, Mutex};

use serde_json::{Value, json};

use paypack_accounts::Credentials;
use paypack_auth::SessionStore;

use crate::error::ClientError;
use crate::transport::{Method, Request, Response, Transport};

/// Dashboard-facing API client.
///
/// The session store is shared with the route guard; both mutate it, so it
/// sits behind a single lock (no lock is held across an await).
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    session: Arc<Mutex<SessionStore>>,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn Transport>, session: Arc<Mutex<SessionStore>>) -> Self {
        Self { transport, session }
    }

    pub fn session(&self) -> Arc<Mutex<SessionStore>> {
        Arc::clone(&self.session)
    }

    /// Perform a request with the current bearer token attached.
    ///
    /// A 401 response forces a logout before surfacing as
    /// [`ClientError::SessionExpired`].
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Response, ClientError> {
        let bearer = self.session.lock().expect("session lock").token();

        let response = self
            .transport
            .send(Request {
                method,
                path: path.to_string(),
                body,
                bearer,
            })
            .await?;

        if response.status == 401 {
            tracing::warn!(%method, path, "session expired remotely; logging out");
            self.logout();
            return Err(ClientError::SessionExpired);
        }
        if !response.ok() {
            return Err(ClientError::Http {
                status: response.status,
                message: error_message(&response.body),
            });
        }
        Ok(response)
    }

    /// Exchange credentials for a session token and store it.
    ///
    /// On any failure the stored token is cleared, mirroring the login
    /// form's behavior: a failed login never leaves a half-open session.
    pub async fn login(&self, credentials: &Credentials) -> Result<(), ClientError> {
        credentials.validate().map_err(ClientError::from)?;

        let result = self
            .request(
                Method::Post,
                "/accounts/login",
                Some(json!({
                    "username": credentials.username,
                    "password": credentials.password,
                })),
            )
            .await;

        match result {
            Ok(response) => {
                let token = response
                    .body
                    .get("token")
                    .and_then(Value::as_str)
                    .ok_or_else(|| {
                        ClientError::MalformedResponse("login response carries no token".into())
                    })?;
                self.session.lock().expect("session lock").login(token);
                Ok(())
            }
            Err(err) => {
                self.logout();
                Err(err)
            }
        }
    }

    /// Drop the session. Idempotent; also invoked by the 401 path.
    pub fn logout(&self) {
        self.session.lock().expect("session lock").logout();
    }
}

fn error_message(body: &Value) -> String {
    body.get("error")
        .or_else(|| body.get("message"))
        .and_then(Value::as_str)
        .unwrap_or("request failed")
        .to_string()
}
