//! The navigation guard.
//!
//! Runs once per navigation event, synchronously, before the target view is
//! constructed. Evaluates the target route's flags in fixed precedence
//! (require_auth, guest, error, unknown) and resolves every intent to
//! exactly one terminal action. No network calls happen here; every failure
//! is local and maps to a redirect.

use paypack_auth::{Role, SessionStore, decode, default_route, permits};

use crate::error::NavigationError;
use crate::route::RouteTable;

/// One navigation event: where the user wants to go, and from where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationIntent {
    pub to: String,
    pub from: Option<String>,
}

impl NavigationIntent {
    pub fn to(path: impl Into<String>) -> Self {
        Self {
            to: path.into(),
            from: None,
        }
    }

    pub fn between(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            from: Some(from.into()),
        }
    }
}

/// Terminal action of a guard run. Exactly one per intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Let the navigation through.
    Proceed,
    /// Cancel the intent and go elsewhere. `next_url` carries the
    /// originally intended path when a retry could make sense.
    Redirect {
        path: String,
        next_url: Option<String>,
    },
    /// Cancel the intent outright.
    Abort,
}

impl GuardOutcome {
    fn redirect(path: impl Into<String>) -> Self {
        GuardOutcome::Redirect {
            path: path.into(),
            next_url: None,
        }
    }
}

/// The route guard: a static route table plus the decision procedure.
#[derive(Debug, Clone)]
pub struct Guard {
    table: RouteTable,
}

impl Guard {
    pub fn new(table: RouteTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Decide a navigation intent.
    ///
    /// Side effects on the session, both bounded to this call:
    /// - every authenticated navigation onto a `require_auth` route
    ///   refreshes the session user from the freshly decoded token;
    /// - a decode failure on a `require_auth` route clears the session.
    pub fn before_each(
        &self,
        session: &mut SessionStore,
        intent: &NavigationIntent,
    ) -> GuardOutcome {
        let claims = session.token().as_deref().and_then(decode);
        // An unmatched path carries no flags and falls to the unknown branch,
        // exactly like a matched route without flags would.
        let meta = self
            .table
            .find(&intent.to)
            .map(|route| route.meta)
            .unwrap_or_default();

        if meta.require_auth {
            match claims {
                Some(claims) => {
                    let role = claims.role;
                    session.refresh_user(claims);
                    self.check_role(role, intent)
                }
                None => {
                    session.logout();
                    self.deny(NavigationError::DecodeFailure)
                }
            }
        } else if meta.guest {
            match claims {
                // An authenticated user never sees the login page; send them
                // to their landing route instead. The guest route itself
                // carries no role flags, so this cannot go through permits.
                Some(claims) => self.deny(NavigationError::PermissionDenied {
                    role: claims.role,
                    path: intent.to.clone(),
                }),
                None => GuardOutcome::Proceed,
            }
        } else if meta.error {
            GuardOutcome::Proceed
        } else {
            self.deny(NavigationError::UnknownRoute(intent.to.clone()))
        }
    }

    fn check_role(&self, role: Role, intent: &NavigationIntent) -> GuardOutcome {
        let meta = self
            .table
            .find(&intent.to)
            .map(|route| route.meta)
            .unwrap_or_default();

        if permits(role, &meta) {
            tracing::debug!(%role, to = %intent.to, "navigation allowed");
            GuardOutcome::Proceed
        } else {
            self.deny(NavigationError::PermissionDenied {
                role,
                path: intent.to.clone(),
            })
        }
    }

    /// Map a navigation failure to its deterministic redirect.
    fn deny(&self, err: NavigationError) -> GuardOutcome {
        tracing::debug!(%err, "navigation denied");
        match err {
            NavigationError::DecodeFailure => GuardOutcome::redirect("/"),
            NavigationError::PermissionDenied { role, .. } => {
                GuardOutcome::redirect(default_route(role))
            }
            NavigationError::UnknownRoute(path) => GuardOutcome::Redirect {
                path: "/error".to_string(),
                next_url: Some(path),
            },
        }
    }
}
