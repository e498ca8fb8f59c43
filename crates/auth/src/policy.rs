//! Role policy: which route flags each role satisfies.
//!
//! - No IO
//! - No panics
//! - No business logic (pure policy check)

use crate::role::Role;

/// Permission flags attached to a route at startup. Never mutated at runtime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteMeta {
    /// Route requires a decodable session token.
    pub require_auth: bool,
    /// Route is for unauthenticated visitors (login page).
    pub guest: bool,
    pub for_admin: bool,
    pub for_manager: bool,
    pub for_dev: bool,
    pub agent: bool,
    /// The error page itself; always reachable.
    pub error: bool,
}

impl RouteMeta {
    pub const fn new() -> Self {
        Self {
            require_auth: false,
            guest: false,
            for_admin: false,
            for_manager: false,
            for_dev: false,
            agent: false,
            error: false,
        }
    }

    pub const fn require_auth(self) -> Self {
        Self {
            require_auth: true,
            ..self
        }
    }

    pub const fn guest(self) -> Self {
        Self {
            guest: true,
            ..self
        }
    }

    pub const fn for_admin(self) -> Self {
        Self {
            for_admin: true,
            ..self
        }
    }

    pub const fn for_manager(self) -> Self {
        Self {
            for_manager: true,
            ..self
        }
    }

    pub const fn for_dev(self) -> Self {
        Self {
            for_dev: true,
            ..self
        }
    }

    pub const fn agent(self) -> Self {
        Self {
            agent: true,
            ..self
        }
    }

    pub const fn error(self) -> Self {
        Self { error: true, ..self }
    }

    /// True when the route carries at least one role-restricting flag.
    pub const fn restricted(&self) -> bool {
        self.for_admin || self.for_manager || self.for_dev || self.agent
    }
}

/// The static role → satisfied-flag table.
const fn satisfies(role: Role, meta: &RouteMeta) -> bool {
    match role {
        Role::Min => meta.agent,
        Role::Basic => meta.for_manager,
        Role::Admin => meta.for_admin,
        Role::Dev => meta.for_dev,
    }
}

/// True iff `role` may enter a route with the given flags: either the route
/// carries no role restriction at all, or the role satisfies one of its
/// flags.
pub const fn permits(role: Role, meta: &RouteMeta) -> bool {
    !meta.restricted() || satisfies(role, meta)
}

/// Where a role lands when denied access to a route.
///
/// The dev default is `/dev`, not the dashboard: the dashboard is an
/// admin-flagged route, so bouncing a dev there would deny again forever.
pub const fn default_route(role: Role) -> &'static str {
    match role {
        Role::Min => "/agent",
        Role::Admin => "/dashboard",
        Role::Dev => "/dev",
        Role::Basic => "/cells",
    }
}
