//! Static route descriptors.

use paypack_auth::RouteMeta;

/// A navigable route: path, optional name, permission flags.
///
/// Defined once at startup; never mutated at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub name: Option<&'static str>,
    pub meta: RouteMeta,
}

impl Route {
    pub const fn new(path: &'static str, meta: RouteMeta) -> Self {
        Self {
            path,
            name: None,
            meta,
        }
    }

    pub const fn named(path: &'static str, name: &'static str, meta: RouteMeta) -> Self {
        Self {
            path,
            name: Some(name),
            meta,
        }
    }
}

/// The set of routes the guard decides over.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// Look a route up by its exact path, ignoring a single trailing slash.
    pub fn find(&self, path: &str) -> Option<&Route> {
        let path = normalize(path);
        self.routes.iter().find(|r| r.path == path)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.name == Some(name))
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }
}

fn normalize(path: &str) -> &str {
    if path.len() > 1 {
        path.strip_suffix('/').unwrap_or(path)
    } else {
        path
    }
}

/// The PAYPACK dashboard route set.
pub fn dashboard_routes() -> RouteTable {
    const AUTH: RouteMeta = RouteMeta::new().require_auth();
    // Routes shared by sector admins and cell managers.
    const STAFF: RouteMeta = AUTH.for_admin().for_manager();

    RouteTable::new(vec![
        Route::new("/", RouteMeta::new().guest()),
        Route::named("/dashboard", "dashboard", AUTH.for_admin()),
        Route::named("/transactions", "transactions", STAFF),
        Route::named("/village", "village", STAFF),
        Route::named("/cells", "cells", STAFF),
        Route::named("/properties", "properties", STAFF),
        Route::named("/reports", "reports", STAFF),
        Route::named("/create", "createAccounts", STAFF),
        Route::named("/feedbacks", "feedbacks", STAFF),
        Route::named("/message", "messages", STAFF),
        Route::named("/agent", "agentView", AUTH.agent()),
        Route::named("/dev", "accounts", AUTH.for_dev()),
        Route::named("/dev/developers", "developers", AUTH.for_dev()),
        Route::named("/dev/admins", "devAdmins", AUTH.for_dev()),
        Route::named("/dev/managers", "devManagers", AUTH.for_dev()),
        Route::named("/error", "not-found", RouteMeta::new().error()),
    ])
}
