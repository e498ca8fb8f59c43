//! `paypack-routing` — the navigation guard.
//!
//! A static route table plus the decision procedure that runs before every
//! route transition: decode the session token, check the target route's
//! permission flags against the role policy, and resolve the navigation to
//! exactly one terminal action (proceed, redirect or abort).

pub mod error;
pub mod guard;
pub mod route;

pub use error::NavigationError;
pub use guard::{Guard, GuardOutcome, NavigationIntent};
pub use route::{Route, RouteTable, dashboard_routes};
