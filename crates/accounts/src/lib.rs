//! `paypack-accounts` — sector accounts, system users and login.
//!
//! An account is the billing boundary (one per sector, plus developer
//! accounts); users are the people operating within it: sector admins, cell
//! managers, field agents and platform developers. Login exchanges
//! credentials for a bearer token issued by the [`idp::IdentityProvider`].

pub mod account;
pub mod credentials;
pub mod idp;
pub mod service;
pub mod user;

pub use account::{Account, AccountType};
pub use credentials::Credentials;
pub use idp::{IdentityProvider, JwtIdentityProvider};
pub use service::{AccountsRepository, AccountsService, PasswordHasher, UsersRepository, UsersService};
pub use user::User;
