//! Users service: registration and login.

use std::sync::Arc;

use async_trait::async_trait;

use paypack_core::{AccountId, AccountPath, DomainError, DomainResult, Page};

use crate::account::Account;
use crate::credentials::Credentials;
use crate::idp::IdentityProvider;
use crate::user::User;

/// Data-store contract for sector accounts.
#[async_trait]
pub trait AccountsRepository: Send + Sync {
    async fn save(&self, account: Account) -> DomainResult<()>;

    async fn retrieve(&self, id: AccountId) -> DomainResult<Account>;

    async fn list(&self, offset: u64, limit: u64) -> DomainResult<Page<Account>>;
}

/// The accounts API.
pub struct AccountsService {
    repo: Arc<dyn AccountsRepository>,
}

impl AccountsService {
    pub fn new(repo: Arc<dyn AccountsRepository>) -> Self {
        Self { repo }
    }

    pub async fn register(&self, account: Account) -> DomainResult<Account> {
        account.validate()?;
        self.repo.save(account.clone()).await?;
        tracing::info!(name = %account.name, "account registered");
        Ok(account)
    }

    pub async fn retrieve(&self, id: AccountId) -> DomainResult<Account> {
        self.repo.retrieve(id).await
    }

    pub async fn list(&self, offset: u64, limit: u64) -> DomainResult<Page<Account>> {
        self.repo.list(offset, limit).await
    }
}

/// Data-store contract for users.
#[async_trait]
pub trait UsersRepository: Send + Sync {
    /// Persist a new user; fails with `Conflict` on a duplicate username.
    async fn save(&self, user: User) -> DomainResult<()>;

    async fn retrieve_by_username(&self, username: &str) -> DomainResult<User>;

    async fn list(&self, offset: u64, limit: u64) -> DomainResult<Page<User>>;
}

/// Password hashing seam. The concrete backend (bcrypt on the server) is an
/// infrastructure choice; the service only needs hash and verify.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, plain: &str) -> DomainResult<String>;

    /// Err(`Unauthorized`) when the password does not match.
    fn verify(&self, plain: &str, hash: &str) -> DomainResult<()>;
}

/// The users API: registration, login, listing.
pub struct UsersService {
    repo: Arc<dyn UsersRepository>,
    hasher: Arc<dyn PasswordHasher>,
    idp: Arc<dyn IdentityProvider>,
    /// Sector scope stamped into the tokens this deployment issues.
    account: AccountPath,
}

impl UsersService {
    pub fn new(
        repo: Arc<dyn UsersRepository>,
        hasher: Arc<dyn PasswordHasher>,
        idp: Arc<dyn IdentityProvider>,
        account: AccountPath,
    ) -> Self {
        Self {
            repo,
            hasher,
            idp,
            account,
        }
    }

    /// Register a user, hashing the submitted password.
    pub async fn register(&self, mut user: User) -> DomainResult<User> {
        user.validate()?;
        user.password = self.hasher.hash(&user.password)?;
        self.repo.save(user.clone()).await?;
        tracing::info!(username = %user.username, role = %user.role, "user registered");
        Ok(user)
    }

    /// Exchange credentials for a bearer token.
    pub async fn login(&self, creds: &Credentials) -> DomainResult<String> {
        creds.validate()?;

        let user = self
            .repo
            .retrieve_by_username(&creds.username)
            .await
            .map_err(|_| DomainError::Unauthorized)?;

        self.hasher.verify(&creds.password, &user.password)?;
        self.idp.issue(&user, &self.account)
    }

    pub async fn list(&self, offset: u64, limit: u64) -> DomainResult<Page<User>> {
        self.repo.list(offset, limit).await
    }
}
