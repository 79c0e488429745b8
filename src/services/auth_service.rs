//! Authentication service - credential verification, role-checked
//! login, and admin-gated user management.
//!
//! Passwords are stored as Argon2 hashes via the domain `Password`
//! value object; there is no plain-text comparison anywhere.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Capability, CreateUser, Password, Role, Session, User, UserView};
use crate::errors::{validate_dto, AppError, AppResult};
use crate::infra::Repositories;

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Look up a user by username and verify the password. Returns
    /// `None` for an unknown username or a hash mismatch; the two
    /// cases are indistinguishable to the caller.
    async fn verify_credentials(&self, username: &str, password: &str)
        -> AppResult<Option<User>>;

    /// Authenticate and open a session under the claimed role.
    ///
    /// Bad credentials fail with `InvalidCredentials`. Valid
    /// credentials under the wrong role fail with the distinct
    /// `RoleMismatch` error, which tells the caller the account
    /// exists but not under that role.
    async fn login(&self, username: &str, password: &str, claimed_role: Role)
        -> AppResult<Session>;

    /// Create a new user account. Requires `Capability::ManageUsers`;
    /// fails with `DuplicateUsername` before anything is written when
    /// the username is taken.
    async fn create_user(&self, session: &Session, new_user: CreateUser) -> AppResult<User>;

    /// List all user accounts (admin panel view). Requires
    /// `Capability::ManageUsers`.
    async fn list_users(&self, session: &Session) -> AppResult<Vec<UserView>>;
}

/// Concrete implementation of AuthService over the repository set.
pub struct Authenticator<R: Repositories> {
    repos: Arc<R>,
}

impl<R: Repositories> Authenticator<R> {
    /// Create new auth service instance
    pub fn new(repos: Arc<R>) -> Self {
        Self { repos }
    }
}

#[async_trait]
impl<R: Repositories> AuthService for Authenticator<R> {
    async fn verify_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> AppResult<Option<User>> {
        let user_result = self.repos.users().find_by_username(username).await?;

        // SECURITY: Perform password verification even if the user
        // doesn't exist, so response timing cannot enumerate valid
        // usernames. The dummy hash always fails verification.
        let dummy_hash =
            "$argon2id$v=19$m=19456,t=2,p=1$dummysalt123456$dummyhash1234567890123456789012";

        let (password_hash, user_exists) = match &user_result {
            Some(user) => (user.password_hash.as_str(), true),
            None => (dummy_hash, false),
        };

        let stored_password = Password::from_hash(password_hash.to_string());
        let password_valid = stored_password.verify(password);

        if user_exists && password_valid {
            Ok(user_result)
        } else {
            Ok(None)
        }
    }

    async fn login(
        &self,
        username: &str,
        password: &str,
        claimed_role: Role,
    ) -> AppResult<Session> {
        let user = self
            .verify_credentials(username, password)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        if user.role != claimed_role {
            return Err(AppError::RoleMismatch {
                claimed: claimed_role,
            });
        }

        tracing::info!(username = %user.username, role = %user.role, "login");
        Ok(Session::new(user))
    }

    async fn create_user(&self, session: &Session, new_user: CreateUser) -> AppResult<User> {
        session.require(Capability::ManageUsers)?;
        validate_dto(&new_user)?;

        // Username uniqueness is enforced here, before the insert
        if self
            .repos
            .users()
            .find_by_username(&new_user.username)
            .await?
            .is_some()
        {
            return Err(AppError::DuplicateUsername(new_user.username));
        }

        let password_hash = Password::new(&new_user.password)?.into_string();
        let user = self
            .repos
            .users()
            .create(new_user.name, new_user.username, password_hash, new_user.role)
            .await?;

        tracing::info!(username = %user.username, role = %user.role, "user created");
        Ok(user)
    }

    async fn list_users(&self, session: &Session) -> AppResult<Vec<UserView>> {
        session.require(Capability::ManageUsers)?;
        let users = self.repos.users().list().await?;
        Ok(users.into_iter().map(UserView::from).collect())
    }
}

/// Session holder for the UI layer: one per interactive session,
/// never shared process-wide.
#[derive(Default)]
pub struct SessionState {
    current: Option<Session>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Authenticate and store the resulting session.
    pub async fn login(
        &mut self,
        auth: &dyn AuthService,
        username: &str,
        password: &str,
        claimed_role: Role,
    ) -> AppResult<&Session> {
        let session = auth.login(username, password, claimed_role).await?;
        Ok(self.current.insert(session))
    }

    /// Clear the active session.
    pub fn logout(&mut self) {
        if let Some(session) = self.current.take() {
            tracing::info!(username = %session.user().username, "logout");
        }
    }

    /// The active session, if any.
    pub fn current(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    /// The active user's identity, if logged in.
    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref().map(Session::user)
    }
}
