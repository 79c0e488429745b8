//! User repository.
//!
//! Users are created by an admin or by seeding and never deleted
//! in-app, so there is no delete operation here at all.

use std::sync::Arc;

use async_trait::async_trait;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use super::records::{decode, encode, UserRecord};
use crate::domain::{Role, User};
use crate::errors::AppResult;
use crate::infra::store::Gateway;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Look up a user by unique username
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Insert a new user. The duplicate-username check happens in the
    /// auth service before this is called.
    async fn create(
        &self,
        name: String,
        username: String,
        password_hash: String,
        role: Role,
    ) -> AppResult<User>;

    /// List all users
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Count all users
    async fn count(&self) -> AppResult<u64>;
}

/// Document-store backed user repository.
pub struct UserStore {
    gateway: Arc<Gateway>,
}

impl UserStore {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let coll = self.gateway.users();
        for (id, doc) in coll.find_all()? {
            let record: UserRecord = decode(coll.name(), id, doc)?;
            if record.username == username {
                return Ok(Some(record.into_user(id)));
            }
        }
        Ok(None)
    }

    async fn create(
        &self,
        name: String,
        username: String,
        password_hash: String,
        role: Role,
    ) -> AppResult<User> {
        let record = UserRecord {
            name,
            username,
            password_hash,
            role,
        };
        let id = self.gateway.users().insert(encode(&record)?)?;
        Ok(record.into_user(id))
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let coll = self.gateway.users();
        coll.find_all()?
            .into_iter()
            .map(|(id, doc)| Ok(decode::<UserRecord>(coll.name(), id, doc)?.into_user(id)))
            .collect()
    }

    async fn count(&self) -> AppResult<u64> {
        self.gateway.users().count()
    }
}
