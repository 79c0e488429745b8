//! Authenticated session identity.
//!
//! The active user's identity is an explicit value passed to each
//! gated operation, never process-wide mutable state, so concurrent
//! sessions cannot interfere.

use crate::errors::{AppError, AppResult};
use crate::infra::store::DocId;

use super::user::{Capability, Role, User};

/// Identity of an authenticated user for the duration of one
/// interactive session.
#[derive(Debug, Clone)]
pub struct Session {
    user: User,
}

impl Session {
    pub fn new(user: User) -> Self {
        Self { user }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn user_id(&self) -> DocId {
        self.user.id
    }

    pub fn role(&self) -> Role {
        self.user.role
    }

    /// Fail with `Forbidden` unless the session's role grants the
    /// capability. Every gated service operation calls this.
    pub fn require(&self, capability: Capability) -> AppResult<()> {
        if self.role().allows(capability) {
            Ok(())
        } else {
            tracing::debug!(
                user = %self.user.username,
                ?capability,
                "capability check failed"
            );
            Err(AppError::Forbidden)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_with_role(role: Role) -> User {
        User {
            id: DocId::new(),
            name: "Test".into(),
            username: "test".into(),
            password_hash: "hash".into(),
            role,
        }
    }

    #[test]
    fn test_admin_session_may_manage_users() {
        let session = Session::new(user_with_role(Role::Admin));
        assert!(session.require(Capability::ManageUsers).is_ok());
    }

    #[test]
    fn test_session_exposes_user_identity() {
        let user = user_with_role(Role::User);
        let session = Session::new(user.clone());
        assert_eq!(session.user_id(), user.id);
        assert_eq!(session.role(), Role::User);
    }

    #[test]
    fn test_user_session_is_forbidden_user_management() {
        let session = Session::new(user_with_role(Role::User));
        let err = session.require(Capability::ManageUsers).unwrap_err();
        assert!(matches!(err, AppError::Forbidden));
        assert!(session.require(Capability::RecordSales).is_ok());
    }
}
