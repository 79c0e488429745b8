//! User domain entity, roles, and capabilities.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::config::{ROLE_ADMIN, ROLE_USER};
use crate::errors::{AppError, AppResult};
use crate::infra::store::DocId;

/// Closed set of user roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

/// Things a caller may be allowed to do. Every gated service operation
/// checks one of these explicitly; menu hiding in the UI layer is not
/// an authorization boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Create and list user accounts
    ManageUsers,
    /// Create, edit, and delete products and customers
    ManageCatalog,
    /// Record sales and view the sales list
    RecordSales,
    /// View aggregate reports and the dashboard
    ViewReports,
}

impl Role {
    /// Check if this role has admin privileges
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    /// Check whether this role grants a capability.
    ///
    /// Only user management is admin-only; the catalog, sale
    /// recording, and reports are open to any authenticated role.
    pub fn allows(&self, capability: Capability) -> bool {
        match capability {
            Capability::ManageUsers => self.is_admin(),
            Capability::ManageCatalog | Capability::RecordSales | Capability::ViewReports => true,
        }
    }

    /// Parse a role string received at the application boundary.
    pub fn parse(s: &str) -> AppResult<Self> {
        match s {
            ROLE_ADMIN => Ok(Role::Admin),
            ROLE_USER => Ok(Role::User),
            other => Err(AppError::invalid_input(format!(
                "'{}' is not a valid role",
                other
            ))),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "{}", ROLE_ADMIN),
            Role::User => write!(f, "{}", ROLE_USER),
        }
    }
}

/// User domain entity. Users are created by an admin (or seeding) and
/// never deleted in-app.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: DocId,
    pub name: String,
    /// Unique login name; uniqueness is enforced at creation.
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: Role,
}

impl User {
    /// Check if user has admin role
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// User creation data transfer object
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUser {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Plain-text password; length is enforced by `Password::new`.
    pub password: String,
    pub role: Role,
}

/// User view safe to hand to the UI layer: no password hash, id as a
/// boundary string.
#[derive(Debug, Clone, Serialize)]
pub struct UserView {
    pub id: String,
    pub name: String,
    pub username: String,
    pub role: String,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name,
            username: user.username,
            role: user.role.to_string(),
        }
    }
}
