//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// User Roles
// =============================================================================

/// Default role assigned to new users
pub const ROLE_USER: &str = "user";

/// Administrator role with elevated privileges
pub const ROLE_ADMIN: &str = "admin";

// =============================================================================
// Document Store
// =============================================================================

/// Default store connection URI (for development)
pub const DEFAULT_STORE_URI: &str = "memory://localhost";

/// Default database name
pub const DEFAULT_DATABASE: &str = "sales_db";

/// Default collection names for the four logical collections
pub const DEFAULT_USERS_COLLECTION: &str = "users";
pub const DEFAULT_PRODUCTS_COLLECTION: &str = "products";
pub const DEFAULT_CUSTOMERS_COLLECTION: &str = "customers";
pub const DEFAULT_SALES_COLLECTION: &str = "sales";

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 8;
