//! Store settings loaded from environment variables.
//!
//! The core treats the connection URI as an opaque, already-resolved
//! handle; validating it is the backing store's concern.

use std::env;

use super::constants::{
    DEFAULT_CUSTOMERS_COLLECTION, DEFAULT_DATABASE, DEFAULT_PRODUCTS_COLLECTION,
    DEFAULT_SALES_COLLECTION, DEFAULT_STORE_URI, DEFAULT_USERS_COLLECTION,
};

/// Document store configuration: connection URI, database name, and the
/// names of the four logical collections.
#[derive(Clone)]
pub struct StoreConfig {
    uri: String,
    pub database: String,
    pub users_collection: String,
    pub products_collection: String,
    pub customers_collection: String,
    pub sales_collection: String,
}

impl std::fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreConfig")
            .field("uri", &"[REDACTED]")
            .field("database", &self.database)
            .field("users_collection", &self.users_collection)
            .field("products_collection", &self.products_collection)
            .field("customers_collection", &self.customers_collection)
            .field("sales_collection", &self.sales_collection)
            .finish()
    }
}

impl StoreConfig {
    /// Load configuration from environment variables, falling back to
    /// development defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let uri = env::var("STORE_URI").unwrap_or_else(|_| {
            tracing::warn!("STORE_URI not set, using in-memory development default");
            DEFAULT_STORE_URI.to_string()
        });

        Self {
            uri,
            database: env::var("STORE_DATABASE").unwrap_or_else(|_| DEFAULT_DATABASE.to_string()),
            users_collection: env::var("USERS_COLLECTION")
                .unwrap_or_else(|_| DEFAULT_USERS_COLLECTION.to_string()),
            products_collection: env::var("PRODUCTS_COLLECTION")
                .unwrap_or_else(|_| DEFAULT_PRODUCTS_COLLECTION.to_string()),
            customers_collection: env::var("CUSTOMERS_COLLECTION")
                .unwrap_or_else(|_| DEFAULT_CUSTOMERS_COLLECTION.to_string()),
            sales_collection: env::var("SALES_COLLECTION")
                .unwrap_or_else(|_| DEFAULT_SALES_COLLECTION.to_string()),
        }
    }

    /// Get the opaque connection URI.
    pub fn uri(&self) -> &str {
        &self.uri
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            uri: DEFAULT_STORE_URI.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            users_collection: DEFAULT_USERS_COLLECTION.to_string(),
            products_collection: DEFAULT_PRODUCTS_COLLECTION.to_string(),
            customers_collection: DEFAULT_CUSTOMERS_COLLECTION.to_string(),
            sales_collection: DEFAULT_SALES_COLLECTION.to_string(),
        }
    }
}
