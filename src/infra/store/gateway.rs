//! Data store gateway.
//!
//! Holds the session to the document store and exposes the four
//! logical collections (users, products, customers, sales). The
//! process-wide handle is established lazily once and reused; no
//! explicit teardown is modeled.

use std::sync::Arc;

use once_cell::sync::OnceCell;

use super::Collection;
use crate::config::StoreConfig;

static SHARED: OnceCell<Arc<Gateway>> = OnceCell::new();

/// Connection to the document store and its four collections.
pub struct Gateway {
    database: String,
    users: Collection,
    products: Collection,
    customers: Collection,
    sales: Collection,
}

impl Gateway {
    /// Open a store session for the configured database.
    ///
    /// The URI is an opaque, already-resolved handle; the in-memory
    /// backend only records where the data logically lives.
    pub fn connect(config: &StoreConfig) -> Arc<Self> {
        // Only the scheme is logged; the URI may embed credentials.
        let scheme = config.uri().split("://").next().unwrap_or_default();
        tracing::debug!(
            store = %scheme,
            database = %config.database,
            users = %config.users_collection,
            products = %config.products_collection,
            customers = %config.customers_collection,
            sales = %config.sales_collection,
            "opening document store session"
        );

        Arc::new(Self {
            database: config.database.clone(),
            users: Collection::new(&config.users_collection),
            products: Collection::new(&config.products_collection),
            customers: Collection::new(&config.customers_collection),
            sales: Collection::new(&config.sales_collection),
        })
    }

    /// Process-wide gateway, lazily established from the environment on
    /// first use and reused afterwards.
    pub fn shared() -> Arc<Self> {
        SHARED
            .get_or_init(|| Self::connect(&StoreConfig::from_env()))
            .clone()
    }

    /// Database name this session is bound to.
    pub fn database(&self) -> &str {
        &self.database
    }

    pub fn users(&self) -> &Collection {
        &self.users
    }

    pub fn products(&self) -> &Collection {
        &self.products
    }

    pub fn customers(&self) -> &Collection {
        &self.customers
    }

    pub fn sales(&self) -> &Collection {
        &self.sales
    }
}
