//! Centralized repository access.
//!
//! The backing store offers per-document atomicity only, so there is
//! no transaction machinery here: each repository write stands alone,
//! and the sale workflow's two writes are explicitly independent.

use std::sync::Arc;

use super::{
    CustomerRepository, CustomerStore, ProductRepository, ProductStore, SaleRepository, SaleStore,
    UserRepository, UserStore,
};
use crate::infra::store::Gateway;

/// Repository access trait for dependency injection.
pub trait Repositories: Send + Sync {
    /// Get user repository
    fn users(&self) -> Arc<dyn UserRepository>;

    /// Get product repository
    fn products(&self) -> Arc<dyn ProductRepository>;

    /// Get customer repository
    fn customers(&self) -> Arc<dyn CustomerRepository>;

    /// Get sale repository
    fn sales(&self) -> Arc<dyn SaleRepository>;
}

/// Concrete repository set over one store gateway.
pub struct Persistence {
    users: Arc<UserStore>,
    products: Arc<ProductStore>,
    customers: Arc<CustomerStore>,
    sales: Arc<SaleStore>,
}

impl Persistence {
    /// Wire all repositories to the given gateway
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self {
            users: Arc::new(UserStore::new(gateway.clone())),
            products: Arc::new(ProductStore::new(gateway.clone())),
            customers: Arc::new(CustomerStore::new(gateway.clone())),
            sales: Arc::new(SaleStore::new(gateway)),
        }
    }
}

impl Repositories for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.users.clone()
    }

    fn products(&self) -> Arc<dyn ProductRepository> {
        self.products.clone()
    }

    fn customers(&self) -> Arc<dyn CustomerRepository> {
        self.customers.clone()
    }

    fn sales(&self) -> Arc<dyn SaleRepository> {
        self.sales.clone()
    }
}
