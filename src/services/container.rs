//! Service Container - Centralized service access.
//!
//! Wires the repository set to every application service and hands
//! the UI layer one object to hold.

use std::sync::Arc;

use super::{
    AuthService, Authenticator, CustomerManager, CustomerService, ProductManager, ProductService,
    ReportDesk, ReportService, SalesDesk, SalesService,
};
use crate::infra::store::Gateway;
use crate::infra::Persistence;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get product service
    fn products(&self) -> Arc<dyn ProductService>;

    /// Get customer service
    fn customers(&self) -> Arc<dyn CustomerService>;

    /// Get sales service
    fn sales(&self) -> Arc<dyn SalesService>;

    /// Get reporting service
    fn reports(&self) -> Arc<dyn ReportService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    product_service: Arc<dyn ProductService>,
    customer_service: Arc<dyn CustomerService>,
    sales_service: Arc<dyn SalesService>,
    report_service: Arc<dyn ReportService>,
}

impl Services {
    /// Create a new service container from already-built services
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        product_service: Arc<dyn ProductService>,
        customer_service: Arc<dyn CustomerService>,
        sales_service: Arc<dyn SalesService>,
        report_service: Arc<dyn ReportService>,
    ) -> Self {
        Self {
            auth_service,
            product_service,
            customer_service,
            sales_service,
            report_service,
        }
    }

    /// Create the full service container over a store gateway
    pub fn from_gateway(gateway: Arc<Gateway>) -> Self {
        let repos = Arc::new(Persistence::new(gateway));

        Self {
            auth_service: Arc::new(Authenticator::new(repos.clone())),
            product_service: Arc::new(ProductManager::new(repos.clone())),
            customer_service: Arc::new(CustomerManager::new(repos.clone())),
            sales_service: Arc::new(SalesDesk::new(repos.clone())),
            report_service: Arc::new(ReportDesk::new(repos)),
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn products(&self) -> Arc<dyn ProductService> {
        self.product_service.clone()
    }

    fn customers(&self) -> Arc<dyn CustomerService> {
        self.customer_service.clone()
    }

    fn sales(&self) -> Arc<dyn SalesService> {
        self.sales_service.clone()
    }

    fn reports(&self) -> Arc<dyn ReportService> {
        self.report_service.clone()
    }
}
