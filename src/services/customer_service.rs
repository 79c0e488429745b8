//! Customer service - catalog CRUD gated on `ManageCatalog`.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Capability, Customer, CustomerPatch, NewCustomer, Session};
use crate::errors::{validate_dto, AppError, AppResult};
use crate::infra::store::DocId;
use crate::infra::Repositories;

/// Customer service trait for dependency injection.
#[async_trait]
pub trait CustomerService: Send + Sync {
    /// List all customers
    async fn list(&self, session: &Session) -> AppResult<Vec<Customer>>;

    /// Get a customer by boundary id; `NotFound` when it does not resolve
    async fn get(&self, session: &Session, id: &str) -> AppResult<Customer>;

    /// Create a customer (name required; email and phone optional)
    async fn create(&self, session: &Session, new: NewCustomer) -> AppResult<Customer>;

    /// Merge a partial update into a customer
    async fn update(
        &self,
        session: &Session,
        id: &str,
        patch: CustomerPatch,
    ) -> AppResult<Customer>;

    /// Delete a customer. Deleting an id that does not resolve is a
    /// no-op; sales referencing the customer keep their snapshots.
    async fn delete(&self, session: &Session, id: &str) -> AppResult<()>;
}

/// Concrete implementation of CustomerService.
pub struct CustomerManager<R: Repositories> {
    repos: Arc<R>,
}

impl<R: Repositories> CustomerManager<R> {
    /// Create new customer service instance
    pub fn new(repos: Arc<R>) -> Self {
        Self { repos }
    }
}

#[async_trait]
impl<R: Repositories> CustomerService for CustomerManager<R> {
    async fn list(&self, session: &Session) -> AppResult<Vec<Customer>> {
        session.require(Capability::ManageCatalog)?;
        self.repos.customers().list().await
    }

    async fn get(&self, session: &Session, id: &str) -> AppResult<Customer> {
        session.require(Capability::ManageCatalog)?;
        let id = DocId::parse(id)?;
        self.repos
            .customers()
            .find(&id)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn create(&self, session: &Session, new: NewCustomer) -> AppResult<Customer> {
        session.require(Capability::ManageCatalog)?;
        validate_dto(&new)?;
        let customer = self.repos.customers().insert(new).await?;
        tracing::info!(id = %customer.id, "customer created");
        Ok(customer)
    }

    async fn update(
        &self,
        session: &Session,
        id: &str,
        patch: CustomerPatch,
    ) -> AppResult<Customer> {
        session.require(Capability::ManageCatalog)?;
        let id = DocId::parse(id)?;
        self.repos.customers().update(&id, patch).await
    }

    async fn delete(&self, session: &Session, id: &str) -> AppResult<()> {
        session.require(Capability::ManageCatalog)?;
        let id = DocId::parse(id)?;
        self.repos.customers().delete(&id).await
    }
}
