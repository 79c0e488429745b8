//! Customer repository. Structurally the same contract as products.

use std::sync::Arc;

use async_trait::async_trait;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use super::records::{decode, encode, CustomerRecord};
use crate::domain::{Customer, CustomerPatch, NewCustomer};
use crate::errors::{AppError, AppResult};
use crate::infra::store::{DocId, Gateway};

/// Customer repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// List all customers, in store-default order
    async fn list(&self) -> AppResult<Vec<Customer>>;

    /// Find a customer by id
    async fn find(&self, id: &DocId) -> AppResult<Option<Customer>>;

    /// Insert a new customer and return it with its generated id
    async fn insert(&self, new: NewCustomer) -> AppResult<Customer>;

    /// Merge patch fields into an existing customer; `NotFound` when
    /// the id does not resolve
    async fn update(&self, id: &DocId, patch: CustomerPatch) -> AppResult<Customer>;

    /// Delete a customer; a missing id is a silent no-op. Sales
    /// referencing the customer are left dangling; there is no
    /// cascade.
    async fn delete(&self, id: &DocId) -> AppResult<()>;
}

/// Document-store backed customer repository.
pub struct CustomerStore {
    gateway: Arc<Gateway>,
}

impl CustomerStore {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl CustomerRepository for CustomerStore {
    async fn list(&self) -> AppResult<Vec<Customer>> {
        let coll = self.gateway.customers();
        coll.find_all()?
            .into_iter()
            .map(|(id, doc)| Ok(decode::<CustomerRecord>(coll.name(), id, doc)?.into_customer(id)))
            .collect()
    }

    async fn find(&self, id: &DocId) -> AppResult<Option<Customer>> {
        let coll = self.gateway.customers();
        match coll.find(id)? {
            Some(doc) => {
                Ok(Some(decode::<CustomerRecord>(coll.name(), *id, doc)?.into_customer(*id)))
            }
            None => Ok(None),
        }
    }

    async fn insert(&self, new: NewCustomer) -> AppResult<Customer> {
        let record = CustomerRecord::from(new);
        let id = self.gateway.customers().insert(encode(&record)?)?;
        Ok(record.into_customer(id))
    }

    async fn update(&self, id: &DocId, patch: CustomerPatch) -> AppResult<Customer> {
        self.gateway.customers().set(id, encode(&patch)?)?;
        self.find(id).await?.ok_or(AppError::NotFound)
    }

    async fn delete(&self, id: &DocId) -> AppResult<()> {
        self.gateway.customers().delete(id)
    }
}
