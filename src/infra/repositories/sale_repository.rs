//! Sale repository.
//!
//! Sales are append-only: there is deliberately no update or delete
//! here, matching the absence of any reversal operation in the
//! application.

use std::sync::Arc;

use async_trait::async_trait;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use super::records::{decode, encode, SaleRecord};
use crate::domain::{NewSale, Sale};
use crate::errors::AppResult;
use crate::infra::store::Gateway;

/// Sale repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait SaleRepository: Send + Sync {
    /// List all sales, in store-default order
    async fn list(&self) -> AppResult<Vec<Sale>>;

    /// Persist a new sale document and return it with its generated id
    async fn insert(&self, new: NewSale) -> AppResult<Sale>;
}

/// Document-store backed sale repository.
pub struct SaleStore {
    gateway: Arc<Gateway>,
}

impl SaleStore {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl SaleRepository for SaleStore {
    async fn list(&self) -> AppResult<Vec<Sale>> {
        let coll = self.gateway.sales();
        coll.find_all()?
            .into_iter()
            .map(|(id, doc)| Ok(decode::<SaleRecord>(coll.name(), id, doc)?.into_sale(id)))
            .collect()
    }

    async fn insert(&self, new: NewSale) -> AppResult<Sale> {
        let record = SaleRecord::from(new);
        let id = self.gateway.sales().insert(encode(&record)?)?;
        Ok(record.into_sale(id))
    }
}
