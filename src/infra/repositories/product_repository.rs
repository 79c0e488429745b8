//! Product repository.

use std::sync::Arc;

use async_trait::async_trait;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use super::records::{decode, encode, ProductRecord};
use crate::domain::{NewProduct, Product, ProductPatch};
use crate::errors::{AppError, AppResult};
use crate::infra::store::{DocId, Gateway};

/// Product repository trait for dependency injection.
///
/// SKU uniqueness is intended but not enforced here; delete performs
/// no referential-integrity check against sales.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// List all products, in store-default order
    async fn list(&self) -> AppResult<Vec<Product>>;

    /// Find a product by id
    async fn find(&self, id: &DocId) -> AppResult<Option<Product>>;

    /// Insert a new product and return it with its generated id
    async fn insert(&self, new: NewProduct) -> AppResult<Product>;

    /// Merge patch fields into an existing product; `NotFound` when
    /// the id does not resolve
    async fn update(&self, id: &DocId, patch: ProductPatch) -> AppResult<Product>;

    /// Delete a product; a missing id is a silent no-op
    async fn delete(&self, id: &DocId) -> AppResult<()>;

    /// Atomically add `delta` to the product's stock. Stock has no
    /// floor and may go negative.
    async fn adjust_stock(&self, id: &DocId, delta: i64) -> AppResult<()>;
}

/// Document-store backed product repository.
pub struct ProductStore {
    gateway: Arc<Gateway>,
}

impl ProductStore {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl ProductRepository for ProductStore {
    async fn list(&self) -> AppResult<Vec<Product>> {
        let coll = self.gateway.products();
        coll.find_all()?
            .into_iter()
            .map(|(id, doc)| Ok(decode::<ProductRecord>(coll.name(), id, doc)?.into_product(id)))
            .collect()
    }

    async fn find(&self, id: &DocId) -> AppResult<Option<Product>> {
        let coll = self.gateway.products();
        match coll.find(id)? {
            Some(doc) => Ok(Some(decode::<ProductRecord>(coll.name(), *id, doc)?.into_product(*id))),
            None => Ok(None),
        }
    }

    async fn insert(&self, new: NewProduct) -> AppResult<Product> {
        let record = ProductRecord::from(new);
        let id = self.gateway.products().insert(encode(&record)?)?;
        Ok(record.into_product(id))
    }

    async fn update(&self, id: &DocId, patch: ProductPatch) -> AppResult<Product> {
        self.gateway.products().set(id, encode(&patch)?)?;
        self.find(id).await?.ok_or(AppError::NotFound)
    }

    async fn delete(&self, id: &DocId) -> AppResult<()> {
        self.gateway.products().delete(id)
    }

    async fn adjust_stock(&self, id: &DocId, delta: i64) -> AppResult<()> {
        self.gateway.products().incr(id, "stock", delta)
    }
}
