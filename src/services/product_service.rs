//! Product service - catalog CRUD gated on `ManageCatalog`.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Capability, NewProduct, Product, ProductPatch, Session};
use crate::errors::{validate_dto, AppError, AppResult};
use crate::infra::store::DocId;
use crate::infra::Repositories;

/// Product service trait for dependency injection.
///
/// Ids cross this boundary as strings and are parsed here; malformed
/// ids fail with `InvalidInput` before any store access.
#[async_trait]
pub trait ProductService: Send + Sync {
    /// List all products
    async fn list(&self, session: &Session) -> AppResult<Vec<Product>>;

    /// Get a product by boundary id; `NotFound` when it does not resolve
    async fn get(&self, session: &Session, id: &str) -> AppResult<Product>;

    /// Create a product (name and SKU required, price non-negative)
    async fn create(&self, session: &Session, new: NewProduct) -> AppResult<Product>;

    /// Merge a partial update into a product
    async fn update(&self, session: &Session, id: &str, patch: ProductPatch)
        -> AppResult<Product>;

    /// Delete a product. Deleting an id that does not resolve is a
    /// no-op; sales referencing the product keep their snapshots.
    async fn delete(&self, session: &Session, id: &str) -> AppResult<()>;
}

/// Concrete implementation of ProductService.
pub struct ProductManager<R: Repositories> {
    repos: Arc<R>,
}

impl<R: Repositories> ProductManager<R> {
    /// Create new product service instance
    pub fn new(repos: Arc<R>) -> Self {
        Self { repos }
    }
}

#[async_trait]
impl<R: Repositories> ProductService for ProductManager<R> {
    async fn list(&self, session: &Session) -> AppResult<Vec<Product>> {
        session.require(Capability::ManageCatalog)?;
        self.repos.products().list().await
    }

    async fn get(&self, session: &Session, id: &str) -> AppResult<Product> {
        session.require(Capability::ManageCatalog)?;
        let id = DocId::parse(id)?;
        self.repos
            .products()
            .find(&id)
            .await?
            .ok_or(AppError::NotFound)
    }

    async fn create(&self, session: &Session, new: NewProduct) -> AppResult<Product> {
        session.require(Capability::ManageCatalog)?;
        validate_dto(&new)?;
        let product = self.repos.products().insert(new).await?;
        tracing::info!(id = %product.id, sku = %product.sku, "product created");
        Ok(product)
    }

    async fn update(
        &self,
        session: &Session,
        id: &str,
        patch: ProductPatch,
    ) -> AppResult<Product> {
        session.require(Capability::ManageCatalog)?;
        let id = DocId::parse(id)?;
        if let Some(price) = patch.price {
            if !price.is_finite() || price < 0.0 {
                return Err(AppError::validation("Price must not be negative"));
            }
        }
        self.repos.products().update(&id, patch).await
    }

    async fn delete(&self, session: &Session, id: &str) -> AppResult<()> {
        session.require(Capability::ManageCatalog)?;
        let id = DocId::parse(id)?;
        self.repos.products().delete(&id).await
    }
}
