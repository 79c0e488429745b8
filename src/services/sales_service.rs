//! Sale transaction workflow.
//!
//! The one multi-entity, multi-step operation in the system: validate
//! references, compute the total from the caller-supplied unit price,
//! persist the sale with name snapshots, then decrement stock
//! best-effort. The two writes are independent documents with no
//! cross-document transaction; the contract is at-least-one-side-
//! effect, not all-or-nothing. A sale that persisted never fails
//! because the stock decrement did.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{Capability, NewSale, Sale, SaleDraft, SaleReceipt, Session};
use crate::errors::{AppError, AppResult};
use crate::infra::Repositories;

/// Sales service trait for dependency injection.
#[async_trait]
pub trait SalesService: Send + Sync {
    /// Record a sale.
    ///
    /// Validation errors (`InvalidInput`, `InvalidReference`) are
    /// returned before anything is written. A stock-decrement failure
    /// after the sale insert is reported on the receipt and logged,
    /// never raised.
    async fn record_sale(&self, session: &Session, draft: SaleDraft) -> AppResult<SaleReceipt>;

    /// List all recorded sales
    async fn list_sales(&self, session: &Session) -> AppResult<Vec<Sale>>;
}

/// Concrete implementation of SalesService.
pub struct SalesDesk<R: Repositories> {
    repos: Arc<R>,
}

impl<R: Repositories> SalesDesk<R> {
    /// Create new sales service instance
    pub fn new(repos: Arc<R>) -> Self {
        Self { repos }
    }
}

#[async_trait]
impl<R: Repositories> SalesService for SalesDesk<R> {
    async fn record_sale(&self, session: &Session, draft: SaleDraft) -> AppResult<SaleReceipt> {
        session.require(Capability::RecordSales)?;

        // SaleInput::parse already enforces these for UI input; drafts
        // built in code get the same checks.
        if draft.quantity <= 0 {
            return Err(AppError::invalid_input("Quantity must be positive"));
        }
        if !draft.unit_price.is_finite() || draft.unit_price < 0.0 {
            return Err(AppError::invalid_input("Unit price must not be negative"));
        }

        // Resolve both references before any write
        let product = self
            .repos
            .products()
            .find(&draft.product_id)
            .await?
            .ok_or(AppError::InvalidReference("product"))?;
        let customer = self
            .repos
            .customers()
            .find(&draft.customer_id)
            .await?
            .ok_or(AppError::InvalidReference("customer"))?;

        // Total uses the caller-supplied unit price, which the UI may
        // have overridden; it is never recomputed from product.price.
        let total = draft.quantity as f64 * draft.unit_price;
        let date = draft.date.unwrap_or_else(Utc::now);

        let sale = self
            .repos
            .sales()
            .insert(NewSale {
                product_id: product.id,
                product_name: product.name.clone(),
                customer_id: customer.id,
                customer_name: customer.name.clone(),
                quantity: draft.quantity,
                unit_price: draft.unit_price,
                total,
                date,
            })
            .await?;

        // Best-effort stock decrement: the sale record takes priority
        // over inventory accuracy. The failure is surfaced on the
        // receipt instead of being discarded.
        let (stock_adjusted, stock_error) = match self
            .repos
            .products()
            .adjust_stock(&draft.product_id, -draft.quantity)
            .await
        {
            Ok(()) => (true, None),
            Err(e) => {
                tracing::warn!(
                    sale_id = %sale.id,
                    product_id = %draft.product_id,
                    error = %e,
                    "sale recorded but stock decrement failed"
                );
                (false, Some(e.to_string()))
            }
        };

        tracing::info!(
            sale_id = %sale.id,
            seller = %session.user_id(),
            product = %sale.product_name,
            customer = %sale.customer_name,
            total,
            "sale recorded"
        );

        Ok(SaleReceipt {
            sale_id: sale.id,
            total,
            stock_adjusted,
            stock_error,
        })
    }

    async fn list_sales(&self, session: &Session) -> AppResult<Vec<Sale>> {
        session.require(Capability::RecordSales)?;
        self.repos.sales().list().await
    }
}
