//! Sale domain entity and the types feeding the recording workflow.
//!
//! A sale is immutable once created; there is no update, delete, or
//! reversal operation anywhere in the application. `product_name` and
//! `customer_name` are snapshots taken when the sale is recorded and
//! deliberately do not track later renames.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};
use crate::infra::store::DocId;

/// Sale domain entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sale {
    pub id: DocId,
    pub product_id: DocId,
    /// Product name as it read when the sale was recorded.
    pub product_name: String,
    pub customer_id: DocId,
    /// Customer name as it read when the sale was recorded.
    pub customer_name: String,
    pub quantity: i64,
    /// Caller-supplied unit price; independent of the product's
    /// current stored price.
    pub unit_price: f64,
    /// Always `quantity * unit_price` at recording time.
    pub total: f64,
    pub date: DateTime<Utc>,
}

/// Validated input to the sale recording workflow.
#[derive(Debug, Clone)]
pub struct SaleDraft {
    pub product_id: DocId,
    pub customer_id: DocId,
    pub quantity: i64,
    pub unit_price: f64,
    /// Defaults to the current UTC timestamp when `None`.
    pub date: Option<DateTime<Utc>>,
}

/// Raw sale input as received from the UI layer: ids and numbers
/// arrive as strings and are coerced here, before any write occurs.
#[derive(Debug, Clone, Deserialize)]
pub struct SaleInput {
    pub product_id: String,
    pub customer_id: String,
    pub quantity: String,
    pub unit_price: String,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

impl SaleInput {
    /// Coerce the raw fields into a `SaleDraft`.
    ///
    /// Non-numeric quantity or price, a non-positive quantity, a
    /// negative price, or a malformed id all fail with `InvalidInput`.
    pub fn parse(&self) -> AppResult<SaleDraft> {
        let product_id = DocId::parse(self.product_id.trim())?;
        let customer_id = DocId::parse(self.customer_id.trim())?;

        let quantity: i64 = self
            .quantity
            .trim()
            .parse()
            .map_err(|_| AppError::invalid_input("Quantity must be a whole number"))?;
        if quantity <= 0 {
            return Err(AppError::invalid_input("Quantity must be positive"));
        }

        let unit_price: f64 = self
            .unit_price
            .trim()
            .parse()
            .map_err(|_| AppError::invalid_input("Unit price must be a number"))?;
        if !unit_price.is_finite() || unit_price < 0.0 {
            return Err(AppError::invalid_input("Unit price must not be negative"));
        }

        Ok(SaleDraft {
            product_id,
            customer_id,
            quantity,
            unit_price,
            date: self.date,
        })
    }
}

/// Fields persisted for a new sale; the workflow fills the snapshots
/// and the computed total.
#[derive(Debug, Clone)]
pub struct NewSale {
    pub product_id: DocId,
    pub product_name: String,
    pub customer_id: DocId,
    pub customer_name: String,
    pub quantity: i64,
    pub unit_price: f64,
    pub total: f64,
    pub date: DateTime<Utc>,
}

/// Outcome of the sale recording workflow.
///
/// The workflow guarantees at least one side effect, not
/// all-or-nothing: when the stock decrement fails the sale still
/// stands, and the failure is reported here instead of being raised.
#[derive(Debug, Clone)]
pub struct SaleReceipt {
    pub sale_id: DocId,
    pub total: f64,
    /// False when the best-effort stock decrement did not happen.
    pub stock_adjusted: bool,
    /// Description of the decrement failure, when there was one.
    pub stock_error: Option<String>,
}
