//! Product domain entity and its create/patch types.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::infra::store::DocId;

/// Product domain entity.
///
/// SKU is intended to be unique but the store does not enforce it.
/// Stock is an integer with no floor: sale recording may drive it
/// negative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: DocId,
    pub name: String,
    pub sku: String,
    pub price: f64,
    pub stock: i64,
    pub description: String,
}

/// Product creation data transfer object
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct NewProduct {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "SKU is required"))]
    pub sku: String,
    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,
    pub stock: i64,
    #[serde(default)]
    pub description: String,
}

/// Partial update for a product. Only the listed fields may be
/// mutated; fields left as `None` are untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ProductPatch {
    /// True when no field would be changed.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.sku.is_none()
            && self.price.is_none()
            && self.stock.is_none()
            && self.description.is_none()
    }
}
