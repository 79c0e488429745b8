//! Stored document shapes.
//!
//! These are store-specific records separate from domain models: the
//! document holds everything except the id, which is the collection
//! key. Decoding a malformed document is a store error, not a caller
//! error.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{
    Customer, NewCustomer, NewProduct, NewSale, Product, Role, Sale, User,
};
use crate::errors::{AppError, AppResult};
use crate::infra::store::DocId;

/// Decode a raw document into a typed record.
pub(crate) fn decode<T: DeserializeOwned>(collection: &str, id: DocId, doc: Value) -> AppResult<T> {
    serde_json::from_value(doc).map_err(|e| {
        AppError::store(format!(
            "malformed document {} in collection '{}': {}",
            id, collection, e
        ))
    })
}

/// Encode a record into a raw document.
pub(crate) fn encode<T: Serialize>(record: &T) -> AppResult<Value> {
    serde_json::to_value(record)
        .map_err(|e| AppError::store(format!("failed to encode document: {}", e)))
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct UserRecord {
    pub name: String,
    pub username: String,
    pub password_hash: String,
    pub role: Role,
}

impl UserRecord {
    pub fn into_user(self, id: DocId) -> User {
        User {
            id,
            name: self.name,
            username: self.username,
            password_hash: self.password_hash,
            role: self.role,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct ProductRecord {
    pub name: String,
    pub sku: String,
    pub price: f64,
    pub stock: i64,
    #[serde(default)]
    pub description: String,
}

impl ProductRecord {
    pub fn into_product(self, id: DocId) -> Product {
        Product {
            id,
            name: self.name,
            sku: self.sku,
            price: self.price,
            stock: self.stock,
            description: self.description,
        }
    }
}

impl From<NewProduct> for ProductRecord {
    fn from(new: NewProduct) -> Self {
        Self {
            name: new.name,
            sku: new.sku,
            price: new.price,
            stock: new.stock,
            description: new.description,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct CustomerRecord {
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub notes: String,
}

impl CustomerRecord {
    pub fn into_customer(self, id: DocId) -> Customer {
        Customer {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            notes: self.notes,
        }
    }
}

impl From<NewCustomer> for CustomerRecord {
    fn from(new: NewCustomer) -> Self {
        Self {
            name: new.name,
            email: new.email,
            phone: new.phone,
            notes: new.notes,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct SaleRecord {
    pub product_id: DocId,
    pub product_name: String,
    pub customer_id: DocId,
    pub customer_name: String,
    pub quantity: i64,
    pub unit_price: f64,
    pub total: f64,
    pub date: DateTime<Utc>,
}

impl SaleRecord {
    pub fn into_sale(self, id: DocId) -> Sale {
        Sale {
            id,
            product_id: self.product_id,
            product_name: self.product_name,
            customer_id: self.customer_id,
            customer_name: self.customer_name,
            quantity: self.quantity,
            unit_price: self.unit_price,
            total: self.total,
            date: self.date,
        }
    }
}

impl From<NewSale> for SaleRecord {
    fn from(new: NewSale) -> Self {
        Self {
            product_id: new.product_id,
            product_name: new.product_name,
            customer_id: new.customer_id,
            customer_name: new.customer_name,
            quantity: new.quantity,
            unit_price: new.unit_price,
            total: new.total,
            date: new.date,
        }
    }
}
