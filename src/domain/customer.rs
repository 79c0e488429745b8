//! Customer domain entity and its create/patch types.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::infra::store::DocId;

/// Customer domain entity. Email is not required to be unique.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: DocId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub notes: String,
}

/// Customer creation data transfer object. Only the name is
/// required; the derived default leaves every field empty.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct NewCustomer {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub notes: String,
}

/// Partial update for a customer; `None` fields are untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl CustomerPatch {
    /// True when no field would be changed.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none() && self.notes.is_none()
    }
}
