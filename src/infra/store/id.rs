//! Opaque generated document identifiers.
//!
//! The store keys documents by a native id type; callers outside the
//! infrastructure layer see ids as strings. The two representations
//! round-trip exactly, including reference fields persisted inside
//! sale documents.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;

/// Generated identifier for a stored document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocId(Uuid);

impl DocId {
    /// Generate a fresh identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an id received at the application boundary.
    ///
    /// Malformed strings are rejected as `InvalidInput`, mirroring how
    /// a native driver rejects a malformed object id before any lookup.
    pub fn parse(s: &str) -> Result<Self, AppError> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| AppError::invalid_input(format!("'{}' is not a valid id", s)))
    }
}

impl Default for DocId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for DocId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
