//! Centralized error handling.
//!
//! Provides a unified error type for the entire application. Validation
//! errors are surfaced to the caller before any write occurs; the sole
//! exception is the stock-decrement step of sale recording, which is
//! reported on the receipt instead of failing the operation.

use serde::Serialize;
use thiserror::Error;
use validator::Validate;

use crate::domain::Role;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Authentication & Authorization
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Credentials were valid but the account is not registered under the
    /// claimed role. Deliberately distinct from `InvalidCredentials`.
    #[error("User exists but is not a {claimed}")]
    RoleMismatch { claimed: Role },

    #[error("Access denied")]
    Forbidden,

    // Resource errors
    #[error("Resource not found")]
    NotFound,

    #[error("Username '{0}' already exists")]
    DuplicateUsername(String),

    /// A sale referenced a product or customer that does not resolve.
    #[error("Sale references a missing {0}")]
    InvalidReference(&'static str),

    // Validation
    #[error("{0}")]
    Validation(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // Backing store
    #[error("Store error: {0}")]
    Store(String),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Error payload for the UI boundary
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

impl AppError {
    /// Get error code for the caller
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidCredentials => "INVALID_CREDENTIALS",
            AppError::RoleMismatch { .. } => "ROLE_MISMATCH",
            AppError::Forbidden => "FORBIDDEN",
            AppError::NotFound => "NOT_FOUND",
            AppError::DuplicateUsername(_) => "DUPLICATE_USERNAME",
            AppError::InvalidReference(_) => "INVALID_REFERENCE",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::Store(_) => "STORE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            // Hide details for internal/store errors
            AppError::Store(e) => {
                tracing::error!("Store error: {}", e);
                "A storage error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }

            // Show full message for client errors
            _ => self.to_string(),
        }
    }

    /// Build the serializable error body for the UI boundary
    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            code: self.code().to_string(),
            message: self.user_message(),
        }
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

/// Convenience constructors
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        AppError::InvalidInput(msg.into())
    }

    pub fn store(msg: impl Into<String>) -> Self {
        AppError::Store(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

/// Run `validator` checks on a DTO and map failures to a single
/// `Validation` error with a user-friendly message.
pub fn validate_dto<T: Validate>(dto: &T) -> AppResult<()> {
    dto.validate()
        .map_err(|e| AppError::validation(format_validation_errors(&e)))
}

/// Format validation errors into a user-friendly string
fn format_validation_errors(errors: &validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}
