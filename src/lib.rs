//! Salesdesk - role-gated sales management core
//!
//! Authenticates users against a document store, gates catalog and
//! sales operations on role capabilities, records sales with
//! denormalized name snapshots and best-effort stock decrements, and
//! derives aggregate reports. The UI layer sits on top of the service
//! container; rendering and input widgets are not this crate's
//! concern.
//!
//! # Architecture Layers
//!
//! - **config**: Store settings and application constants
//! - **domain**: Core business entities, DTOs, roles and capabilities
//! - **services**: Application use cases and authorization gates
//! - **infra**: Document store gateway and repositories
//! - **errors**: Centralized error handling
//!
//! # Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use salesdesk::{Gateway, Role, Services, ServiceContainer, SessionState};
//!
//! # async fn run() -> salesdesk::AppResult<()> {
//! let services = Arc::new(Services::from_gateway(Gateway::shared()));
//!
//! let mut state = SessionState::new();
//! state
//!     .login(services.auth().as_ref(), "admin", "adminpass123", Role::Admin)
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use config::StoreConfig;
pub use domain::{
    Capability, CreateUser, Customer, CustomerPatch, NewCustomer, NewProduct, Password, Product,
    ProductPatch, Role, Sale, SaleDraft, SaleInput, SaleReceipt, Session, User, UserView,
};
pub use errors::{AppError, AppResult};
pub use infra::{DocId, Gateway, Persistence, Repositories};
pub use services::{ServiceContainer, Services, SessionState};
