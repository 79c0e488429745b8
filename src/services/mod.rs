//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and the repositories to fulfill
//! application use cases, and are where every capability check
//! happens. They depend on abstractions (traits) for dependency
//! inversion.

mod auth_service;
pub mod container;
mod customer_service;
mod product_service;
mod report_service;
mod sales_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use auth_service::{AuthService, Authenticator, SessionState};
pub use customer_service::{CustomerManager, CustomerService};
pub use product_service::{ProductManager, ProductService};
pub use report_service::{Dashboard, ReportDesk, ReportService};
pub use sales_service::{SalesDesk, SalesService};

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
