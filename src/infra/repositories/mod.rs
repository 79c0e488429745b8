//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over the document store,
//! following the Repository pattern for clean separation of concerns.

mod customer_repository;
mod persistence;
mod product_repository;
mod records;
mod sale_repository;
mod user_repository;

pub use customer_repository::{CustomerRepository, CustomerStore};
pub use persistence::{Persistence, Repositories};
pub use product_repository::{ProductRepository, ProductStore};
pub use sale_repository::{SaleRepository, SaleStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use customer_repository::MockCustomerRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use product_repository::MockProductRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use sale_repository::MockSaleRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
