//! Infrastructure layer - External systems integration
//!
//! This module owns the document store gateway and the repositories
//! built on top of it.

pub mod repositories;
pub mod store;

pub use repositories::{
    CustomerRepository, CustomerStore, Persistence, ProductRepository, ProductStore, Repositories,
    SaleRepository, SaleStore, UserRepository, UserStore,
};
pub use store::{Collection, DocId, Gateway};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{
    MockCustomerRepository, MockProductRepository, MockSaleRepository, MockUserRepository,
};
