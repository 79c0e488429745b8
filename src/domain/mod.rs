//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns:
//! entities, their create/patch DTOs, the password value object,
//! and the role/capability model.

pub mod customer;
pub mod password;
pub mod product;
pub mod sale;
pub mod session;
pub mod user;

pub use customer::{Customer, CustomerPatch, NewCustomer};
pub use password::Password;
pub use product::{NewProduct, Product, ProductPatch};
pub use sale::{NewSale, Sale, SaleDraft, SaleInput, SaleReceipt};
pub use session::Session;
pub use user::{Capability, CreateUser, Role, User, UserView};
