pub mod catalog;
pub mod entities;

pub use catalog::Catalog;
pub use entities::{Customer, CustomerBuilder, Order, Product, Supplier};
