pub mod customer;
pub mod order;
pub mod product;
pub mod supplier;

pub use customer::{Customer, CustomerBuilder};
pub use order::Order;
pub use product::Product;
pub use supplier::Supplier;
