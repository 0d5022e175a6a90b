use super::entities::{Customer, Product, Supplier};

/// The three read-only collections every query runs against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub customers: Vec<Customer>,
    pub suppliers: Vec<Supplier>,
    pub products: Vec<Product>,
}

impl Catalog {
    pub fn new(customers: Vec<Customer>, suppliers: Vec<Supplier>, products: Vec<Product>) -> Self {
        Self { customers, suppliers, products }
    }

    pub fn order_count(&self) -> usize {
        self.customers.iter().map(Customer::order_count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty() && self.suppliers.is_empty() && self.products.is_empty()
    }
}
