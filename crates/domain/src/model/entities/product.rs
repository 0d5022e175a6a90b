use northwind_shared_kernel::Money;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub category: String,
    pub units_in_stock: u32,
    pub unit_price: Money,
}

impl Product {
    pub fn new(category: impl Into<String>, units_in_stock: u32, unit_price: Money) -> Self {
        Self { category: category.into(), units_in_stock, unit_price }
    }
}
