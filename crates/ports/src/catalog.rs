// crates/ports/src/catalog.rs
use chrono::NaiveDateTime;
use northwind_shared_kernel::{Money, Result};
use serde::{Deserialize, Serialize};

/// Order as supplied by a catalogue source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDto {
    pub order_date: NaiveDateTime,
    pub total: Money,
}

/// Customer as supplied by a catalogue source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDto {
    pub company_name: String,
    pub country: String,
    pub city: String,
    #[serde(default)]
    pub region: Option<String>,
    pub postal_code: String,
    pub phone: String,
    #[serde(default)]
    pub orders: Vec<OrderDto>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierDto {
    pub country: String,
    pub city: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDto {
    pub category: String,
    pub units_in_stock: u32,
    pub unit_price: Money,
}

/// The three input collections, exactly as loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDto {
    #[serde(default)]
    pub customers: Vec<CustomerDto>,
    #[serde(default)]
    pub suppliers: Vec<SupplierDto>,
    #[serde(default)]
    pub products: Vec<ProductDto>,
}

/// Port for loading the catalogue.
pub trait CatalogSource: Send + Sync {
    fn load(&self) -> Result<CatalogDto>;
}
