//! Read-only report queries over the catalogue.
//!
//! Every query is an associated function of [`QueryEngine`]. Results borrow
//! from the input slices and preserve input order unless a query states an
//! explicit ordering.

pub mod anomalies;
pub mod cities;
pub mod countries;
pub mod first_order;
pub mod grouping;
pub mod products;
pub mod sort;
pub mod suppliers;
pub mod turnover;

pub use anomalies::Anomaly;
pub use cities::CityProfile;
pub use first_order::CustomerFirstOrder;
pub use grouping::{Group, group_by_first_appearance};
pub use products::{CategoryGroup, PriceTierBucket, StockGroup};
pub use sort::{CustomerSortKey, SortOrder, SortSpec, SortStrategy};
pub use suppliers::LocalSuppliers;

/// Stateless entry point for the report queries.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryEngine;
