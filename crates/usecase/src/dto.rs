use northwind_domain::{
    analytics::{CategoryGroup, CityProfile, CustomerFirstOrder, LocalSuppliers, PriceTierBucket},
    model::Customer,
    options::QueryKind,
};
use serde::Serialize;

/// Result of a single query, borrowing from the catalogue it ran against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QueryResult<'a> {
    Customers(Vec<&'a Customer>),
    LocalSuppliers(Vec<LocalSuppliers<'a>>),
    FirstOrders(Vec<CustomerFirstOrder<'a>>),
    ProductGroups(Vec<CategoryGroup<'a>>),
    PriceTiers([PriceTierBucket<'a>; 3]),
    CityProfiles(Vec<CityProfile<'a>>),
    Summary(String),
}

impl QueryResult<'_> {
    /// Number of top-level rows; a summary string counts as one.
    pub fn len(&self) -> usize {
        match self {
            Self::Customers(rows) => rows.len(),
            Self::LocalSuppliers(rows) => rows.len(),
            Self::FirstOrders(rows) => rows.len(),
            Self::ProductGroups(rows) => rows.len(),
            Self::PriceTiers(rows) => rows.len(),
            Self::CityProfiles(rows) => rows.len(),
            Self::Summary(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One titled block of report output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportSection<'a> {
    pub query: QueryKind,
    pub result: QueryResult<'a>,
}
