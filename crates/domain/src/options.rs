// crates/domain/src/options.rs
use std::{fmt, str::FromStr};

use northwind_shared_kernel::DomainError;
use serde::{Serialize, Serializer};

/// Runnable report queries, in catalogue order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKind {
    /// Customers whose turnover exceeds the limit.
    TurnoverAbove,
    /// Customers paired with suppliers in the same country and city (nested filter).
    LocalSuppliers,
    /// Same pairing computed through a grouped join.
    LocalSuppliersGrouped,
    /// Customers with orders and the date of their first order.
    FirstOrderDates,
    /// Turnover-filtered customers ranked by first order, turnover and name.
    RankedByTurnover,
    /// All customers with orders, ranked like [`QueryKind::RankedByTurnover`].
    RankedCustomers,
    /// Customers with a suspicious postal code, region or phone number.
    AnomalousCustomers,
    /// Products grouped by category, then by units in stock.
    ProductsByCategory,
    /// Products bucketed into cheap / middle / expensive tiers.
    PriceTiers,
    /// Per-city average turnover and average order count.
    CityProfiles,
    /// Distinct supplier countries concatenated by length, then name.
    SupplierCountries,
}

impl QueryKind {
    pub const ALL: [Self; 11] = [
        Self::TurnoverAbove,
        Self::LocalSuppliers,
        Self::LocalSuppliersGrouped,
        Self::FirstOrderDates,
        Self::RankedByTurnover,
        Self::RankedCustomers,
        Self::AnomalousCustomers,
        Self::ProductsByCategory,
        Self::PriceTiers,
        Self::CityProfiles,
        Self::SupplierCountries,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::TurnoverAbove => "turnover-above",
            Self::LocalSuppliers => "local-suppliers",
            Self::LocalSuppliersGrouped => "local-suppliers-grouped",
            Self::FirstOrderDates => "first-order-dates",
            Self::RankedByTurnover => "ranked-by-turnover",
            Self::RankedCustomers => "ranked-customers",
            Self::AnomalousCustomers => "anomalous-customers",
            Self::ProductsByCategory => "products-by-category",
            Self::PriceTiers => "price-tiers",
            Self::CityProfiles => "city-profiles",
            Self::SupplierCountries => "supplier-countries",
        }
    }

    /// Heading used by human-readable output.
    pub const fn title(self) -> &'static str {
        match self {
            Self::TurnoverAbove => "Customers above turnover limit",
            Self::LocalSuppliers => "Local suppliers per customer",
            Self::LocalSuppliersGrouped => "Local suppliers per customer (grouped join)",
            Self::FirstOrderDates => "First order date per customer",
            Self::RankedByTurnover => "Customers above limit, ranked",
            Self::RankedCustomers => "Customers ranked by first order",
            Self::AnomalousCustomers => "Customers with incomplete contact data",
            Self::ProductsByCategory => "Products by category and stock",
            Self::PriceTiers => "Products by price tier",
            Self::CityProfiles => "City profitability and intensity",
            Self::SupplierCountries => "Supplier countries",
        }
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for QueryKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::UnknownQuery { name: wanted.to_string() })
    }
}

impl Serialize for QueryKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
