use serde::Serialize;

use super::QueryEngine;
use crate::model::Customer;

/// Contact-data problems a customer record can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anomaly {
    /// Postal code does not parse as a 32-bit integer.
    NonNumericPostalCode,
    /// Region is absent or empty.
    MissingRegion,
    /// Phone number carries no `(` area-code prefix.
    MissingAreaCode,
}

/// Optional sign and digits fitting an `i32`, surrounded only by ASCII
/// whitespace (tab through carriage return, and space).
fn is_integer(text: &str) -> bool {
    text.trim_matches(|c: char| matches!(c, '\t'..='\r' | ' '))
        .parse::<i32>()
        .is_ok()
}

impl Anomaly {
    pub const ALL: [Self; 3] = [Self::NonNumericPostalCode, Self::MissingRegion, Self::MissingAreaCode];

    pub fn applies_to(self, customer: &Customer) -> bool {
        match self {
            Self::NonNumericPostalCode => !is_integer(&customer.postal_code),
            Self::MissingRegion => customer.region.as_deref().is_none_or(str::is_empty),
            Self::MissingAreaCode => !customer.phone.contains('('),
        }
    }

    /// All anomalies present on `customer`, in declaration order.
    pub fn detect(customer: &Customer) -> Vec<Self> {
        Self::ALL.into_iter().filter(|anomaly| anomaly.applies_to(customer)).collect()
    }
}

impl QueryEngine {
    /// Customers with at least one [`Anomaly`], each listed once, in input order.
    pub fn flag_anomalous_customers(customers: &[Customer]) -> Vec<&Customer> {
        customers
            .iter()
            .filter(|customer| Anomaly::ALL.into_iter().any(|anomaly| anomaly.applies_to(customer)))
            .collect()
    }
}
