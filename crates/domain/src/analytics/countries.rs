use std::collections::HashSet;

use super::QueryEngine;
use crate::model::Supplier;

impl QueryEngine {
    /// Distinct supplier countries ordered by length, then ordinally, concatenated without separator.
    pub fn unique_supplier_countries_summary(suppliers: &[Supplier]) -> String {
        let mut seen = HashSet::new();
        let mut countries: Vec<&str> = suppliers
            .iter()
            .map(|supplier| supplier.country.as_str())
            .filter(|country| seen.insert(*country))
            .collect();
        countries.sort_by(|a, b| a.chars().count().cmp(&b.chars().count()).then_with(|| a.cmp(b)));
        countries.concat()
    }
}
