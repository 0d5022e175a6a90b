use std::collections::HashMap;

use serde::Serialize;

use super::QueryEngine;
use crate::model::{Customer, Supplier};

/// A customer with the suppliers located in its country and city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalSuppliers<'a> {
    pub customer: &'a Customer,
    pub suppliers: Vec<&'a Supplier>,
}

/// Case-insensitive (country, city) join key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct LocationKey {
    country: String,
    city: String,
}

impl LocationKey {
    fn new(country: &str, city: &str) -> Self {
        Self { country: fold_case(country), city: fold_case(city) }
    }
}

/// Simple (one-to-one) uppercase mapping; characters whose uppercase form
/// expands to several characters, like `ß`, stay as they are.
fn fold_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}

fn fold_case(value: &str) -> String {
    value.chars().map(fold_char).collect()
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars().map(fold_char).eq(b.chars().map(fold_char))
}

fn is_local(customer: &Customer, supplier: &Supplier) -> bool {
    eq_ignore_case(&supplier.country, &customer.country) && eq_ignore_case(&supplier.city, &customer.city)
}

impl QueryEngine {
    /// Every customer with its local suppliers, found by filtering the supplier list per customer.
    pub fn pair_with_local_suppliers<'a>(
        customers: &'a [Customer],
        suppliers: &'a [Supplier],
    ) -> Vec<LocalSuppliers<'a>> {
        customers
            .iter()
            .map(|customer| LocalSuppliers {
                customer,
                suppliers: suppliers.iter().filter(|supplier| is_local(customer, supplier)).collect(),
            })
            .collect()
    }

    /// Same result as [`QueryEngine::pair_with_local_suppliers`], computed by grouping
    /// suppliers on their location once and attaching each customer's group.
    pub fn pair_with_local_suppliers_grouped<'a>(
        customers: &'a [Customer],
        suppliers: &'a [Supplier],
    ) -> Vec<LocalSuppliers<'a>> {
        let mut by_location: HashMap<LocationKey, Vec<&'a Supplier>> = HashMap::new();
        for supplier in suppliers {
            by_location.entry(LocationKey::new(&supplier.country, &supplier.city)).or_default().push(supplier);
        }

        customers
            .iter()
            .map(|customer| LocalSuppliers {
                customer,
                suppliers: by_location
                    .get(&LocationKey::new(&customer.country, &customer.city))
                    .cloned()
                    .unwrap_or_default(),
            })
            .collect()
    }
}
