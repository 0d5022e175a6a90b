use northwind_shared_kernel::Money;

use super::QueryEngine;
use crate::model::Customer;

impl QueryEngine {
    /// Customers whose turnover is strictly greater than `limit`, in input order.
    pub fn filter_by_turnover_threshold(customers: &[Customer], limit: Money) -> Vec<&Customer> {
        customers.iter().filter(|customer| customer.turnover() > limit).collect()
    }
}
