use chrono::NaiveDateTime;
use northwind_shared_kernel::Money;
use serde::Serialize;

/// A single order placed by a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    pub order_date: NaiveDateTime,
    pub total: Money,
}

impl Order {
    pub fn new(order_date: NaiveDateTime, total: Money) -> Self {
        Self { order_date, total }
    }
}
