use chrono::NaiveDateTime;
use northwind_shared_kernel::Money;
use serde::Serialize;

use super::order::Order;

/// A customer together with the orders it owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    pub company_name: String,
    pub country: String,
    pub city: String,
    /// `None` when the source had no region at all; an empty string is kept as-is.
    pub region: Option<String>,
    pub postal_code: String,
    pub phone: String,
    pub orders: Vec<Order>,
}

impl Customer {
    pub fn builder(company_name: impl Into<String>) -> CustomerBuilder {
        CustomerBuilder::new(company_name)
    }

    /// Sum of all order totals; zero for a customer without orders.
    pub fn turnover(&self) -> Money {
        self.orders.iter().map(|order| order.total).sum()
    }

    #[inline]
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    #[inline]
    pub fn has_orders(&self) -> bool {
        !self.orders.is_empty()
    }

    /// Date of the customer's first order, `None` when there are no orders.
    pub fn earliest_order_date(&self) -> Option<NaiveDateTime> {
        self.orders.iter().map(|order| order.order_date).min()
    }
}

/// Step-wise construction of a [`Customer`]; unset text fields default to empty.
#[derive(Debug, Clone)]
pub struct CustomerBuilder {
    company_name: String,
    country: String,
    city: String,
    region: Option<String>,
    postal_code: String,
    phone: String,
    orders: Vec<Order>,
}

impl CustomerBuilder {
    pub fn new(company_name: impl Into<String>) -> Self {
        Self {
            company_name: company_name.into(),
            country: String::new(),
            city: String::new(),
            region: None,
            postal_code: String::new(),
            phone: String::new(),
            orders: Vec::new(),
        }
    }

    pub fn location(mut self, country: impl Into<String>, city: impl Into<String>) -> Self {
        self.country = country.into();
        self.city = city.into();
        self
    }

    pub fn region(mut self, region: Option<String>) -> Self {
        self.region = region;
        self
    }

    pub fn postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = postal_code.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn order(mut self, order: Order) -> Self {
        self.orders.push(order);
        self
    }

    pub fn orders(mut self, orders: impl IntoIterator<Item = Order>) -> Self {
        self.orders.extend(orders);
        self
    }

    pub fn build(self) -> Customer {
        Customer {
            company_name: self.company_name,
            country: self.country,
            city: self.city,
            region: self.region,
            postal_code: self.postal_code,
            phone: self.phone,
            orders: self.orders,
        }
    }
}
