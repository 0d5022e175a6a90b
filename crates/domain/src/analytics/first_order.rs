use chrono::NaiveDateTime;
use northwind_shared_kernel::Money;
use serde::Serialize;

use super::{QueryEngine, sort::SortStrategy};
use crate::model::Customer;

/// A customer with the date of its first order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CustomerFirstOrder<'a> {
    pub customer: &'a Customer,
    pub first_order_date: NaiveDateTime,
}

impl QueryEngine {
    /// Earliest order date of `customer`, `None` when it has no orders.
    #[inline]
    pub fn earliest_order_date(customer: &Customer) -> Option<NaiveDateTime> {
        customer.earliest_order_date()
    }

    /// Customers with at least one order, paired with their first order date, in input order.
    pub fn customers_with_first_order_date(customers: &[Customer]) -> Vec<CustomerFirstOrder<'_>> {
        customers
            .iter()
            .filter_map(|customer| {
                customer
                    .earliest_order_date()
                    .map(|first_order_date| CustomerFirstOrder { customer, first_order_date })
            })
            .collect()
    }

    /// Customers with orders and turnover above `limit`, ranked by
    /// first order date, turnover (descending) and company name.
    pub fn rank_customers_above_turnover(customers: &[Customer], limit: Money) -> Vec<&Customer> {
        let eligible: Vec<&Customer> = customers
            .iter()
            .filter(|customer| customer.has_orders() && customer.turnover() > limit)
            .collect();
        SortStrategy::first_order_then_turnover().sorted(eligible, |customer| *customer)
    }

    /// Every customer with orders and its first order date, ranked like
    /// [`QueryEngine::rank_customers_above_turnover`].
    pub fn rank_customers_by_first_order(customers: &[Customer]) -> Vec<CustomerFirstOrder<'_>> {
        let entries = Self::customers_with_first_order_date(customers);
        SortStrategy::first_order_then_turnover().sorted(entries, |entry| entry.customer)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use proptest::prelude::*;

    use super::*;
    use crate::model::Order;

    fn at(year: i32, month: u32, day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day).unwrap().and_hms_opt(0, 0, 0).unwrap()
    }

    fn customer(name: &str, orders: &[(NaiveDateTime, i64)]) -> Customer {
        Customer::builder(name)
            .orders(orders.iter().map(|&(date, total)| Order::new(date, Money::from(total))))
            .build()
    }

    fn sample() -> Vec<Customer> {
        vec![
            customer("Wartian Herkku", &[(at(1997, 4, 1), 300), (at(1996, 9, 10), 100)]),
            customer("Paris spécialités", &[]),
            customer("Around the Horn", &[(at(1996, 9, 10), 50)]),
            customer("Berglunds snabbköp", &[(at(1996, 8, 12), 20)]),
            customer("Antonio Moreno", &[(at(1996, 9, 10), 400)]),
        ]
    }

    fn names<'a>(customers: impl IntoIterator<Item = &'a Customer>) -> Vec<&'a str> {
        customers.into_iter().map(|c| c.company_name.as_str()).collect()
    }

    #[test]
    fn first_order_dates_skip_customers_without_orders() {
        let data = sample();
        let entries = QueryEngine::customers_with_first_order_date(&data);

        assert_eq!(
            names(entries.iter().map(|e| e.customer)),
            vec!["Wartian Herkku", "Around the Horn", "Berglunds snabbköp", "Antonio Moreno"]
        );
        assert_eq!(entries[0].first_order_date, at(1996, 9, 10));
    }

    #[test]
    fn ranked_customers_use_date_then_turnover_then_name() {
        let data = sample();
        let ranked = QueryEngine::rank_customers_by_first_order(&data);

        assert_eq!(
            names(ranked.iter().map(|e| e.customer)),
            vec!["Berglunds snabbköp", "Antonio Moreno", "Wartian Herkku", "Around the Horn"]
        );
        assert_eq!(ranked[0].first_order_date, at(1996, 8, 12));
    }

    #[test]
    fn ranked_above_turnover_applies_limit_first() {
        let data = sample();
        let ranked = QueryEngine::rank_customers_above_turnover(&data, Money::from(60));
        assert_eq!(names(ranked), vec!["Antonio Moreno", "Wartian Herkku"]);
    }

    #[test]
    fn negative_limit_still_excludes_customers_without_orders() {
        let data = sample();
        let ranked = QueryEngine::rank_customers_above_turnover(&data, Money::from(-1));
        assert_eq!(ranked.len(), 4);
    }

    #[test]
    fn rerunning_yields_identical_output() {
        let data = sample();
        assert_eq!(
            QueryEngine::rank_customers_by_first_order(&data),
            QueryEngine::rank_customers_by_first_order(&data)
        );
    }

    /// Customers named `c0`..`c2` (names repeat) with orders given as day offsets from 1996-07-04.
    fn generated(orders: &[Vec<(u32, i64)>]) -> Vec<Customer> {
        orders
            .iter()
            .enumerate()
            .map(|(i, list)| {
                let list: Vec<_> = list
                    .iter()
                    .map(|&(offset, total)| (at(1996, 7, 4) + chrono::Duration::days(offset.into()), total))
                    .collect();
                customer(&format!("c{}", i % 3), &list)
            })
            .collect()
    }

    fn order_lists() -> impl Strategy<Value = Vec<Vec<(u32, i64)>>> {
        prop::collection::vec(prop::collection::vec((0u32..60, 0i64..300), 0..4), 0..12)
    }

    proptest! {
        #[test]
        fn ranked_output_is_ordered(orders in order_lists(), limit in 0i64..400) {
            let data = generated(&orders);

            let ranked = QueryEngine::rank_customers_above_turnover(&data, Money::from(limit));
            for pair in ranked.windows(2) {
                let (x, y) = (pair[0], pair[1]);
                let (dx, dy) = (x.earliest_order_date().unwrap(), y.earliest_order_date().unwrap());
                prop_assert!(dx <= dy);
                if dx == dy {
                    prop_assert!(x.turnover() >= y.turnover());
                    if x.turnover() == y.turnover() {
                        prop_assert!(x.company_name <= y.company_name);
                    }
                }
            }
        }

        #[test]
        fn ranked_entries_cover_every_ordering_customer_in_rank_order(orders in order_lists()) {
            let data = generated(&orders);
            let ranked = QueryEngine::rank_customers_by_first_order(&data);

            prop_assert_eq!(ranked.len(), data.iter().filter(|c| c.has_orders()).count());
            for entry in &ranked {
                prop_assert_eq!(Some(entry.first_order_date), entry.customer.earliest_order_date());
            }
            for pair in ranked.windows(2) {
                let (x, y) = (&pair[0], &pair[1]);
                prop_assert!(x.first_order_date <= y.first_order_date);
                if x.first_order_date == y.first_order_date {
                    let (tx, ty) = (x.customer.turnover(), y.customer.turnover());
                    prop_assert!(tx >= ty);
                    if tx == ty {
                        prop_assert!(x.customer.company_name <= y.customer.company_name);
                    }
                }
            }
        }
    }
}
