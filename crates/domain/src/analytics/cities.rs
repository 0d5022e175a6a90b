use northwind_shared_kernel::Money;
use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use serde::Serialize;

use super::{QueryEngine, grouping::group_by_first_appearance};
use crate::model::Customer;

/// Per-city averages over the customers located there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityProfile<'a> {
    pub city: &'a str,
    /// Mean customer turnover, rounded half to even.
    pub average_income: i64,
    /// Mean number of orders per customer, rounded half to even.
    pub average_intensity: i64,
}

/// Rounds an exact mean to the nearest integer, ties to even; saturates on overflow.
fn round_half_even(mean: Decimal) -> i64 {
    let rounded = mean.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven);
    rounded
        .to_i64()
        .unwrap_or(if rounded.is_sign_negative() { i64::MIN } else { i64::MAX })
}

impl QueryEngine {
    /// Average turnover and order count per city, cities in first-appearance order.
    /// Customers without orders count as zero in both averages.
    pub fn city_profitability_and_intensity<'a>(customers: &'a [Customer]) -> Vec<CityProfile<'a>> {
        group_by_first_appearance(customers, |&customer: &&'a Customer| customer.city.as_str())
            .into_iter()
            .map(|group| {
                let members = Decimal::from(group.members.len());
                let income = group.members.iter().map(|c| c.turnover()).sum::<Money>().value();
                let orders: Decimal = group.members.iter().map(|c| Decimal::from(c.order_count())).sum();
                CityProfile {
                    city: group.key,
                    average_income: round_half_even(income / members),
                    average_intensity: round_half_even(orders / members),
                }
            })
            .collect()
    }
}
