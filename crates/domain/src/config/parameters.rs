use northwind_shared_kernel::Money;

use super::value_objects::PriceTiers;

/// Caller-supplied thresholds shared by the parameterised queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryParameters {
    /// Turnover must be strictly above this value.
    pub turnover_limit: Money,
    pub price_tiers: PriceTiers,
}

impl Default for QueryParameters {
    fn default() -> Self {
        Self { turnover_limit: Money::zero(), price_tiers: PriceTiers::default() }
    }
}
