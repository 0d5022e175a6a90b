use northwind_shared_kernel::Money;
use serde::Serialize;

/// Half-open price interval `(lower, upper]`; no lower bound means everything up to `upper`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub lower: Option<Money>,
    pub upper: Money,
}

impl PriceRange {
    pub fn new(lower: Option<Money>, upper: Money) -> Self {
        Self { lower, upper }
    }

    #[inline]
    pub fn contains(&self, price: Money) -> bool {
        self.lower.is_none_or(|lower| price > lower) && price <= self.upper
    }
}

/// Upper boundaries of the cheap / middle / expensive tiers.
///
/// The boundaries are not checked against each other: with `cheap > middle`
/// the middle tier is simply empty and the outer tiers may overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceTiers {
    pub cheap: Money,
    pub middle: Money,
    pub expensive: Money,
}

impl PriceTiers {
    pub fn new(cheap: Money, middle: Money, expensive: Money) -> Self {
        Self { cheap, middle, expensive }
    }

    /// The three tier ranges in fixed order: cheap, middle, expensive.
    pub fn ranges(&self) -> [PriceRange; 3] {
        [
            PriceRange::new(None, self.cheap),
            PriceRange::new(Some(self.cheap), self.middle),
            PriceRange::new(Some(self.middle), self.expensive),
        ]
    }
}

impl Default for PriceTiers {
    fn default() -> Self {
        Self::new(Money::from(10), Money::from(20), Money::from(30))
    }
}
