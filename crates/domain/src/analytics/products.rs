use northwind_shared_kernel::Money;
use serde::Serialize;

use super::{QueryEngine, grouping::group_by_first_appearance};
use crate::{config::PriceTiers, model::Product};

/// Unit prices (ascending) of one category's products sharing a stock level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockGroup {
    pub units_in_stock: u32,
    pub unit_prices: Vec<Money>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryGroup<'a> {
    pub category: &'a str,
    pub stock_groups: Vec<StockGroup>,
}

/// Products falling into the tier whose upper boundary is `boundary`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceTierBucket<'a> {
    pub boundary: Money,
    pub products: Vec<&'a Product>,
}

impl QueryEngine {
    /// Products grouped by category, then by units in stock; both levels keep
    /// first-appearance order and each stock group lists its prices ascending.
    pub fn group_products_by_category_then_stock<'a>(products: &'a [Product]) -> Vec<CategoryGroup<'a>> {
        group_by_first_appearance(products, |&product: &&'a Product| product.category.as_str())
            .into_iter()
            .map(|category| CategoryGroup {
                category: category.key,
                stock_groups: group_by_first_appearance(category.members, |product| product.units_in_stock)
                    .into_iter()
                    .map(|stock| {
                        let mut unit_prices: Vec<Money> = stock.members.iter().map(|p| p.unit_price).collect();
                        unit_prices.sort();
                        StockGroup { units_in_stock: stock.key, unit_prices }
                    })
                    .collect(),
            })
            .collect()
    }

    /// Always three buckets (cheap, middle, expensive). Products above
    /// `tiers.expensive` land in none of them.
    pub fn bucket_products_by_price_tier(products: &[Product], tiers: PriceTiers) -> [PriceTierBucket<'_>; 3] {
        tiers.ranges().map(|range| PriceTierBucket {
            boundary: range.upper,
            products: products.iter().filter(|product| range.contains(product.unit_price)).collect(),
        })
    }
}
