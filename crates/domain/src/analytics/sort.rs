// domain analytics sorting utilities
use std::cmp::Ordering;

use chrono::NaiveDateTime;
use northwind_shared_kernel::Money;

use crate::model::Customer;

/// ソート順序
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    #[inline]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// 顧客の並べ替えキー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerSortKey {
    /// 最初の注文日（注文なしは最後）
    FirstOrderDate,
    /// 注文合計
    Turnover,
    /// 会社名（序数比較）
    CompanyName,
}

/// ソート仕様を表す値オブジェクト
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    key: CustomerSortKey,
    order: SortOrder,
}

impl SortSpec {
    pub fn new(key: CustomerSortKey, order: SortOrder) -> Self {
        Self { key, order }
    }

    pub fn ascending(key: CustomerSortKey) -> Self {
        Self::new(key, SortOrder::Ascending)
    }

    pub fn descending(key: CustomerSortKey) -> Self {
        Self::new(key, SortOrder::Descending)
    }
}

/// Per-customer values computed once before sorting.
#[derive(Debug, Clone, Copy)]
struct RankKey<'a> {
    first_order: NaiveDateTime,
    turnover: Money,
    company_name: &'a str,
}

impl<'a> RankKey<'a> {
    fn of(customer: &'a Customer) -> Self {
        Self {
            first_order: customer.earliest_order_date().unwrap_or(NaiveDateTime::MAX),
            turnover: customer.turnover(),
            company_name: &customer.company_name,
        }
    }
}

/// ソート戦略（複数キー・安定ソート）
#[derive(Debug, Clone)]
pub struct SortStrategy {
    specs: Vec<SortSpec>,
}

impl SortStrategy {
    pub fn new(specs: Vec<SortSpec>) -> Self {
        Self { specs }
    }

    /// 最初の注文日昇順 → 注文合計降順 → 会社名昇順
    pub fn first_order_then_turnover() -> Self {
        Self::new(vec![
            SortSpec::ascending(CustomerSortKey::FirstOrderDate),
            SortSpec::descending(CustomerSortKey::Turnover),
            SortSpec::ascending(CustomerSortKey::CompanyName),
        ])
    }

    /// Sorts `items` by the customer each one refers to. Equal items keep their input order.
    pub fn sorted<'a, T>(&self, items: Vec<T>, customer_of: impl Fn(&T) -> &'a Customer) -> Vec<T> {
        if items.is_empty() || self.specs.is_empty() {
            return items;
        }

        let mut keyed: Vec<(RankKey<'a>, T)> =
            items.into_iter().map(|item| (RankKey::of(customer_of(&item)), item)).collect();
        keyed.sort_by(|(a, _), (b, _)| self.compare(a, b));
        keyed.into_iter().map(|(_, item)| item).collect()
    }

    fn compare(&self, a: &RankKey<'_>, b: &RankKey<'_>) -> Ordering {
        for spec in &self.specs {
            let cmp = spec.key.compare(a, b);
            if cmp != Ordering::Equal {
                return spec.order.apply(cmp);
            }
        }
        Ordering::Equal
    }
}

impl Default for SortStrategy {
    fn default() -> Self {
        Self::first_order_then_turnover()
    }
}

impl CustomerSortKey {
    #[inline]
    fn compare(self, a: &RankKey<'_>, b: &RankKey<'_>) -> Ordering {
        match self {
            Self::FirstOrderDate => a.first_order.cmp(&b.first_order),
            Self::Turnover => a.turnover.cmp(&b.turnover),
            Self::CompanyName => a.company_name.cmp(b.company_name),
        }
    }
}
