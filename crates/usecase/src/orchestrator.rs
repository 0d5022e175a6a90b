use std::time::Instant;

use log::{debug, info, warn};
use northwind_domain::{
    QueryEngine,
    config::{PriceTiers, QueryParameters},
    model::{Catalog, Customer, Order, Product, Supplier},
    options::QueryKind,
};
use northwind_ports::catalog::{CatalogDto, CatalogSource, CustomerDto, ProductDto, SupplierDto};
use northwind_shared_kernel::{ApplicationError, Result};

use crate::dto::{QueryResult, ReportSection};

/// Loads the catalogue through a [`CatalogSource`] and maps it onto domain entities.
pub struct LoadCatalog<'a> {
    source: &'a dyn CatalogSource,
}

impl<'a> LoadCatalog<'a> {
    pub fn new(source: &'a dyn CatalogSource) -> Self {
        Self { source }
    }

    pub fn run(&self) -> Result<Catalog> {
        let dto = self.source.load().map_err(|e| ApplicationError::CatalogLoadFailed {
            reason: "catalog source failed".to_string(),
            source: Some(Box::new(e)),
        })?;
        let catalog = dto_to_catalog(dto);
        info!(
            "loaded catalog: {} customers ({} orders), {} suppliers, {} products",
            catalog.customers.len(),
            catalog.order_count(),
            catalog.suppliers.len(),
            catalog.products.len()
        );
        Ok(catalog)
    }
}

fn dto_to_catalog(dto: CatalogDto) -> Catalog {
    Catalog::new(
        dto.customers.into_iter().map(customer_from_dto).collect(),
        dto.suppliers.into_iter().map(supplier_from_dto).collect(),
        dto.products.into_iter().map(product_from_dto).collect(),
    )
}

fn customer_from_dto(dto: CustomerDto) -> Customer {
    Customer::builder(dto.company_name)
        .location(dto.country, dto.city)
        .region(dto.region)
        .postal_code(dto.postal_code)
        .phone(dto.phone)
        .orders(dto.orders.into_iter().map(|order| Order::new(order.order_date, order.total)))
        .build()
}

fn supplier_from_dto(dto: SupplierDto) -> Supplier {
    Supplier::new(dto.country, dto.city)
}

fn product_from_dto(dto: ProductDto) -> Product {
    Product::new(dto.category, dto.units_in_stock, dto.unit_price)
}

/// Runs report queries against an already loaded catalogue.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunReports {
    params: QueryParameters,
}

impl RunReports {
    pub fn new(params: QueryParameters) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &QueryParameters {
        &self.params
    }

    /// Runs `queries` in the given order.
    pub fn run<'c>(&self, catalog: &'c Catalog, queries: &[QueryKind]) -> Vec<ReportSection<'c>> {
        queries.iter().map(|&query| self.run_query(catalog, query)).collect()
    }

    pub fn run_query<'c>(&self, catalog: &'c Catalog, query: QueryKind) -> ReportSection<'c> {
        let started = Instant::now();
        let result = self.evaluate(catalog, query);
        debug!("{query}: {} rows in {:?}", result.len(), started.elapsed());
        ReportSection { query, result }
    }

    fn evaluate<'c>(&self, catalog: &'c Catalog, query: QueryKind) -> QueryResult<'c> {
        let Catalog { customers, suppliers, products } = catalog;
        let limit = self.params.turnover_limit;
        match query {
            QueryKind::TurnoverAbove => {
                QueryResult::Customers(QueryEngine::filter_by_turnover_threshold(customers, limit))
            }
            QueryKind::LocalSuppliers => {
                QueryResult::LocalSuppliers(QueryEngine::pair_with_local_suppliers(customers, suppliers))
            }
            QueryKind::LocalSuppliersGrouped => {
                QueryResult::LocalSuppliers(QueryEngine::pair_with_local_suppliers_grouped(customers, suppliers))
            }
            QueryKind::FirstOrderDates => {
                let rows = QueryEngine::customers_with_first_order_date(customers);
                note_skipped_customers(customers.len(), rows.len());
                QueryResult::FirstOrders(rows)
            }
            QueryKind::RankedByTurnover => {
                QueryResult::Customers(QueryEngine::rank_customers_above_turnover(customers, limit))
            }
            QueryKind::RankedCustomers => {
                let rows = QueryEngine::rank_customers_by_first_order(customers);
                note_skipped_customers(customers.len(), rows.len());
                QueryResult::FirstOrders(rows)
            }
            QueryKind::AnomalousCustomers => {
                QueryResult::Customers(QueryEngine::flag_anomalous_customers(customers))
            }
            QueryKind::ProductsByCategory => {
                QueryResult::ProductGroups(QueryEngine::group_products_by_category_then_stock(products))
            }
            QueryKind::PriceTiers => {
                let tiers = self.params.price_tiers;
                let unplaced = count_outside_tiers(products, tiers);
                if unplaced > 0 {
                    warn!("{unplaced} product(s) priced outside every tier (expensive <= {})", tiers.expensive);
                }
                QueryResult::PriceTiers(QueryEngine::bucket_products_by_price_tier(products, tiers))
            }
            QueryKind::CityProfiles => {
                QueryResult::CityProfiles(QueryEngine::city_profitability_and_intensity(customers))
            }
            QueryKind::SupplierCountries => {
                QueryResult::Summary(QueryEngine::unique_supplier_countries_summary(suppliers))
            }
        }
    }
}

fn count_outside_tiers(products: &[Product], tiers: PriceTiers) -> usize {
    let ranges = tiers.ranges();
    products
        .iter()
        .filter(|product| !ranges.iter().any(|range| range.contains(product.unit_price)))
        .count()
}

fn note_skipped_customers(total: usize, kept: usize) {
    if kept < total {
        debug!("skipped {} customer(s) without orders", total - kept);
    }
}
