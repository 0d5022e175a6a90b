// src/presentation.rs
use std::fmt::Write;

use northwind_domain::{
    analytics::{Anomaly, CategoryGroup, CityProfile, CustomerFirstOrder, LocalSuppliers, PriceTierBucket},
    model::Customer,
    options::QueryKind,
};
use northwind_shared_kernel::Result;
use northwind_usecase::{QueryResult, ReportSection};
use serde::Serialize;

/// Output format options for the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

#[derive(Serialize)]
struct Document<'s, 'c> {
    version: &'static str,
    reports: &'s [ReportSection<'c>],
}

/// Renders all sections in the requested format.
pub fn render(sections: &[ReportSection<'_>], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(sections)),
        OutputFormat::Json => render_json(sections),
        OutputFormat::Yaml => render_yaml(sections),
    }
}

fn render_json(sections: &[ReportSection<'_>]) -> Result<String> {
    let document = Document { version: crate::VERSION, reports: sections };
    let mut json = serde_json::to_string_pretty(&document)?;
    json.push('\n');
    Ok(json)
}

#[cfg(feature = "yaml")]
fn render_yaml(sections: &[ReportSection<'_>]) -> Result<String> {
    let document = Document { version: crate::VERSION, reports: sections };
    Ok(serde_yaml::to_string(&document)?)
}

#[cfg(not(feature = "yaml"))]
fn render_yaml(_sections: &[ReportSection<'_>]) -> Result<String> {
    Err(northwind_shared_kernel::PresentationError::InvalidValue {
        flag: "--format".to_string(),
        value: "yaml".to_string(),
        reason: "built without the `yaml` feature".to_string(),
    }
    .into())
}

/// Human-readable report, one titled block per section.
pub fn render_table(sections: &[ReportSection<'_>]) -> String {
    let mut out = String::new();
    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        write_section(&mut out, section);
    }
    out
}

// `write!` into a `String` cannot fail.
fn write_section(out: &mut String, section: &ReportSection<'_>) {
    let _ = writeln!(out, "== {} [{}] ==", section.query.title(), section.query);
    if section.result.is_empty() {
        let _ = writeln!(out, "  (no rows)");
        return;
    }
    match &section.result {
        QueryResult::Customers(rows) => write_customers(out, section.query, rows),
        QueryResult::LocalSuppliers(rows) => write_local_suppliers(out, rows),
        QueryResult::FirstOrders(rows) => write_first_orders(out, rows),
        QueryResult::ProductGroups(rows) => write_product_groups(out, rows),
        QueryResult::PriceTiers(buckets) => write_price_tiers(out, buckets),
        QueryResult::CityProfiles(rows) => write_city_profiles(out, rows),
        QueryResult::Summary(text) => {
            let _ = writeln!(out, "  {text}");
        }
    }
}

fn write_customers(out: &mut String, query: QueryKind, rows: &[&Customer]) {
    for customer in rows {
        let _ = write!(
            out,
            "  {:<36} {:<12} {:<16} {:>12}",
            customer.company_name,
            customer.country,
            customer.city,
            customer.turnover()
        );
        if query == QueryKind::AnomalousCustomers {
            let reasons: Vec<String> = Anomaly::detect(customer)
                .into_iter()
                .map(|anomaly| format!("{anomaly:?}"))
                .collect();
            let _ = write!(out, "  {}", reasons.join(", "));
        }
        out.push('\n');
    }
}

fn write_local_suppliers(out: &mut String, rows: &[LocalSuppliers<'_>]) {
    for row in rows {
        let _ = writeln!(
            out,
            "  {} ({}/{}): {} supplier(s)",
            row.customer.company_name,
            row.customer.country,
            row.customer.city,
            row.suppliers.len()
        );
        for supplier in &row.suppliers {
            let _ = writeln!(out, "    - {}/{}", supplier.country, supplier.city);
        }
    }
}

fn write_first_orders(out: &mut String, rows: &[CustomerFirstOrder<'_>]) {
    for row in rows {
        let _ = writeln!(
            out,
            "  {}  {:<36} {:>12}",
            row.first_order_date.format("%Y-%m-%d"),
            row.customer.company_name,
            row.customer.turnover()
        );
    }
}

fn write_product_groups(out: &mut String, groups: &[CategoryGroup<'_>]) {
    for group in groups {
        let _ = writeln!(out, "  category - {}", group.category);
        for stock in &group.stock_groups {
            let _ = writeln!(out, "    units in stock - {}", stock.units_in_stock);
            for price in &stock.unit_prices {
                let _ = writeln!(out, "      price - {price}");
            }
        }
    }
}

fn write_price_tiers(out: &mut String, buckets: &[PriceTierBucket<'_>]) {
    for bucket in buckets {
        let _ = writeln!(out, "  <= {}: {} product(s)", bucket.boundary, bucket.products.len());
        for product in &bucket.products {
            let _ = writeln!(out, "    {:<16} {:>10}", product.category, product.unit_price);
        }
    }
}

fn write_city_profiles(out: &mut String, rows: &[CityProfile<'_>]) {
    let _ = writeln!(out, "  {:<20} {:>14} {:>10}", "CITY", "AVG INCOME", "AVG ORDERS");
    for row in rows {
        let _ = writeln!(out, "  {:<20} {:>14} {:>10}", row.city, row.average_income, row.average_intensity);
    }
}
