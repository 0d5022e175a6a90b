use northwind_domain::options::QueryKind;
use northwind_reports::{app, presentation::OutputFormat};
use serde_json::Value;

use crate::common::config_for;

fn run_json(query: QueryKind) -> Value {
    let output = app::run(&config_for(&[query], OutputFormat::Json)).expect("run succeeds");
    let document: Value = serde_json::from_str(&output).expect("valid json");
    document["reports"][0]["result"].clone()
}

fn names(rows: &Value, field: impl Fn(&Value) -> &Value) -> Vec<String> {
    rows.as_array()
        .unwrap()
        .iter()
        .map(|row| field(row).as_str().unwrap().to_string())
        .collect()
}

#[test]
fn turnover_filter_drops_customers_without_orders() {
    let rows = run_json(QueryKind::TurnoverAbove);
    let listed = names(&rows, |row| &row["company_name"]);
    assert_eq!(listed.len(), 5);
    assert!(!listed.contains(&"Paris spécialités".to_string()));
}

#[test]
fn ranked_customers_follow_first_order_then_turnover() {
    let rows = run_json(QueryKind::RankedCustomers);
    assert_eq!(
        names(&rows, |row| &row["customer"]["company_name"]),
        vec![
            "Great Lakes Food Market",
            "Around the Horn",
            "Alfreds Futterkiste",
            "Lima Importadores",
            "Lima Comercial",
        ]
    );
    assert_eq!(rows[0]["first_order_date"], "1996-11-15T00:00:00");
}

#[test]
fn anomalous_customers_are_flagged_once() {
    let rows = run_json(QueryKind::AnomalousCustomers);
    assert_eq!(names(&rows, |row| &row["company_name"]), vec!["Alfreds Futterkiste", "Around the Horn"]);
}

#[test]
fn both_supplier_pairings_agree() {
    let nested = run_json(QueryKind::LocalSuppliers);
    let grouped = run_json(QueryKind::LocalSuppliersGrouped);
    assert_eq!(nested, grouped);
    assert_eq!(nested[1]["suppliers"][0]["city"], "London");
    assert_eq!(nested[2]["suppliers"][0]["city"], "eugene");
    assert_eq!(nested[0]["suppliers"].as_array().unwrap().len(), 0);
}

#[test]
fn city_profiles_round_half_to_even() {
    let rows = run_json(QueryKind::CityProfiles);
    assert_eq!(names(&rows, |row| &row["city"]), vec!["Berlin", "London", "Eugene", "Lima", "Paris"]);
    assert_eq!(rows[0]["average_income"], 1692);
    assert_eq!(rows[3]["average_income"], 150);
    assert_eq!(rows[3]["average_intensity"], 2);
    assert_eq!(rows[4]["average_income"], 0);
}

#[test]
fn price_tiers_omit_products_above_expensive() {
    let rows = run_json(QueryKind::PriceTiers);
    let counts: Vec<usize> = rows.as_array().unwrap().iter().map(|b| b["products"].as_array().unwrap().len()).collect();
    assert_eq!(counts, vec![2, 2, 2]);
    assert_eq!(rows[2]["boundary"], "30");
}

#[test]
fn products_group_by_category_then_stock() {
    let rows = run_json(QueryKind::ProductsByCategory);
    assert_eq!(
        names(&rows, |row| &row["category"]),
        vec!["Beverages", "Condiments", "Seafood", "Meat/Poultry"]
    );
    assert_eq!(rows[0]["stock_groups"][0]["units_in_stock"], 39);
    assert_eq!(rows[0]["stock_groups"][0]["unit_prices"], serde_json::json!(["5.00", "20.00"]));
}

#[test]
fn supplier_country_summary() {
    assert_eq!(run_json(QueryKind::SupplierCountries), "UKUSASpain");
}

#[test]
fn repeated_runs_are_identical() {
    let config = config_for(&QueryKind::ALL, OutputFormat::Table);
    assert_eq!(app::run(&config).unwrap(), app::run(&config).unwrap());
}

#[test]
fn malformed_catalog_reports_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ \"customers\": [").unwrap();

    let mut config = config_for(&[QueryKind::SupplierCountries], OutputFormat::Table);
    config.data = path;
    let message = format!("{:#}", app::run(&config).expect_err("parse fails"));
    assert!(message.contains("broken.json"));
    assert!(message.contains("JSON"));
}

#[test]
fn unknown_extension_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.csv");
    std::fs::write(&path, "country,city\n").unwrap();

    let mut config = config_for(&[QueryKind::SupplierCountries], OutputFormat::Table);
    config.data = path;
    assert!(app::run(&config).is_err());
}
