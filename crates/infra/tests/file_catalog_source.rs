// crates/infra/tests/file_catalog_source.rs
use std::fs;

use northwind_infra::{CatalogFormat, FileCatalogSource};
use northwind_ports::catalog::CatalogSource;
use northwind_shared_kernel::{InfrastructureError, NorthwindError};

const CATALOG: &str = r#"{
    "customers": [{
        "company_name": "Around the Horn",
        "country": "UK",
        "city": "London",
        "region": null,
        "postal_code": "WA1 1DP",
        "phone": "(171) 555-7788",
        "orders": [{ "order_date": "1996-11-15T00:00:00", "total": "480.00" }]
    }],
    "suppliers": [{ "country": "UK", "city": "London" }],
    "products": [{ "category": "Beverages", "units_in_stock": 39, "unit_price": 18 }]
}"#;

#[test]
fn loads_json_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    fs::write(&path, CATALOG).unwrap();

    let source = FileCatalogSource::from_path(&path).expect("json is supported");
    assert_eq!(source.format(), CatalogFormat::Json);

    let catalog = source.load().expect("loads");
    assert_eq!(catalog.customers.len(), 1);
    assert_eq!(catalog.customers[0].orders.len(), 1);
    assert_eq!(catalog.suppliers[0].city, "London");
    assert_eq!(catalog.products[0].units_in_stock, 39);
}

#[test]
fn extension_match_is_case_insensitive() {
    assert_eq!(CatalogFormat::from_path("DATA.JSON".as_ref()), Some(CatalogFormat::Json));
}

#[test]
fn unknown_extension_is_rejected() {
    let err = FileCatalogSource::from_path("catalog.csv").expect_err("csv is not supported");
    assert!(matches!(err, NorthwindError::Infrastructure(InfrastructureError::UnsupportedFormat { .. })));
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    let err = FileCatalogSource::from_path(&path).unwrap().load().expect_err("file is missing");
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn malformed_json_is_a_serialization_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ \"customers\": [").unwrap();

    let err = FileCatalogSource::from_path(&path).unwrap().load().expect_err("json is malformed");
    assert!(matches!(err, NorthwindError::Infrastructure(InfrastructureError::SerializationError { .. })));
}

#[cfg(feature = "yaml")]
#[test]
fn loads_yaml_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.yml");
    fs::write(
        &path,
        "suppliers:\n  - country: USA\n    city: Boston\nproducts:\n  - category: Seafood\n    units_in_stock: 0\n    unit_price: \"9.65\"\n",
    )
    .unwrap();

    let catalog = FileCatalogSource::from_path(&path).unwrap().load().expect("loads");
    assert!(catalog.customers.is_empty());
    assert_eq!(catalog.suppliers[0].country, "USA");
}
