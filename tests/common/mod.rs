// tests/common/mod.rs
//! 共通テストユーティリティ

use std::path::PathBuf;

use northwind_domain::{config::QueryParameters, options::QueryKind};
use northwind_reports::{config::Config, presentation::OutputFormat};

/// Path of the bundled sample catalogue.
pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/catalog.json")
}

#[allow(dead_code)]
pub fn config_for(queries: &[QueryKind], format: OutputFormat) -> Config {
    Config {
        data: fixture_path(),
        queries: queries.to_vec(),
        params: QueryParameters::default(),
        format,
        log_level: log::LevelFilter::Off,
    }
}
