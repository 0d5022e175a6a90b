// src/app.rs
use log::info;
use northwind_infra::FileCatalogSource;
use northwind_shared_kernel::ErrorContext;
use northwind_usecase::{LoadCatalog, RunReports};

use crate::{config::Config, presentation};

/// Loads the catalogue, runs the configured queries and returns the rendered output.
pub fn run(config: &Config) -> anyhow::Result<String> {
    let source = FileCatalogSource::from_path(&config.data)?;
    let catalog = LoadCatalog::new(&source)
        .run()
        .with_context(|| format!("reading {}", config.data.display()))?;

    let sections = RunReports::new(config.params).run(&catalog, &config.queries);
    info!("ran {} report(s)", sections.len());

    Ok(presentation::render(&sections, config.format)?)
}
