// src/config.rs
use std::path::PathBuf;

use log::LevelFilter;
use northwind_domain::{
    config::{PriceTiers, QueryParameters},
    options::QueryKind,
};
use northwind_shared_kernel::{PresentationError, PresentationResult};

use crate::{cli::Args, logging, presentation::OutputFormat};

/// Immutable run configuration assembled from CLI arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data: PathBuf,
    pub queries: Vec<QueryKind>,
    pub params: QueryParameters,
    pub format: OutputFormat,
    pub log_level: LevelFilter,
}

impl TryFrom<Args> for Config {
    type Error = PresentationError;

    fn try_from(args: Args) -> PresentationResult<Self> {
        let format = OutputFormat::from(args.format);
        validate_format(format)?;

        let queries = if args.query.is_empty() { QueryKind::ALL.to_vec() } else { dedup(args.query) };
        let params = QueryParameters {
            turnover_limit: args.limit.into(),
            price_tiers: PriceTiers::new(args.cheap.into(), args.middle.into(), args.expensive.into()),
        };

        Ok(Self {
            data: args.data,
            queries,
            params,
            format,
            log_level: logging::level_for(args.verbose, args.quiet),
        })
    }
}

/// Drops repeated queries, keeping the first mention.
fn dedup(queries: Vec<QueryKind>) -> Vec<QueryKind> {
    let mut unique = Vec::with_capacity(queries.len());
    for query in queries {
        if !unique.contains(&query) {
            unique.push(query);
        }
    }
    unique
}

fn validate_format(format: OutputFormat) -> PresentationResult<()> {
    if format == OutputFormat::Yaml && !cfg!(feature = "yaml") {
        return Err(PresentationError::InvalidValue {
            flag: "--format".to_string(),
            value: "yaml".to_string(),
            reason: "built without the `yaml` feature".to_string(),
        });
    }
    Ok(())
}
