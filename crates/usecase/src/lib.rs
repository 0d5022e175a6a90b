//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: load the catalogue through a port and run report queries
//! - [`dto`]: report sections handed to the presentation layer
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;

pub use dto::{QueryResult, ReportSection};
pub use orchestrator::{LoadCatalog, RunReports};
