// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod catalog;
pub mod persistence;

pub use catalog::{CatalogFormat, FileCatalogSource};
