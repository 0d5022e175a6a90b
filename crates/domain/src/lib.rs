//! # Domain
//!
//! Entity model and the read-only report queries over it.
//!
//! - [`model`]: customers (with their orders), suppliers and products
//! - [`analytics`]: [`analytics::QueryEngine`] and its result records
//! - [`config`]: caller-supplied query parameters (turnover limit, price tiers)
//! - [`options`]: the catalogue of runnable queries
//!
//! Nothing in this crate performs I/O or mutates its inputs.

#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod config;
pub mod model;
pub mod options;

pub use analytics::QueryEngine;
pub use northwind_shared_kernel::Money;
