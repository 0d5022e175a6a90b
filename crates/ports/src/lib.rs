//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`catalog`]: source of the customer, supplier and product collections
//!
//! These ports allow the domain and application layers to remain
//! independent of where the catalogue data comes from.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod catalog;
