// crates/shared-kernel/src/value_objects/mod.rs
pub mod money;

pub use money::Money;
