pub mod price_tiers;

pub use price_tiers::{PriceRange, PriceTiers};
