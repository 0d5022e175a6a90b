pub mod parameters;
pub mod value_objects;

pub use parameters::QueryParameters;
pub use value_objects::{PriceRange, PriceTiers};
