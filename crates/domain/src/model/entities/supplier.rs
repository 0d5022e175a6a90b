use serde::Serialize;

/// A supplier, identified for reporting purposes by its location only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Supplier {
    pub country: String,
    pub city: String,
}

impl Supplier {
    pub fn new(country: impl Into<String>, city: impl Into<String>) -> Self {
        Self { country: country.into(), city: city.into() }
    }
}
