use std::str::FromStr;

use northwind_domain::Money;

/// Wrapper type to parse monetary thresholds; `_` digit separators are ignored (e.g. `1_000.50`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoneyArg(pub Money);

impl FromStr for MoneyArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cleaned = s.trim().replace('_', "");
        if cleaned.is_empty() {
            return Err("empty amount".to_string());
        }
        cleaned
            .parse::<Money>()
            .map(MoneyArg)
            .map_err(|e| format!("Invalid amount '{s}': {e}"))
    }
}

impl From<MoneyArg> for Money {
    fn from(value: MoneyArg) -> Self {
        value.0
    }
}
