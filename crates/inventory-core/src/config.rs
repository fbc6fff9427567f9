//! Inventory Configuration

use serde::{Deserialize, Serialize};

/// Default name of the persistent slot holding the snapshot
pub const DEFAULT_STORAGE_KEY: &str = "products";

/// Default currency symbol for price columns
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    /// Name of the key-value slot the snapshot is written to
    pub storage_key: String,
    pub currency_symbol: String,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: InventoryConfig = serde_json::from_str(r#"{"storage_key":"stock"}"#).unwrap();
        assert_eq!(config.storage_key, "stock");
        assert_eq!(config.currency_symbol, DEFAULT_CURRENCY_SYMBOL);
    }
}
