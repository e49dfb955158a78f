//! Shop settings — currency symbol and money format, loaded from TOML.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::money::MoneyFormat;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopSettings {
    pub shop_name: String,
    /// Symbol prefixed to compact price labels (slider, list rows).
    pub currency_symbol: String,
    /// Template for full price labels (detail view, compare table).
    pub money_format: MoneyFormat,
}

impl Default for ShopSettings {
    fn default() -> Self {
        ShopSettings {
            shop_name: "Shopfront".to_string(),
            currency_symbol: "$".to_string(),
            money_format: MoneyFormat::default(),
        }
    }
}

/// Load settings from disk. Returns defaults if the file is missing or corrupt.
pub fn load(path: &Path) -> ShopSettings {
    match std::fs::read_to_string(path) {
        Ok(content) => toml::from_str(&content).unwrap_or_default(),
        Err(_) => ShopSettings::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    #[test]
    fn loads_from_toml() {
        let dir = std::env::temp_dir().join("shopfront_settings_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.toml");
        std::fs::write(
            &path,
            "shop_name = \"Pieces\"\n\
             currency_symbol = \"€\"\n\
             money_format = \"{{amount_with_comma_separator}} €\"\n",
        )
        .unwrap();

        let settings = load(&path);
        assert_eq!(settings.shop_name, "Pieces");
        assert_eq!(settings.currency_symbol, "€");
        assert_eq!(settings.money_format.format(Money(129_950)), "1.299,50 €");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_file_returns_defaults() {
        let settings = load(Path::new("/nonexistent/settings.toml"));
        assert_eq!(settings, ShopSettings::default());
    }

    #[test]
    fn corrupt_file_returns_defaults() {
        let dir = std::env::temp_dir().join("shopfront_settings_corrupt");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.toml");
        std::fs::write(&path, "not valid toml [[[").unwrap();

        assert_eq!(load(&path), ShopSettings::default());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
