use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::core::errors::FoodError;
use crate::domain::DEFAULT_PRICE;
use crate::storage::json_backend::{tmp_path, write_atomic};
use crate::utils::paths::{ensure_dir, PathResolver};

/// Keys accepted by [`Config::set`].
pub const CONFIG_KEYS: &[&str] = &[
    "currency",
    "default_price",
    "co2_per_item_kg",
    "water_per_item_l",
    "co2_per_km",
    "screen_reader_mode",
    "high_contrast_mode",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub currency: String,
    pub default_price: f64,
    pub co2_per_item_kg: f64,
    pub water_per_item_l: f64,
    pub co2_per_km: f64,
    pub screen_reader_mode: bool,
    pub high_contrast_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: "AED".into(),
            default_price: DEFAULT_PRICE,
            co2_per_item_kg: 2.5,
            water_per_item_l: 170.0,
            co2_per_km: 2.3,
            screen_reader_mode: false,
            high_contrast_mode: false,
        }
    }
}

impl Config {
    /// Updates a single setting from its textual form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), FoodError> {
        match key {
            "currency" => {
                let code = value.trim().to_ascii_uppercase();
                if code.is_empty() {
                    return Err(FoodError::ConfigError("currency cannot be empty".into()));
                }
                self.currency = code;
            }
            "default_price" => self.default_price = parse_positive(key, value)?,
            "co2_per_item_kg" => self.co2_per_item_kg = parse_positive(key, value)?,
            "water_per_item_l" => self.water_per_item_l = parse_positive(key, value)?,
            "co2_per_km" => self.co2_per_km = parse_positive(key, value)?,
            "screen_reader_mode" => self.screen_reader_mode = parse_flag(key, value)?,
            "high_contrast_mode" => self.high_contrast_mode = parse_flag(key, value)?,
            other => {
                return Err(FoodError::ConfigError(format!(
                    "unknown setting `{}` (expected one of: {})",
                    other,
                    CONFIG_KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }

    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("currency", self.currency.clone()),
            ("default_price", self.default_price.to_string()),
            ("co2_per_item_kg", self.co2_per_item_kg.to_string()),
            ("water_per_item_l", self.water_per_item_l.to_string()),
            ("co2_per_km", self.co2_per_km.to_string()),
            ("screen_reader_mode", self.screen_reader_mode.to_string()),
            ("high_contrast_mode", self.high_contrast_mode.to_string()),
        ]
    }
}

fn parse_positive(key: &str, value: &str) -> Result<f64, FoodError> {
    match value.trim().parse::<f64>() {
        Ok(number) if number.is_finite() && number > 0.0 => Ok(number),
        _ => Err(FoodError::ConfigError(format!(
            "`{key}` must be a positive number"
        ))),
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, FoodError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        _ => Err(FoodError::ConfigError(format!("`{key}` must be on or off"))),
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, FoodError> {
        Self::with_base_dir(PathResolver::base_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, FoodError> {
        ensure_dir(&base)?;
        Ok(Self {
            path: PathResolver::config_file_in(&base),
        })
    }

    pub fn load(&self) -> Result<Config, FoodError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            serde_json::from_str(&data)
                .map_err(|err| FoodError::ConfigError(format!("{}: {err}", self.path.display())))
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), FoodError> {
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::info!(path = %self.path.display(), "configuration saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_loads_defaults() {
        let temp = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        assert_eq!(manager.load().unwrap(), Config::default());
    }

    #[test]
    fn save_then_load_roundtrip() {
        let temp = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        let mut config = Config::default();
        config.set("currency", "eur").unwrap();
        config.set("default_price", "9.5").unwrap();
        config.set("high_contrast_mode", "on").unwrap();
        manager.save(&config).unwrap();

        let loaded = manager.load().unwrap();
        assert_eq!(loaded.currency, "EUR");
        assert_eq!(loaded.default_price, 9.5);
        assert!(loaded.high_contrast_mode);
    }

    #[test]
    fn partial_files_fill_in_defaults() {
        let temp = tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        fs::write(manager.path(), r#"{"currency":"USD"}"#).unwrap();
        let loaded = manager.load().unwrap();
        assert_eq!(loaded.currency, "USD");
        assert_eq!(loaded.co2_per_item_kg, 2.5);
    }

    #[test]
    fn rejects_unknown_keys_and_bad_values() {
        let mut config = Config::default();
        assert!(config.set("colour", "blue").is_err());
        assert!(config.set("co2_per_km", "-1").is_err());
        assert!(config.set("screen_reader_mode", "maybe").is_err());
        assert_eq!(config, Config::default());
    }
}
