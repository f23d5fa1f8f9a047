use crate::error::{Result, StockError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_CURRENCY: &str = "₱";

/// Display settings for front ends, stored in `<data dir>/config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StockConfig {
    /// Symbol printed before money amounts
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Color low-stock rows in tables
    #[serde(default = "default_highlight")]
    pub highlight_low_stock: bool,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn default_highlight() -> bool {
    true
}

impl Default for StockConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            highlight_low_stock: default_highlight(),
        }
    }
}

impl StockConfig {
    pub const KEYS: [&'static str; 2] = ["currency", "highlight-low-stock"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: StockConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "currency" => Ok(self.currency.clone()),
            "highlight-low-stock" => Ok(self.highlight_low_stock.to_string()),
            other => Err(unknown_key(other)),
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "currency" => {
                self.currency = value.trim().to_string();
                Ok(())
            }
            "highlight-low-stock" => {
                self.highlight_low_stock = value.trim().parse().map_err(|_| {
                    StockError::invalid(key, format!("'{}' is not true or false", value))
                })?;
                Ok(())
            }
            other => Err(unknown_key(other)),
        }
    }

    pub fn money(&self, amount: f64) -> String {
        format!("{}{:.2}", self.currency, amount)
    }
}

fn unknown_key(key: &str) -> StockError {
    StockError::InvalidInput(format!(
        "unknown config key '{}' (expected one of: {})",
        key,
        StockConfig::KEYS.join(", ")
    ))
}
