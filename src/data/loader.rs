//! RON config loader
//!
//! Loads game settings from an optional RON file, with fallback to defaults.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::entities::{Catalog, MAX_PRICE};
use crate::error::ConfigError;
use crate::items::{Item, KIT_CAPACITY};

/// Tunable game settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of kit slots
    pub kit_capacity: usize,
    /// Shop prices that replace the defaults
    pub prices: BTreeMap<Item, u32>,
    /// Fixed RNG seed for a reproducible session
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            kit_capacity: KIT_CAPACITY,
            prices: BTreeMap::new(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Parse and validate a config from RON text
    pub fn from_ron(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = ron::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_ron(&content)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load a config file if given, falling back to defaults on any problem
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        Self::load(path).unwrap_or_else(|e| {
            log::warn!("{}. Using default settings.", e);
            Self::default()
        })
    }

    /// The shop catalog with this config's price overrides
    pub fn catalog(&self) -> Catalog {
        Catalog::with_overrides(&self.prices)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.kit_capacity == 0 {
            return Err(ConfigError::Invalid("kit_capacity must be at least 1".to_string()));
        }
        if let Some((item, _)) = self.prices.iter().find(|(_, price)| **price == 0) {
            return Err(ConfigError::Invalid(format!("price of {} must be at least 1", item)));
        }
        if let Some((item, price)) = self.prices.iter().find(|(_, price)| **price > MAX_PRICE) {
            return Err(ConfigError::Invalid(format!(
                "price of {} is {}, above the limit of {}",
                item, price, MAX_PRICE
            )));
        }
        Ok(())
    }
}
