//! Engine configuration: budget rule and display locale

pub mod loader;

pub use loader::{ConfigError, CONFIG_ENV_VAR, DEFAULT_CONFIG_PATH};

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::calculators::BudgetRule;
use crate::format::NumberLocale;

/// Settings shared by every calculator run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub budget: BudgetRule,
    pub locale: NumberLocale,
}

impl EngineConfig {
    /// Load from a JSON file; missing fields keep their defaults
    pub fn from_json_path(path: &Path) -> Result<Self, ConfigError> {
        loader::load_config(path)
    }

    /// Load from any reader (string buffer, request body, ...)
    pub fn from_reader<R: std::io::Read>(reader: R) -> Result<Self, ConfigError> {
        loader::load_config_from_reader(reader)
    }

    /// Load from the path in `FINCALC_CONFIG`. When it is unset, fall back to
    /// `data/engine_config.json` if present, then to built-in defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::from_json_path(Path::new(&path)),
            None => Self::from_default_path(),
        }
    }

    /// Load `data/engine_config.json`, or defaults when the file does not exist
    pub fn from_default_path() -> Result<Self, ConfigError> {
        if Path::new(DEFAULT_CONFIG_PATH).exists() {
            loader::load_default_config()
        } else {
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.budget.validate().map_err(ConfigError::Invalid)?;
        if self.locale.thousands_separator == self.locale.decimal_separator {
            return Err(ConfigError::Invalid(
                "thousands and decimal separators must differ".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path_is_shipped_config() {
        let config = EngineConfig::from_default_path().unwrap();
        let shipped = EngineConfig::from_json_path(Path::new(DEFAULT_CONFIG_PATH)).unwrap();

        assert_eq!(config, shipped);
        assert_eq!(config.budget, BudgetRule::default());
    }
}
