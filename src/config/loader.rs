//! JSON configuration loader
//!
//! Reads `EngineConfig` from data/engine_config.json or a caller-supplied path.

use log::info;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use thiserror::Error;

use super::EngineConfig;

/// Default location of the configuration file
pub const DEFAULT_CONFIG_PATH: &str = "data/engine_config.json";

/// Environment variable naming an alternative configuration file
pub const CONFIG_ENV_VAR: &str = "FINCALC_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Load and validate configuration from a file
pub fn load_config(path: &Path) -> Result<EngineConfig, ConfigError> {
    let file = File::open(path)?;
    let config = load_config_from_reader(BufReader::new(file))?;
    info!("loaded engine configuration from {}", path.display());
    Ok(config)
}

/// Load and validate configuration from any reader
pub fn load_config_from_reader<R: Read>(reader: R) -> Result<EngineConfig, ConfigError> {
    let config: EngineConfig = serde_json::from_reader(reader)?;
    config.validate()?;
    Ok(config)
}

/// Load configuration from the default path
pub fn load_default_config() -> Result<EngineConfig, ConfigError> {
    load_config(Path::new(DEFAULT_CONFIG_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::BudgetRule;

    #[test]
    fn test_load_default_config() {
        let result = load_default_config();
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let config = result.unwrap();
        assert_eq!(config.budget, BudgetRule::default());
        assert_eq!(config.locale.currency_symbol, "₫");
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let json = r#"{ "budget": { "needs": 0.6, "wants": 0.2 } }"#;
        let config = load_config_from_reader(json.as_bytes()).unwrap();

        assert_eq!(config.budget.needs, 0.6);
        assert_eq!(config.budget.wants, 0.2);
        assert_eq!(config.budget.savings, 0.2);
        assert_eq!(config.locale.thousands_separator, '.');
    }

    #[test]
    fn test_empty_object_is_default() {
        let config = load_config_from_reader("{}".as_bytes()).unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_rejects_bad_budget() {
        let json = r#"{ "budget": { "needs": 0.9, "wants": 0.3, "savings": 0.2 } }"#;
        let err = load_config_from_reader(json.as_bytes()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_clashing_separators() {
        let json = r#"{ "locale": { "thousands_separator": "," } }"#;
        assert!(matches!(
            load_config_from_reader(json.as_bytes()),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            load_config_from_reader("{ budget".as_bytes()),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            load_config(Path::new("data/does_not_exist.json")),
            Err(ConfigError::Io(_))
        ));
    }
}
