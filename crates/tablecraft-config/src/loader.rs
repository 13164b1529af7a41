//! Configuration loading and validation.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::TablecraftConfig;

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Load full TableCraft configuration from a YAML file.
pub fn load_config(path: &Path) -> Result<TablecraftConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: TablecraftConfig = serde_yaml::from_str(&content)?;
    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &TablecraftConfig) -> Result<(), ConfigError> {
    if config.version == 0 {
        return Err(ConfigError::Invalid(
            "version must be greater than 0".to_string(),
        ));
    }

    if config.app.name.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "app.name must not be empty".to_string(),
        ));
    }

    if config.backend.kind.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "backend.kind must not be empty".to_string(),
        ));
    }

    if config.backend.api_key_env.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "backend.api_key_env must not be empty".to_string(),
        ));
    }

    if config.backend.timeout_secs == 0 {
        return Err(ConfigError::Invalid(
            "backend.timeout_secs must be > 0".to_string(),
        ));
    }

    for (section, model) in [
        ("generator", &config.generator.model),
        ("assistant", &config.assistant.model),
        ("image", &config.image.model),
    ] {
        if model.trim().is_empty() {
            return Err(ConfigError::Invalid(format!(
                "{}.model must not be empty",
                section
            )));
        }
    }

    if config.image.placeholder_url.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "image.placeholder_url must not be empty".to_string(),
        ));
    }

    Ok(())
}
