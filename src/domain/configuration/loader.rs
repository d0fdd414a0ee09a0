//! Configuration file loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, BotConfig};

pub const DEFAULT_CONFIG_FILE: &str = "memebot.toml";

/// Load the bot configuration.
///
/// An explicit path must exist. Without one, `memebot.toml` in the current
/// directory is used when present and defaults otherwise.
pub fn load_config(path: Option<&Path>) -> Result<BotConfig, AppError> {
    let (config_path, explicit) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
    };

    if !config_path.exists() {
        if explicit {
            return Err(AppError::ConfigNotFound(config_path.display().to_string()));
        }
        tracing::debug!("no {} found, using defaults", DEFAULT_CONFIG_FILE);
        return Ok(BotConfig::default());
    }

    let content = fs::read_to_string(&config_path)?;
    tracing::debug!("loaded config from {}", config_path.display());
    parse_config_content(&content)
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<BotConfig, AppError> {
    let config: BotConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
