//! Boardhost configuration.
//!
//! TOML-based configuration with full validation. Every section uses serde
//! defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use boardhost_config::{config_to_json, load_config};
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{BoardhostConfig, CONFIG_SCHEMA_VERSION};

use std::path::Path;

use boardhost_common::ConfigError;

/// Load `config.toml` from the OS config directory, creating a default file
/// if none exists, and validate the result.
pub fn load_config() -> Result<BoardhostConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load and validate a config file at an explicit path (`--config`).
pub fn load_config_from(path: &Path) -> Result<BoardhostConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &BoardhostConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
