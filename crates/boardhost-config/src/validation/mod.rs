//! Full configuration validation.
//!
//! Validates numeric ranges and viewer overrides, collecting every problem
//! into a single `ConfigError`.

mod helpers;
mod sections;

#[cfg(test)]
mod tests;

use crate::schema::BoardhostConfig;
use boardhost_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &BoardhostConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    sections::validate_resolver(&mut errors, config);
    sections::validate_geometry(&mut errors, config);
    sections::validate_lifecycle(&mut errors, config);
    sections::validate_viewers(&mut errors, config);
    sections::validate_window(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
