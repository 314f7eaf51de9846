//! Per-section validators.

use std::path::Path;

use crate::schema::BoardhostConfig;

use super::helpers::validate_range;

pub(crate) fn validate_resolver(errors: &mut Vec<String>, config: &BoardhostConfig) {
    validate_range(errors, "resolver.attempts", config.resolver.attempts, 1, 600);
    validate_range(
        errors,
        "resolver.interval_ms",
        config.resolver.interval_ms,
        10,
        5000,
    );
}

pub(crate) fn validate_geometry(errors: &mut Vec<String>, config: &BoardhostConfig) {
    validate_range(
        errors,
        "geometry.debounce_ms",
        config.geometry.debounce_ms,
        0,
        1000,
    );
}

pub(crate) fn validate_lifecycle(errors: &mut Vec<String>, config: &BoardhostConfig) {
    validate_range(
        errors,
        "lifecycle.terminate_timeout_ms",
        config.lifecycle.terminate_timeout_ms,
        100,
        30000,
    );
    validate_range(
        errors,
        "lifecycle.cleanup_delay_ms",
        config.lifecycle.cleanup_delay_ms,
        0,
        10000,
    );
}

/// Viewer paths must be absolute when given; the launcher sets the working
/// directory from the executable's parent.
pub(crate) fn validate_viewers(errors: &mut Vec<String>, config: &BoardhostConfig) {
    for (name, viewer) in config.viewers.sections() {
        if !viewer.path.is_empty() && !Path::new(&viewer.path).is_absolute() {
            errors.push(format!(
                "viewers.{name}.path = {:?} must be an absolute path",
                viewer.path
            ));
        }
        if let Some(delay) = viewer.startup_delay_ms {
            validate_range(
                errors,
                &format!("viewers.{name}.startup_delay_ms"),
                delay,
                0,
                30000,
            );
        }
    }
}

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &BoardhostConfig) {
    validate_range(errors, "window.width", config.window.width, 320, 7680);
    validate_range(errors, "window.height", config.window.height, 240, 4320);
}
