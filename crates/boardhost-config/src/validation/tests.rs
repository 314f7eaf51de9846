//! Tests for the full validation pipeline.

use super::*;
use crate::schema::BoardhostConfig;

#[test]
fn default_config_validates() {
    assert!(validate(&BoardhostConfig::default()).is_ok());
}

#[test]
fn catches_zero_attempts() {
    let mut config = BoardhostConfig::default();
    config.resolver.attempts = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("resolver.attempts"));
}

#[test]
fn catches_interval_too_short() {
    let mut config = BoardhostConfig::default();
    config.resolver.interval_ms = 1;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("resolver.interval_ms = 1 is out of range [10, 5000]"));
}

#[test]
fn catches_debounce_too_long() {
    let mut config = BoardhostConfig::default();
    config.geometry.debounce_ms = 2000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("geometry.debounce_ms"));
}

#[test]
fn catches_relative_viewer_path() {
    let mut config = BoardhostConfig::default();
    config.viewers.open_board_view.path = "OpenBoardView.exe".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("viewers.open_board_view.path"));
}

#[test]
fn catches_startup_delay_out_of_range() {
    let mut config = BoardhostConfig::default();
    config.viewers.sumatra_pdf.startup_delay_ms = Some(60_000);
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("viewers.sumatra_pdf.startup_delay_ms"));
}

#[test]
fn collects_all_errors() {
    let mut config = BoardhostConfig::default();
    config.resolver.attempts = 0;
    config.lifecycle.terminate_timeout_ms = 1;
    config.window.width = 10;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("resolver.attempts"));
    assert!(err.contains("lifecycle.terminate_timeout_ms"));
    assert!(err.contains("window.width"));
    assert_eq!(err.matches("; ").count(), 2);
}
