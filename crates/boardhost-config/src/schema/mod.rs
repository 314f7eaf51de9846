//! Configuration schema types for Boardhost.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod geometry;
mod lifecycle;
mod logging;
mod resolver;
mod viewers;
mod window;

pub use geometry::*;
pub use lifecycle::*;
pub use logging::*;
pub use resolver::*;
pub use viewers::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Boardhost.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BoardhostConfig {
    pub resolver: ResolverConfig,
    pub geometry: GeometryConfig,
    pub lifecycle: LifecycleConfig,
    pub viewers: ViewersConfig,
    pub window: WindowConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_resolver_budget() {
        let config = BoardhostConfig::default();
        assert_eq!(config.resolver.attempts, 50);
        assert_eq!(config.resolver.interval_ms, 100);
    }

    #[test]
    fn empty_toml_is_all_defaults() {
        let config: BoardhostConfig = toml::from_str("").unwrap();
        assert_eq!(config.geometry.debounce_ms, 50);
        assert_eq!(config.lifecycle.cleanup_delay_ms, 500);
        assert_eq!(config.window.title, "Boardhost");
        assert!(config.viewers.board_viewer.path.is_empty());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let toml_str = r#"
[resolver]
attempts = 10

[viewers.flex_board_view]
conceal = "hide"
"#;
        let config: BoardhostConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.resolver.attempts, 10);
        assert_eq!(config.resolver.interval_ms, 100);
        assert_eq!(
            config.viewers.flex_board_view.conceal,
            Some(ConcealMode::Hide)
        );
        assert_eq!(config.viewers.open_board_view.conceal, None);
    }
}
