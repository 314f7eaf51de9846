//! Window-handle resolution budget.

use serde::{Deserialize, Serialize};

/// How long the resolver keeps polling a freshly started viewer for its window.
///
/// The total wait is roughly `attempts * interval_ms` plus any per-viewer
/// startup delay.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Maximum number of polling attempts (valid range: 1-600).
    pub attempts: u32,
    /// Delay between attempts in milliseconds (valid range: 10-5000).
    pub interval_ms: u64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            attempts: 50,
            interval_ms: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolver_defaults() {
        let config = ResolverConfig::default();
        assert_eq!(config.attempts, 50);
        assert_eq!(config.interval_ms, 100);
    }

    #[test]
    fn resolver_partial_toml() {
        let config: ResolverConfig = toml::from_str("interval_ms = 25").unwrap();
        assert_eq!(config.interval_ms, 25);
        assert_eq!(config.attempts, 50);
    }
}
