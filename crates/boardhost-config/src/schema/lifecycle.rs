//! Process termination and temporary-directory cleanup settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LifecycleConfig {
    /// Upper bound on waiting for one forced termination (valid range: 100-30000).
    pub terminate_timeout_ms: u64,
    /// Grace period between killing a viewer and deleting its temp directory
    /// (valid range: 0-10000).
    pub cleanup_delay_ms: u64,
    /// Root for per-session temporary directories. Empty means
    /// `<system temp>/boardhost`.
    pub temp_root: String,
}

impl LifecycleConfig {
    /// The effective temp root, with the empty default resolved.
    pub fn temp_root_path(&self) -> PathBuf {
        if self.temp_root.trim().is_empty() {
            std::env::temp_dir().join("boardhost")
        } else {
            PathBuf::from(&self.temp_root)
        }
    }
}

impl Default for LifecycleConfig {
    fn default() -> Self {
        Self {
            terminate_timeout_ms: 3000,
            cleanup_delay_ms: 500,
            temp_root: String::new(),
        }
    }
}
