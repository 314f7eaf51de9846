//! Geometry synchronisation settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeometryConfig {
    /// Coalescing delay for continuous resize/layout events (valid range: 0-1000).
    pub debounce_ms: u64,
    /// Where concealed off-screen overlays are parked.
    pub offscreen_x: i32,
    pub offscreen_y: i32,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 50,
            offscreen_x: -10000,
            offscreen_y: -10000,
        }
    }
}
