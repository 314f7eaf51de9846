//! Host window settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Static part of the window title.
    pub title: String,
    /// Initial logical width (valid range: 320-7680).
    pub width: u32,
    /// Initial logical height (valid range: 240-4320).
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Boardhost".into(),
            width: 1280,
            height: 800,
        }
    }
}
