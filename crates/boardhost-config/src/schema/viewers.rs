//! Per-viewer overrides.

use serde::{Deserialize, Serialize};

/// How an overlay is taken out of view when its tab is deselected.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ConcealMode {
    /// Hide the window.
    Hide,
    /// Keep the window shown but park it outside every monitor.
    Offscreen,
}

/// Overrides for one viewer. Unset fields fall back to the viewer's built-in profile.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ViewerConfig {
    /// Explicit executable path. Empty means auto-discovery next to the app.
    pub path: String,
    /// Launch from a per-session copy of the viewer's install directory.
    pub isolate: bool,
    /// Wait before the first window lookup (valid range: 0-30000).
    pub startup_delay_ms: Option<u64>,
    pub conceal: Option<ConcealMode>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ViewersConfig {
    pub board_viewer: ViewerConfig,
    pub open_board_view: ViewerConfig,
    pub flex_board_view: ViewerConfig,
    pub sumatra_pdf: ViewerConfig,
}

impl ViewersConfig {
    /// All viewer sections with their TOML key, for validation messages.
    pub fn sections(&self) -> [(&'static str, &ViewerConfig); 4] {
        [
            ("board_viewer", &self.board_viewer),
            ("open_board_view", &self.open_board_view),
            ("flex_board_view", &self.flex_board_view),
            ("sumatra_pdf", &self.sumatra_pdf),
        ]
    }
}
