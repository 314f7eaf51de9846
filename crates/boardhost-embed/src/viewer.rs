//! Viewer kinds and their static embedding profiles.
//!
//! Every per-viewer difference in launch, embedding, focus and cleanup is
//! captured once in a [`ViewerProfile`] so the rest of the engine never
//! branches on a viewer's name.

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use boardhost_config::schema::{ConcealMode, ViewerConfig, ViewersConfig};
use serde::{Deserialize, Serialize};

/// Which external executable a session wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewerKind {
    BoardViewer,
    OpenBoardView,
    FlexBoardView,
    SumatraPdf,
}

/// How a resolved window is hosted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmbeddingKind {
    /// Re-parented into the container surface.
    ChildWindow,
    /// Undecorated popup owned by the host and kept over the container surface.
    OverlayWindow,
}

/// How the viewer's command line is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchStyle {
    /// `"<file>"`
    FileArgument,
    /// `-plugin <surface> "<file>"`: the viewer renders straight into the surface.
    PluginHost,
}

/// Where the resolver looks for the viewer's window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowSource {
    /// The process's own top-level window.
    ProcessWindow,
    /// The first child the viewer created inside the container surface.
    ContainerChild,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewerProfile {
    pub display_name: &'static str,
    pub exe_name: &'static str,
    /// Install folder name searched next to the host.
    pub folder: &'static str,
    pub embedding: EmbeddingKind,
    pub launch: LaunchStyle,
    pub window_source: WindowSource,
    /// Send activate-app and activate before giving the window focus.
    pub needs_activation: bool,
    pub conceal: ConcealMode,
    /// Overlay is restyled as a tool window and its frame refreshed.
    pub tool_window: bool,
    /// Crash-log folder under the local app-data directory. When set, it is
    /// purged together with `<exe dir>/logs` before each launch.
    pub log_cleanup: Option<&'static str>,
    /// Tab text shown when the window never appears.
    pub timeout_notice: Option<&'static str>,
    pub startup_delay: Duration,
    /// Send a size notification after every fit.
    pub notify_resize: bool,
}

const BOARD_VIEWER: ViewerProfile = ViewerProfile {
    display_name: "BoardViewer",
    exe_name: "BoardViewer.exe",
    folder: "BoardViewer",
    embedding: EmbeddingKind::ChildWindow,
    launch: LaunchStyle::FileArgument,
    window_source: WindowSource::ProcessWindow,
    needs_activation: false,
    conceal: ConcealMode::Hide,
    tool_window: false,
    log_cleanup: None,
    timeout_notice: None,
    startup_delay: Duration::ZERO,
    notify_resize: false,
};

const OPEN_BOARD_VIEW: ViewerProfile = ViewerProfile {
    display_name: "OpenBoardView",
    exe_name: "OpenBoardView.exe",
    folder: "OpenBoardView",
    embedding: EmbeddingKind::OverlayWindow,
    needs_activation: true,
    ..BOARD_VIEWER
};

const FLEX_BOARD_VIEW: ViewerProfile = ViewerProfile {
    display_name: "FlexBoardView",
    exe_name: "FlexBoardView.exe",
    folder: "FlexBoardView",
    embedding: EmbeddingKind::OverlayWindow,
    conceal: ConcealMode::Offscreen,
    tool_window: true,
    log_cleanup: Some("FlexBV5/logs"),
    timeout_notice: Some(
        "FlexBoardView is running in a separate window.\n\nUse the context menu to switch viewers.",
    ),
    ..BOARD_VIEWER
};

const SUMATRA_PDF: ViewerProfile = ViewerProfile {
    display_name: "SumatraPDF",
    exe_name: "SumatraPDF.exe",
    folder: "SumatraPDF",
    launch: LaunchStyle::PluginHost,
    window_source: WindowSource::ContainerChild,
    startup_delay: Duration::from_millis(1000),
    notify_resize: true,
    ..BOARD_VIEWER
};

impl ViewerKind {
    pub const ALL: [ViewerKind; 4] = [
        ViewerKind::BoardViewer,
        ViewerKind::OpenBoardView,
        ViewerKind::FlexBoardView,
        ViewerKind::SumatraPdf,
    ];

    pub fn profile(self) -> &'static ViewerProfile {
        match self {
            ViewerKind::BoardViewer => &BOARD_VIEWER,
            ViewerKind::OpenBoardView => &OPEN_BOARD_VIEW,
            ViewerKind::FlexBoardView => &FLEX_BOARD_VIEW,
            ViewerKind::SumatraPdf => &SUMATRA_PDF,
        }
    }

    pub fn display_name(self) -> &'static str {
        self.profile().display_name
    }

    /// Default viewer for a file: PDFs go to SumatraPDF, everything else to BoardViewer.
    pub fn for_path(path: &Path) -> ViewerKind {
        let is_pdf = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
        if is_pdf {
            ViewerKind::SumatraPdf
        } else {
            ViewerKind::BoardViewer
        }
    }

    /// The `[viewers.*]` section overriding this viewer.
    pub fn config(self, viewers: &ViewersConfig) -> &ViewerConfig {
        match self {
            ViewerKind::BoardViewer => &viewers.board_viewer,
            ViewerKind::OpenBoardView => &viewers.open_board_view,
            ViewerKind::FlexBoardView => &viewers.flex_board_view,
            ViewerKind::SumatraPdf => &viewers.sumatra_pdf,
        }
    }
}

impl fmt::Display for ViewerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ViewerKind {
    type Err = String;

    /// Accepts the kebab-case CLI spelling or the display name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        match wanted.as_str() {
            "board-viewer" | "boardviewer" => Ok(ViewerKind::BoardViewer),
            "open-board-view" | "openboardview" => Ok(ViewerKind::OpenBoardView),
            "flex-board-view" | "flexboardview" => Ok(ViewerKind::FlexBoardView),
            "sumatra-pdf" | "sumatrapdf" => Ok(ViewerKind::SumatraPdf),
            _ => Err(format!("unknown viewer: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pdf_files_go_to_sumatra() {
        assert_eq!(
            ViewerKind::for_path(Path::new("C:/docs/Schematic.PDF")),
            ViewerKind::SumatraPdf
        );
        assert_eq!(
            ViewerKind::for_path(Path::new("board.brd")),
            ViewerKind::BoardViewer
        );
        assert_eq!(ViewerKind::for_path(Path::new("noext")), ViewerKind::BoardViewer);
    }

    #[test]
    fn overlay_viewers() {
        let overlays: Vec<_> = ViewerKind::ALL
            .into_iter()
            .filter(|k| k.profile().embedding == EmbeddingKind::OverlayWindow)
            .collect();
        assert_eq!(
            overlays,
            vec![ViewerKind::OpenBoardView, ViewerKind::FlexBoardView]
        );
    }

    #[test]
    fn only_open_board_view_needs_activation() {
        for kind in ViewerKind::ALL {
            assert_eq!(
                kind.profile().needs_activation,
                kind == ViewerKind::OpenBoardView
            );
        }
    }

    #[test]
    fn flex_board_view_profile() {
        let profile = ViewerKind::FlexBoardView.profile();
        assert_eq!(profile.conceal, ConcealMode::Offscreen);
        assert!(profile.tool_window);
        assert_eq!(profile.log_cleanup, Some("FlexBV5/logs"));
        assert!(profile.timeout_notice.is_some());
    }

    #[test]
    fn sumatra_renders_into_the_surface() {
        let profile = ViewerKind::SumatraPdf.profile();
        assert_eq!(profile.launch, LaunchStyle::PluginHost);
        assert_eq!(profile.window_source, WindowSource::ContainerChild);
        assert_eq!(profile.startup_delay, Duration::from_millis(1000));
        assert!(profile.notify_resize);
    }

    #[test]
    fn parse_viewer_names() {
        assert_eq!("sumatra-pdf".parse::<ViewerKind>(), Ok(ViewerKind::SumatraPdf));
        assert_eq!("FlexBoardView".parse::<ViewerKind>(), Ok(ViewerKind::FlexBoardView));
        assert!("acrobat".parse::<ViewerKind>().is_err());
    }

    #[test]
    fn config_section_lookup() {
        let mut viewers = ViewersConfig::default();
        viewers.open_board_view.isolate = true;
        assert!(ViewerKind::OpenBoardView.config(&viewers).isolate);
        assert!(!ViewerKind::BoardViewer.config(&viewers).isolate);
    }

    #[test]
    fn kind_serializes_kebab_case() {
        let json = serde_json::to_string(&ViewerKind::OpenBoardView).unwrap();
        assert_eq!(json, "\"open-board-view\"");
    }
}
