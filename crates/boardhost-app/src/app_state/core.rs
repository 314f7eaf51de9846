//! BoardhostApp struct definition and constructor.

use std::path::PathBuf;
use std::sync::Arc;

use winit::window::Window;

use boardhost_config::schema::BoardhostConfig;
use boardhost_embed::{
    DiscoveryLocator, EmbedSettings, EmbeddingHost, RecentFilesList, TokioLauncher, ViewerKind,
};

/// Top-level application state.
pub struct BoardhostApp {
    pub(super) config: BoardhostConfig,

    // Windowing
    pub(super) window: Option<Arc<Window>>,

    // Embedding engine (tabs, sessions, viewer processes)
    pub(super) host: EmbeddingHost,

    // Modifier tracking (winit sends these separately)
    pub(super) modifiers: winit::keyboard::ModifiersState,

    // Files from the command line, opened once the window exists
    pub(super) pending_files: Vec<PathBuf>,
    pub(super) pending_viewer: Option<ViewerKind>,

    // Last title pushed to the window
    pub(super) title: String,

    pub(super) tokio_runtime: Option<tokio::runtime::Runtime>,
    pub(super) shut_down: bool,
}

impl BoardhostApp {
    pub fn new(
        config: BoardhostConfig,
        runtime: tokio::runtime::Runtime,
        files: Vec<PathBuf>,
        viewer: Option<ViewerKind>,
    ) -> Self {
        let handle = runtime.handle().clone();
        let app_dir = boardhost_platform::app_dir().unwrap_or_else(|| {
            tracing::warn!("Could not determine application directory, using working directory");
            PathBuf::from(".")
        });
        tracing::debug!(app_dir = %app_dir.display(), "viewer discovery root");

        let host = EmbeddingHost::new(
            boardhost_platform::create_window_system(),
            handle.clone(),
            Arc::new(TokioLauncher::new(handle)),
            Box::new(DiscoveryLocator::from_config(app_dir, &config.viewers)),
            EmbedSettings::from_config(&config),
        )
        .with_recent_files(Box::new(RecentFilesList::new()));

        Self {
            config,
            window: None,
            host,
            modifiers: winit::keyboard::ModifiersState::empty(),
            pending_files: files,
            pending_viewer: viewer,
            title: String::new(),
            tokio_runtime: Some(runtime),
            shut_down: false,
        }
    }
}
