//! EmbeddingHost struct definition and constructor.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::mpsc;
use std::sync::Arc;

use boardhost_common::types::{PixelRect, Rect};
use boardhost_common::{Notice, NoticeQueue, TabId};
use boardhost_platform::{WindowHandle, WindowSystem};
use tokio::runtime::Handle;

use super::types::{EmbedSettings, HostEvent, StrayProcess};
use crate::collaborators::{ExecutableLocator, RecentFiles, RecentFilesList};
use crate::geometry::{physical_content, Debouncer};
use crate::process::Launcher;
use crate::session::SessionRegistry;
use crate::tabs::TabStrip;

/// Hosts foreign viewer windows as tab content.
///
/// Every method must be called from the thread that owns the host window.
pub struct EmbeddingHost {
    pub(super) ws: Arc<dyn WindowSystem>,
    pub(super) runtime: Handle,
    pub(super) launcher: Arc<dyn Launcher>,
    pub(super) locator: Box<dyn ExecutableLocator>,
    pub(super) recent: Box<dyn RecentFiles>,
    pub(super) settings: EmbedSettings,

    // Tabs and the sessions behind them
    pub(super) tabs: TabStrip,
    pub(super) registry: SessionRegistry,
    // Unembedded viewers still owned by their tab
    pub(super) strays: HashMap<TabId, StrayProcess>,
    // Every staging directory created under the temp root
    pub(super) staged_dirs: HashSet<PathBuf>,

    // Host window state (content is in physical client pixels)
    pub(super) host_window: WindowHandle,
    pub(super) content: PixelRect,
    pub(super) minimized: bool,
    pub(super) layout: Debouncer,

    // Background results, drained by `pump`
    pub(super) events_tx: mpsc::Sender<HostEvent>,
    pub(super) events_rx: mpsc::Receiver<HostEvent>,

    pub(super) notices: NoticeQueue,
    pub(super) shut_down: bool,
}

impl EmbeddingHost {
    pub fn new(
        ws: Arc<dyn WindowSystem>,
        runtime: Handle,
        launcher: Arc<dyn Launcher>,
        locator: Box<dyn ExecutableLocator>,
        settings: EmbedSettings,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::channel();
        Self {
            ws,
            runtime,
            launcher,
            locator,
            recent: Box::new(RecentFilesList::new()),
            layout: Debouncer::new(settings.debounce),
            settings,
            tabs: TabStrip::new(),
            registry: SessionRegistry::new(),
            strays: HashMap::new(),
            staged_dirs: HashSet::new(),
            host_window: WindowHandle::NULL,
            content: PixelRect::default(),
            minimized: false,
            events_tx,
            events_rx,
            notices: NoticeQueue::default(),
            shut_down: false,
        }
    }

    pub fn with_recent_files(mut self, recent: Box<dyn RecentFiles>) -> Self {
        self.recent = recent;
        self
    }

    /// Bind to the host's top-level window. `content` is the region tab
    /// content occupies, in logical client coordinates.
    pub fn attach(&mut self, host_window: WindowHandle, content: Rect, scale: f64) {
        tracing::debug!(%host_window, "embedding host attached");
        self.host_window = host_window;
        self.content = physical_content(content, scale);
        self.sync_geometry();
    }

    pub fn host_window(&self) -> WindowHandle {
        self.host_window
    }

    pub fn tabs(&self) -> &TabStrip {
        &self.tabs
    }

    pub fn registry(&self) -> &SessionRegistry {
        &self.registry
    }

    pub fn settings(&self) -> &EmbedSettings {
        &self.settings
    }

    pub fn is_minimized(&self) -> bool {
        self.minimized
    }

    pub fn is_shut_down(&self) -> bool {
        self.shut_down
    }

    /// Pids of viewers that run unembedded after their window never appeared.
    pub fn stray_pids(&self) -> Vec<u32> {
        self.strays.values().map(|s| s.process.pid()).collect()
    }

    pub fn recent_files(&self) -> Vec<PathBuf> {
        self.recent.entries()
    }

    /// Newest transient notice that has not expired.
    pub fn latest_notice(&mut self) -> Option<&Notice> {
        self.notices.latest()
    }

    pub(super) fn alert_owner(&self) -> Option<WindowHandle> {
        (!self.host_window.is_null()).then_some(self.host_window)
    }

    /// A hidden container surface covering the content region, or the null
    /// handle when there is no host window yet or creation fails.
    pub(super) fn create_surface(&self) -> WindowHandle {
        if self.host_window.is_null() {
            return WindowHandle::NULL;
        }
        match self.ws.create_surface(self.host_window, self.content) {
            Ok(surface) => surface,
            Err(e) => {
                tracing::warn!("failed to create container surface: {e}");
                WindowHandle::NULL
            }
        }
    }

    pub(super) fn destroy_surface(&self, surface: WindowHandle) {
        if surface.is_null() {
            return;
        }
        if let Err(e) = self.ws.destroy_surface(surface) {
            tracing::debug!(%surface, "failed to destroy container surface: {e}");
        }
    }
}
