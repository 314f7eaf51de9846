//! Collaborators the engine consumes but does not own: finding viewer
//! executables and remembering opened files.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use boardhost_config::schema::ViewersConfig;
use boardhost_platform::discover_executable;

use crate::session::path_key;
use crate::viewer::ViewerKind;

/// Finds the executable for a viewer kind.
pub trait ExecutableLocator: Send {
    /// Absolute path of the viewer's executable, or `None` when it is not installed.
    fn locate(&self, kind: ViewerKind) -> Option<PathBuf>;
}

/// Looks next to the host executable, after any explicit `path` override.
#[derive(Debug, Clone)]
pub struct DiscoveryLocator {
    app_dir: PathBuf,
    overrides: HashMap<ViewerKind, PathBuf>,
}

impl DiscoveryLocator {
    pub fn new(app_dir: PathBuf) -> Self {
        Self {
            app_dir,
            overrides: HashMap::new(),
        }
    }

    pub fn from_config(app_dir: PathBuf, viewers: &ViewersConfig) -> Self {
        let mut locator = Self::new(app_dir);
        for kind in ViewerKind::ALL {
            let path = kind.config(viewers).path.trim();
            if !path.is_empty() {
                locator.overrides.insert(kind, PathBuf::from(path));
            }
        }
        locator
    }
}

impl ExecutableLocator for DiscoveryLocator {
    fn locate(&self, kind: ViewerKind) -> Option<PathBuf> {
        if let Some(path) = self.overrides.get(&kind) {
            if path.is_file() {
                return Some(path.clone());
            }
            tracing::warn!(viewer = %kind, path = %path.display(), "configured viewer path does not exist");
        }
        let profile = kind.profile();
        discover_executable(&self.app_dir, profile.folder, profile.exe_name)
    }
}

/// Receives every successfully opened file.
pub trait RecentFiles: Send {
    fn record(&mut self, path: &Path);
    /// Newest first.
    fn entries(&self) -> Vec<PathBuf>;
}

pub const RECENT_FILES_CAPACITY: usize = 10;

/// In-memory most-recently-used list.
#[derive(Debug, Clone, Default)]
pub struct RecentFilesList {
    entries: Vec<PathBuf>,
}

impl RecentFilesList {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecentFiles for RecentFilesList {
    fn record(&mut self, path: &Path) {
        let key = path_key(path);
        self.entries.retain(|existing| path_key(existing) != key);
        self.entries.insert(0, path.to_path_buf());
        self.entries.truncate(RECENT_FILES_CAPACITY);
    }

    fn entries(&self) -> Vec<PathBuf> {
        self.entries.clone()
    }
}
