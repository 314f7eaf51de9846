//! Types shared across the host's sub-modules.

use std::path::PathBuf;
use std::time::Duration;

use boardhost_common::{SessionId, TabId};
use boardhost_config::schema::{BoardhostConfig, ConcealMode, ViewersConfig};

use crate::process::ProcessHandle;
use crate::resolver::{Resolution, RetryPolicy};
use crate::viewer::ViewerKind;

/// Results of background work, marshaled onto the UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    Resolved {
        tab: TabId,
        session: SessionId,
        resolution: Resolution,
    },
    /// The viewer ended on its own. Never sent for a requested termination.
    ProcessExited { tab: TabId, session: SessionId },
}

/// What `open_file` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    /// The file was already open; that tab is now selected.
    Existing(TabId),
    /// A viewer was started in this tab.
    Launched(TabId),
}

impl OpenOutcome {
    pub fn tab(self) -> TabId {
        match self {
            OpenOutcome::Existing(tab) | OpenOutcome::Launched(tab) => tab,
        }
    }
}

/// A viewer whose window never appeared. It keeps running on its own and
/// is terminated when its tab closes, gets another viewer, or the host exits.
#[derive(Debug)]
pub(super) struct StrayProcess {
    pub session: SessionId,
    pub viewer: ViewerKind,
    pub process: ProcessHandle,
    pub staging_dir: Option<PathBuf>,
}

/// Engine settings derived from the loaded config.
#[derive(Debug, Clone)]
pub struct EmbedSettings {
    pub retry: RetryPolicy,
    pub debounce: Duration,
    pub offscreen: (i32, i32),
    pub terminate_timeout: Duration,
    pub cleanup_delay: Duration,
    pub temp_root: PathBuf,
    pub viewers: ViewersConfig,
}

impl EmbedSettings {
    pub fn from_config(config: &BoardhostConfig) -> Self {
        Self {
            retry: RetryPolicy::from_config(&config.resolver),
            debounce: Duration::from_millis(config.geometry.debounce_ms),
            offscreen: (config.geometry.offscreen_x, config.geometry.offscreen_y),
            terminate_timeout: Duration::from_millis(config.lifecycle.terminate_timeout_ms),
            cleanup_delay: Duration::from_millis(config.lifecycle.cleanup_delay_ms),
            temp_root: config.lifecycle.temp_root_path(),
            viewers: config.viewers.clone(),
        }
    }

    pub fn startup_delay(&self, kind: ViewerKind) -> Duration {
        kind.config(&self.viewers)
            .startup_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(kind.profile().startup_delay)
    }

    pub fn conceal(&self, kind: ViewerKind) -> ConcealMode {
        kind.config(&self.viewers)
            .conceal
            .unwrap_or(kind.profile().conceal)
    }

    pub fn isolate(&self, kind: ViewerKind) -> bool {
        kind.config(&self.viewers).isolate
    }
}

impl Default for EmbedSettings {
    fn default() -> Self {
        Self::from_config(&BoardhostConfig::default())
    }
}
