//! Closing tabs and retiring their sessions.

use std::path::PathBuf;

use boardhost_common::TabId;

use super::core::EmbeddingHost;
use crate::process::{cleanup, ProcessHandle};
use crate::session::{EmbeddingSession, SessionState};
use crate::strategy::overlay::hide_overlay;
use crate::viewer::EmbeddingKind;

impl EmbeddingHost {
    /// Close `tab`, terminating its viewer. The session always leaves the
    /// registry, whether or not the process can be killed.
    pub fn close_tab(&mut self, tab: TabId) -> bool {
        if !self.tabs.contains(tab) {
            return false;
        }
        if let Some(session) = self.registry.remove(tab) {
            tracing::info!(tab = %tab, viewer = %session.viewer(), "closing viewer tab");
            self.retire(session);
        }
        self.release_stray(tab);
        self.tabs.remove(tab);
        self.apply_selection();
        true
    }

    pub fn close_selected(&mut self) -> bool {
        self.close_tab(self.tabs.selected_id())
    }

    /// Take a session out of service: drop its window from view, then
    /// terminate the process and delete its staging directory in the
    /// background.
    pub(super) fn retire(&mut self, mut session: EmbeddingSession) {
        session.advance(SessionState::Closed);
        if session.kind() == EmbeddingKind::OverlayWindow && !session.window().is_null() {
            let window = session.window();
            if let Err(e) = hide_overlay(self.ws.as_ref(), window, &mut session.overlay) {
                tracing::debug!(%window, "failed to hide overlay: {e}");
            }
        }
        self.destroy_surface(session.surface());

        let process = session.take_process();
        let staging_dir = session.staging_dir.take();
        self.terminate_in_background(process, staging_dir);
    }

    /// Terminate the unembedded viewer `tab` still owns, if any.
    /// Returns whether there was one.
    pub(super) fn release_stray(&mut self, tab: TabId) -> bool {
        let Some(stray) = self.strays.remove(&tab) else {
            return false;
        };
        tracing::info!(tab = %tab, viewer = %stray.viewer, pid = stray.process.pid(), "terminating unembedded viewer");
        self.terminate_in_background(Some(stray.process), stray.staging_dir);
        true
    }

    fn terminate_in_background(&self, process: Option<ProcessHandle>, staging_dir: Option<PathBuf>) {
        let timeout = self.settings.terminate_timeout;
        let delay = self.settings.cleanup_delay;
        self.runtime.spawn(async move {
            if let Some(process) = process {
                process.terminate(timeout).await;
            }
            if let Some(dir) = staging_dir {
                tokio::time::sleep(delay).await;
                let _ = tokio::task::spawn_blocking(move || cleanup::remove_dir_quietly(&dir)).await;
            }
        });
    }
}
