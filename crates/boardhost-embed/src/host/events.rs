//! Applying background results on the UI thread.

use std::time::Instant;

use boardhost_common::errors::EmbedError;
use boardhost_common::{Notice, SessionId, TabId};
use boardhost_platform::WindowHandle;

use super::core::EmbeddingHost;
use super::types::{HostEvent, StrayProcess};
use crate::process::cleanup;
use crate::resolver::Resolution;
use crate::session::SessionState;
use crate::strategy::child::{adopt_child, embed_child};
use crate::strategy::overlay::embed_overlay;
use crate::strategy::{step, OverlayState};
use crate::viewer::{EmbeddingKind, WindowSource};

impl EmbeddingHost {
    /// Drain background events and flush a due layout sync.
    /// Returns whether anything visible changed.
    pub fn pump(&mut self, now: Instant) -> bool {
        let mut changed = false;
        while let Ok(event) = self.events_rx.try_recv() {
            changed |= self.handle_event(event);
        }
        if self.layout.fire(now) {
            self.sync_geometry();
            changed = true;
        }
        changed
    }

    /// When `pump` next has debounced work to do.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.layout.deadline()
    }

    pub(super) fn handle_event(&mut self, event: HostEvent) -> bool {
        if self.shut_down {
            return false;
        }
        match event {
            HostEvent::Resolved {
                tab,
                session,
                resolution,
            } => self.handle_resolved(tab, &session, resolution),
            HostEvent::ProcessExited { tab, session } => self.handle_exited(tab, &session),
        }
    }

    fn handle_resolved(&mut self, tab: TabId, id: &SessionId, resolution: Resolution) -> bool {
        let Some(session) = self.registry.current_mut(tab, id) else {
            tracing::debug!(tab = %tab, "dropping resolution for a retired session");
            return false;
        };
        // At most one embedding attempt per session.
        if session.state() != SessionState::Resolving {
            return false;
        }
        let exited = session.has_exited();
        match resolution {
            Resolution::Found(window) => self.embed_resolved(tab, window),
            // The exit event may still be queued behind this result.
            Resolution::NotFound if exited => self.finish_exited(tab),
            Resolution::NotFound => self.resolution_timed_out(tab),
        }
        true
    }

    /// The window never appeared. The session is dropped but its process
    /// keeps running, owned by the tab until the tab is closed or reused.
    fn resolution_timed_out(&mut self, tab: TabId) {
        let Some(mut session) = self.registry.remove(tab) else {
            return;
        };
        session.advance(SessionState::Exited);
        let viewer = session.viewer();
        tracing::warn!(tab = %tab, viewer = %viewer, pid = ?session.pid(), "viewer window never appeared");
        self.destroy_surface(session.surface());

        let staging_dir = session.staging_dir.take();
        match session.take_process() {
            Some(process) => {
                self.strays.insert(
                    tab,
                    StrayProcess {
                        session: session.id().clone(),
                        viewer,
                        process,
                        staging_dir,
                    },
                );
            }
            None => {
                if let Some(dir) = staging_dir {
                    self.runtime
                        .spawn_blocking(move || cleanup::remove_dir_quietly(&dir));
                }
            }
        }

        match viewer.profile().timeout_notice {
            Some(text) => self.tabs.set_notice(tab, text),
            None => self.tabs.set_start(tab),
        }
        self.notices
            .push(Notice::warning(format!("{viewer} window did not appear")));
    }

    fn embed_resolved(&mut self, tab: TabId, window: WindowHandle) {
        let ws = self.ws.clone();
        let host = self.host_window;
        let offscreen = self.settings.offscreen;
        let Some(session) = self.registry.get_mut(tab) else {
            return;
        };
        session.window = window;
        let viewer = session.viewer();
        let profile = session.profile();
        let surface = session.surface();

        let result = if host.is_null() || surface.is_null() {
            Err(EmbedError::NotAttached)
        } else {
            match (session.kind(), profile.window_source) {
                (EmbeddingKind::ChildWindow, WindowSource::ContainerChild) => {
                    adopt_child(ws.as_ref(), window, surface, profile.notify_resize)
                        .map(|fit| session.last_fit = fit)
                }
                (EmbeddingKind::ChildWindow, WindowSource::ProcessWindow) => {
                    embed_child(ws.as_ref(), window, surface, offscreen)
                        .map(|fit| session.last_fit = fit)
                }
                (EmbeddingKind::OverlayWindow, _) => {
                    embed_overlay(ws.as_ref(), window, host, profile.tool_window, offscreen)
                        .and_then(|()| step("show overlay", ws.set_visible(window, true)))
                        .map(|()| {
                            session.overlay = OverlayState {
                                visible: true,
                                ..OverlayState::default()
                            }
                        })
                }
            }
        };

        match result {
            Ok(()) => {
                session.advance(SessionState::Embedded);
                tracing::info!(tab = %tab, viewer = %viewer, %window, kind = ?session.kind(), "viewer embedded");
                self.sync_geometry();
                if self.tabs.selected_id() == tab {
                    self.focus_selected();
                }
            }
            Err(e) => {
                session.advance(SessionState::Detached);
                tracing::warn!(tab = %tab, viewer = %viewer, "embedding failed, viewer stays a separate window: {e}");
                if let Some(text) = profile.timeout_notice {
                    self.tabs.set_notice(tab, text);
                }
                self.notices
                    .push(Notice::warning(format!("{viewer} could not be embedded")));
            }
        }
    }

    fn handle_exited(&mut self, tab: TabId, id: &SessionId) -> bool {
        if self.strays.get(&tab).is_some_and(|stray| &stray.session == id) {
            self.finish_stray(tab);
            return true;
        }
        if self.registry.current_mut(tab, id).is_none() {
            tracing::debug!(tab = %tab, "exit of a retired session");
            return false;
        }
        self.finish_exited(tab);
        true
    }

    /// Tear down a session whose process ended on its own, with its tab.
    fn finish_exited(&mut self, tab: TabId) {
        let Some(mut session) = self.registry.remove(tab) else {
            return;
        };
        session.advance(SessionState::Exited);
        let viewer = session.viewer();
        tracing::info!(tab = %tab, viewer = %viewer, "viewer process exited");

        self.destroy_surface(session.surface());
        if let Some(dir) = session.staging_dir.take() {
            self.runtime
                .spawn_blocking(move || cleanup::remove_dir_quietly(&dir));
        }
        self.tabs.remove(tab);
        self.notices
            .push(Notice::info(format!("{viewer} process exited")));
        self.apply_selection();
    }

    /// An unembedded viewer ended on its own. Its tab keeps its content.
    fn finish_stray(&mut self, tab: TabId) {
        let Some(stray) = self.strays.remove(&tab) else {
            return;
        };
        tracing::info!(tab = %tab, viewer = %stray.viewer, "unembedded viewer exited");
        if let Some(dir) = stray.staging_dir {
            self.runtime
                .spawn_blocking(move || cleanup::remove_dir_quietly(&dir));
        }
        self.notices
            .push(Notice::info(format!("{} process exited", stray.viewer)));
    }
}
