//! Keeping embedded windows on top of their tab's content region.

use std::time::Instant;

use boardhost_common::errors::EmbedError;
use boardhost_common::types::{PixelRect, Rect};
use boardhost_common::TabId;
use boardhost_config::schema::ConcealMode;
use boardhost_platform::WindowSystem;

use super::core::EmbeddingHost;
use crate::geometry::physical_content;
use crate::session::{EmbeddingSession, SessionState};
use crate::strategy::child::fit_child;
use crate::strategy::overlay::{
    conceal_overlay, hide_overlay, place_overlay, show_overlay, target_rect,
};
use crate::viewer::EmbeddingKind;

impl EmbeddingHost {
    /// The content region moved or resized. The new region is recorded at
    /// once; embedded windows follow when the debounce delay runs out.
    pub fn on_layout(&mut self, content: Rect, scale: f64) {
        self.content = physical_content(content, scale);
        if self.layout.is_immediate() {
            self.sync_geometry();
        } else {
            self.layout.schedule(Instant::now());
        }
    }

    pub fn on_host_moved(&mut self) {
        self.sync_geometry();
    }

    pub fn on_host_activated(&mut self) {
        self.sync_geometry();
        self.focus_selected();
    }

    pub fn on_host_minimized(&mut self, minimized: bool) {
        if self.minimized == minimized {
            return;
        }
        tracing::debug!(minimized, "host window state changed");
        self.minimized = minimized;
        self.sync_geometry();
        self.focus_selected();
    }

    /// Bring every session in line with the current selection, content
    /// region and window state. Only issues native calls for what changed.
    pub(super) fn sync_geometry(&mut self) {
        if self.shut_down {
            return;
        }
        let selected = self.tabs.selected_id();
        for tab in self.registry.tabs() {
            self.sync_session(tab, tab == selected);
        }
    }

    fn sync_session(&mut self, tab: TabId, selected: bool) {
        let ws = self.ws.as_ref();
        let content = self.content;
        let minimized = self.minimized;
        let offscreen = self.settings.offscreen;
        let Some(session) = self.registry.get_mut(tab) else {
            return;
        };
        let conceal = self.settings.conceal(session.viewer());

        sync_surface(ws, session, content, selected);
        if session.state() != SessionState::Embedded {
            return;
        }
        let result = match session.kind() {
            EmbeddingKind::ChildWindow => sync_child(ws, session),
            EmbeddingKind::OverlayWindow => {
                sync_overlay(ws, session, selected, minimized, conceal, offscreen)
            }
        };
        if let Err(e) = result {
            tracing::debug!(tab = %tab, "geometry sync failed: {e}");
        }
    }
}

/// Container surfaces cover the content region and are visible only for
/// the selected tab.
fn sync_surface(
    ws: &dyn WindowSystem,
    session: &mut EmbeddingSession,
    content: PixelRect,
    selected: bool,
) {
    let surface = session.surface;
    if surface.is_null() {
        return;
    }
    if !content.is_empty() && session.surface_rect != Some(content) {
        match ws.move_window(surface, content) {
            Ok(()) => session.surface_rect = Some(content),
            Err(e) => tracing::debug!(%surface, "failed to move surface: {e}"),
        }
    }
    if session.surface_visible != selected {
        match ws.set_visible(surface, selected) {
            Ok(()) => session.surface_visible = selected,
            Err(e) => tracing::debug!(%surface, "failed to toggle surface: {e}"),
        }
    }
}

fn sync_child(ws: &dyn WindowSystem, session: &mut EmbeddingSession) -> Result<(), EmbedError> {
    // The viewer may have recreated its window inside the surface.
    if let Some(current) = ws.first_child(session.surface) {
        if current != session.window {
            tracing::debug!(tab = %session.tab(), old = %session.window, new = %current, "embedded window replaced");
            session.window = current;
            session.last_fit = None;
        }
    }
    if session.window.is_null() {
        return Ok(());
    }
    let notify = session.profile().notify_resize;
    if let Some(fit) = fit_child(ws, session.window, session.surface, session.last_fit, notify)? {
        session.last_fit = Some(fit);
    }
    Ok(())
}

fn sync_overlay(
    ws: &dyn WindowSystem,
    session: &mut EmbeddingSession,
    selected: bool,
    minimized: bool,
    conceal: ConcealMode,
    offscreen: (i32, i32),
) -> Result<(), EmbedError> {
    let window = session.window;
    if minimized {
        return hide_overlay(ws, window, &mut session.overlay);
    }
    if !selected {
        return conceal_overlay(ws, window, &mut session.overlay, conceal, offscreen);
    }
    show_overlay(ws, window, &mut session.overlay)?;
    if let Some(rect) = target_rect(ws, session.surface) {
        place_overlay(ws, window, &mut session.overlay, rect)?;
    }
    Ok(())
}
