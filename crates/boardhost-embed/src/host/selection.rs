//! Tab creation, selection and focus.

use boardhost_common::TabId;

use super::core::EmbeddingHost;
use crate::focus::focus_window;
use crate::session::SessionState;
use crate::viewer::EmbeddingKind;

impl EmbeddingHost {
    /// Select an empty start tab, creating one only when none exists.
    pub fn new_tab(&mut self) -> TabId {
        let tab = match self.tabs.find_empty() {
            Some(tab) => {
                self.tabs.select(tab);
                tab
            }
            None => self.tabs.push_empty(),
        };
        self.apply_selection();
        tab
    }

    pub fn select_tab(&mut self, tab: TabId) -> bool {
        if !self.tabs.select(tab) {
            return false;
        }
        self.apply_selection();
        true
    }

    pub fn select_index(&mut self, index: usize) -> bool {
        if !self.tabs.select_index(index) {
            return false;
        }
        self.apply_selection();
        true
    }

    pub fn select_next(&mut self) {
        self.tabs.select_next();
        self.apply_selection();
    }

    pub fn select_previous(&mut self) {
        self.tabs.select_previous();
        self.apply_selection();
    }

    /// Selection changes bypass the layout debouncer.
    pub(super) fn apply_selection(&mut self) {
        self.layout.cancel();
        self.sync_geometry();
        self.focus_selected();
    }

    /// Give keyboard focus to the selected tab's embedded window, if any.
    pub(super) fn focus_selected(&self) {
        if self.minimized || self.shut_down {
            return;
        }
        let Some(session) = self.registry.get(self.tabs.selected_id()) else {
            return;
        };
        let window = session.window();
        if session.state() != SessionState::Embedded || window.is_null() {
            return;
        }
        if !self.ws.is_window(window) {
            tracing::debug!(tab = %session.tab(), %window, "embedded window is gone");
            return;
        }
        let overlay = session.kind() == EmbeddingKind::OverlayWindow;
        if let Err(e) = focus_window(
            self.ws.as_ref(),
            window,
            session.profile().needs_activation,
            overlay,
        ) {
            tracing::debug!(tab = %session.tab(), %window, "focus transfer failed: {e}");
        }
    }
}
