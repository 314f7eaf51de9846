//! Mutating operations on TabStrip: push, remove, select, content changes.

use std::path::Path;

use boardhost_common::TabId;

use super::{Tab, TabContent, TabStrip, NEW_TAB_TITLE};
use crate::viewer::ViewerKind;

impl TabStrip {
    /// Append an empty tab and select it.
    pub fn push_empty(&mut self) -> TabId {
        let id = TabId(self.next_id);
        self.next_id += 1;
        self.tabs.push(Tab {
            id,
            title: NEW_TAB_TITLE.to_string(),
            content: TabContent::Start,
        });
        self.selected = self.tabs.len() - 1;
        id
    }

    /// Remove a tab. Returns `false` if it is not in the strip.
    ///
    /// Closing the selected tab selects its right neighbour, else its left
    /// one. Closing the last tab leaves a fresh empty tab.
    pub fn remove(&mut self, id: TabId) -> bool {
        let Some(idx) = self.position(id) else {
            return false;
        };
        self.tabs.remove(idx);
        if self.tabs.is_empty() {
            self.push_empty();
        } else if idx < self.selected || self.selected >= self.tabs.len() {
            self.selected -= 1;
        }
        true
    }

    pub fn select(&mut self, id: TabId) -> bool {
        match self.position(id) {
            Some(idx) => {
                self.selected = idx;
                true
            }
            None => false,
        }
    }

    pub fn select_index(&mut self, index: usize) -> bool {
        if index < self.tabs.len() {
            self.selected = index;
            true
        } else {
            false
        }
    }

    /// Cycle to the next tab, wrapping around.
    pub fn select_next(&mut self) {
        if self.tabs.len() > 1 {
            self.selected = (self.selected + 1) % self.tabs.len();
        }
    }

    /// Cycle to the previous tab, wrapping around.
    pub fn select_previous(&mut self) {
        if self.tabs.len() > 1 {
            self.selected = (self.selected + self.tabs.len() - 1) % self.tabs.len();
        }
    }

    /// Show a viewer for `path`; the title becomes the file name.
    pub fn set_viewer(&mut self, id: TabId, kind: ViewerKind, path: &Path) {
        if let Some(tab) = self.tab_mut(id) {
            tab.title = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.to_string_lossy().into_owned());
            tab.content = TabContent::Viewer {
                kind,
                path: path.to_path_buf(),
            };
        }
    }

    pub fn set_notice(&mut self, id: TabId, text: impl Into<String>) {
        if let Some(tab) = self.tab_mut(id) {
            tab.content = TabContent::Notice(text.into());
        }
    }

    /// Back to the start surface, keeping the current title.
    pub fn set_start(&mut self, id: TabId) {
        if let Some(tab) = self.tab_mut(id) {
            tab.content = TabContent::Start;
        }
    }

    fn tab_mut(&mut self, id: TabId) -> Option<&mut Tab> {
        self.tabs.iter_mut().find(|t| t.id == id)
    }
}
