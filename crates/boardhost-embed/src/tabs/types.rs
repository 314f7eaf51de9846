use std::path::PathBuf;

use boardhost_common::TabId;

use crate::viewer::ViewerKind;

pub const NEW_TAB_TITLE: &str = "New tab";

/// What a tab shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabContent {
    /// The start surface of an empty tab.
    Start,
    /// A viewer hosting `path`.
    Viewer { kind: ViewerKind, path: PathBuf },
    /// Explanatory text in place of a viewer that could not be embedded.
    Notice(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub id: TabId,
    pub title: String,
    pub content: TabContent,
}

impl Tab {
    pub fn is_empty(&self) -> bool {
        self.content == TabContent::Start
    }
}

/// Ordered tabs with exactly one selected. Never empty: removing the last
/// tab leaves a fresh start tab behind.
#[derive(Debug, Clone)]
pub struct TabStrip {
    pub(super) tabs: Vec<Tab>,
    pub(super) selected: usize,
    pub(super) next_id: u32,
}

impl TabStrip {
    pub fn new() -> Self {
        let mut strip = Self {
            tabs: Vec::new(),
            selected: 0,
            next_id: 1,
        };
        strip.push_empty();
        strip
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> &Tab {
        &self.tabs[self.selected]
    }

    pub fn selected_id(&self) -> TabId {
        self.selected().id
    }

    pub fn position(&self, id: TabId) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == id)
    }

    pub fn contains(&self, id: TabId) -> bool {
        self.position(id).is_some()
    }

    pub fn get(&self, id: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.id == id)
    }

    /// First tab still showing the start surface.
    pub fn find_empty(&self) -> Option<TabId> {
        self.tabs.iter().find(|t| t.is_empty()).map(|t| t.id)
    }
}

impl Default for TabStrip {
    fn default() -> Self {
        Self::new()
    }
}
