use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque native window handle. Lookup only: holding one never keeps the
/// window alive, and it may go stale when its owner recreates the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct WindowHandle(pub u64);

impl WindowHandle {
    pub const NULL: WindowHandle = WindowHandle(0);

    pub fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// Window style capabilities the embedding strategies toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WindowTrait {
    Caption,
    Border,
    ThickFrame,
    MinimizeBox,
    MaximizeBox,
    SystemMenu,
    Child,
    Popup,
    Visible,
}

/// Extended window style capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ExtendedTrait {
    DialogFrame,
    WindowEdge,
    ClientEdge,
    StaticEdge,
    ToolWindow,
    AppWindow,
}

/// A set of style changes applied in one native call per style word.
/// Removals are applied before additions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StylePatch {
    pub remove: Vec<WindowTrait>,
    pub add: Vec<WindowTrait>,
    pub remove_extended: Vec<ExtendedTrait>,
    pub add_extended: Vec<ExtendedTrait>,
}

impl StylePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn remove(mut self, traits: &[WindowTrait]) -> Self {
        self.remove.extend_from_slice(traits);
        self
    }

    pub fn add(mut self, traits: &[WindowTrait]) -> Self {
        self.add.extend_from_slice(traits);
        self
    }

    pub fn remove_extended(mut self, traits: &[ExtendedTrait]) -> Self {
        self.remove_extended.extend_from_slice(traits);
        self
    }

    pub fn add_extended(mut self, traits: &[ExtendedTrait]) -> Self {
        self.add_extended.extend_from_slice(traits);
        self
    }

    pub fn touches_extended(&self) -> bool {
        !(self.remove_extended.is_empty() && self.add_extended.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.remove.is_empty() && self.add.is_empty() && !self.touches_extended()
    }
}

/// Messages delivered to a foreign window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeMessage {
    /// `system` marks a key pressed while Alt is held.
    KeyDown { vk: u16, system: bool },
    KeyUp { vk: u16, system: bool },
    Char(char),
    /// Tells the window its application became active.
    ActivateApp,
    /// Tells the window it was activated.
    Activate,
    /// Size notification for windows that do not watch their parent.
    Resized { width: i32, height: i32 },
}
