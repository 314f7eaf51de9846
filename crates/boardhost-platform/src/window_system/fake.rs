//! Recording in-memory window system for tests.
//!
//! Models just enough of a desktop for the embedding engine: top-level
//! windows owned by process ids, parent/owner links, styles, rectangles and
//! visibility. Every mutating call is recorded as a [`FakeCall`] and any
//! operation can be made to fail on demand.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::sync::{Mutex, MutexGuard};

use boardhost_common::errors::PlatformError;
use boardhost_common::types::PixelRect;

use super::{
    ExtendedTrait, NativeMessage, Result, StylePatch, WindowHandle, WindowSystem, WindowTrait,
};

/// Thread id reported for the host (UI) thread.
pub const HOST_THREAD: u32 = 1;

/// Default frame of a freshly spawned foreign window.
pub const SPAWN_RECT: PixelRect = PixelRect::new(100, 100, 800, 600);

#[derive(Debug, Clone, PartialEq)]
pub enum FakeCall {
    ApplyStyle(WindowHandle, StylePatch),
    SetParent(WindowHandle, WindowHandle),
    SetOwner(WindowHandle, WindowHandle),
    RefreshFrame(WindowHandle),
    RevokeDragDrop(WindowHandle),
    Move(WindowHandle, PixelRect),
    SetVisible(WindowHandle, bool),
    Message(WindowHandle, NativeMessage),
    AttachInput { from: u32, to: u32, attach: bool },
    SetForeground(WindowHandle),
    SetActive(WindowHandle),
    SetFocus(WindowHandle),
    CreateSurface(WindowHandle),
    DestroySurface(WindowHandle),
    Alert(String),
}

#[derive(Debug, Clone)]
pub struct FakeWindow {
    pub pid: u32,
    pub thread: u32,
    /// Whether the process reports this as its main window.
    pub primary: bool,
    pub visible: bool,
    pub parent: Option<WindowHandle>,
    pub owner: Option<WindowHandle>,
    pub rect: PixelRect,
    pub traits: BTreeSet<WindowTrait>,
    pub extended: BTreeSet<ExtendedTrait>,
}

impl FakeWindow {
    fn decorated(pid: u32) -> Self {
        Self {
            pid,
            thread: 1000 + pid,
            primary: true,
            visible: true,
            parent: None,
            owner: None,
            rect: SPAWN_RECT,
            traits: [
                WindowTrait::Caption,
                WindowTrait::Border,
                WindowTrait::ThickFrame,
                WindowTrait::MinimizeBox,
                WindowTrait::MaximizeBox,
                WindowTrait::SystemMenu,
                WindowTrait::Visible,
            ]
            .into_iter()
            .collect(),
            extended: [ExtendedTrait::WindowEdge, ExtendedTrait::AppWindow]
                .into_iter()
                .collect(),
        }
    }

    pub fn has(&self, t: WindowTrait) -> bool {
        self.traits.contains(&t)
    }

    pub fn has_extended(&self, t: ExtendedTrait) -> bool {
        self.extended.contains(&t)
    }
}

#[derive(Default)]
struct FakeState {
    next: u64,
    windows: BTreeMap<WindowHandle, FakeWindow>,
    calls: Vec<FakeCall>,
    failing: HashSet<&'static str>,
}

impl FakeState {
    fn allocate(&mut self, window: FakeWindow) -> WindowHandle {
        self.next += 0x10;
        let handle = WindowHandle(0x1000 + self.next);
        self.windows.insert(handle, window);
        handle
    }

    fn check(&self, op: &'static str, window: WindowHandle) -> Result<()> {
        if self.failing.contains(op) {
            return Err(PlatformError::native(op, "injected failure"));
        }
        if !self.windows.contains_key(&window) {
            return Err(PlatformError::WindowGone(window.0));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeWindowSystem {
    state: Mutex<FakeState>,
}

impl FakeWindowSystem {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    // -- Scenario setup ---------------------------------------------------------

    /// Add the host's top-level window with its client area at `rect` on screen.
    pub fn add_host(&self, rect: PixelRect) -> WindowHandle {
        let mut window = FakeWindow::decorated(0);
        window.thread = HOST_THREAD;
        window.rect = rect;
        self.state().allocate(window)
    }

    /// A decorated, visible main window for `pid`.
    pub fn spawn_window(&self, pid: u32) -> WindowHandle {
        self.state().allocate(FakeWindow::decorated(pid))
    }

    /// A visible window the process does not report as its main window.
    pub fn spawn_secondary_window(&self, pid: u32) -> WindowHandle {
        let mut window = FakeWindow::decorated(pid);
        window.primary = false;
        self.state().allocate(window)
    }

    pub fn spawn_hidden_window(&self, pid: u32) -> WindowHandle {
        let mut window = FakeWindow::decorated(pid);
        window.visible = false;
        window.traits.remove(&WindowTrait::Visible);
        self.state().allocate(window)
    }

    /// A window the process created directly inside `parent`.
    pub fn spawn_child(&self, parent: WindowHandle, pid: u32) -> WindowHandle {
        let mut window = FakeWindow::decorated(pid);
        window.primary = false;
        window.parent = Some(parent);
        window.traits = [WindowTrait::Child, WindowTrait::Visible].into_iter().collect();
        window.extended.clear();
        self.state().allocate(window)
    }

    pub fn destroy_window(&self, window: WindowHandle) {
        let mut state = self.state();
        state.windows.remove(&window);
        state.windows.retain(|_, w| w.parent != Some(window));
    }

    /// Move a window without recording a call (simulates the user dragging the host).
    pub fn place(&self, window: WindowHandle, rect: PixelRect) {
        if let Some(w) = self.state().windows.get_mut(&window) {
            w.rect = rect;
        }
    }

    pub fn fail(&self, op: &'static str) {
        self.state().failing.insert(op);
    }

    pub fn heal(&self, op: &'static str) {
        self.state().failing.remove(op);
    }

    // -- Inspection --------------------------------------------------------------

    pub fn window(&self, window: WindowHandle) -> Option<FakeWindow> {
        self.state().windows.get(&window).cloned()
    }

    pub fn calls(&self) -> Vec<FakeCall> {
        self.state().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state().calls.clear();
    }

    pub fn count(&self, predicate: impl Fn(&FakeCall) -> bool) -> usize {
        self.state().calls.iter().filter(|c| predicate(c)).count()
    }

    pub fn moves_of(&self, window: WindowHandle) -> Vec<PixelRect> {
        self.state()
            .calls
            .iter()
            .filter_map(|c| match c {
                FakeCall::Move(w, rect) if *w == window => Some(*rect),
                _ => None,
            })
            .collect()
    }

    pub fn messages_to(&self, window: WindowHandle) -> Vec<NativeMessage> {
        self.state()
            .calls
            .iter()
            .filter_map(|c| match c {
                FakeCall::Message(w, m) if *w == window => Some(*m),
                _ => None,
            })
            .collect()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.state()
            .calls
            .iter()
            .filter_map(|c| match c {
                FakeCall::Alert(text) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    fn record(&self, op: &'static str, window: WindowHandle, call: FakeCall) -> Result<()> {
        let mut state = self.state();
        state.calls.push(call);
        state.check(op, window)
    }

    fn mutate(
        &self,
        op: &'static str,
        window: WindowHandle,
        call: FakeCall,
        apply: impl FnOnce(&mut FakeWindow),
    ) -> Result<()> {
        self.record(op, window, call)?;
        if let Some(w) = self.state().windows.get_mut(&window) {
            apply(w);
        }
        Ok(())
    }
}

impl WindowSystem for FakeWindowSystem {
    fn main_window(&self, pid: u32) -> Option<WindowHandle> {
        self.state()
            .windows
            .iter()
            .find(|(_, w)| w.pid == pid && w.primary && w.visible && w.parent.is_none())
            .map(|(h, _)| *h)
    }

    fn find_visible_window(&self, pid: u32) -> Option<WindowHandle> {
        self.state()
            .windows
            .iter()
            .find(|(_, w)| w.pid == pid && w.visible && w.parent.is_none())
            .map(|(h, _)| *h)
    }

    fn first_child(&self, parent: WindowHandle) -> Option<WindowHandle> {
        self.state()
            .windows
            .iter()
            .find(|(_, w)| w.parent == Some(parent))
            .map(|(h, _)| *h)
    }

    fn is_window(&self, window: WindowHandle) -> bool {
        self.state().windows.contains_key(&window)
    }

    fn window_thread_id(&self, window: WindowHandle) -> Option<u32> {
        self.state().windows.get(&window).map(|w| w.thread)
    }

    fn current_thread_id(&self) -> u32 {
        HOST_THREAD
    }

    fn client_size(&self, window: WindowHandle) -> Option<(i32, i32)> {
        self.state().windows.get(&window).map(|w| w.rect.size())
    }

    fn client_screen_rect(&self, window: WindowHandle) -> Option<PixelRect> {
        let state = self.state();
        let target = state.windows.get(&window)?;
        let mut rect = target.rect;
        let mut parent = target.parent;
        while let Some(p) = parent {
            let ancestor = state.windows.get(&p)?;
            rect = rect.offset(ancestor.rect.x, ancestor.rect.y);
            parent = ancestor.parent;
        }
        Some(rect)
    }

    fn apply_style(&self, window: WindowHandle, patch: &StylePatch) -> Result<()> {
        self.mutate(
            "apply_style",
            window,
            FakeCall::ApplyStyle(window, patch.clone()),
            |w| {
                for t in &patch.remove {
                    w.traits.remove(t);
                }
                w.traits.extend(patch.add.iter().copied());
                for t in &patch.remove_extended {
                    w.extended.remove(t);
                }
                w.extended.extend(patch.add_extended.iter().copied());
            },
        )
    }

    fn set_parent(&self, window: WindowHandle, parent: WindowHandle) -> Result<()> {
        self.mutate(
            "set_parent",
            window,
            FakeCall::SetParent(window, parent),
            |w| w.parent = Some(parent),
        )
    }

    fn set_owner(&self, window: WindowHandle, owner: WindowHandle) -> Result<()> {
        self.mutate(
            "set_owner",
            window,
            FakeCall::SetOwner(window, owner),
            |w| w.owner = Some(owner),
        )
    }

    fn refresh_frame(&self, window: WindowHandle) -> Result<()> {
        self.record("refresh_frame", window, FakeCall::RefreshFrame(window))
    }

    fn revoke_drag_drop(&self, window: WindowHandle) -> Result<()> {
        self.record("revoke_drag_drop", window, FakeCall::RevokeDragDrop(window))
    }

    fn move_window(&self, window: WindowHandle, rect: PixelRect) -> Result<()> {
        self.mutate("move_window", window, FakeCall::Move(window, rect), |w| {
            w.rect = rect
        })
    }

    fn set_visible(&self, window: WindowHandle, visible: bool) -> Result<()> {
        self.mutate(
            "set_visible",
            window,
            FakeCall::SetVisible(window, visible),
            |w| {
                w.visible = visible;
                if visible {
                    w.traits.insert(WindowTrait::Visible);
                } else {
                    w.traits.remove(&WindowTrait::Visible);
                }
            },
        )
    }

    fn send_message(&self, window: WindowHandle, message: NativeMessage) -> Result<()> {
        self.record("send_message", window, FakeCall::Message(window, message))
    }

    fn attach_thread_input(&self, from: u32, to: u32, attach: bool) -> Result<()> {
        let mut state = self.state();
        state.calls.push(FakeCall::AttachInput { from, to, attach });
        if state.failing.contains("attach_thread_input") {
            return Err(PlatformError::native("attach_thread_input", "injected failure"));
        }
        Ok(())
    }

    fn set_foreground(&self, window: WindowHandle) -> Result<()> {
        self.record("set_foreground", window, FakeCall::SetForeground(window))
    }

    fn set_active(&self, window: WindowHandle) -> Result<()> {
        self.record("set_active", window, FakeCall::SetActive(window))
    }

    fn set_focus(&self, window: WindowHandle) -> Result<()> {
        self.record("set_focus", window, FakeCall::SetFocus(window))
    }

    fn create_surface(&self, host: WindowHandle, bounds: PixelRect) -> Result<WindowHandle> {
        self.record("create_surface", host, FakeCall::CreateSurface(host))?;
        let mut state = self.state();
        let surface = state.allocate(FakeWindow {
            pid: 0,
            thread: HOST_THREAD,
            primary: false,
            visible: false,
            parent: Some(host),
            owner: None,
            rect: bounds,
            traits: [WindowTrait::Child].into_iter().collect(),
            extended: BTreeSet::new(),
        });
        Ok(surface)
    }

    fn destroy_surface(&self, surface: WindowHandle) -> Result<()> {
        self.record("destroy_surface", surface, FakeCall::DestroySurface(surface))?;
        self.destroy_window(surface);
        Ok(())
    }

    fn show_alert(&self, _owner: Option<WindowHandle>, title: &str, message: &str) {
        self.state()
            .calls
            .push(FakeCall::Alert(format!("{title}: {message}")));
    }
}
