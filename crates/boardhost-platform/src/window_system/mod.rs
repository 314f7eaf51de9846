//! The native window-system seam.
//!
//! Everything the embedding engine does to foreign windows goes through
//! [`WindowSystem`]. Style changes are expressed as named [`WindowTrait`]s and
//! translated to native bit masks only inside the platform implementation.

use std::sync::Arc;

use boardhost_common::errors::PlatformError;
use boardhost_common::types::PixelRect;

mod types;

pub mod noop;
#[cfg(windows)]
pub mod win32;

#[cfg(any(test, feature = "test-support"))]
pub mod fake;

pub use types::*;

pub type Result<T> = std::result::Result<T, PlatformError>;

/// Platform-agnostic access to native windows.
///
/// Query methods are read-only and may be called from background threads.
/// Mutating methods must be called from the thread that owns the host window.
pub trait WindowSystem: Send + Sync {
    // -- Queries -------------------------------------------------------------

    /// The primary top-level window of a process, if it has one yet.
    fn main_window(&self, pid: u32) -> Option<WindowHandle>;
    /// The first visible top-level window owned by `pid`, found by enumerating
    /// every top-level window on the desktop.
    fn find_visible_window(&self, pid: u32) -> Option<WindowHandle>;
    fn first_child(&self, parent: WindowHandle) -> Option<WindowHandle>;
    fn is_window(&self, window: WindowHandle) -> bool;
    fn window_thread_id(&self, window: WindowHandle) -> Option<u32>;
    fn current_thread_id(&self) -> u32;
    /// Client-area size in physical pixels.
    fn client_size(&self, window: WindowHandle) -> Option<(i32, i32)>;
    /// Client area in physical screen coordinates.
    fn client_screen_rect(&self, window: WindowHandle) -> Option<PixelRect>;

    // -- Style and parenting ---------------------------------------------------

    fn apply_style(&self, window: WindowHandle, patch: &StylePatch) -> Result<()>;
    fn set_parent(&self, window: WindowHandle, parent: WindowHandle) -> Result<()>;
    /// Non-owning logical parent: groups z-order and activation without
    /// making `window` a drawing child of `owner`.
    fn set_owner(&self, window: WindowHandle, owner: WindowHandle) -> Result<()>;
    /// Make a previous style change take effect on the frame.
    fn refresh_frame(&self, window: WindowHandle) -> Result<()>;
    /// Drop OLE drag-and-drop registration of `window` and its descendants.
    fn revoke_drag_drop(&self, window: WindowHandle) -> Result<()>;

    // -- Geometry and visibility -------------------------------------------------

    fn move_window(&self, window: WindowHandle, rect: PixelRect) -> Result<()>;
    fn set_visible(&self, window: WindowHandle, visible: bool) -> Result<()>;

    // -- Input and focus ----------------------------------------------------------

    fn send_message(&self, window: WindowHandle, message: NativeMessage) -> Result<()>;
    fn attach_thread_input(&self, from: u32, to: u32, attach: bool) -> Result<()>;
    fn set_foreground(&self, window: WindowHandle) -> Result<()>;
    fn set_active(&self, window: WindowHandle) -> Result<()>;
    fn set_focus(&self, window: WindowHandle) -> Result<()>;

    // -- Host-owned container surfaces ---------------------------------------------

    /// Create a hidden child surface of `host` at `bounds` (client coordinates).
    fn create_surface(&self, host: WindowHandle, bounds: PixelRect) -> Result<WindowHandle>;
    fn destroy_surface(&self, surface: WindowHandle) -> Result<()>;

    /// Blocking message box.
    fn show_alert(&self, owner: Option<WindowHandle>, title: &str, message: &str);
}

/// Create the platform-appropriate window system.
///
/// On Windows: the Win32 implementation.
/// Elsewhere: a no-op implementation, so viewers start but never embed.
pub fn create_window_system() -> Arc<dyn WindowSystem> {
    #[cfg(windows)]
    {
        Arc::new(win32::Win32WindowSystem::new())
    }
    #[cfg(not(windows))]
    {
        Arc::new(noop::NoopWindowSystem)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_handle() {
        assert!(WindowHandle::NULL.is_null());
        assert!(!WindowHandle(0x10).is_null());
        assert_eq!(WindowHandle(0x1a2b).to_string(), "0x1a2b");
    }

    #[test]
    fn window_handle_serialization() {
        let handle = WindowHandle(42);
        let json = serde_json::to_string(&handle).unwrap();
        let back: WindowHandle = serde_json::from_str(&json).unwrap();
        assert_eq!(handle, back);
    }

    #[test]
    fn style_patch_builder() {
        let patch = StylePatch::new()
            .remove(&[WindowTrait::Caption, WindowTrait::Border])
            .add(&[WindowTrait::Child]);
        assert_eq!(patch.remove.len(), 2);
        assert_eq!(patch.add, vec![WindowTrait::Child]);
        assert!(!patch.touches_extended());
        assert!(!patch.is_empty());
        assert!(StylePatch::new().is_empty());
    }

    #[test]
    fn extended_patch_is_tracked() {
        let patch = StylePatch::new().remove_extended(&[ExtendedTrait::ClientEdge]);
        assert!(patch.touches_extended());
        assert!(patch.remove.is_empty());
    }

    #[cfg(not(windows))]
    #[test]
    fn factory_returns_noop_off_windows() {
        let ws = create_window_system();
        assert!(ws.main_window(1234).is_none());
        assert!(ws.move_window(WindowHandle(1), PixelRect::filling(10, 10)).is_ok());
    }
}
