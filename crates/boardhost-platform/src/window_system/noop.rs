//! No-op window system.
//!
//! Used on platforms without native embedding support. Queries find nothing,
//! so every resolution ends in `NotFound` and viewers keep their own windows.

use boardhost_common::types::PixelRect;

use super::{NativeMessage, Result, StylePatch, WindowHandle, WindowSystem};

pub struct NoopWindowSystem;

impl WindowSystem for NoopWindowSystem {
    fn main_window(&self, _pid: u32) -> Option<WindowHandle> {
        None
    }

    fn find_visible_window(&self, _pid: u32) -> Option<WindowHandle> {
        None
    }

    fn first_child(&self, _parent: WindowHandle) -> Option<WindowHandle> {
        None
    }

    fn is_window(&self, _window: WindowHandle) -> bool {
        false
    }

    fn window_thread_id(&self, _window: WindowHandle) -> Option<u32> {
        None
    }

    fn current_thread_id(&self) -> u32 {
        0
    }

    fn client_size(&self, _window: WindowHandle) -> Option<(i32, i32)> {
        None
    }

    fn client_screen_rect(&self, _window: WindowHandle) -> Option<PixelRect> {
        None
    }

    fn apply_style(&self, _window: WindowHandle, _patch: &StylePatch) -> Result<()> {
        Ok(())
    }

    fn set_parent(&self, _window: WindowHandle, _parent: WindowHandle) -> Result<()> {
        Ok(())
    }

    fn set_owner(&self, _window: WindowHandle, _owner: WindowHandle) -> Result<()> {
        Ok(())
    }

    fn refresh_frame(&self, _window: WindowHandle) -> Result<()> {
        Ok(())
    }

    fn revoke_drag_drop(&self, _window: WindowHandle) -> Result<()> {
        Ok(())
    }

    fn move_window(&self, _window: WindowHandle, _rect: PixelRect) -> Result<()> {
        Ok(())
    }

    fn set_visible(&self, _window: WindowHandle, _visible: bool) -> Result<()> {
        Ok(())
    }

    fn send_message(&self, _window: WindowHandle, _message: NativeMessage) -> Result<()> {
        Ok(())
    }

    fn attach_thread_input(&self, _from: u32, _to: u32, _attach: bool) -> Result<()> {
        Ok(())
    }

    fn set_foreground(&self, _window: WindowHandle) -> Result<()> {
        Ok(())
    }

    fn set_active(&self, _window: WindowHandle) -> Result<()> {
        Ok(())
    }

    fn set_focus(&self, _window: WindowHandle) -> Result<()> {
        Ok(())
    }

    fn create_surface(&self, _host: WindowHandle, _bounds: PixelRect) -> Result<WindowHandle> {
        Ok(WindowHandle::NULL)
    }

    fn destroy_surface(&self, _surface: WindowHandle) -> Result<()> {
        Ok(())
    }

    fn show_alert(&self, _owner: Option<WindowHandle>, title: &str, message: &str) {
        tracing::error!("{title}: {message}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queries_find_nothing() {
        let ws = NoopWindowSystem;
        assert!(ws.main_window(1).is_none());
        assert!(ws.find_visible_window(1).is_none());
        assert!(ws.first_child(WindowHandle(1)).is_none());
        assert!(!ws.is_window(WindowHandle(1)));
    }

    #[test]
    fn mutations_succeed() {
        let ws = NoopWindowSystem;
        let w = WindowHandle(7);
        assert!(ws.apply_style(w, &StylePatch::new()).is_ok());
        assert!(ws.move_window(w, PixelRect::filling(1, 1)).is_ok());
        assert!(ws.send_message(w, NativeMessage::Activate).is_ok());
        assert!(ws.set_focus(w).is_ok());
    }

    #[test]
    fn surfaces_are_null() {
        let ws = NoopWindowSystem;
        let surface = ws
            .create_surface(WindowHandle(1), PixelRect::filling(10, 10))
            .unwrap();
        assert!(surface.is_null());
    }
}
