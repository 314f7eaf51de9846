//! Moving OS keyboard focus into an embedded window.

use boardhost_common::errors::PlatformError;
use boardhost_platform::window_system::NativeMessage;
use boardhost_platform::{WindowHandle, WindowSystem};

/// Shares input state between the host thread and a foreign window's thread
/// for as long as it lives. Without it, focus requests across threads are
/// silently refused.
pub struct InputAttachment<'a> {
    ws: &'a dyn WindowSystem,
    from: u32,
    to: u32,
    attached: bool,
}

impl<'a> InputAttachment<'a> {
    pub fn attach(ws: &'a dyn WindowSystem, target_thread: Option<u32>) -> Self {
        let from = ws.current_thread_id();
        let to = target_thread.unwrap_or(0);
        let attached = to != 0 && to != from && {
            match ws.attach_thread_input(from, to, true) {
                Ok(()) => true,
                Err(e) => {
                    tracing::debug!(from, to, "attach thread input failed: {e}");
                    false
                }
            }
        };
        Self {
            ws,
            from,
            to,
            attached,
        }
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }
}

impl Drop for InputAttachment<'_> {
    fn drop(&mut self) {
        if self.attached {
            if let Err(e) = self.ws.attach_thread_input(self.from, self.to, false) {
                tracing::debug!(from = self.from, to = self.to, "detach thread input failed: {e}");
            }
        }
    }
}

/// Give `window` keyboard focus.
///
/// `activate` sends the activation notifications some viewers need before
/// they accept focus. Overlays are also brought to the foreground and made
/// active since they are not children of the focused host.
pub fn focus_window(
    ws: &dyn WindowSystem,
    window: WindowHandle,
    activate: bool,
    overlay: bool,
) -> Result<(), PlatformError> {
    if activate {
        ws.send_message(window, NativeMessage::ActivateApp)?;
        ws.send_message(window, NativeMessage::Activate)?;
    }

    let _attachment = InputAttachment::attach(ws, ws.window_thread_id(window));
    if overlay {
        if let Err(e) = ws.set_foreground(window) {
            tracing::debug!(%window, "set foreground failed: {e}");
        }
        if let Err(e) = ws.set_active(window) {
            tracing::debug!(%window, "set active failed: {e}");
        }
    }
    ws.set_focus(window)
}
