//! Forwarding host keyboard input to the selected embedded window.

use boardhost_platform::WindowHandle;

use super::core::EmbeddingHost;
use crate::keys::{char_messages, key_policy, KeyDisposition, KeyInput};
use crate::session::SessionState;

impl EmbeddingHost {
    /// Forward a key event to the selected viewer, then decide whether the
    /// host may still act on it.
    pub fn on_key(&mut self, input: &KeyInput) -> KeyDisposition {
        let Some(window) = self.input_target() else {
            return KeyDisposition::Propagate;
        };
        let Some(message) = input.native_message() else {
            return KeyDisposition::Propagate;
        };
        if input.pressed {
            self.focus_selected();
        }
        if let Err(e) = self.ws.send_message(window, message) {
            tracing::debug!(%window, key = %input.key, "key forward failed: {e}");
        }
        key_policy(&input.key, input.modifiers)
    }

    /// Forward typed text, one character message per character. Text sent to
    /// a viewer is always consumed.
    pub fn on_text(&mut self, text: &str) -> KeyDisposition {
        let Some(window) = self.input_target() else {
            return KeyDisposition::Propagate;
        };
        for message in char_messages(text) {
            if let Err(e) = self.ws.send_message(window, message) {
                tracing::debug!(%window, "char forward failed: {e}");
                break;
            }
        }
        KeyDisposition::Swallow
    }

    fn input_target(&self) -> Option<WindowHandle> {
        let session = self.registry.get(self.tabs.selected_id())?;
        let window = session.window();
        (session.state() == SessionState::Embedded && !window.is_null()).then_some(window)
    }
}
