//! Keyboard forwarding policy.
//!
//! Every key event for the active session is forwarded to its window. The
//! policy here only decides whether the host then swallows the event or lets
//! it reach its own shortcut handling.

use boardhost_platform::keymap::{function_key_number, virtual_key_code};
use boardhost_platform::window_system::NativeMessage;
use boardhost_platform::Modifiers;

/// A host key event, with `key` already normalized (see
/// [`boardhost_platform::normalize_key_name`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    pub key: String,
    pub modifiers: Modifiers,
    pub pressed: bool,
}

impl KeyInput {
    pub fn press(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
            pressed: true,
        }
    }

    pub fn release(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
            pressed: false,
        }
    }

    /// The native message that forwards this event, if the key has a virtual-key code.
    pub fn native_message(&self) -> Option<NativeMessage> {
        let vk = virtual_key_code(&self.key)?;
        let system = self.modifiers.alt;
        Some(if self.pressed {
            NativeMessage::KeyDown { vk, system }
        } else {
            NativeMessage::KeyUp { vk, system }
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    /// Stop here: the host must not act on the event.
    Swallow,
    /// Continue with the host's own handling.
    Propagate,
}

/// Ctrl shortcuts that belong to the viewer: find, find next, replace, undo,
/// redo, copy, paste, cut, select all, save, open, print. Ctrl+W is absent
/// because closing tabs stays with the host.
const VIEWER_CTRL_KEYS: &[&str] = &["F", "G", "H", "Z", "Y", "C", "V", "X", "A", "S", "O", "P"];

/// Decide what happens to a forwarded key event on the host side.
pub fn key_policy(key: &str, modifiers: Modifiers) -> KeyDisposition {
    if modifiers.is_empty() {
        return KeyDisposition::Propagate;
    }
    if modifiers.ctrl {
        return if VIEWER_CTRL_KEYS.contains(&key) {
            KeyDisposition::Swallow
        } else {
            KeyDisposition::Propagate
        };
    }
    match function_key_number(key) {
        Some(n) if n <= 12 => KeyDisposition::Swallow,
        _ => KeyDisposition::Propagate,
    }
}

/// One character message per character of `text`.
pub fn char_messages(text: &str) -> impl Iterator<Item = NativeMessage> + '_ {
    text.chars().map(NativeMessage::Char)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALT: Modifiers = Modifiers {
        alt: true,
        ..Modifiers::NONE
    };
    const SHIFT: Modifiers = Modifiers {
        shift: true,
        ..Modifiers::NONE
    };

    #[test]
    fn unmodified_keys_always_propagate() {
        for key in ["A", "F", "F5", "Enter", "Escape", "Up", "1", "Space", "Tab"] {
            assert_eq!(key_policy(key, Modifiers::NONE), KeyDisposition::Propagate, "{key}");
        }
    }

    #[test]
    fn viewer_ctrl_shortcuts_are_swallowed() {
        for key in VIEWER_CTRL_KEYS {
            assert_eq!(key_policy(key, Modifiers::CTRL), KeyDisposition::Swallow, "{key}");
        }
    }

    #[test]
    fn ctrl_w_and_other_ctrl_keys_reach_the_host() {
        assert_eq!(key_policy("W", Modifiers::CTRL), KeyDisposition::Propagate);
        assert_eq!(key_policy("T", Modifiers::CTRL), KeyDisposition::Propagate);
        assert_eq!(key_policy("Tab", Modifiers::CTRL), KeyDisposition::Propagate);
        assert_eq!(key_policy("F4", Modifiers::CTRL), KeyDisposition::Propagate);
    }

    #[test]
    fn modified_function_keys_are_swallowed() {
        assert_eq!(key_policy("F1", SHIFT), KeyDisposition::Swallow);
        assert_eq!(key_policy("F12", ALT), KeyDisposition::Swallow);
        assert_eq!(key_policy("F13", SHIFT), KeyDisposition::Propagate);
        assert_eq!(key_policy("A", ALT), KeyDisposition::Propagate);
    }

    #[test]
    fn alt_keys_forward_as_system_keys() {
        let down = KeyInput::press("F", ALT).native_message();
        assert_eq!(
            down,
            Some(NativeMessage::KeyDown {
                vk: 0x46,
                system: true
            })
        );
        let up = KeyInput::release("F5", Modifiers::NONE).native_message();
        assert_eq!(
            up,
            Some(NativeMessage::KeyUp {
                vk: 0x74,
                system: false
            })
        );
    }

    #[test]
    fn unknown_keys_have_no_message() {
        assert_eq!(KeyInput::press("Hyper", Modifiers::NONE).native_message(), None);
    }

    #[test]
    fn text_becomes_one_message_per_char() {
        let messages: Vec<_> = char_messages("aé1").collect();
        assert_eq!(
            messages,
            vec![
                NativeMessage::Char('a'),
                NativeMessage::Char('é'),
                NativeMessage::Char('1')
            ]
        );
    }
}
