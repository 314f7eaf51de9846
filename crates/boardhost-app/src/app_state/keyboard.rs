//! Keyboard routing: forward to the active viewer first, then run host
//! shortcuts for keys the viewer does not claim.

use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{Key, ModifiersState};

use boardhost_embed::{KeyDisposition, KeyInput};
use boardhost_platform::{normalize_key_name, Modifiers};

use super::core::BoardhostApp;
use super::types::Shortcut;

impl BoardhostApp {
    pub(super) fn handle_keyboard_input(&mut self, event: KeyEvent) {
        let Some(name) = key_name(&event.logical_key) else {
            return;
        };
        let key = normalize_key_name(&name);
        let modifiers = to_modifiers(self.modifiers);
        let pressed = event.state == ElementState::Pressed;

        let input = if pressed {
            KeyInput::press(key.clone(), modifiers)
        } else {
            KeyInput::release(key.clone(), modifiers)
        };
        if self.host.on_key(&input) == KeyDisposition::Swallow || !pressed {
            return;
        }

        if let Some(shortcut) = shortcut_for(&key, modifiers) {
            self.run_shortcut(shortcut);
            return;
        }

        if !modifiers.ctrl && !modifiers.alt {
            if let Some(text) = event.text.as_deref() {
                let printable: String = text.chars().filter(|c| !c.is_control()).collect();
                if !printable.is_empty() {
                    self.host.on_text(&printable);
                }
            }
        }
    }

    fn run_shortcut(&mut self, shortcut: Shortcut) {
        tracing::debug!(?shortcut, "Shortcut");
        match shortcut {
            Shortcut::NextTab => self.host.select_next(),
            Shortcut::PreviousTab => self.host.select_previous(),
            Shortcut::NewTab => {
                self.host.new_tab();
            }
            Shortcut::CloseTab => {
                self.host.close_selected();
            }
            Shortcut::SelectTab(index) => {
                self.host.select_index(index);
            }
        }
        self.update_window_title();
    }
}

fn key_name(key: &Key) -> Option<String> {
    match key {
        Key::Named(named) => Some(format!("{named:?}")),
        Key::Character(c) => Some(c.to_string()),
        _ => None,
    }
}

fn to_modifiers(state: ModifiersState) -> Modifiers {
    Modifiers {
        ctrl: state.control_key(),
        alt: state.alt_key(),
        shift: state.shift_key(),
        super_key: state.super_key(),
    }
}

/// Host tab shortcuts, matched on normalized key names.
pub(super) fn shortcut_for(key: &str, modifiers: Modifiers) -> Option<Shortcut> {
    if !modifiers.ctrl || modifiers.alt || modifiers.super_key {
        return None;
    }
    match (key, modifiers.shift) {
        ("Tab", false) => Some(Shortcut::NextTab),
        ("Tab", true) => Some(Shortcut::PreviousTab),
        ("T", false) => Some(Shortcut::NewTab),
        ("W", false) => Some(Shortcut::CloseTab),
        (digit, false) => match digit.parse::<usize>() {
            Ok(n @ 1..=9) => Some(Shortcut::SelectTab(n - 1)),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CTRL_SHIFT: Modifiers = Modifiers {
        shift: true,
        ..Modifiers::CTRL
    };

    #[test]
    fn tab_cycling() {
        assert_eq!(shortcut_for("Tab", Modifiers::CTRL), Some(Shortcut::NextTab));
        assert_eq!(shortcut_for("Tab", CTRL_SHIFT), Some(Shortcut::PreviousTab));
        assert_eq!(shortcut_for("Tab", Modifiers::NONE), None);
    }

    #[test]
    fn new_and_close() {
        assert_eq!(shortcut_for("T", Modifiers::CTRL), Some(Shortcut::NewTab));
        assert_eq!(shortcut_for("W", Modifiers::CTRL), Some(Shortcut::CloseTab));
        assert_eq!(shortcut_for("W", CTRL_SHIFT), None);
    }

    #[test]
    fn digits_select_by_position() {
        assert_eq!(shortcut_for("1", Modifiers::CTRL), Some(Shortcut::SelectTab(0)));
        assert_eq!(shortcut_for("9", Modifiers::CTRL), Some(Shortcut::SelectTab(8)));
        assert_eq!(shortcut_for("0", Modifiers::CTRL), None);
    }

    #[test]
    fn alt_combinations_are_not_shortcuts() {
        let ctrl_alt = Modifiers {
            alt: true,
            ..Modifiers::CTRL
        };
        assert_eq!(shortcut_for("T", ctrl_alt), None);
    }

    #[test]
    fn winit_key_names_normalize() {
        use winit::keyboard::NamedKey;

        let name = key_name(&Key::Named(NamedKey::ArrowUp)).unwrap();
        assert_eq!(normalize_key_name(&name), "Up");
        let name = key_name(&Key::Character("c".into())).unwrap();
        assert_eq!(normalize_key_name(&name), "C");
        assert_eq!(key_name(&Key::Dead(None)), None);
    }

    #[test]
    fn modifier_state_maps_across() {
        let mods = to_modifiers(ModifiersState::CONTROL | ModifiersState::SHIFT);
        assert!(mods.ctrl && mods.shift);
        assert!(!mods.alt && !mods.super_key);
    }
}
