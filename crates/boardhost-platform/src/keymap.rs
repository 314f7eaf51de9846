//! Host key names and their Win32 virtual-key codes.
//!
//! Key events arrive from the host UI as names (`"A"`, `"F5"`, `"Up"`,
//! `"PageDown"`). [`normalize_key_name`] maps the host toolkit's spelling onto
//! that vocabulary and [`virtual_key_code`] translates it for forwarding.

/// Modifier key state captured alongside a key event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub super_key: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        alt: false,
        shift: false,
        super_key: false,
    };

    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        ..Modifiers::NONE
    };

    pub fn is_empty(&self) -> bool {
        !(self.ctrl || self.alt || self.shift || self.super_key)
    }
}

/// Convert a toolkit key name to the normalized name used here.
///
/// Toolkits report names like `"ArrowUp"` or `" "` for space; this maps them
/// to `"Up"` and `"Space"`. Single characters are upper-cased.
pub fn normalize_key_name(key: &str) -> String {
    match key {
        "ArrowUp" => "Up".to_string(),
        "ArrowDown" => "Down".to_string(),
        "ArrowLeft" => "Left".to_string(),
        "ArrowRight" => "Right".to_string(),
        " " => "Space".to_string(),
        "Return" => "Enter".to_string(),
        "Esc" => "Escape".to_string(),
        "Control" => "Ctrl".to_string(),
        _ => {
            if key.chars().count() == 1 {
                key.to_uppercase()
            } else {
                key.to_string()
            }
        }
    }
}

/// The function-key number for `"F1"`..`"F24"`.
pub fn function_key_number(name: &str) -> Option<u8> {
    let n: u8 = name.strip_prefix('F')?.parse().ok()?;
    (1..=24).contains(&n).then_some(n)
}

/// Translate a normalized key name to its virtual-key code.
pub fn virtual_key_code(name: &str) -> Option<u16> {
    if let Some(n) = function_key_number(name) {
        return Some(0x70 + u16::from(n) - 1);
    }

    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if c.is_ascii_alphabetic() {
            return Some(c.to_ascii_uppercase() as u16);
        }
        if c.is_ascii_digit() {
            return Some(c as u16);
        }
        return match c {
            ';' => Some(0xBA),
            '=' => Some(0xBB),
            ',' => Some(0xBC),
            '-' => Some(0xBD),
            '.' => Some(0xBE),
            '/' => Some(0xBF),
            '`' => Some(0xC0),
            '[' => Some(0xDB),
            '\\' => Some(0xDC),
            ']' => Some(0xDD),
            '\'' => Some(0xDE),
            _ => None,
        };
    }

    let code = match name {
        "Backspace" => 0x08,
        "Tab" => 0x09,
        "Enter" => 0x0D,
        "Shift" => 0x10,
        "Ctrl" => 0x11,
        "Alt" => 0x12,
        "Pause" => 0x13,
        "CapsLock" => 0x14,
        "Escape" => 0x1B,
        "Space" => 0x20,
        "PageUp" => 0x21,
        "PageDown" => 0x22,
        "End" => 0x23,
        "Home" => 0x24,
        "Left" => 0x25,
        "Up" => 0x26,
        "Right" => 0x27,
        "Down" => 0x28,
        "Insert" => 0x2D,
        "Delete" => 0x2E,
        "Super" => 0x5B,
        "ContextMenu" => 0x5D,
        "NumLock" => 0x90,
        "ScrollLock" => 0x91,
        _ => return None,
    };
    Some(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_and_space_names() {
        assert_eq!(normalize_key_name("ArrowUp"), "Up");
        assert_eq!(normalize_key_name("ArrowRight"), "Right");
        assert_eq!(normalize_key_name(" "), "Space");
    }

    #[test]
    fn single_characters_are_uppercased() {
        assert_eq!(normalize_key_name("a"), "A");
        assert_eq!(normalize_key_name("z"), "Z");
        assert_eq!(normalize_key_name("."), ".");
    }

    #[test]
    fn named_keys_pass_through() {
        assert_eq!(normalize_key_name("F5"), "F5");
        assert_eq!(normalize_key_name("PageDown"), "PageDown");
        assert_eq!(normalize_key_name("Return"), "Enter");
    }

    #[test]
    fn letters_and_digits_map_to_ascii() {
        assert_eq!(virtual_key_code("A"), Some(0x41));
        assert_eq!(virtual_key_code("z"), Some(0x5A));
        assert_eq!(virtual_key_code("0"), Some(0x30));
        assert_eq!(virtual_key_code("9"), Some(0x39));
    }

    #[test]
    fn function_keys() {
        assert_eq!(virtual_key_code("F1"), Some(0x70));
        assert_eq!(virtual_key_code("F12"), Some(0x7B));
        assert_eq!(virtual_key_code("F24"), Some(0x87));
        assert_eq!(virtual_key_code("F25"), None);
        assert_eq!(function_key_number("F0"), None);
        assert_eq!(function_key_number("Fx"), None);
    }

    #[test]
    fn navigation_and_editing_keys() {
        assert_eq!(virtual_key_code("Enter"), Some(0x0D));
        assert_eq!(virtual_key_code("Escape"), Some(0x1B));
        assert_eq!(virtual_key_code("Left"), Some(0x25));
        assert_eq!(virtual_key_code("Delete"), Some(0x2E));
        assert_eq!(virtual_key_code("Space"), Some(0x20));
    }

    #[test]
    fn punctuation_uses_oem_codes() {
        assert_eq!(virtual_key_code("."), Some(0xBE));
        assert_eq!(virtual_key_code("["), Some(0xDB));
        assert_eq!(virtual_key_code("é"), None);
        assert_eq!(virtual_key_code("Hyper"), None);
    }

    #[test]
    fn modifiers_empty() {
        assert!(Modifiers::NONE.is_empty());
        assert!(!Modifiers::CTRL.is_empty());
        assert!(!Modifiers {
            shift: true,
            ..Default::default()
        }
        .is_empty());
    }
}
