//! Input event types.
//!
//! [`Event`] is the normalized stream consumed by the dispatcher. [`Key`] and
//! [`MouseButton`] are the raw, backend-neutral inputs that the keyboard and
//! pointer adapters translate into events.

use super::mode::InputMode;
use crate::draw::{CellAddress, Point};

/// Normalized input event.
///
/// Every event maps to at most one stroke-builder operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Keyboard/grid cursor step with wraparound
    CursorMove { dr: isize, dc: isize },
    /// Direct activation of a specific cell (click, tap, space key)
    Activate(CellAddress),
    /// Enter-key semantics: start at the cursor when idle, finish when active
    Commit,
    /// Primary pointer pressed at a surface coordinate
    DragStart(Point),
    /// Pointer moved (only meaningful while pressed)
    DragMove(Point),
    /// Primary pointer released
    DragEnd,
    /// Flip between direct activation and continuous paint
    ToggleMode,
    /// Switch to a specific input mode (no-op when already in it)
    SetMode(InputMode),
    /// Clear strokes and painted cells
    Reset,
}

/// Generic key representation for cross-backend compatibility.
///
/// Backend implementations map their native key codes to these generic
/// key values for unified input handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    Up,
    Down,
    Left,
    Right,
    /// Return/Enter key
    Return,
    /// Space bar
    Space,
    Escape,
    Delete,
    Backspace,
    Tab,
    /// Shift modifier
    Shift,
    /// Ctrl modifier
    Ctrl,
    /// Alt modifier
    Alt,
    /// Unmapped or unrecognized key
    Unknown,
}

impl Key {
    /// Name used by keybinding strings, or `None` for modifiers and unknown keys.
    pub fn binding_name(&self) -> Option<String> {
        let name = match self {
            Key::Char(c) => return Some(c.to_string()),
            Key::Up => "Up",
            Key::Down => "Down",
            Key::Left => "Left",
            Key::Right => "Right",
            Key::Return => "Return",
            Key::Space => "Space",
            Key::Escape => "Escape",
            Key::Delete => "Delete",
            Key::Backspace => "Backspace",
            Key::Tab => "Tab",
            Key::Shift | Key::Ctrl | Key::Alt | Key::Unknown => return None,
        };
        Some(name.to_string())
    }

    /// Inverse of [`Key::binding_name`], case-insensitive.
    pub fn from_binding_name(name: &str) -> Key {
        match name.to_ascii_lowercase().as_str() {
            "up" => Key::Up,
            "down" => Key::Down,
            "left" => Key::Left,
            "right" => Key::Right,
            "return" => Key::Return,
            "space" => Key::Space,
            "escape" => Key::Escape,
            "delete" => Key::Delete,
            "backspace" => Key::Backspace,
            "tab" => Key::Tab,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => Key::Unknown,
                }
            }
        }
    }
}

/// Mouse button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Left mouse button (primary drawing button)
    Left,
    /// Right mouse button (ignored)
    Right,
    /// Middle mouse button (ignored)
    Middle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binding_names_round_trip() {
        for key in [Key::Up, Key::Return, Key::Space, Key::Delete, Key::Char('m')] {
            let name = key.binding_name().unwrap();
            assert_eq!(Key::from_binding_name(&name), key);
        }
        assert_eq!(Key::Shift.binding_name(), None);
        assert_eq!(Key::from_binding_name("F13"), Key::Unknown);
    }
}
