//! Keybinding configuration types and parsing.
//!
//! This module defines the configurable keybinding system that allows users
//! to customize the keys that move the cursor, paint, and manage strokes.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// All possible actions that can be bound to keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // Exit (finishes the active stroke first)
    Exit,

    // Cursor movement
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,

    // Stroke actions
    ActivateCell,
    ToggleStroke,
    ToggleMode,
    ClearCanvas,
}

/// A single keybinding: a key name with optional modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub key: String,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
}

impl KeyBinding {
    /// Parse a keybinding string like "Ctrl+Shift+E" or "Escape".
    /// Modifiers can appear in any order and spaces around '+' are allowed.
    /// Common aliases ("Enter", "Esc", "Del", "ArrowUp", ...) are normalized.
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty keybinding string".to_string());
        }

        let normalized = s.replace(" + ", "+").replace("+ ", "+").replace(" +", "+");

        let mut ctrl = false;
        let mut shift = false;
        let mut alt = false;
        let mut key_parts = Vec::new();

        for part in normalized.split('+') {
            match part.to_lowercase().as_str() {
                "ctrl" | "control" => ctrl = true,
                "shift" => shift = true,
                "alt" => alt = true,
                _ => key_parts.push(part),
            }
        }

        if key_parts.is_empty() {
            return Err(format!("No key specified in: {}", s));
        }

        // "Ctrl++" splits into trailing empty parts; the key is '+'
        let key = key_parts.join("+");
        let key = if key.is_empty() {
            "+".to_string()
        } else {
            canonical_key_name(&key)
        };

        Ok(Self {
            key,
            ctrl,
            shift,
            alt,
        })
    }

    /// Check if this keybinding matches the current input state.
    pub fn matches(&self, key: &str, ctrl: bool, shift: bool, alt: bool) -> bool {
        self.key.eq_ignore_ascii_case(key)
            && self.ctrl == ctrl
            && self.shift == shift
            && self.alt == alt
    }
}

fn canonical_key_name(key: &str) -> String {
    let canonical = match key.to_lowercase().as_str() {
        "enter" | "return" => "Return",
        "esc" | "escape" => "Escape",
        "del" | "delete" => "Delete",
        "space" | "spacebar" => "Space",
        "up" | "arrowup" => "Up",
        "down" | "arrowdown" => "Down",
        "left" | "arrowleft" => "Left",
        "right" | "arrowright" => "Right",
        "backspace" => "Backspace",
        "tab" => "Tab",
        // Character keys match case-insensitively, so store one case
        _ if key.chars().count() == 1 => return key.to_uppercase(),
        _ => return key.to_string(),
    };
    canonical.to_string()
}

/// Configuration for all keybindings.
///
/// Each action can have multiple keybindings. Users specify them in config.toml as:
/// ```toml
/// [keybindings]
/// toggle_stroke = ["Return"]
/// clear_canvas = ["Delete", "Ctrl+E"]
/// move_up = ["Up", "K"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct KeybindingsConfig {
    #[serde(default = "default_exit")]
    pub exit: Vec<String>,

    #[serde(default = "default_move_up")]
    pub move_up: Vec<String>,

    #[serde(default = "default_move_down")]
    pub move_down: Vec<String>,

    #[serde(default = "default_move_left")]
    pub move_left: Vec<String>,

    #[serde(default = "default_move_right")]
    pub move_right: Vec<String>,

    #[serde(default = "default_activate_cell")]
    pub activate_cell: Vec<String>,

    #[serde(default = "default_toggle_stroke")]
    pub toggle_stroke: Vec<String>,

    #[serde(default = "default_toggle_mode")]
    pub toggle_mode: Vec<String>,

    #[serde(default = "default_clear_canvas")]
    pub clear_canvas: Vec<String>,
}

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            exit: default_exit(),
            move_up: default_move_up(),
            move_down: default_move_down(),
            move_left: default_move_left(),
            move_right: default_move_right(),
            activate_cell: default_activate_cell(),
            toggle_stroke: default_toggle_stroke(),
            toggle_mode: default_toggle_mode(),
            clear_canvas: default_clear_canvas(),
        }
    }
}

impl KeybindingsConfig {
    /// Build a lookup map from keybindings to actions for efficient matching.
    /// Returns an error if any keybinding string is invalid or if duplicates are detected.
    pub fn build_action_map(&self) -> Result<HashMap<KeyBinding, Action>, String> {
        let mut map = HashMap::new();

        let groups: [(&[String], Action); 9] = [
            (&self.exit, Action::Exit),
            (&self.move_up, Action::MoveUp),
            (&self.move_down, Action::MoveDown),
            (&self.move_left, Action::MoveLeft),
            (&self.move_right, Action::MoveRight),
            (&self.activate_cell, Action::ActivateCell),
            (&self.toggle_stroke, Action::ToggleStroke),
            (&self.toggle_mode, Action::ToggleMode),
            (&self.clear_canvas, Action::ClearCanvas),
        ];

        for (bindings, action) in groups {
            for binding_str in bindings {
                let binding = KeyBinding::parse(binding_str)?;
                if let Some(existing_action) = map.insert(binding, action) {
                    return Err(format!(
                        "Duplicate keybinding '{}' assigned to both {:?} and {:?}",
                        binding_str, existing_action, action
                    ));
                }
            }
        }

        Ok(map)
    }
}

// =============================================================================
// Default keybinding functions
// =============================================================================

fn default_exit() -> Vec<String> {
    vec!["Escape".to_string()]
}

fn default_move_up() -> Vec<String> {
    vec!["Up".to_string()]
}

fn default_move_down() -> Vec<String> {
    vec!["Down".to_string()]
}

fn default_move_left() -> Vec<String> {
    vec!["Left".to_string()]
}

fn default_move_right() -> Vec<String> {
    vec!["Right".to_string()]
}

fn default_activate_cell() -> Vec<String> {
    vec!["Space".to_string()]
}

fn default_toggle_stroke() -> Vec<String> {
    vec!["Return".to_string()]
}

fn default_toggle_mode() -> Vec<String> {
    vec!["M".to_string()]
}

fn default_clear_canvas() -> Vec<String> {
    vec!["Delete".to_string(), "Ctrl+E".to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_key() {
        let binding = KeyBinding::parse("M").unwrap();
        assert_eq!(binding.key, "M");
        assert!(!binding.ctrl);
        assert!(!binding.shift);
        assert!(!binding.alt);
    }

    #[test]
    fn test_parse_ctrl_key() {
        let binding = KeyBinding::parse("Ctrl+E").unwrap();
        assert_eq!(binding.key, "E");
        assert!(binding.ctrl);
        assert!(!binding.shift);
    }

    #[test]
    fn test_parse_with_spaces_and_any_order() {
        let a = KeyBinding::parse("Ctrl + Shift + W").unwrap();
        let b = KeyBinding::parse("Shift+Ctrl+W").unwrap();
        assert_eq!(a, b);
        assert!(a.ctrl && a.shift && !a.alt);
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!(KeyBinding::parse("Enter").unwrap().key, "Return");
        assert_eq!(KeyBinding::parse("esc").unwrap().key, "Escape");
        assert_eq!(KeyBinding::parse("ArrowLeft").unwrap().key, "Left");
        assert_eq!(KeyBinding::parse("Ctrl++").unwrap().key, "+");
    }

    #[test]
    fn test_parse_rejects_empty_and_modifier_only() {
        assert!(KeyBinding::parse("   ").is_err());
        assert!(KeyBinding::parse("Ctrl+Shift").is_err());
    }

    #[test]
    fn test_matches() {
        let binding = KeyBinding::parse("Ctrl+E").unwrap();
        assert!(binding.matches("E", true, false, false));
        assert!(binding.matches("e", true, false, false)); // Case insensitive
        assert!(!binding.matches("E", false, false, false)); // Missing ctrl
        assert!(!binding.matches("R", true, false, false)); // Wrong key
    }

    #[test]
    fn test_build_action_map() {
        let config = KeybindingsConfig::default();
        let map = config.build_action_map().unwrap();

        let enter = KeyBinding::parse("Return").unwrap();
        assert_eq!(map.get(&enter), Some(&Action::ToggleStroke));

        let ctrl_e = KeyBinding::parse("Ctrl+E").unwrap();
        assert_eq!(map.get(&ctrl_e), Some(&Action::ClearCanvas));

        let space = KeyBinding::parse("Space").unwrap();
        assert_eq!(map.get(&space), Some(&Action::ActivateCell));
    }

    #[test]
    fn test_duplicate_keybinding_detection() {
        let mut config = KeybindingsConfig::default();
        config.toggle_mode = vec!["Ctrl+E".to_string()];

        let err_msg = config.build_action_map().unwrap_err();
        assert!(err_msg.contains("Duplicate keybinding"));
        assert!(err_msg.contains("Ctrl+E"));
    }

    #[test]
    fn test_parse_uppercases_character_keys() {
        assert_eq!(KeyBinding::parse("m").unwrap().key, "M");
        assert_eq!(
            KeyBinding::parse("ctrl+e").unwrap(),
            KeyBinding::parse("Ctrl+E").unwrap()
        );
        assert_eq!(KeyBinding::parse("Escape").unwrap().key, "Escape");
    }

    #[test]
    fn test_duplicate_differing_only_in_case() {
        let mut config = KeybindingsConfig::default();
        config.activate_cell = vec!["m".to_string()];

        let err_msg = config.build_action_map().unwrap_err();
        assert!(err_msg.contains("Duplicate keybinding"));
    }

    #[test]
    fn test_duplicate_through_alias() {
        let mut config = KeybindingsConfig::default();
        config.activate_cell = vec!["Enter".to_string()];

        let result = config.build_action_map();
        assert!(result.is_err());
    }
}
