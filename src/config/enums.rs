//! Configuration enum types.

use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Language used for status announcements.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, JsonSchema)]
pub enum Language {
    /// English (default)
    #[default]
    #[serde(rename = "en")]
    English,
    /// Spanish
    #[serde(rename = "es")]
    Spanish,
}

impl Language {
    /// Parses a language code such as `en` or `es-AR`.
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code.split(['-', '_']).next().unwrap_or_default();
        match primary.to_ascii_lowercase().as_str() {
            "en" => Some(Self::English),
            "es" => Some(Self::Spanish),
            _ => None,
        }
    }
}

/// Color specification - either a named color or RGB values.
///
/// # Examples
/// ```toml
/// # Named color or hex string
/// stroke_color = "black"
/// painted_color = "#cccccc"
///
/// # Custom RGB color (0-255 per component)
/// stroke_color = [255, 128, 0]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color (black, white, gray, red, green, blue) or `#rrggbb`
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

const NAMED_COLORS: &[&str] = &["black", "white", "gray", "red", "green", "blue"];

impl ColorSpec {
    /// Returns the color as an SVG paint value.
    ///
    /// Unknown names fall back to black with a warning.
    pub fn to_svg(&self) -> String {
        match self {
            ColorSpec::Name(name) => {
                let lower = name.to_ascii_lowercase();
                if NAMED_COLORS.contains(&lower.as_str()) || is_hex_color(&lower) {
                    lower
                } else {
                    warn!("Unknown color '{}', using black", name);
                    "black".to_string()
                }
            }
            ColorSpec::Rgb([r, g, b]) => format!("#{r:02x}{g:02x}{b:02x}"),
        }
    }
}

fn is_hex_color(value: &str) -> bool {
    value
        .strip_prefix('#')
        .is_some_and(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_spec_renders_svg_values() {
        assert_eq!(ColorSpec::Name("Black".into()).to_svg(), "black");
        assert_eq!(ColorSpec::Name("#A0B1C2".into()).to_svg(), "#a0b1c2");
        assert_eq!(ColorSpec::Rgb([255, 0, 16]).to_svg(), "#ff0010");
        assert_eq!(ColorSpec::Name("chartreuse?".into()).to_svg(), "black");
    }

    #[test]
    fn language_codes_ignore_region() {
        assert_eq!(Language::from_code("es-AR"), Some(Language::Spanish));
        assert_eq!(Language::from_code("EN"), Some(Language::English));
        assert_eq!(Language::from_code("fr"), None);
    }
}
