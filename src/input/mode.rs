//! Input mode selection.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Governs whether traversal extends the active stroke.
///
/// In [`InputMode::DirectActivation`] only explicit activation paints. In
/// [`InputMode::ContinuousPaint`] every cursor move paints, which lets
/// screen-reader navigation itself act as a drawing gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum InputMode {
    /// Cursor movement only moves focus (default)
    #[default]
    DirectActivation,
    /// Cursor movement paints the cells it visits
    ContinuousPaint,
}

impl InputMode {
    /// Returns the other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::DirectActivation => Self::ContinuousPaint,
            Self::ContinuousPaint => Self::DirectActivation,
        }
    }

    pub fn is_continuous(self) -> bool {
        self == Self::ContinuousPaint
    }

    /// Parses a mode name as accepted on the command line and in scripts.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "direct" | "direct-activation" => Some(Self::DirectActivation),
            "continuous" | "continuous-paint" => Some(Self::ContinuousPaint),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggled_flips_between_modes() {
        assert_eq!(
            InputMode::DirectActivation.toggled(),
            InputMode::ContinuousPaint
        );
        assert_eq!(
            InputMode::ContinuousPaint.toggled(),
            InputMode::DirectActivation
        );
    }

    #[test]
    fn from_name_accepts_short_and_long_forms() {
        assert_eq!(
            InputMode::from_name("Continuous"),
            Some(InputMode::ContinuousPaint)
        );
        assert_eq!(
            InputMode::from_name("direct-activation"),
            Some(InputMode::DirectActivation)
        );
        assert_eq!(InputMode::from_name("whiteboard"), None);
    }
}
