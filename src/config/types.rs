//! Configuration type definitions.

use super::enums::{ColorSpec, Language};
use crate::input::InputMode;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Grid layout settings.
///
/// Fixed for the lifetime of a session.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GridConfig {
    /// Number of rows (valid range: 1 - 256)
    #[serde(default = "default_rows")]
    pub rows: usize,

    /// Number of columns (valid range: 1 - 256)
    #[serde(default = "default_cols")]
    pub cols: usize,

    /// Cell edge length in surface units (valid range: 1.0 - 500.0)
    #[serde(default = "default_cell_size")]
    pub cell_size: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            cols: default_cols(),
            cell_size: default_cell_size(),
        }
    }
}

/// Curve fitting settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CurveConfig {
    /// Catmull–Rom parametrization exponent (valid range: 0.0 - 1.0)
    /// - 0.0 = uniform
    /// - 0.5 = centripetal (recommended)
    /// - 1.0 = chordal
    #[serde(default = "default_alpha")]
    pub alpha: f64,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            alpha: default_alpha(),
        }
    }
}

/// Input behavior settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct InputConfig {
    /// Mode the session starts in ("direct-activation" or "continuous-paint")
    ///
    /// Starting in continuous paint does not paint the start cell; the first
    /// cursor move starts the stroke. Toggling into continuous paint at
    /// runtime starts a stroke at the cursor immediately.
    #[serde(default)]
    pub default_mode: InputMode,

    /// Initial cursor row (clamped into the grid)
    #[serde(default)]
    pub start_row: usize,

    /// Initial cursor column (clamped into the grid)
    #[serde(default)]
    pub start_col: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            default_mode: InputMode::default(),
            start_row: 0,
            start_col: 0,
        }
    }
}

/// Status announcement settings.
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct AnnounceConfig {
    /// Announcement language ("en" or "es")
    #[serde(default)]
    pub language: Language,
}

/// Rendering preferences for SVG output.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct UiConfig {
    /// Stroke line width in surface units (valid range: 0.5 - 20.0)
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,

    /// Stroke color
    #[serde(default = "default_stroke_color")]
    pub stroke_color: ColorSpec,

    /// Fill color for painted cells
    #[serde(default = "default_painted_color")]
    pub painted_color: ColorSpec,

    /// Draw painted cells underneath the curves
    #[serde(default = "default_show_painted_cells")]
    pub show_painted_cells: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            stroke_width: default_stroke_width(),
            stroke_color: default_stroke_color(),
            painted_color: default_painted_color(),
            show_painted_cells: default_show_painted_cells(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_rows() -> usize {
    20
}

fn default_cols() -> usize {
    20
}

fn default_cell_size() -> f64 {
    25.0
}

fn default_alpha() -> f64 {
    crate::draw::DEFAULT_ALPHA
}

fn default_stroke_width() -> f64 {
    2.0
}

fn default_stroke_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_painted_color() -> ColorSpec {
    ColorSpec::Name("#cccccc".to_string())
}

fn default_show_painted_cells() -> bool {
    true
}
