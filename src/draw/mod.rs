//! Drawing primitives: grid geometry, strokes, and curve fitting.
//!
//! This module defines the core drawing types:
//! - [`Point`] / [`CellAddress`] / [`GridSpec`]: coordinates and the grid mapping
//! - [`Stroke`]: ordered samples of one gesture
//! - [`PaintedSet`]: every cell touched so far
//! - [`fit_smooth_curve`]: centripetal Catmull–Rom to cubic Bezier conversion

pub mod curve;
pub mod geometry;
pub mod stroke;

// Re-export commonly used types at module level
pub use curve::{DEFAULT_ALPHA, PathCommand, fit_smooth_curve, path_data, smooth_path_data};
pub use geometry::{CellAddress, GridSpec, Point, cell_center};
pub use stroke::{PaintedSet, Stroke};
