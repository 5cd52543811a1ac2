//! Error taxonomy for stroke capture.
//!
//! Degenerate geometry is never an error (the curve fitter absorbs it); only
//! protocol violations and addresses that fall outside the grid are rejected.

use thiserror::Error;

/// Errors raised by the stroke builder and the input dispatcher.
///
/// A rejected operation leaves every piece of session state untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StrokeError {
    /// `StartStroke` was requested while a stroke is already accumulating.
    #[error("cannot start a stroke while another stroke is active")]
    AlreadyActive,

    /// `ExtendStroke` was requested with no active stroke.
    #[error("cannot extend a stroke when no stroke is active")]
    NotActive,

    /// Cell address outside `0..rows` × `0..cols`.
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    CellOutOfRange {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Pointer sample that does not land on any cell of the surface.
    #[error("point ({x}, {y}) is outside the drawing surface")]
    PointOutsideSurface { x: f64, y: f64 },

    /// Pointer sample with a NaN or infinite coordinate.
    #[error("point ({x}, {y}) has a non-finite coordinate")]
    InvalidPoint { x: f64, y: f64 },
}

impl StrokeError {
    /// Returns true for errors caused by calling the builder in the wrong state.
    pub fn is_protocol_violation(&self) -> bool {
        matches!(self, Self::AlreadyActive | Self::NotActive)
    }
}
