//! Coordinate types and grid math.
//!
//! This module provides:
//! - [`Point`]: a sample in continuous drawing-surface coordinates
//! - [`CellAddress`]: a discrete grid coordinate
//! - [`GridSpec`]: grid dimensions plus the cell/pixel mapping between the two

use crate::error::StrokeError;
use std::fmt;

// ============================================================================
// Points and Cells
// ============================================================================

/// A sample point in drawing-surface units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Discrete grid coordinate. Row-major ordering, so sets of cells iterate
/// top-to-bottom, left-to-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellAddress {
    pub row: usize,
    pub col: usize,
}

impl CellAddress {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Maps a grid address to the pixel center of its cell.
///
/// Total for any address; range checking is the caller's job (see
/// [`GridSpec::check`]).
pub fn cell_center(addr: CellAddress, cell_size: f64) -> Point {
    Point {
        x: addr.col as f64 * cell_size + cell_size / 2.0,
        y: addr.row as f64 * cell_size + cell_size / 2.0,
    }
}

// ============================================================================
// Grid
// ============================================================================

/// Fixed grid configuration for a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    pub rows: usize,
    pub cols: usize,
    pub cell_size: f64,
}

impl GridSpec {
    pub const fn new(rows: usize, cols: usize, cell_size: f64) -> Self {
        Self {
            rows,
            cols,
            cell_size,
        }
    }

    /// Surface width in pixels.
    pub fn width(&self) -> f64 {
        self.cols as f64 * self.cell_size
    }

    /// Surface height in pixels.
    pub fn height(&self) -> f64 {
        self.rows as f64 * self.cell_size
    }

    pub fn contains(&self, addr: CellAddress) -> bool {
        addr.row < self.rows && addr.col < self.cols
    }

    /// Rejects addresses outside the grid instead of clamping them, since a
    /// clamped address would paint a neighboring cell.
    pub fn check(&self, addr: CellAddress) -> Result<(), StrokeError> {
        if self.contains(addr) {
            Ok(())
        } else {
            Err(StrokeError::CellOutOfRange {
                row: addr.row,
                col: addr.col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    pub fn cell_center(&self, addr: CellAddress) -> Point {
        cell_center(addr, self.cell_size)
    }

    /// Returns the cell whose square contains `point`.
    ///
    /// Cell squares are half-open: the right and bottom edges of the surface
    /// belong to no cell.
    pub fn cell_at(&self, point: Point) -> Result<CellAddress, StrokeError> {
        if !point.is_finite() {
            return Err(StrokeError::InvalidPoint {
                x: point.x,
                y: point.y,
            });
        }
        if point.x < 0.0 || point.y < 0.0 || point.x >= self.width() || point.y >= self.height()
        {
            return Err(StrokeError::PointOutsideSurface {
                x: point.x,
                y: point.y,
            });
        }

        let col = ((point.x / self.cell_size).floor() as usize).min(self.cols - 1);
        let row = ((point.y / self.cell_size).floor() as usize).min(self.rows - 1);
        Ok(CellAddress { row, col })
    }

    /// Moves `addr` by (`dr`, `dc`) with wraparound on both axes.
    pub fn wrap(&self, addr: CellAddress, dr: isize, dc: isize) -> CellAddress {
        CellAddress {
            row: wrap_index(addr.row, dr, self.rows),
            col: wrap_index(addr.col, dc, self.cols),
        }
    }
}

/// Euclidean wraparound; `len` is always > 0 for a valid grid.
///
/// The delta is reduced modulo `len` first, so any `isize` step is safe.
fn wrap_index(index: usize, delta: isize, len: usize) -> usize {
    let len = len as isize;
    let step = delta.rem_euclid(len);
    (index as isize + step).rem_euclid(len) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_center_maps_to_middle_of_cell() {
        let p = cell_center(CellAddress::new(0, 0), 10.0);
        assert_eq!(p, Point::new(5.0, 5.0));

        let p = cell_center(CellAddress::new(2, 3), 10.0);
        assert_eq!(p, Point::new(35.0, 25.0));
    }

    #[test]
    fn check_rejects_out_of_range_addresses() {
        let grid = GridSpec::new(4, 4, 10.0);
        assert!(grid.check(CellAddress::new(3, 3)).is_ok());
        assert_eq!(
            grid.check(CellAddress::new(4, 0)),
            Err(StrokeError::CellOutOfRange {
                row: 4,
                col: 0,
                rows: 4,
                cols: 4
            })
        );
        assert!(grid.check(CellAddress::new(0, 7)).is_err());
    }

    #[test]
    fn wrap_moves_around_both_edges() {
        let grid = GridSpec::new(4, 5, 10.0);
        let origin = CellAddress::new(0, 0);

        assert_eq!(grid.wrap(origin, -1, 0), CellAddress::new(3, 0));
        assert_eq!(grid.wrap(origin, 0, -1), CellAddress::new(0, 4));
        assert_eq!(
            grid.wrap(CellAddress::new(3, 4), 1, 1),
            CellAddress::new(0, 0)
        );
        // Deltas larger than the grid still land inside it
        assert_eq!(grid.wrap(origin, -9, 11), CellAddress::new(3, 1));
        // Extreme deltas reduce without overflowing
        assert_eq!(
            grid.wrap(CellAddress::new(1, 0), isize::MAX, 0),
            CellAddress::new(0, 0)
        );
        assert_eq!(
            grid.wrap(CellAddress::new(1, 0), isize::MIN, 0),
            CellAddress::new(1, 0)
        );
        assert_eq!(grid.wrap(origin, 0, isize::MAX), CellAddress::new(0, 2));
        assert_eq!(grid.wrap(origin, 0, isize::MIN), CellAddress::new(0, 2));
    }

    #[test]
    fn cell_at_quantizes_points() {
        let grid = GridSpec::new(4, 4, 10.0);
        assert_eq!(
            grid.cell_at(Point::new(0.0, 0.0)).unwrap(),
            CellAddress::new(0, 0)
        );
        assert_eq!(
            grid.cell_at(Point::new(19.9, 30.0)).unwrap(),
            CellAddress::new(3, 1)
        );
    }

    #[test]
    fn cell_at_rejects_points_off_the_surface() {
        let grid = GridSpec::new(4, 4, 10.0);
        assert!(matches!(
            grid.cell_at(Point::new(40.0, 5.0)),
            Err(StrokeError::PointOutsideSurface { .. })
        ));
        assert!(matches!(
            grid.cell_at(Point::new(-0.5, 5.0)),
            Err(StrokeError::PointOutsideSurface { .. })
        ));
        assert!(matches!(
            grid.cell_at(Point::new(f64::NAN, 5.0)),
            Err(StrokeError::InvalidPoint { .. })
        ));
    }
}
