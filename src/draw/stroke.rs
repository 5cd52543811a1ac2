//! Stroke and painted-cell containers.

use super::curve::{self, PathCommand};
use super::geometry::{CellAddress, Point};
use std::collections::BTreeSet;

/// One continuous gesture: the sampled points and the cells that produced them.
///
/// `points[i]` was recorded together with `cells[i]`; insertion order defines
/// the direction the curve travels.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Stroke {
    points: Vec<Point>,
    cells: Vec<CellAddress>,
}

impl Stroke {
    /// Creates a stroke seeded with its first sample.
    pub fn starting_at(cell: CellAddress, point: Point) -> Self {
        Self {
            points: vec![point],
            cells: vec![cell],
        }
    }

    /// Appends a sample to the end of the stroke.
    pub(crate) fn push(&mut self, cell: CellAddress, point: Point) {
        self.points.push(point);
        self.cells.push(cell);
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn cells(&self) -> &[CellAddress] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the stroke has enough samples to draw a curve.
    pub fn is_renderable(&self) -> bool {
        self.points.len() >= 2
    }

    pub fn smooth_curve(&self, alpha: f64) -> Vec<PathCommand> {
        curve::fit_smooth_curve(&self.points, alpha)
    }

    /// SVG path data for this stroke; empty when the stroke is not renderable.
    pub fn path_data(&self, alpha: f64) -> String {
        curve::path_data(&self.smooth_curve(alpha))
    }
}

/// Cumulative set of cells touched by any stroke.
///
/// Only grows; the sole way to remove cells is [`PaintedSet::clear`] on a
/// full reset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaintedSet {
    cells: BTreeSet<CellAddress>,
}

impl PaintedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `cell` as painted. Returns `true` when the cell was not painted before.
    pub fn insert(&mut self, cell: CellAddress) -> bool {
        self.cells.insert(cell)
    }

    pub fn contains(&self, cell: CellAddress) -> bool {
        self.cells.contains(&cell)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Painted cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = CellAddress> + '_ {
        self.cells.iter().copied()
    }

    pub(crate) fn clear(&mut self) {
        self.cells.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::cell_center;

    #[test]
    fn stroke_keeps_points_and_cells_aligned() {
        let a = CellAddress::new(0, 0);
        let b = CellAddress::new(0, 1);
        let mut stroke = Stroke::starting_at(a, cell_center(a, 10.0));
        assert!(!stroke.is_renderable());
        assert_eq!(stroke.path_data(0.5), "");

        stroke.push(b, cell_center(b, 10.0));
        assert_eq!(stroke.len(), 2);
        assert_eq!(stroke.cells(), &[a, b]);
        assert_eq!(
            stroke.points(),
            &[Point::new(5.0, 5.0), Point::new(15.0, 5.0)]
        );
        assert!(stroke.is_renderable());
        assert!(stroke.path_data(0.5).starts_with("M 5 5 C"));
    }

    #[test]
    fn painted_set_reports_new_cells_once() {
        let mut painted = PaintedSet::new();
        assert!(painted.insert(CellAddress::new(1, 1)));
        assert!(!painted.insert(CellAddress::new(1, 1)));
        assert!(painted.insert(CellAddress::new(0, 3)));
        assert_eq!(painted.len(), 2);

        let ordered: Vec<_> = painted.iter().collect();
        assert_eq!(ordered, vec![CellAddress::new(0, 3), CellAddress::new(1, 1)]);

        painted.clear();
        assert!(painted.is_empty());
    }
}
