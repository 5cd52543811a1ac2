//! Stroke-capture state machine.

use crate::draw::{CellAddress, PaintedSet, Point, Stroke};
use crate::error::StrokeError;

/// Stroke builder state.
///
/// Exactly two states: idle, or one stroke accumulating samples.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum StrokeState {
    /// No active stroke
    #[default]
    Idle,
    /// One stroke accumulating points
    Active {
        /// The stroke under construction (owned exclusively by the builder)
        stroke: Stroke,
    },
}

/// Accumulates samples into strokes and tracks every painted cell.
///
/// The builder does not know about the grid; callers validate addresses and
/// compute sample points before handing them over.
#[derive(Debug, Clone, Default)]
pub struct StrokeBuilder {
    state: StrokeState,
    history: Vec<Stroke>,
    painted: PaintedSet,
}

impl StrokeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &StrokeState {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, StrokeState::Active { .. })
    }

    pub fn active_stroke(&self) -> Option<&Stroke> {
        match &self.state {
            StrokeState::Active { stroke } => Some(stroke),
            StrokeState::Idle => None,
        }
    }

    /// Completed strokes, oldest first.
    pub fn history(&self) -> &[Stroke] {
        &self.history
    }

    pub fn painted(&self) -> &PaintedSet {
        &self.painted
    }

    /// Begins a new stroke at `cell`.
    ///
    /// Returns whether `cell` was newly painted. Fails with
    /// [`StrokeError::AlreadyActive`] if a stroke is in progress.
    pub fn start(&mut self, cell: CellAddress, point: Point) -> Result<bool, StrokeError> {
        if self.is_active() {
            log::error!("StartStroke at {cell} rejected: a stroke is already active");
            return Err(StrokeError::AlreadyActive);
        }

        self.state = StrokeState::Active {
            stroke: Stroke::starting_at(cell, point),
        };
        log::debug!("Stroke started at {cell}");
        Ok(self.painted.insert(cell))
    }

    /// Appends a sample to the active stroke.
    ///
    /// Returns whether `cell` was newly painted. Fails with
    /// [`StrokeError::NotActive`] when idle.
    pub fn extend(&mut self, cell: CellAddress, point: Point) -> Result<bool, StrokeError> {
        let StrokeState::Active { stroke } = &mut self.state else {
            log::error!("ExtendStroke at {cell} rejected: no active stroke");
            return Err(StrokeError::NotActive);
        };

        stroke.push(cell, point);
        log::debug!("Stroke extended to {cell} ({} points)", stroke.len());
        Ok(self.painted.insert(cell))
    }

    /// Moves the active stroke into history.
    ///
    /// Returns the completed stroke, or `None` when already idle (redundant
    /// finishes are tolerated).
    pub fn finish(&mut self) -> Option<&Stroke> {
        match std::mem::take(&mut self.state) {
            StrokeState::Active { stroke } => {
                log::debug!("Stroke finished with {} points", stroke.len());
                self.history.push(stroke);
                self.history.last()
            }
            StrokeState::Idle => None,
        }
    }

    /// Clears history, painted cells and any active stroke.
    pub fn reset(&mut self) {
        self.state = StrokeState::Idle;
        self.history.clear();
        self.painted.clear();
        log::debug!("Stroke builder reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::cell_center;

    fn sample(row: usize, col: usize) -> (CellAddress, Point) {
        let cell = CellAddress::new(row, col);
        (cell, cell_center(cell, 10.0))
    }

    /// Every cell referenced by any stroke must be painted.
    fn assert_painted_covers_strokes(builder: &StrokeBuilder) {
        let strokes = builder.history().iter().chain(builder.active_stroke());
        for stroke in strokes {
            for cell in stroke.cells() {
                assert!(builder.painted().contains(*cell), "{cell} not painted");
            }
        }
    }

    #[test]
    fn start_extend_finish_records_a_stroke() {
        let mut builder = StrokeBuilder::new();
        let (a, pa) = sample(0, 0);
        let (b, pb) = sample(0, 1);

        assert_eq!(builder.start(a, pa), Ok(true));
        assert_eq!(builder.extend(b, pb), Ok(true));
        let finished = builder.finish().cloned().unwrap();

        assert_eq!(
            finished.points(),
            &[Point::new(5.0, 5.0), Point::new(15.0, 5.0)]
        );
        assert_eq!(builder.history().len(), 1);
        assert_eq!(builder.state(), &StrokeState::Idle);
        assert_eq!(builder.painted().iter().collect::<Vec<_>>(), vec![a, b]);
    }

    #[test]
    fn start_while_active_is_rejected_without_side_effects() {
        let mut builder = StrokeBuilder::new();
        let (a, pa) = sample(1, 1);
        let (b, pb) = sample(2, 2);
        builder.start(a, pa).unwrap();

        assert_eq!(builder.start(b, pb), Err(StrokeError::AlreadyActive));
        assert_eq!(builder.active_stroke().unwrap().cells(), &[a]);
        assert!(!builder.painted().contains(b));
    }

    #[test]
    fn extend_while_idle_is_rejected() {
        let mut builder = StrokeBuilder::new();
        let (a, pa) = sample(0, 0);
        assert_eq!(builder.extend(a, pa), Err(StrokeError::NotActive));
        assert!(builder.painted().is_empty());
        assert!(!builder.is_active());
    }

    #[test]
    fn redundant_finish_is_a_no_op() {
        let mut builder = StrokeBuilder::new();
        assert!(builder.finish().is_none());

        let (a, pa) = sample(0, 0);
        builder.start(a, pa).unwrap();
        assert!(builder.finish().is_some());
        assert!(builder.finish().is_none());
        assert_eq!(builder.history().len(), 1);
    }

    #[test]
    fn revisiting_a_cell_is_not_newly_painted() {
        let mut builder = StrokeBuilder::new();
        let (a, pa) = sample(3, 3);
        assert_eq!(builder.start(a, pa), Ok(true));
        assert_eq!(builder.extend(a, pa), Ok(false));
        assert_eq!(builder.active_stroke().unwrap().len(), 2);
        assert_eq!(builder.painted().len(), 1);
    }

    #[test]
    fn painted_set_grows_monotonically() {
        let mut builder = StrokeBuilder::new();
        let path = [(0, 0), (0, 1), (0, 1), (1, 1), (0, 0), (2, 3)];
        let mut last_len = 0;

        for (i, &(row, col)) in path.iter().enumerate() {
            let (cell, point) = sample(row, col);
            if i == 0 || i == 3 {
                builder.finish();
                builder.start(cell, point).unwrap();
            } else {
                builder.extend(cell, point).unwrap();
            }
            assert!(builder.painted().len() >= last_len);
            last_len = builder.painted().len();
            assert_painted_covers_strokes(&builder);
        }
        builder.finish();
        assert_painted_covers_strokes(&builder);
        assert_eq!(builder.history().len(), 2);
        assert_eq!(builder.painted().len(), 4);
    }

    #[test]
    fn reset_clears_everything() {
        let mut builder = StrokeBuilder::new();
        let (a, pa) = sample(0, 0);
        let (b, pb) = sample(1, 0);
        builder.start(a, pa).unwrap();
        builder.finish();
        builder.start(b, pb).unwrap();

        builder.reset();
        assert_eq!(builder.state(), &StrokeState::Idle);
        assert!(builder.history().is_empty());
        assert!(builder.painted().is_empty());

        // Usable again afterwards
        assert_eq!(builder.start(a, pa), Ok(true));
    }
}
