//! Explicit drawing-session state.

use super::builder::{StrokeBuilder, StrokeState};
use crate::draw::{CellAddress, GridSpec, PaintedSet, Point, Stroke};
use crate::error::StrokeError;
use crate::input::InputMode;

/// Everything a drawing session owns: grid, stroke builder (painted set,
/// history, active stroke), keyboard cursor, and input mode.
///
/// Operations here validate addresses against the grid but emit no
/// notifications; the dispatcher layers sink callbacks on top.
#[derive(Debug, Clone)]
pub struct DrawingSession {
    grid: GridSpec,
    builder: StrokeBuilder,
    cursor: CellAddress,
    mode: InputMode,
}

impl DrawingSession {
    /// Creates an idle session with the cursor at the top-left cell.
    pub fn new(grid: GridSpec) -> Self {
        Self {
            grid,
            builder: StrokeBuilder::new(),
            cursor: CellAddress::new(0, 0),
            mode: InputMode::default(),
        }
    }

    /// Creates an idle session with a custom starting cursor and mode.
    pub fn with_cursor(
        grid: GridSpec,
        cursor: CellAddress,
        mode: InputMode,
    ) -> Result<Self, StrokeError> {
        grid.check(cursor)?;
        Ok(Self {
            grid,
            builder: StrokeBuilder::new(),
            cursor,
            mode,
        })
    }

    pub fn grid(&self) -> &GridSpec {
        &self.grid
    }

    pub fn cursor(&self) -> CellAddress {
        self.cursor
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn state(&self) -> &StrokeState {
        self.builder.state()
    }

    pub fn is_active(&self) -> bool {
        self.builder.is_active()
    }

    pub fn active_stroke(&self) -> Option<&Stroke> {
        self.builder.active_stroke()
    }

    /// Completed strokes, oldest first.
    pub fn strokes(&self) -> &[Stroke] {
        self.builder.history()
    }

    pub fn painted(&self) -> &PaintedSet {
        self.builder.painted()
    }

    /// SVG path data for every completed stroke, fitted with `alpha`.
    ///
    /// Pure read: calling this with a different `alpha` never touches state.
    pub fn smoothed_paths(&self, alpha: f64) -> Vec<String> {
        self.strokes()
            .iter()
            .map(|stroke| stroke.path_data(alpha))
            .collect()
    }

    /// Starts a stroke at the center of `cell`.
    pub fn start_stroke(&mut self, cell: CellAddress) -> Result<bool, StrokeError> {
        self.grid.check(cell)?;
        let point = self.grid.cell_center(cell);
        self.builder.start(cell, point)
    }

    /// Extends the active stroke to the center of `cell`.
    pub fn extend_stroke(&mut self, cell: CellAddress) -> Result<bool, StrokeError> {
        self.grid.check(cell)?;
        let point = self.grid.cell_center(cell);
        self.builder.extend(cell, point)
    }

    /// Starts a stroke with a raw surface sample; the cell is derived from it.
    pub fn start_stroke_at(&mut self, point: Point) -> Result<(CellAddress, bool), StrokeError> {
        let cell = self.grid.cell_at(point)?;
        let newly_painted = self.builder.start(cell, point)?;
        Ok((cell, newly_painted))
    }

    /// Extends the active stroke with a raw surface sample.
    pub fn extend_stroke_at(&mut self, point: Point) -> Result<(CellAddress, bool), StrokeError> {
        let cell = self.grid.cell_at(point)?;
        let newly_painted = self.builder.extend(cell, point)?;
        Ok((cell, newly_painted))
    }

    /// Finalizes the active stroke; `None` when idle.
    pub fn finish_stroke(&mut self) -> Option<&Stroke> {
        self.builder.finish()
    }

    /// Wipes strokes and painted cells. Cursor and mode survive a reset.
    pub fn reset(&mut self) {
        self.builder.reset();
    }

    pub fn set_cursor(&mut self, cell: CellAddress) -> Result<(), StrokeError> {
        self.grid.check(cell)?;
        self.cursor = cell;
        Ok(())
    }

    /// Moves the cursor with wraparound and returns the new position.
    pub fn step_cursor(&mut self, dr: isize, dc: isize) -> CellAddress {
        self.cursor = self.grid.wrap(self.cursor, dr, dc);
        self.cursor
    }

    /// Replaces the mode without any stroke side effects.
    pub(crate) fn set_mode_raw(&mut self, mode: InputMode) {
        self.mode = mode;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> DrawingSession {
        DrawingSession::new(GridSpec::new(4, 4, 10.0))
    }

    #[test]
    fn two_cell_stroke_is_recorded() {
        let mut session = session();
        session.start_stroke(CellAddress::new(0, 0)).unwrap();
        session.extend_stroke(CellAddress::new(0, 1)).unwrap();
        session.finish_stroke();

        assert_eq!(session.strokes().len(), 1);
        assert_eq!(
            session.strokes()[0].points(),
            &[Point::new(5.0, 5.0), Point::new(15.0, 5.0)]
        );
        let painted: Vec<_> = session.painted().iter().collect();
        assert_eq!(painted, vec![CellAddress::new(0, 0), CellAddress::new(0, 1)]);
        assert_eq!(session.state(), &StrokeState::Idle);
    }

    #[test]
    fn out_of_range_cells_are_rejected_not_clamped() {
        let mut session = session();
        let err = session.start_stroke(CellAddress::new(0, 4)).unwrap_err();
        assert!(matches!(err, StrokeError::CellOutOfRange { col: 4, .. }));
        assert!(!session.is_active());
        assert!(session.painted().is_empty());

        session.start_stroke(CellAddress::new(0, 3)).unwrap();
        assert!(session.extend_stroke(CellAddress::new(9, 9)).is_err());
        assert_eq!(session.active_stroke().unwrap().len(), 1);
    }

    #[test]
    fn raw_samples_keep_their_coordinates() {
        let mut session = session();
        let (cell, newly) = session.start_stroke_at(Point::new(12.5, 3.0)).unwrap();
        assert_eq!(cell, CellAddress::new(0, 1));
        assert!(newly);

        let (_, newly) = session.extend_stroke_at(Point::new(17.0, 8.0)).unwrap();
        assert!(!newly);

        let stroke = session.finish_stroke().unwrap();
        assert_eq!(stroke.points()[0], Point::new(12.5, 3.0));
        assert_eq!(stroke.cells(), &[CellAddress::new(0, 1), CellAddress::new(0, 1)]);
    }

    #[test]
    fn smoothed_paths_can_be_refit_without_changing_state() {
        let mut session = session();
        session.start_stroke(CellAddress::new(0, 0)).unwrap();
        session.extend_stroke(CellAddress::new(1, 1)).unwrap();
        session.extend_stroke(CellAddress::new(1, 3)).unwrap();
        session.finish_stroke();

        let centripetal = session.smoothed_paths(0.5);
        let chordal = session.smoothed_paths(1.0);
        assert_ne!(centripetal, chordal);
        assert_eq!(session.smoothed_paths(0.5), centripetal);
        assert_eq!(session.strokes().len(), 1);
    }

    #[test]
    fn with_cursor_validates_start_position() {
        let grid = GridSpec::new(2, 2, 10.0);
        assert!(
            DrawingSession::with_cursor(grid, CellAddress::new(2, 0), InputMode::default())
                .is_err()
        );
        let session =
            DrawingSession::with_cursor(grid, CellAddress::new(1, 1), InputMode::ContinuousPaint)
                .unwrap();
        assert_eq!(session.cursor(), CellAddress::new(1, 1));
        assert_eq!(session.mode(), InputMode::ContinuousPaint);
    }
}
