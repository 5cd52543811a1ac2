//! Input dispatcher: turns the normalized [`Event`] stream into stroke-builder
//! operations and sink notifications.
//!
//! Events are handled synchronously in arrival order. Each event performs at
//! most one stroke operation and at most one announcement, and a rejected
//! event leaves the session exactly as it was.

use super::events::Event;
use super::mode::InputMode;
use super::state::DrawingSession;
use crate::announce::Messages;
use crate::draw::{CellAddress, Point};
use crate::error::StrokeError;
use crate::sink::SessionSink;

/// Owns a [`DrawingSession`] and the sink it reports to.
#[derive(Debug)]
pub struct Dispatcher<S: SessionSink> {
    session: DrawingSession,
    sink: S,
    messages: Messages,
    /// Whether the primary pointer is currently held down
    pointer_down: bool,
}

impl<S: SessionSink> Dispatcher<S> {
    pub fn new(session: DrawingSession, sink: S, messages: Messages) -> Self {
        Self {
            session,
            sink,
            messages,
            pointer_down: false,
        }
    }

    pub fn session(&self) -> &DrawingSession {
        &self.session
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    pub fn pointer_down(&self) -> bool {
        self.pointer_down
    }

    /// Consumes the dispatcher, returning the session and sink.
    pub fn into_parts(self) -> (DrawingSession, S) {
        (self.session, self.sink)
    }

    /// Processes a single input event.
    pub fn dispatch(&mut self, event: Event) -> Result<(), StrokeError> {
        log::trace!("Dispatching {event:?}");
        match event {
            Event::CursorMove { dr, dc } => self.move_cursor(dr, dc),
            Event::Activate(cell) => self.activate(cell),
            Event::Commit => self.commit(),
            Event::DragStart(point) => self.drag_start(point),
            Event::DragMove(point) => self.drag_move(point),
            Event::DragEnd => {
                self.drag_end();
                Ok(())
            }
            Event::ToggleMode => {
                let mode = self.session.mode().toggled();
                self.set_mode(mode);
                Ok(())
            }
            Event::SetMode(mode) => {
                self.set_mode(mode);
                Ok(())
            }
            Event::Reset => {
                self.reset();
                Ok(())
            }
        }
    }

    /// Cursor step with wraparound. In continuous-paint mode the new cell
    /// also starts or extends the stroke.
    fn move_cursor(&mut self, dr: isize, dc: isize) -> Result<(), StrokeError> {
        let cell = self.session.step_cursor(dr, dc);
        if self.session.mode().is_continuous() {
            let message = if self.session.is_active() {
                self.extend_cell(cell)?
            } else {
                self.start_cell(cell)?
            };
            self.announce(&message);
        }
        self.sink.on_focus_change(cell);
        Ok(())
    }

    /// Click, tap or space on a cell: start when idle, extend when active.
    fn activate(&mut self, cell: CellAddress) -> Result<(), StrokeError> {
        self.session.grid().check(cell)?;
        let message = if self.session.is_active() {
            self.extend_cell(cell)?
        } else {
            self.start_cell(cell)?
        };
        self.session.set_cursor(cell)?;
        self.announce(&message);
        Ok(())
    }

    /// Enter: start at the cursor when idle, finish when active.
    fn commit(&mut self) -> Result<(), StrokeError> {
        let message = if self.session.is_active() {
            self.finish()
        } else {
            let cursor = self.session.cursor();
            Some(self.start_cell(cursor)?)
        };
        if let Some(message) = message {
            self.announce(&message);
        }
        Ok(())
    }

    fn drag_start(&mut self, point: Point) -> Result<(), StrokeError> {
        let message = self.sample(point)?;
        self.pointer_down = true;
        self.announce(&message);
        Ok(())
    }

    fn drag_move(&mut self, point: Point) -> Result<(), StrokeError> {
        if !self.pointer_down {
            // Hover without a pressed button draws nothing
            return Ok(());
        }
        let message = self.sample(point)?;
        self.announce(&message);
        Ok(())
    }

    fn drag_end(&mut self) {
        if !self.pointer_down {
            return;
        }
        self.pointer_down = false;
        if let Some(message) = self.finish() {
            self.announce(&message);
        }
    }

    /// Records a raw pointer sample, starting a stroke if none is active.
    fn sample(&mut self, point: Point) -> Result<String, StrokeError> {
        let (cell, newly_painted, started) = if self.session.is_active() {
            let (cell, newly) = self.session.extend_stroke_at(point)?;
            (cell, newly, false)
        } else {
            let (cell, newly) = self.session.start_stroke_at(point)?;
            (cell, newly, true)
        };
        if newly_painted {
            self.sink.on_painted_change(cell);
        }
        self.session.set_cursor(cell)?;
        Ok(if started {
            self.messages.stroke_started(cell)
        } else {
            self.messages.cell_painted(cell)
        })
    }

    /// Applies a mode change. Leaving continuous paint finishes the active
    /// stroke; entering it while idle starts a stroke at the cursor.
    fn set_mode(&mut self, mode: InputMode) {
        if mode == self.session.mode() {
            return;
        }
        self.session.set_mode_raw(mode);
        log::debug!("Input mode changed to {mode:?}");

        let mut message = self.messages.mode_changed(mode);
        let follow_up = match mode {
            InputMode::DirectActivation if self.session.is_active() => self.finish(),
            InputMode::ContinuousPaint if !self.session.is_active() => {
                let cursor = self.session.cursor();
                // The cursor is always inside the grid, so starting cannot fail
                self.start_cell(cursor).ok()
            }
            _ => None,
        };
        if let Some(extra) = follow_up {
            message.push(' ');
            message.push_str(&extra);
        }
        self.announce(&message);
    }

    fn reset(&mut self) {
        self.session.reset();
        self.pointer_down = false;
        let message = self.messages.canvas_reset();
        self.announce(&message);
    }

    fn start_cell(&mut self, cell: CellAddress) -> Result<String, StrokeError> {
        if self.session.start_stroke(cell)? {
            self.sink.on_painted_change(cell);
        }
        Ok(self.messages.stroke_started(cell))
    }

    fn extend_cell(&mut self, cell: CellAddress) -> Result<String, StrokeError> {
        if self.session.extend_stroke(cell)? {
            self.sink.on_painted_change(cell);
        }
        Ok(self.messages.cell_painted(cell))
    }

    /// Finalizes the active stroke and notifies the sink; `None` when idle.
    fn finish(&mut self) -> Option<String> {
        let stroke = self.session.finish_stroke()?;
        self.sink.on_stroke_finalized(stroke);
        Some(self.messages.stroke_finished(stroke.len()))
    }

    fn announce(&mut self, message: &str) {
        self.sink.on_announce(message);
    }
}
