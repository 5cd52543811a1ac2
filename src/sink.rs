//! Render/announce sink: the boundary between the stroke core and whatever
//! draws or voices it.
//!
//! The dispatcher never renders anything itself. Instead it reports painted
//! cells, finished strokes, focus moves, and human-readable status messages
//! to a [`SessionSink`], so a canvas, an SVG writer, or a terminal can stay
//! decoupled from the state machine.

use crate::draw::{CellAddress, Stroke};

/// Receiver for the change notifications emitted by the dispatcher.
pub trait SessionSink {
    /// A cell was added to the painted set (fired once per newly painted cell).
    fn on_painted_change(&mut self, cell: CellAddress);

    /// A stroke was moved into the completed history.
    fn on_stroke_finalized(&mut self, stroke: &Stroke);

    /// Status text for assistive-technology live regions. Implementations
    /// must not move input focus in response.
    fn on_announce(&mut self, message: &str);

    /// The keyboard cursor moved to `cell`.
    fn on_focus_change(&mut self, cell: CellAddress);
}

impl<S: SessionSink + ?Sized> SessionSink for &mut S {
    fn on_painted_change(&mut self, cell: CellAddress) {
        (**self).on_painted_change(cell);
    }

    fn on_stroke_finalized(&mut self, stroke: &Stroke) {
        (**self).on_stroke_finalized(stroke);
    }

    fn on_announce(&mut self, message: &str) {
        (**self).on_announce(message);
    }

    fn on_focus_change(&mut self, cell: CellAddress) {
        (**self).on_focus_change(cell);
    }
}

impl<S: SessionSink + ?Sized> SessionSink for Box<S> {
    fn on_painted_change(&mut self, cell: CellAddress) {
        (**self).on_painted_change(cell);
    }

    fn on_stroke_finalized(&mut self, stroke: &Stroke) {
        (**self).on_stroke_finalized(stroke);
    }

    fn on_announce(&mut self, message: &str) {
        (**self).on_announce(message);
    }

    fn on_focus_change(&mut self, cell: CellAddress) {
        (**self).on_focus_change(cell);
    }
}

/// Discards every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl SessionSink for NullSink {
    fn on_painted_change(&mut self, _cell: CellAddress) {}
    fn on_stroke_finalized(&mut self, _stroke: &Stroke) {}
    fn on_announce(&mut self, _message: &str) {}
    fn on_focus_change(&mut self, _cell: CellAddress) {}
}

/// Forwards notifications to the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl SessionSink for LogSink {
    fn on_painted_change(&mut self, cell: CellAddress) {
        log::debug!("Painted cell {cell}");
    }

    fn on_stroke_finalized(&mut self, stroke: &Stroke) {
        log::debug!("Stroke finalized with {} points", stroke.len());
    }

    fn on_announce(&mut self, message: &str) {
        log::info!("{message}");
    }

    fn on_focus_change(&mut self, cell: CellAddress) {
        log::debug!("Focus moved to {cell}");
    }
}

/// A notification captured by [`RecordingSink`].
#[derive(Debug, Clone, PartialEq)]
pub enum SinkEvent {
    Painted(CellAddress),
    StrokeFinalized(Stroke),
    Announce(String),
    Focus(CellAddress),
}

/// Records every notification in arrival order.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    pub events: Vec<SinkEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn painted(&self) -> Vec<CellAddress> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SinkEvent::Painted(cell) => Some(*cell),
                _ => None,
            })
            .collect()
    }

    pub fn finalized(&self) -> Vec<&Stroke> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SinkEvent::StrokeFinalized(stroke) => Some(stroke),
                _ => None,
            })
            .collect()
    }

    pub fn announcements(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SinkEvent::Announce(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn focus_changes(&self) -> Vec<CellAddress> {
        self.events
            .iter()
            .filter_map(|event| match event {
                SinkEvent::Focus(cell) => Some(*cell),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl SessionSink for RecordingSink {
    fn on_painted_change(&mut self, cell: CellAddress) {
        self.events.push(SinkEvent::Painted(cell));
    }

    fn on_stroke_finalized(&mut self, stroke: &Stroke) {
        self.events.push(SinkEvent::StrokeFinalized(stroke.clone()));
    }

    fn on_announce(&mut self, message: &str) {
        self.events.push(SinkEvent::Announce(message.to_string()));
    }

    fn on_focus_change(&mut self, cell: CellAddress) {
        self.events.push(SinkEvent::Focus(cell));
    }
}
