//! Input handling and the stroke-capture state machine.
//!
//! This module normalizes keyboard, grid and pointer input into a single
//! ordered [`Event`] stream, feeds it through the [`Dispatcher`], and keeps
//! the explicit [`DrawingSession`] (painted cells, stroke history, active
//! stroke, cursor and input mode).

pub mod dispatch;
pub mod events;
pub mod mode;
pub mod modifiers;
pub mod state;

// Re-export commonly used types at module level
pub use dispatch::Dispatcher;
pub use events::{Event, Key, MouseButton};
pub use mode::InputMode;
pub use modifiers::Modifiers;
pub use state::{DrawingSession, InputState, StrokeBuilder, StrokeState};
