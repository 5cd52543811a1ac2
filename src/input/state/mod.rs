mod actions;
mod builder;
mod core;
mod mouse;
mod session;

pub use builder::{StrokeBuilder, StrokeState};
pub use self::core::InputState;
pub use session::DrawingSession;
