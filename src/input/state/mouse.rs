use crate::draw::Point;
use crate::input::{Event, events::MouseButton};
use crate::sink::SessionSink;
use log::warn;

use super::InputState;

impl<S: SessionSink> InputState<S> {
    /// Processes a mouse button press event.
    ///
    /// # Arguments
    /// * `button` - Which mouse button was pressed
    /// * `x` - Surface X coordinate
    /// * `y` - Surface Y coordinate
    ///
    /// # Behavior
    /// - Left press: starts a stroke at the sample (or extends one already active)
    /// - Other buttons: ignored
    pub fn on_mouse_press(&mut self, button: MouseButton, x: f64, y: f64) {
        if button != MouseButton::Left {
            return;
        }
        self.pointer_event(Event::DragStart(Point::new(x, y)));
    }

    /// Processes mouse motion events.
    ///
    /// While the left button is held every sample extends the stroke; hover
    /// motion is ignored by the dispatcher.
    pub fn on_mouse_motion(&mut self, x: f64, y: f64) {
        self.pointer_event(Event::DragMove(Point::new(x, y)));
    }

    /// Processes mouse button release events.
    ///
    /// Releasing the left button finishes the stroke.
    pub fn on_mouse_release(&mut self, button: MouseButton) {
        if button != MouseButton::Left {
            return;
        }
        self.pointer_event(Event::DragEnd);
    }

    /// Pointer samples off the surface are dropped rather than aborting the drag.
    fn pointer_event(&mut self, event: Event) {
        if let Err(err) = self.dispatch(event) {
            warn!("Ignoring pointer sample: {err}");
        }
    }
}
