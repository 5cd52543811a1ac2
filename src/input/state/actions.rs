use crate::config::Action;
use crate::input::{Event, events::Key};
use crate::sink::SessionSink;

use super::InputState;

impl<S: SessionSink> InputState<S> {
    /// Processes a key press event.
    ///
    /// Modifier keys update modifier state; any other key is looked up in the
    /// keybinding map and the bound action is translated into an event.
    /// Unbound keys are ignored.
    pub fn on_key_press(&mut self, key: Key) {
        if self.modifiers.apply(key, true) {
            return;
        }

        let Some(key_str) = key.binding_name() else {
            return;
        };

        if let Some(action) = self.find_action(&key_str) {
            self.handle_action(action);
        } else {
            log::trace!("No action bound to {key_str}");
        }
    }

    /// Processes a key release event.
    ///
    /// Only modifier releases matter.
    pub fn on_key_release(&mut self, key: Key) {
        self.modifiers.apply(key, false);
    }

    /// Handle an action triggered by a keybinding.
    pub fn handle_action(&mut self, action: Action) {
        let event = match action {
            Action::Exit => {
                if self.session().is_active() {
                    // Leaving finishes the stroke rather than discarding it
                    Event::Commit
                } else {
                    self.should_exit = true;
                    return;
                }
            }
            Action::MoveUp => Event::CursorMove { dr: -1, dc: 0 },
            Action::MoveDown => Event::CursorMove { dr: 1, dc: 0 },
            Action::MoveLeft => Event::CursorMove { dr: 0, dc: -1 },
            Action::MoveRight => Event::CursorMove { dr: 0, dc: 1 },
            Action::ActivateCell => Event::Activate(self.session().cursor()),
            Action::ToggleStroke => Event::Commit,
            Action::ToggleMode => Event::ToggleMode,
            Action::ClearCanvas => Event::Reset,
        };

        if let Err(err) = self.dispatch(event) {
            log::error!("Action {action:?} failed: {err}");
        }
    }
}
