//! Input state: keyboard and pointer adapters around the dispatcher.

use super::session::DrawingSession;
use crate::announce::Messages;
use crate::config::{Action, Config, KeyBinding};
use crate::error::StrokeError;
use crate::input::{Event, dispatch::Dispatcher, modifiers::Modifiers};
use crate::sink::SessionSink;
use anyhow::{Result, anyhow};
use std::collections::HashMap;

/// Main input state for a drawing session.
///
/// Owns the dispatcher (and through it the session and sink), the
/// keybinding action map, and modifier state. Raw key and pointer input is
/// translated to [`Event`]s here; everything stroke-related happens in the
/// dispatcher.
pub struct InputState<S: SessionSink> {
    dispatcher: Dispatcher<S>,
    /// Current modifier key state
    pub modifiers: Modifiers,
    /// Whether the user requested to leave the session
    pub should_exit: bool,
    /// Keybinding action map for efficient lookup
    action_map: HashMap<KeyBinding, Action>,
}

impl<S: SessionSink> InputState<S> {
    /// Creates an input state around an existing session.
    pub fn new(
        session: DrawingSession,
        sink: S,
        messages: Messages,
        action_map: HashMap<KeyBinding, Action>,
    ) -> Self {
        Self {
            dispatcher: Dispatcher::new(session, sink, messages),
            modifiers: Modifiers::new(),
            should_exit: false,
            action_map,
        }
    }

    /// Builds a session from validated configuration.
    ///
    /// # Errors
    /// Returns an error if the keybindings are invalid or the configured start
    /// cursor lies outside the grid.
    pub fn from_config(config: &Config, sink: S) -> Result<Self> {
        let action_map = config
            .keybindings
            .build_action_map()
            .map_err(|err| anyhow!("Invalid keybindings: {err}"))?;
        let session = DrawingSession::with_cursor(
            config.grid_spec(),
            config.start_cursor(),
            config.input.default_mode,
        )?;
        let messages = Messages::new(config.announce.language);
        Ok(Self::new(session, sink, messages, action_map))
    }

    pub fn session(&self) -> &DrawingSession {
        self.dispatcher.session()
    }

    pub fn sink(&self) -> &S {
        self.dispatcher.sink()
    }

    pub fn sink_mut(&mut self) -> &mut S {
        self.dispatcher.sink_mut()
    }

    pub fn messages(&self) -> &Messages {
        self.dispatcher.messages()
    }

    /// Consumes the input state, returning the session and sink.
    pub fn into_parts(self) -> (DrawingSession, S) {
        self.dispatcher.into_parts()
    }

    /// Forwards a normalized event to the dispatcher.
    pub fn dispatch(&mut self, event: Event) -> Result<(), StrokeError> {
        self.dispatcher.dispatch(event)
    }

    /// Looks up the action bound to `key_str` under the current modifiers.
    pub(super) fn find_action(&self, key_str: &str) -> Option<Action> {
        self.action_map
            .iter()
            .find(|(binding, _)| {
                binding.matches(
                    key_str,
                    self.modifiers.ctrl,
                    self.modifiers.shift,
                    self.modifiers.alt,
                )
            })
            .map(|(_, action)| *action)
    }
}
