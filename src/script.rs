//! Line-oriented event scripts for headless replay.
//!
//! Each non-empty, non-comment line is one step:
//!
//! ```text
//! # comments start with '#'
//! up | down | left | right   cursor step
//! move DR DC                 cursor step by an arbitrary delta
//! activate [ROW COL]         activate a cell (defaults to the cursor)
//! enter                      start/finish toggle
//! press X Y                  pointer down at a surface coordinate
//! drag X Y                   pointer motion
//! release                    pointer up
//! mode toggle|direct|continuous
//! reset
//! key BINDING                key press through the keybindings, e.g. `key Ctrl+E`
//! ```

use crate::config::KeyBinding;
use crate::draw::CellAddress;
use crate::error::StrokeError;
use crate::input::{Event, InputMode, InputState, Key, MouseButton};
use crate::sink::SessionSink;
use thiserror::Error;

/// A parsed script step.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptStep {
    /// Dispatched directly; errors abort the replay
    Event(Event),
    /// Space-key activation at whatever the cursor is when the step runs
    ActivateCursor,
    /// Pointer input, routed through the pointer adapter
    Press { x: f64, y: f64 },
    Drag { x: f64, y: f64 },
    Release,
    /// Key press with modifiers, routed through the keybinding map
    Key(KeyBinding),
}

/// Script parse error with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("line {line}: {message}")]
pub struct ScriptError {
    pub line: usize,
    pub message: String,
}

impl ScriptError {
    fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

/// Parses a whole script.
pub fn parse_script(source: &str) -> Result<Vec<ScriptStep>, ScriptError> {
    let mut steps = Vec::new();
    for (index, raw) in source.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }
        steps.push(parse_line(line).map_err(|message| ScriptError::new(index + 1, message))?);
    }
    Ok(steps)
}

fn parse_line(line: &str) -> Result<ScriptStep, String> {
    let mut words = line.split_whitespace();
    let command = words.next().unwrap_or_default().to_ascii_lowercase();
    let args: Vec<&str> = words.collect();

    let step = match command.as_str() {
        "up" => step_move(&args, -1, 0)?,
        "down" => step_move(&args, 1, 0)?,
        "left" => step_move(&args, 0, -1)?,
        "right" => step_move(&args, 0, 1)?,
        "move" => {
            let [dr, dc] = expect_args::<2>(&command, &args)?;
            ScriptStep::Event(Event::CursorMove {
                dr: parse_num(dr)?,
                dc: parse_num(dc)?,
            })
        }
        "activate" => match args.as_slice() {
            [] => ScriptStep::ActivateCursor,
            [row, col] => ScriptStep::Event(Event::Activate(CellAddress::new(
                parse_num(row)?,
                parse_num(col)?,
            ))),
            _ => return Err("activate takes no arguments or ROW COL".to_string()),
        },
        "enter" => {
            expect_args::<0>(&command, &args)?;
            ScriptStep::Event(Event::Commit)
        }
        "press" => {
            let [x, y] = expect_args::<2>(&command, &args)?;
            ScriptStep::Press {
                x: parse_num(x)?,
                y: parse_num(y)?,
            }
        }
        "drag" => {
            let [x, y] = expect_args::<2>(&command, &args)?;
            ScriptStep::Drag {
                x: parse_num(x)?,
                y: parse_num(y)?,
            }
        }
        "release" => {
            expect_args::<0>(&command, &args)?;
            ScriptStep::Release
        }
        "mode" => {
            let [name] = expect_args::<1>(&command, &args)?;
            if name.eq_ignore_ascii_case("toggle") {
                ScriptStep::Event(Event::ToggleMode)
            } else {
                let mode = InputMode::from_name(name)
                    .ok_or_else(|| format!("unknown mode '{name}'"))?;
                ScriptStep::Event(Event::SetMode(mode))
            }
        }
        "reset" => {
            expect_args::<0>(&command, &args)?;
            ScriptStep::Event(Event::Reset)
        }
        "key" => {
            let [binding] = expect_args::<1>(&command, &args)?;
            ScriptStep::Key(KeyBinding::parse(binding)?)
        }
        other => return Err(format!("unknown command '{other}'")),
    };
    Ok(step)
}

fn step_move(args: &[&str], dr: isize, dc: isize) -> Result<ScriptStep, String> {
    if !args.is_empty() {
        return Err("cursor steps take no arguments".to_string());
    }
    Ok(ScriptStep::Event(Event::CursorMove { dr, dc }))
}

fn expect_args<'a, const N: usize>(
    command: &str,
    args: &[&'a str],
) -> Result<[&'a str; N], String> {
    <[&str; N]>::try_from(args)
        .map_err(|_| format!("{command} expects {N} argument(s), got {}", args.len()))
}

fn parse_num<T: std::str::FromStr>(raw: &str) -> Result<T, String> {
    raw.parse()
        .map_err(|_| format!("'{raw}' is not a valid number"))
}

impl ScriptStep {
    /// Runs the step against `input`.
    ///
    /// Direct events propagate dispatcher errors; pointer and key steps
    /// behave like live input and only log rejected samples.
    pub fn apply<S: SessionSink>(&self, input: &mut InputState<S>) -> Result<(), StrokeError> {
        match self {
            ScriptStep::Event(event) => input.dispatch(*event)?,
            ScriptStep::ActivateCursor => {
                let cursor = input.session().cursor();
                input.dispatch(Event::Activate(cursor))?;
            }
            ScriptStep::Press { x, y } => input.on_mouse_press(MouseButton::Left, *x, *y),
            ScriptStep::Drag { x, y } => input.on_mouse_motion(*x, *y),
            ScriptStep::Release => input.on_mouse_release(MouseButton::Left),
            ScriptStep::Key(binding) => press_binding(input, binding),
        }
        Ok(())
    }
}

/// Presses the binding's modifiers, the key itself, then releases the modifiers.
fn press_binding<S: SessionSink>(input: &mut InputState<S>, binding: &KeyBinding) {
    let modifiers: Vec<Key> = [
        (binding.ctrl, Key::Ctrl),
        (binding.shift, Key::Shift),
        (binding.alt, Key::Alt),
    ]
    .into_iter()
    .filter_map(|(held, key)| held.then_some(key))
    .collect();

    for key in &modifiers {
        input.on_key_press(*key);
    }
    input.on_key_press(Key::from_binding_name(&binding.key));
    for key in &modifiers {
        input.on_key_release(*key);
    }
}
