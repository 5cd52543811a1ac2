//! Library exports for the gridstroke drawing core.
//!
//! Exposes the stroke-capture state machine, curve fitting, the input
//! dispatcher and its sink boundary, and configuration, so that frontends
//! (the bundled CLI, a canvas, an SVG exporter) share one implementation.

pub mod announce;
pub mod config;
pub mod draw;
pub mod error;
pub mod input;
pub mod script;
pub mod sink;
pub mod ui;

pub use config::Config;
pub use error::StrokeError;
