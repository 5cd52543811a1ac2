//! Configuration file support for gridstroke.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/gridstroke/config.toml`. Settings include the grid layout,
//! curve smoothing, input defaults, announcement language, SVG styling, and keybindings.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod keybindings;
pub mod types;

// Re-export commonly used types at module level
pub use enums::{ColorSpec, Language};
pub use keybindings::{Action, KeyBinding, KeybindingsConfig};
pub use types::{AnnounceConfig, CurveConfig, GridConfig, InputConfig, UiConfig};

use crate::draw::{CellAddress, GridSpec};
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const MAX_GRID_DIMENSION: usize = 256;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [grid]
/// rows = 20
/// cols = 20
/// cell_size = 25.0
///
/// [curve]
/// alpha = 0.5
///
/// [input]
/// default_mode = "continuous-paint"
///
/// [announce]
/// language = "es"
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Grid dimensions and cell size
    #[serde(default)]
    pub grid: GridConfig,

    /// Curve smoothing settings
    #[serde(default)]
    pub curve: CurveConfig,

    /// Input mode and starting cursor
    #[serde(default)]
    pub input: InputConfig,

    /// Status announcement settings
    #[serde(default)]
    pub announce: AnnounceConfig,

    /// SVG rendering preferences
    #[serde(default)]
    pub ui: UiConfig,

    /// Keyboard shortcuts
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `grid.rows`, `grid.cols`: 1 - 256
    /// - `grid.cell_size`: 1.0 - 500.0
    /// - `curve.alpha`: 0.0 - 1.0
    /// - `ui.stroke_width`: 0.5 - 20.0
    /// - `input.start_row` / `input.start_col`: inside the grid
    pub fn validate_and_clamp(&mut self) {
        if !(1..=MAX_GRID_DIMENSION).contains(&self.grid.rows) {
            log::warn!(
                "Invalid grid rows {}, clamping to 1-{} range",
                self.grid.rows,
                MAX_GRID_DIMENSION
            );
            self.grid.rows = self.grid.rows.clamp(1, MAX_GRID_DIMENSION);
        }

        if !(1..=MAX_GRID_DIMENSION).contains(&self.grid.cols) {
            log::warn!(
                "Invalid grid cols {}, clamping to 1-{} range",
                self.grid.cols,
                MAX_GRID_DIMENSION
            );
            self.grid.cols = self.grid.cols.clamp(1, MAX_GRID_DIMENSION);
        }

        if !(1.0..=500.0).contains(&self.grid.cell_size) {
            log::warn!(
                "Invalid cell_size {:.1}, clamping to 1.0-500.0 range",
                self.grid.cell_size
            );
            self.grid.cell_size = clamp_finite(self.grid.cell_size, 1.0, 500.0, 25.0);
        }

        if !(0.0..=1.0).contains(&self.curve.alpha) {
            log::warn!(
                "Invalid curve alpha {:.2}, clamping to 0.0-1.0 range",
                self.curve.alpha
            );
            self.curve.alpha = clamp_finite(self.curve.alpha, 0.0, 1.0, crate::draw::DEFAULT_ALPHA);
        }

        if !(0.5..=20.0).contains(&self.ui.stroke_width) {
            log::warn!(
                "Invalid stroke_width {:.1}, clamping to 0.5-20.0 range",
                self.ui.stroke_width
            );
            self.ui.stroke_width = clamp_finite(self.ui.stroke_width, 0.5, 20.0, 2.0);
        }

        if self.input.start_row >= self.grid.rows || self.input.start_col >= self.grid.cols {
            log::warn!(
                "Start cursor ({}, {}) outside the {}x{} grid, clamping",
                self.input.start_row,
                self.input.start_col,
                self.grid.rows,
                self.grid.cols
            );
            self.input.start_row = self.input.start_row.min(self.grid.rows - 1);
            self.input.start_col = self.input.start_col.min(self.grid.cols - 1);
        }
    }

    /// Grid specification derived from the `[grid]` section.
    pub fn grid_spec(&self) -> GridSpec {
        GridSpec::new(self.grid.rows, self.grid.cols, self.grid.cell_size)
    }

    /// Initial cursor position from the `[input]` section.
    pub fn start_cursor(&self) -> CellAddress {
        CellAddress::new(self.input.start_row, self.input.start_col)
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/gridstroke/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("gridstroke");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from `config_path`, or returns defaults if the file is missing.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses a TOML document without validation.
    pub fn from_toml(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Saves the current configuration to the default location.
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        self.save_to(&config_path)
    }

    /// Serializes the config to TOML and writes it to `config_path`.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Writes a default configuration file, refusing to overwrite an existing one.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        Self::default().save_to(&config_path)?;
        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }
}

/// Clamps `value`, substituting `fallback` for NaN.
fn clamp_finite(value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(min, max)
    }
}
