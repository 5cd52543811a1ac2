use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser};
use gridstroke::announce::Messages;
use gridstroke::config::{Config, Language};
use gridstroke::draw::{CellAddress, Stroke};
use gridstroke::input::{InputMode, InputState};
use gridstroke::script::parse_script;
use gridstroke::sink::SessionSink;
use gridstroke::ui;
use std::fs;
use std::path::{Path, PathBuf};

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GRIDSTROKE_GIT_HASH"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "gridstroke")]
#[command(
    version,
    long_version = LONG_VERSION,
    about = "Accessible grid drawing: replay input scripts into smoothed strokes"
)]
struct Cli {
    /// Replay an event script (use '-' for stdin)
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Use this config file instead of ~/.config/gridstroke/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write a default config file and exit
    #[arg(long, action = ArgAction::SetTrue, conflicts_with = "script")]
    init_config: bool,

    /// Grid rows
    #[arg(long, value_name = "N")]
    rows: Option<usize>,

    /// Grid columns
    #[arg(long, value_name = "N")]
    cols: Option<usize>,

    /// Cell edge length in surface units
    #[arg(long, value_name = "SIZE")]
    cell_size: Option<f64>,

    /// Catmull-Rom parameterization (0 uniform, 0.5 centripetal, 1 chordal)
    #[arg(long, value_name = "ALPHA")]
    alpha: Option<f64>,

    /// Initial input mode (direct or continuous)
    #[arg(long, short = 'm', value_name = "MODE")]
    mode: Option<String>,

    /// Announcement language (en or es)
    #[arg(long, value_name = "CODE")]
    lang: Option<String>,

    /// Print the final grid and status line
    #[arg(long, action = ArgAction::SetTrue)]
    grid: bool,

    /// Write the final drawing as SVG
    #[arg(long, value_name = "OUT")]
    svg: Option<PathBuf>,
}

/// Prints announcements for a terminal user; everything else goes to the log.
struct ConsoleSink;

impl SessionSink for ConsoleSink {
    fn on_painted_change(&mut self, cell: CellAddress) {
        log::debug!("Painted cell {cell}");
    }

    fn on_stroke_finalized(&mut self, stroke: &Stroke) {
        log::debug!("Stroke finalized with {} points", stroke.len());
    }

    fn on_announce(&mut self, message: &str) {
        println!("{message}");
    }

    fn on_focus_change(&mut self, cell: CellAddress) {
        log::trace!("Focus moved to {cell}");
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    let Some(script_path) = cli.script.as_deref() else {
        print_usage();
        return Ok(());
    };

    let mut config = load_config(cli.config.as_deref())?;
    apply_overrides(&mut config, &cli)?;
    config.validate_and_clamp();

    let source = read_script(script_path)?;
    let steps = parse_script(&source)
        .with_context(|| format!("Invalid script {}", script_path.display()))?;
    log::info!("Replaying {} script steps", steps.len());

    let mut input = InputState::from_config(&config, ConsoleSink)?;
    for (index, step) in steps.iter().enumerate() {
        step.apply(&mut input)
            .with_context(|| format!("Script step {} ({step:?}) was rejected", index + 1))?;
        if input.should_exit {
            log::info!("Exit requested after step {}", index + 1);
            break;
        }
    }

    let messages: Messages = *input.messages();
    let (session, _sink) = input.into_parts();
    if let Some(stroke) = session.active_stroke() {
        log::info!(
            "Script ended with an unfinished stroke of {} points",
            stroke.len()
        );
    }

    for (index, path) in session.smoothed_paths(config.curve.alpha).iter().enumerate() {
        println!("stroke {}: {}", index + 1, path);
    }

    if cli.grid {
        print!("{}", ui::render_grid(&session));
        println!("{}", ui::render_status_line(&session, &messages));
    }

    if let Some(out) = &cli.svg {
        let svg = ui::render_svg(&session, config.curve.alpha, &config.ui);
        fs::write(out, svg).with_context(|| format!("Failed to write {}", out.display()))?;
        log::info!("Wrote SVG to {}", out.display());
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => {
            if !path.exists() {
                bail!("Config file {} does not exist", path.display());
            }
            Config::load_from(path)
        }
        None => Config::load(),
    }
}

fn apply_overrides(config: &mut Config, cli: &Cli) -> Result<()> {
    if let Some(rows) = cli.rows {
        config.grid.rows = rows;
    }
    if let Some(cols) = cli.cols {
        config.grid.cols = cols;
    }
    if let Some(cell_size) = cli.cell_size {
        config.grid.cell_size = cell_size;
    }
    if let Some(alpha) = cli.alpha {
        config.curve.alpha = alpha;
    }
    if let Some(name) = &cli.mode {
        config.input.default_mode = InputMode::from_name(name).with_context(|| {
            format!("Unknown input mode '{name}' (expected direct or continuous)")
        })?;
    }
    if let Some(code) = &cli.lang {
        config.announce.language = Language::from_code(code)
            .with_context(|| format!("Unknown language '{code}' (expected en or es)"))?;
    }
    Ok(())
}

fn read_script(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        return std::io::read_to_string(std::io::stdin())
            .context("Failed to read script from stdin");
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read script {}", path.display()))
}

fn print_usage() {
    println!("gridstroke: Accessible grid drawing with smoothed strokes");
    println!();
    println!("Usage:");
    println!("  gridstroke --script FILE     Replay an event script (use - for stdin)");
    println!("  gridstroke --init-config     Write a default config file");
    println!("  gridstroke --help            Show help");
    println!();
    println!("Script commands:");
    println!("  up | down | left | right     Move the cursor");
    println!("  activate [ROW COL]           Activate the cursor cell or a given cell");
    println!("  enter                        Start or finish a stroke at the cursor");
    println!("  press X Y / drag X Y / release");
    println!("  mode toggle|direct|continuous");
    println!("  reset                        Clear the canvas");
    println!("  key BINDING                  Press a key, e.g. key Ctrl+E");
}
