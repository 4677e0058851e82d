use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use tab_garden::activity::MemoryActivityStore;
use tab_garden::constants::{CELL_SPACING, HOVER_RADIUS};
use tab_garden::drivers::{ConsoleInputDriver, ConsoleOutputDriver, InputDriver, OutputDriver};
use tab_garden::engine::{CancelToken, Garden};
use tab_garden::layout::GridLayout;
use tab_garden::runner::run_garden;
use tab_garden::tabs::{FileTabSource, SampleTabSource, TabSource};
use tab_garden::tooltip::TooltipOverlay;
use tab_garden::tracing_sub;

#[derive(Parser, Debug)]
#[command(
    name = "tab-garden",
    version = env!("CARGO_PKG_VERSION"),
    about = "Renders a tab list as a garden of swaying plants; hover a plant for its title and origin"
)]
struct Cli {
    /// JSON tab list (array of {id, title, url}). Uses a built-in sample
    /// list when omitted.
    #[arg(short, long, value_name = "FILE")]
    tabs: Option<PathBuf>,

    /// Grid cell spacing in world pixels (one terminal cell is 10x20).
    #[arg(long, value_name = "PIXELS", default_value_t = CELL_SPACING)]
    cell_spacing: f64,

    /// Hover radius in world pixels for the tooltip hit test.
    #[arg(long, value_name = "PIXELS", default_value_t = HOVER_RADIUS)]
    hover_radius: f64,

    /// Target frames per second.
    #[arg(short, long, value_name = "FPS", default_value_t = 60.0)]
    fps: f64,

    /// Seed for per-plant animation attributes; omit for OS entropy.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
}

impl Cli {
    fn validate(&self) -> Result<(), String> {
        if !(1.0..=240.0).contains(&self.fps) {
            return Err("fps must be between 1 and 240".to_string());
        }
        if !(8.0..=1000.0).contains(&self.cell_spacing) {
            return Err("cell spacing must be between 8 and 1000 world pixels".to_string());
        }
        if !(1.0..=500.0).contains(&self.hover_radius) {
            return Err("hover radius must be between 1 and 500 world pixels".to_string());
        }
        Ok(())
    }

    fn frame_budget(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.fps)
    }
}

fn main() -> io::Result<()> {
    tracing_sub::init_default();
    let cli = Cli::parse();
    cli.validate()
        .map_err(|msg| io::Error::new(io::ErrorKind::InvalidInput, msg))?;

    let tabs = match &cli.tabs {
        Some(path) => FileTabSource::new(path).tabs(),
        None => SampleTabSource.tabs(),
    }
    .map_err(io::Error::other)?;

    let grid = GridLayout::new(cli.cell_spacing);
    let mut garden = match cli.seed {
        Some(seed) => Garden::with_seed(grid, seed),
        None => Garden::new(grid),
    };
    garden.set_hover_radius(cli.hover_radius);
    garden.plant(&tabs);

    let mut activity = MemoryActivityStore::new();
    for tab in &tabs {
        activity.record_created(tab.id);
    }
    activity.prune(&garden.tab_ids());

    let mut tooltip = TooltipOverlay::new();
    let cancel = CancelToken::new();

    let mut output = ConsoleOutputDriver::new()?;
    output.enter()?;
    let mut input = ConsoleInputDriver::new();
    input.set_mouse_capture(true)?;

    let result = run_garden(
        &mut input,
        &mut output,
        &mut garden,
        &mut tooltip,
        &cancel,
        cli.frame_budget(),
    );

    input.set_mouse_capture(false)?;
    output.exit()?;
    result
}
