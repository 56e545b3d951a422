//! gridstar: draw barriers, place a start and an end, watch A* search.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use clap::Parser;
use gridstar_term::{App, Config, CrosstermDriver, Viewport};
use tracing_subscriber::EnvFilter;

/// Logs go to a file, never to the terminal the grid is drawn on.
fn init_logging(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| e as Box<dyn std::error::Error>)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();
    config.validate()?;
    if let Some(path) = &config.log_file {
        init_logging(path)?;
    }
    log::info!("starting on a {0}x{0} grid", config.size);

    let driver = CrosstermDriver::new(Viewport::for_grid(config.size));
    let mut app = App::new(config, driver);
    app.run()?;
    Ok(())
}
