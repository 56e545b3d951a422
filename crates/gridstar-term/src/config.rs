//! Command-line configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::error::Error;

/// Largest supported grid side.
pub const MAX_SIZE: i32 = 200;

/// Highest scatter density, in percent. Denser grids are nearly always
/// unsolvable.
pub const MAX_DENSITY: u32 = 90;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "gridstar")]
#[command(about = "Watch A* find the shortest path on a grid you draw", long_about = None)]
pub struct Config {
    /// Grid side length (the grid is size x size cells)
    #[arg(short, long, default_value_t = 30)]
    pub size: i32,

    /// Pause between animation steps, in milliseconds
    #[arg(short, long, default_value_t = 8)]
    pub delay_ms: u64,

    /// Percentage of cells turned into barriers by the scatter key
    #[arg(long, default_value_t = 30)]
    pub density: u32,

    /// Seed for the scatter RNG (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write logs to this file (RUST_LOG filters, default "info")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            size: 30,
            delay_ms: 8,
            density: 30,
            seed: None,
            log_file: None,
        }
    }
}

impl Config {
    /// Reject values the visualizer cannot work with.
    pub fn validate(&self) -> Result<(), Error> {
        if !(2..=MAX_SIZE).contains(&self.size) {
            return Err(Error::InvalidConfig(format!(
                "size must be between 2 and {MAX_SIZE}, got {}",
                self.size
            )));
        }
        if self.density > MAX_DENSITY {
            return Err(Error::InvalidConfig(format!(
                "density must be at most {MAX_DENSITY}%, got {}%",
                self.density
            )));
        }
        Ok(())
    }

    /// Animation delay per search step.
    #[inline]
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}
