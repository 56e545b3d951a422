//! Error types for the visualizer.

use gridstar_core::{CellState, Point};

/// Failures that stop the visualizer.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error(
        "a {size}x{size} grid needs a terminal of at least {need_cols}x{need_rows}, found {cols}x{rows}"
    )]
    TerminalTooSmall {
        size: i32,
        need_cols: u16,
        need_rows: u16,
        cols: u16,
        rows: u16,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// A grid edit the input layer refused. These are reported, never fatal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    #[error("{0} is outside the grid")]
    OutOfBounds(Point),

    #[error("{pos} already holds the {state}")]
    Occupied { pos: Point, state: CellState },

    #[error("place a start and an end before searching")]
    MissingEndpoints,
}
