use std::fmt;

use gridstar_core::Point;

/// Result of a search run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Shortest path ordered from start to end, excluding the start cell and
    /// including the end cell.
    PathFound(Vec<Point>),
    /// The frontier ran dry without reaching the end.
    NoPathExists,
    /// The step callback asked the engine to stop.
    Cancelled,
}

impl SearchOutcome {
    /// The path, if one was found.
    pub fn path(&self) -> Option<&[Point]> {
        match self {
            Self::PathFound(p) => Some(p),
            _ => None,
        }
    }

    /// Number of steps of the found path.
    pub fn steps(&self) -> Option<usize> {
        self.path().map(<[Point]>::len)
    }

    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::PathFound(_))
    }
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PathFound(p) => write!(f, "path of {} steps", p.len()),
            Self::NoPathExists => f.write_str("no path"),
            Self::Cancelled => f.write_str("cancelled"),
        }
    }
}

/// What the engine just did before invoking the step callback.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// All neighbours of this cell were relaxed.
    Expanded(Point),
    /// This cell was marked as part of the reconstructed path.
    PathMarked(Point),
}

/// Counters collected during one run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Cells popped from the frontier (including the end cell, if reached).
    pub expanded: usize,
    /// Insertions into the frontier (including the start cell).
    pub inserted: u64,
}
