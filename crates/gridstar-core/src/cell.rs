//! The [`Cell`] type: one grid square with a state tag and cached adjacency.

use std::fmt;

use crate::geom::Point;

/// The mutually exclusive state of a cell.
///
/// The input layer drives `Start`, `End`, `Barrier` and `Unvisited`; the
/// search engine drives `Frontier`, `Visited` and `Path`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    Unvisited,
    Frontier,
    Visited,
    Barrier,
    Start,
    End,
    Path,
}

impl CellState {
    /// Whether the state was produced by a search run (and can be cleared
    /// without losing user edits).
    #[inline]
    pub const fn is_search_mark(self) -> bool {
        matches!(self, Self::Frontier | Self::Visited | Self::Path)
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unvisited => "unvisited",
            Self::Frontier => "frontier",
            Self::Visited => "visited",
            Self::Barrier => "barrier",
            Self::Start => "start",
            Self::End => "end",
            Self::Path => "path",
        };
        f.write_str(name)
    }
}

/// A grid cell.
///
/// Neighbours are stored as arena indices into the owning
/// [`Grid`](crate::Grid). They are only refreshed by
/// [`Grid::recompute_neighbors`](crate::Grid::recompute_neighbors).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pos: Point,
    state: CellState,
    pub(crate) neighbors: Vec<usize>,
}

impl Cell {
    pub(crate) fn new(pos: Point) -> Self {
        Self {
            pos,
            state: CellState::Unvisited,
            neighbors: Vec::with_capacity(4),
        }
    }

    /// Position of the cell; fixed for the lifetime of the grid.
    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    #[inline]
    pub fn row(&self) -> i32 {
        self.pos.row()
    }

    #[inline]
    pub fn col(&self) -> i32 {
        self.pos.col()
    }

    #[inline]
    pub fn state(&self) -> CellState {
        self.state
    }

    #[inline]
    pub fn set_state(&mut self, state: CellState) {
        self.state = state;
    }

    /// Arena indices of the cached passable neighbours.
    #[inline]
    pub fn neighbor_indices(&self) -> &[usize] {
        &self.neighbors
    }

    // --- predicates ---

    #[inline]
    pub fn is_unvisited(&self) -> bool {
        self.state == CellState::Unvisited
    }

    #[inline]
    pub fn is_frontier(&self) -> bool {
        self.state == CellState::Frontier
    }

    #[inline]
    pub fn is_visited(&self) -> bool {
        self.state == CellState::Visited
    }

    #[inline]
    pub fn is_barrier(&self) -> bool {
        self.state == CellState::Barrier
    }

    #[inline]
    pub fn is_start(&self) -> bool {
        self.state == CellState::Start
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        self.state == CellState::End
    }

    #[inline]
    pub fn is_path(&self) -> bool {
        self.state == CellState::Path
    }

    // --- transitions ---
    //
    // Plain setters. Making a cell Start or End does not clear any previous
    // holder of that role.

    #[inline]
    pub fn reset(&mut self) {
        self.state = CellState::Unvisited;
    }

    #[inline]
    pub fn make_frontier(&mut self) {
        self.state = CellState::Frontier;
    }

    #[inline]
    pub fn make_visited(&mut self) {
        self.state = CellState::Visited;
    }

    #[inline]
    pub fn make_barrier(&mut self) {
        self.state = CellState::Barrier;
    }

    #[inline]
    pub fn make_start(&mut self) {
        self.state = CellState::Start;
    }

    #[inline]
    pub fn make_end(&mut self) {
        self.state = CellState::End;
    }

    #[inline]
    pub fn make_path(&mut self) {
        self.state = CellState::Path;
    }
}
