//! The [`Grid`] type: a square arena of [`Cell`]s with 4-way adjacency.
//!
//! Cells are owned by value in a row-major `Vec`. Neighbour lists store
//! arena indices, so rebuilding the grid never leaves dangling references.

use crate::cell::{Cell, CellState};
use crate::geom::{Point, Range};

/// A fixed-size N×N grid of cells.
#[derive(Clone, Debug)]
pub struct Grid {
    cells: Vec<Cell>,
    n: i32,
}

impl Grid {
    /// Build an N×N grid. Every cell starts `Unvisited` with no neighbours.
    pub fn new(n: i32) -> Self {
        let n = n.max(0);
        let cells = Range::new(0, 0, n, n).iter().map(Cell::new).collect();
        Self { cells, n }
    }

    /// Side length N.
    #[inline]
    pub fn size(&self) -> i32 {
        self.n
    }

    /// Total number of cells (N²).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The bounding range `[0, N) × [0, N)`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::new(0, 0, self.n, self.n)
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    // -----------------------------------------------------------------------
    // Arena helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to an arena index. Returns `None` if out of range.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some((p.y as usize) * (self.n as usize) + (p.x as usize))
    }

    /// Convert an arena index back to a `Point`.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let n = self.n as usize;
        Point::new((idx % n) as i32, (idx / n) as i32)
    }

    #[inline]
    pub fn cell(&self, p: Point) -> Option<&Cell> {
        self.index(p).map(|i| &self.cells[i])
    }

    #[inline]
    pub fn cell_mut(&mut self, p: Point) -> Option<&mut Cell> {
        self.index(p).map(|i| &mut self.cells[i])
    }

    /// Cell by arena index. Panics if `idx` is out of bounds.
    #[inline]
    pub fn cell_at(&self, idx: usize) -> &Cell {
        &self.cells[idx]
    }

    /// Mutable cell by arena index. Panics if `idx` is out of bounds.
    #[inline]
    pub fn cell_at_mut(&mut self, idx: usize) -> &mut Cell {
        &mut self.cells[idx]
    }

    /// State of the cell at `p`, or `None` outside the grid.
    #[inline]
    pub fn state(&self, p: Point) -> Option<CellState> {
        self.cell(p).map(Cell::state)
    }

    /// Set the state of the cell at `p`. No-op outside the grid.
    pub fn set_state(&mut self, p: Point, state: CellState) {
        if let Some(c) = self.cell_mut(p) {
            c.set_state(state);
        }
    }

    // -----------------------------------------------------------------------
    // Adjacency
    // -----------------------------------------------------------------------

    /// Refresh the neighbour list of the cell at `p` from the current barrier
    /// layout: in-bounds orthogonal cells that are not barriers, in the order
    /// down, up, right, left. The previous list is discarded.
    pub fn recompute_neighbors(&mut self, p: Point) {
        let Some(ci) = self.index(p) else {
            return;
        };
        let mut neighbors = std::mem::take(&mut self.cells[ci].neighbors);
        neighbors.clear();
        for np in p.neighbors_4() {
            if let Some(ni) = self.index(np) {
                if !self.cells[ni].is_barrier() {
                    neighbors.push(ni);
                }
            }
        }
        self.cells[ci].neighbors = neighbors;
    }

    /// Recompute the neighbour list of every cell. Must run after barrier
    /// edits and before the next search.
    pub fn update_all_neighbors(&mut self) {
        for p in self.bounds() {
            self.recompute_neighbors(p);
        }
        log::trace!("recomputed adjacency for {} cells", self.cells.len());
    }

    /// Positions of the cached neighbours of `p` (empty outside the grid).
    pub fn neighbors(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        self.cell(p)
            .map(Cell::neighbor_indices)
            .unwrap_or_default()
            .iter()
            .map(|&i| self.point(i))
    }

    // -----------------------------------------------------------------------
    // Bulk operations
    // -----------------------------------------------------------------------

    /// Reset every `Frontier`, `Visited` and `Path` cell to `Unvisited`,
    /// keeping start, end and barriers.
    pub fn clear_search_marks(&mut self) {
        for c in self.cells.iter_mut() {
            if c.state().is_search_mark() {
                c.reset();
            }
        }
    }

    /// Number of cells in the given state.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|c| c.state() == state).count()
    }

    /// Row-major iterator over all cells.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
