//! **gridstar-core**: grid model for the gridstar A* visualizer.
//!
//! A [`Grid`] is a fixed N×N arena of [`Cell`]s. Each cell carries a
//! [`CellState`] tag and a cached list of passable orthogonal neighbours,
//! refreshed on demand with [`Grid::update_all_neighbors`].

pub mod cell;
pub mod geom;
pub mod grid;

pub use cell::{Cell, CellState};
pub use geom::{Point, Range};
pub use grid::Grid;
