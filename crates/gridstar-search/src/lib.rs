//! A* shortest-path search over a [`gridstar_core::Grid`].
//!
//! - **A\*** with a Manhattan heuristic and step callbacks ([`search`],
//!   [`search_with_stats`])
//! - **BFS** step counts over the same adjacency ([`bfs_distance`]), used as
//!   an optimality oracle
//!
//! The frontier is ordered by `(f_score, insertion_sequence)`, so among
//! equal estimates the cell discovered first is expanded first. Runs are
//! deterministic for a given grid and neighbour order.

mod astar;
mod bfs;
mod distance;
mod frontier;
mod outcome;

pub use astar::{UNREACHABLE, search, search_with_stats};
pub use bfs::bfs_distance;
pub use distance::manhattan;
pub use outcome::{SearchOutcome, SearchStats, Step};
