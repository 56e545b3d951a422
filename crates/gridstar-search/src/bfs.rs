use std::collections::VecDeque;

use gridstar_core::{Grid, Point};

/// Unweighted breadth-first step count from `from` to `to` over the grid's
/// cached adjacency, or `None` if `to` is unreachable.
///
/// Reads the same neighbour lists as [`search`](crate::search) without
/// touching cell states, which makes it a cross-check oracle for A*.
pub fn bfs_distance(grid: &Grid, from: Point, to: Point) -> Option<usize> {
    let si = grid.index(from)?;
    let goal = grid.index(to)?;

    let mut dist: Vec<Option<usize>> = vec![None; grid.len()];
    let mut queue: VecDeque<usize> = VecDeque::new();
    dist[si] = Some(0);
    queue.push_back(si);

    while let Some(ci) = queue.pop_front() {
        let current_dist = dist[ci]?;
        if ci == goal {
            return Some(current_dist);
        }
        for &ni in grid.cell_at(ci).neighbor_indices() {
            if dist[ni].is_some() {
                continue;
            }
            dist[ni] = Some(current_dist + 1);
            queue.push_back(ni);
        }
    }
    None
}
