use std::ops::ControlFlow;

use gridstar_core::{Grid, Point};

use crate::distance::manhattan;
use crate::frontier::Frontier;
use crate::outcome::{SearchOutcome, SearchStats, Step};

/// Sentinel meaning "infinity" for g/f scores.
pub const UNREACHABLE: i32 = i32::MAX;

const NO_PARENT: usize = usize::MAX;

/// Per-run bookkeeping, indexed by cell arena index.
struct Scores {
    g: Vec<i32>,
    f: Vec<i32>,
    came_from: Vec<usize>,
}

impl Scores {
    fn new(cells: usize) -> Self {
        Self {
            g: vec![UNREACHABLE; cells],
            f: vec![UNREACHABLE; cells],
            came_from: vec![NO_PARENT; cells],
        }
    }
}

/// Run A* from `start` to `end` over the grid's cached adjacency.
///
/// `on_step` is called after every expansion and after every path cell is
/// marked; returning [`ControlFlow::Break`] stops the run with
/// [`SearchOutcome::Cancelled`]. The callback only gets a shared borrow of
/// the grid, so it can render but not edit.
///
/// Neighbour lists must be current (see
/// [`Grid::update_all_neighbors`]); the engine never recomputes them.
///
/// # Panics
///
/// If `start == end` or either point lies outside the grid.
pub fn search<F>(grid: &mut Grid, start: Point, end: Point, on_step: F) -> SearchOutcome
where
    F: FnMut(&Grid, Step) -> ControlFlow<()>,
{
    search_with_stats(grid, start, end, on_step).0
}

/// Like [`search`], also returning the run's [`SearchStats`].
pub fn search_with_stats<F>(
    grid: &mut Grid,
    start: Point,
    end: Point,
    mut on_step: F,
) -> (SearchOutcome, SearchStats)
where
    F: FnMut(&Grid, Step) -> ControlFlow<()>,
{
    assert_ne!(start, end, "start and end must be distinct cells");
    let Some(start_idx) = grid.index(start) else {
        panic!("start {start} is outside the {0}x{0} grid", grid.size());
    };
    let Some(goal_idx) = grid.index(end) else {
        panic!("end {end} is outside the {0}x{0} grid", grid.size());
    };

    let mut scores = Scores::new(grid.len());
    let mut frontier = Frontier::new(grid.len());
    let mut stats = SearchStats::default();

    scores.g[start_idx] = 0;
    scores.f[start_idx] = manhattan(start, end);
    frontier.insert(start_idx, scores.f[start_idx]);

    let mut nbuf: Vec<usize> = Vec::with_capacity(4);

    let outcome = 'search: loop {
        let Some(ci) = frontier.pop() else {
            break 'search SearchOutcome::NoPathExists;
        };
        stats.expanded += 1;

        if ci == goal_idx {
            break 'search reconstruct(grid, &scores, start_idx, goal_idx, &mut on_step);
        }

        let current_g = scores.g[ci];
        let current_point = grid.point(ci);

        nbuf.clear();
        nbuf.extend_from_slice(grid.cell_at(ci).neighbor_indices());

        for &ni in nbuf.iter() {
            let tentative_g = current_g + 1;
            if tentative_g >= scores.g[ni] {
                continue;
            }
            scores.came_from[ni] = ci;
            scores.g[ni] = tentative_g;
            scores.f[ni] = tentative_g + manhattan(grid.point(ni), end);

            // A member keeps the key it was inserted with.
            if frontier.contains(ni) {
                continue;
            }
            frontier.insert(ni, scores.f[ni]);
            let neighbor = grid.cell_at_mut(ni);
            if !neighbor.is_start() && !neighbor.is_end() {
                neighbor.make_frontier();
            }
        }

        if on_step(&*grid, Step::Expanded(current_point)).is_break() {
            break 'search SearchOutcome::Cancelled;
        }

        if ci != start_idx {
            grid.cell_at_mut(ci).make_visited();
        }
    };

    stats.inserted = frontier.insertions();
    log::debug!(
        "astar {start} -> {end}: {outcome} ({} expanded, {} inserted, {} left open)",
        stats.expanded,
        stats.inserted,
        frontier.len()
    );
    (outcome, stats)
}

/// Walk `came_from` back from the goal, marking intermediate cells as path.
fn reconstruct<F>(
    grid: &mut Grid,
    scores: &Scores,
    start_idx: usize,
    goal_idx: usize,
    on_step: &mut F,
) -> SearchOutcome
where
    F: FnMut(&Grid, Step) -> ControlFlow<()>,
{
    // Goal first, start excluded.
    let mut back = Vec::with_capacity(scores.g[goal_idx] as usize);
    let mut ci = goal_idx;
    while ci != start_idx {
        debug_assert_ne!(ci, NO_PARENT, "broken predecessor chain");
        back.push(ci);
        ci = scores.came_from[ci];
    }

    for &pi in back.iter().skip(1) {
        grid.cell_at_mut(pi).make_path();
        let p = grid.point(pi);
        if on_step(&*grid, Step::PathMarked(p)).is_break() {
            return SearchOutcome::Cancelled;
        }
    }
    grid.cell_at_mut(goal_idx).make_end();

    let path = back.iter().rev().map(|&i| grid.point(i)).collect();
    SearchOutcome::PathFound(path)
}
