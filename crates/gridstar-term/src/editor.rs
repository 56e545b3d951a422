//! Grid edit operations of the input layer.
//!
//! The [`Editor`] owns the grid and tracks the start and end cells, keeping
//! the invariants the search engine assumes: at most one start, at most one
//! end, and the two are distinct cells that barrier edits never overwrite.

use std::ops::ControlFlow;

use gridstar_core::{CellState, Grid, Point};
use gridstar_search::{SearchOutcome, Step, search};
use rand::{Rng, RngExt};

use crate::error::EditError;

/// What a [`paint`](Editor::paint) gesture placed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Painted {
    Start,
    End,
    Barrier,
}

/// Grid plus endpoint bookkeeping.
#[derive(Clone, Debug)]
pub struct Editor {
    grid: Grid,
    start: Option<Point>,
    end: Option<Point>,
}

impl Editor {
    /// A fresh N×N grid with no endpoints.
    pub fn new(n: i32) -> Self {
        Self {
            grid: Grid::new(n),
            start: None,
            end: None,
        }
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Option<Point> {
        self.end
    }

    fn check(&self, p: Point) -> Result<(), EditError> {
        if self.grid.contains(p) {
            Ok(())
        } else {
            Err(EditError::OutOfBounds(p))
        }
    }

    fn check_not_endpoint(&self, p: Point) -> Result<(), EditError> {
        if self.start == Some(p) {
            return Err(EditError::Occupied {
                pos: p,
                state: CellState::Start,
            });
        }
        if self.end == Some(p) {
            return Err(EditError::Occupied {
                pos: p,
                state: CellState::End,
            });
        }
        Ok(())
    }

    /// Make `p` the start, moving it if one was already placed.
    pub fn set_start(&mut self, p: Point) -> Result<(), EditError> {
        self.check(p)?;
        if self.end == Some(p) {
            return Err(EditError::Occupied {
                pos: p,
                state: CellState::End,
            });
        }
        if let Some(old) = self.start.replace(p) {
            self.grid.set_state(old, CellState::Unvisited);
        }
        self.grid.set_state(p, CellState::Start);
        Ok(())
    }

    /// Make `p` the end, moving it if one was already placed.
    pub fn set_end(&mut self, p: Point) -> Result<(), EditError> {
        self.check(p)?;
        if self.start == Some(p) {
            return Err(EditError::Occupied {
                pos: p,
                state: CellState::Start,
            });
        }
        if let Some(old) = self.end.replace(p) {
            self.grid.set_state(old, CellState::Unvisited);
        }
        self.grid.set_state(p, CellState::End);
        Ok(())
    }

    /// Turn `p` into a barrier. Start and end are protected.
    pub fn place_barrier(&mut self, p: Point) -> Result<(), EditError> {
        self.check(p)?;
        self.check_not_endpoint(p)?;
        self.grid.set_state(p, CellState::Barrier);
        Ok(())
    }

    /// Flip `p` between barrier and unvisited. Returns whether it is a
    /// barrier afterwards.
    pub fn toggle_barrier(&mut self, p: Point) -> Result<bool, EditError> {
        self.check(p)?;
        self.check_not_endpoint(p)?;
        let now_barrier = self.grid.state(p) != Some(CellState::Barrier);
        let state = if now_barrier {
            CellState::Barrier
        } else {
            CellState::Unvisited
        };
        self.grid.set_state(p, state);
        Ok(now_barrier)
    }

    /// Return `p` to unvisited, forgetting it as start or end.
    pub fn reset(&mut self, p: Point) -> Result<(), EditError> {
        self.check(p)?;
        self.grid.set_state(p, CellState::Unvisited);
        if self.start == Some(p) {
            self.start = None;
        }
        if self.end == Some(p) {
            self.end = None;
        }
        Ok(())
    }

    /// Replace the grid with a fresh N×N one.
    pub fn rebuild(&mut self, n: i32) {
        self.grid = Grid::new(n);
        self.start = None;
        self.end = None;
    }

    /// Primary-button gesture: the first click places the start, the next
    /// the end, everything after that draws barriers.
    pub fn paint(&mut self, p: Point) -> Result<Painted, EditError> {
        self.check(p)?;
        if self.start.is_none() && self.end != Some(p) {
            self.set_start(p)?;
            Ok(Painted::Start)
        } else if self.end.is_none() && self.start != Some(p) {
            self.set_end(p)?;
            Ok(Painted::End)
        } else {
            self.place_barrier(p)?;
            Ok(Painted::Barrier)
        }
    }

    /// Secondary-button gesture.
    pub fn erase(&mut self, p: Point) -> Result<(), EditError> {
        self.reset(p)
    }

    /// Replace every non-endpoint cell with a barrier with probability
    /// `percent`/100, clearing all other cells. Returns the barrier count.
    pub fn scatter_barriers<R: Rng>(&mut self, rng: &mut R, percent: u32) -> usize {
        let mut placed = 0;
        for p in self.grid.bounds() {
            if self.start == Some(p) || self.end == Some(p) {
                continue;
            }
            if rng.random_range(0..100u32) < percent {
                self.grid.set_state(p, CellState::Barrier);
                placed += 1;
            } else {
                self.grid.set_state(p, CellState::Unvisited);
            }
        }
        placed
    }

    /// Clear marks from the previous run, refresh adjacency and search.
    pub fn run<F>(&mut self, on_step: F) -> Result<SearchOutcome, EditError>
    where
        F: FnMut(&Grid, Step) -> ControlFlow<()>,
    {
        let (Some(start), Some(end)) = (self.start, self.end) else {
            return Err(EditError::MissingEndpoints);
        };
        self.grid.clear_search_marks();
        self.grid.update_all_neighbors();
        Ok(search(&mut self.grid, start, end, on_step))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn go(_: &Grid, _: Step) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }

    #[test]
    fn paint_places_start_then_end_then_barriers() {
        let mut ed = Editor::new(5);
        assert_eq!(ed.paint(Point::at(0, 0)), Ok(Painted::Start));
        assert_eq!(ed.paint(Point::at(4, 4)), Ok(Painted::End));
        assert_eq!(ed.paint(Point::at(2, 2)), Ok(Painted::Barrier));
        assert_eq!(ed.start(), Some(Point::at(0, 0)));
        assert_eq!(ed.end(), Some(Point::at(4, 4)));
        assert_eq!(ed.grid().state(Point::at(2, 2)), Some(CellState::Barrier));
    }

    #[test]
    fn paint_over_endpoints_is_refused() {
        let mut ed = Editor::new(5);
        ed.paint(Point::at(0, 0)).unwrap();
        // Clicking the start again cannot make it the end.
        assert_eq!(
            ed.paint(Point::at(0, 0)),
            Err(EditError::Occupied {
                pos: Point::at(0, 0),
                state: CellState::Start,
            })
        );
        ed.paint(Point::at(1, 1)).unwrap();
        assert!(matches!(
            ed.paint(Point::at(1, 1)),
            Err(EditError::Occupied { state: CellState::End, .. })
        ));
        assert_eq!(ed.grid().count(CellState::Barrier), 0);
    }

    #[test]
    fn erase_then_paint_replaces_start() {
        let mut ed = Editor::new(5);
        ed.paint(Point::at(0, 0)).unwrap();
        ed.paint(Point::at(4, 4)).unwrap();
        ed.erase(Point::at(0, 0)).unwrap();
        assert_eq!(ed.start(), None);
        assert_eq!(ed.paint(Point::at(3, 3)), Ok(Painted::Start));
        assert_eq!(ed.grid().count(CellState::Start), 1);
    }

    #[test]
    fn set_start_moves_previous_holder() {
        let mut ed = Editor::new(4);
        ed.set_start(Point::at(0, 0)).unwrap();
        ed.set_start(Point::at(1, 1)).unwrap();
        assert_eq!(ed.grid().state(Point::at(0, 0)), Some(CellState::Unvisited));
        assert_eq!(ed.grid().count(CellState::Start), 1);
        assert_eq!(
            ed.set_end(Point::at(1, 1)),
            Err(EditError::Occupied {
                pos: Point::at(1, 1),
                state: CellState::Start
            })
        );
    }

    #[test]
    fn toggle_barrier_flips_and_protects_endpoints() {
        let mut ed = Editor::new(4);
        let p = Point::at(2, 1);
        assert_eq!(ed.toggle_barrier(p), Ok(true));
        assert_eq!(ed.toggle_barrier(p), Ok(false));
        assert_eq!(ed.grid().state(p), Some(CellState::Unvisited));

        ed.set_end(Point::at(3, 3)).unwrap();
        assert!(ed.toggle_barrier(Point::at(3, 3)).is_err());
        assert!(ed.place_barrier(Point::at(3, 3)).is_err());
    }

    #[test]
    fn out_of_bounds_edits_are_rejected() {
        let mut ed = Editor::new(3);
        let p = Point::at(3, 0);
        assert_eq!(ed.paint(p), Err(EditError::OutOfBounds(p)));
        assert_eq!(ed.reset(p), Err(EditError::OutOfBounds(p)));
        assert_eq!(ed.toggle_barrier(p), Err(EditError::OutOfBounds(p)));
    }

    #[test]
    fn rebuild_forgets_everything() {
        let mut ed = Editor::new(3);
        ed.paint(Point::at(0, 0)).unwrap();
        ed.paint(Point::at(2, 2)).unwrap();
        ed.paint(Point::at(1, 1)).unwrap();
        ed.rebuild(4);
        assert_eq!(ed.grid().size(), 4);
        assert_eq!(ed.start(), None);
        assert_eq!(ed.end(), None);
        assert_eq!(ed.grid().count(CellState::Unvisited), 16);
    }

    #[test]
    fn run_requires_both_endpoints() {
        let mut ed = Editor::new(3);
        ed.paint(Point::at(0, 0)).unwrap();
        assert_eq!(ed.run(go), Err(EditError::MissingEndpoints));
    }

    #[test]
    fn run_sees_barriers_drawn_after_previous_run() {
        let mut ed = Editor::new(5);
        ed.paint(Point::at(0, 0)).unwrap();
        ed.paint(Point::at(4, 4)).unwrap();
        assert_eq!(ed.run(go).unwrap().steps(), Some(8));

        for r in 0..4 {
            ed.place_barrier(Point::at(r, 2)).unwrap();
        }
        assert_eq!(ed.run(go).unwrap().steps(), Some(8));

        ed.place_barrier(Point::at(4, 2)).unwrap();
        assert_eq!(ed.run(go).unwrap(), SearchOutcome::NoPathExists);
        // Marks of the earlier runs were cleared before each search.
        assert_eq!(ed.grid().count(CellState::Path), 0);
    }

    #[test]
    fn scatter_respects_endpoints_and_density() {
        let mut ed = Editor::new(10);
        ed.set_start(Point::at(0, 0)).unwrap();
        ed.set_end(Point::at(9, 9)).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        assert_eq!(ed.scatter_barriers(&mut rng, 0), 0);
        assert_eq!(ed.grid().count(CellState::Barrier), 0);

        let placed = ed.scatter_barriers(&mut rng, 100);
        assert_eq!(placed, 98);
        assert_eq!(ed.grid().state(Point::at(0, 0)), Some(CellState::Start));
        assert_eq!(ed.grid().state(Point::at(9, 9)), Some(CellState::End));

        let placed = ed.scatter_barriers(&mut rng, 30);
        assert_eq!(ed.grid().count(CellState::Barrier), placed);
        assert!(placed > 0 && placed < 98);
    }
}
