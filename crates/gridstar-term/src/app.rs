//! The visualizer loop: poll → update → draw, with the search animated
//! through the engine's step callback.

use std::ops::ControlFlow;
use std::time::Duration;

use gridstar_search::{SearchOutcome, Step};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::Config;
use crate::driver::Driver;
use crate::editor::Editor;
use crate::error::Error;
use crate::input::Action;

/// Poll timeout while idle.
const IDLE_POLL: Duration = Duration::from_millis(50);

const HELP: &str = "left: start/end/wall  right: erase  space: run  c: clear  r: scatter  q: quit";

/// The application: an [`Editor`] driven by a [`Driver`].
pub struct App<D: Driver> {
    editor: Editor,
    driver: D,
    config: Config,
    rng: StdRng,
    status: String,
    running: bool,
}

impl<D: Driver> App<D> {
    pub fn new(config: Config, driver: D) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => rand::make_rng(),
        };
        Self {
            editor: Editor::new(config.size),
            driver,
            config,
            rng,
            status: HELP.to_string(),
            running: true,
        }
    }

    #[inline]
    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    #[inline]
    pub fn status(&self) -> &str {
        &self.status
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Initialise the driver, run until quit, and always restore it.
    pub fn run(&mut self) -> Result<(), Error> {
        if let Err(e) = self.driver.init() {
            self.driver.close();
            return Err(e);
        }
        let result = self.event_loop();
        self.driver.close();
        result
    }

    fn event_loop(&mut self) -> Result<(), Error> {
        self.draw()?;
        while self.running {
            let Some(action) = self.driver.poll(IDLE_POLL)? else {
                continue;
            };
            self.update(action)?;
            self.draw()?;
        }
        Ok(())
    }

    fn draw(&mut self) -> Result<(), Error> {
        self.driver.draw(self.editor.grid(), &self.status)
    }

    /// Apply one action.
    pub fn update(&mut self, action: Action) -> Result<(), Error> {
        match action {
            Action::Paint(p) => match self.editor.paint(p) {
                Ok(painted) => log::debug!("painted {painted:?} at {p}"),
                Err(e) => log::debug!("ignored paint: {e}"),
            },
            Action::Erase(p) => {
                if let Err(e) = self.editor.erase(p) {
                    log::debug!("ignored erase: {e}");
                }
            }
            Action::Clear => {
                self.editor.rebuild(self.config.size);
                self.status = HELP.to_string();
            }
            Action::Scatter => {
                let placed = self.editor.scatter_barriers(&mut self.rng, self.config.density);
                self.status = format!("scattered {placed} barriers");
            }
            Action::Run => self.run_search()?,
            Action::Quit => self.running = false,
            Action::Redraw => {}
        }
        Ok(())
    }

    /// Animate one search. Pressing quit during the animation cancels it
    /// and stops the app.
    fn run_search(&mut self) -> Result<(), Error> {
        let delay = self.config.delay();
        let driver = &mut self.driver;
        let mut failure: Option<Error> = None;
        let mut quit = false;
        let mut expanded = 0usize;

        let result = self.editor.run(|grid, step| {
            let status = match step {
                Step::Expanded(_) => {
                    expanded += 1;
                    format!("searching... {expanded} cells expanded")
                }
                Step::PathMarked(p) => format!("tracing path through {p}"),
            };
            if let Err(e) = driver.draw(grid, &status) {
                failure = Some(e);
                return ControlFlow::Break(());
            }
            match driver.interrupted(delay) {
                Ok(true) => {
                    quit = true;
                    ControlFlow::Break(())
                }
                Ok(false) => ControlFlow::Continue(()),
                Err(e) => {
                    failure = Some(e);
                    ControlFlow::Break(())
                }
            }
        });

        if let Some(e) = failure {
            return Err(e);
        }
        if quit {
            self.running = false;
        }

        self.status = match result {
            Ok(SearchOutcome::PathFound(path)) => {
                format!("path found: {} steps, {expanded} cells expanded", path.len())
            }
            Ok(SearchOutcome::NoPathExists) => format!("no path ({expanded} cells expanded)"),
            Ok(SearchOutcome::Cancelled) => "search cancelled".to_string(),
            Err(e) => e.to_string(),
        };
        log::info!("{}", self.status);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    use gridstar_core::{CellState, Grid, Point};

    /// Feeds queued actions, records every drawn status line, and asks to
    /// quit on the `interrupt_at`-th animation pause.
    #[derive(Default)]
    struct ScriptedDriver {
        script: VecDeque<Action>,
        interrupt_at: Option<usize>,
        pauses: usize,
        statuses: Vec<String>,
        inited: bool,
        closed: bool,
    }

    impl ScriptedDriver {
        fn with(actions: &[Action]) -> Self {
            Self {
                script: actions.iter().copied().collect(),
                ..Self::default()
            }
        }
    }

    impl Driver for ScriptedDriver {
        fn init(&mut self) -> Result<(), Error> {
            self.inited = true;
            Ok(())
        }

        fn poll(&mut self, _timeout: Duration) -> Result<Option<Action>, Error> {
            Ok(self.script.pop_front())
        }

        fn interrupted(&mut self, _wait: Duration) -> Result<bool, Error> {
            self.pauses += 1;
            Ok(self.interrupt_at == Some(self.pauses))
        }

        fn draw(&mut self, _grid: &Grid, status: &str) -> Result<(), Error> {
            self.statuses.push(status.to_string());
            Ok(())
        }

        fn close(&mut self) {
            self.closed = true;
        }
    }

    fn config(size: i32) -> Config {
        Config {
            size,
            delay_ms: 0,
            seed: Some(1),
            ..Config::default()
        }
    }

    #[test]
    fn draws_endpoints_runs_and_quits() {
        let script = [
            Action::Paint(Point::at(0, 0)),
            Action::Paint(Point::at(4, 4)),
            Action::Paint(Point::at(0, 2)),
            Action::Paint(Point::at(1, 2)),
            Action::Run,
            Action::Quit,
        ];
        let mut app = App::new(config(5), ScriptedDriver::with(&script));
        app.run().unwrap();

        assert!(app.driver.inited && app.driver.closed);
        assert!(!app.is_running());
        assert!(app.status().starts_with("path found: 8 steps"), "{}", app.status());
        assert!(app.driver.statuses.iter().any(|s| s.starts_with("searching...")));
        assert_eq!(app.editor().grid().count(CellState::Barrier), 2);
        assert_eq!(app.editor().grid().count(CellState::Path), 7);
    }

    #[test]
    fn run_without_endpoints_reports_it() {
        let mut app = App::new(config(4), ScriptedDriver::default());
        app.update(Action::Run).unwrap();
        assert_eq!(app.status(), "place a start and an end before searching");
        assert!(app.is_running());
    }

    #[test]
    fn blocked_grid_reports_no_path() {
        let mut app = App::new(config(3), ScriptedDriver::default());
        app.update(Action::Paint(Point::at(0, 0))).unwrap();
        app.update(Action::Paint(Point::at(0, 2))).unwrap();
        for r in 0..3 {
            app.update(Action::Paint(Point::at(r, 1))).unwrap();
        }
        app.update(Action::Run).unwrap();
        assert!(app.status().starts_with("no path"), "{}", app.status());
    }

    #[test]
    fn quit_during_animation_cancels_and_stops() {
        let mut app = App::new(config(6), ScriptedDriver::default());
        app.update(Action::Paint(Point::at(0, 0))).unwrap();
        app.update(Action::Paint(Point::at(5, 5))).unwrap();
        app.driver.interrupt_at = Some(1);
        app.update(Action::Run).unwrap();
        assert_eq!(app.status(), "search cancelled");
        assert!(!app.is_running());
        assert_eq!(app.driver.statuses.len(), 1);
    }

    #[test]
    fn clear_and_scatter() {
        let mut app = App::new(config(8), ScriptedDriver::default());
        app.update(Action::Paint(Point::at(0, 0))).unwrap();
        app.update(Action::Scatter).unwrap();
        assert!(app.status().starts_with("scattered"));
        assert_eq!(app.editor().grid().state(Point::at(0, 0)), Some(CellState::Start));

        app.update(Action::Clear).unwrap();
        assert_eq!(app.editor().start(), None);
        assert_eq!(app.editor().grid().count(CellState::Unvisited), 64);
    }

    #[test]
    fn unseeded_app_draws_from_the_os() {
        let cfg = Config {
            seed: None,
            density: 90,
            ..config(10)
        };
        let mut app = App::new(cfg, ScriptedDriver::default());
        app.update(Action::Scatter).unwrap();
        assert!(app.editor().grid().count(CellState::Barrier) > 0);
    }

    #[test]
    fn erase_outside_grid_is_ignored() {
        let mut app = App::new(config(3), ScriptedDriver::default());
        app.update(Action::Erase(Point::at(7, 7))).unwrap();
        app.update(Action::Redraw).unwrap();
        assert!(app.is_running());
    }
}
