//! Back-end drivers: the [`Driver`] trait and its crossterm implementation.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::{
    cursor, event, execute, queue,
    style::{Color as CtColor, Print, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use gridstar_core::Grid;

use crate::error::Error;
use crate::input::{self, Action};
use crate::render::{self, Canvas, Color, Viewport};

/// A display surface plus input source.
pub trait Driver {
    /// Prepare the back-end.
    fn init(&mut self) -> Result<(), Error>;

    /// Wait up to `timeout` for the next input and translate it. Returns
    /// `Ok(None)` on timeout or for ignored input.
    fn poll(&mut self, timeout: Duration) -> Result<Option<Action>, Error>;

    /// Pause for up to `wait` while an animation runs, reporting whether the
    /// user asked to quit. Other input is discarded.
    fn interrupted(&mut self, wait: Duration) -> Result<bool, Error>;

    /// Show the grid's current cell states and a status line.
    fn draw(&mut self, grid: &Grid, status: &str) -> Result<(), Error>;

    /// Restore the terminal. Must be safe to call after a failed `init`.
    fn close(&mut self);
}

fn to_ct_color(c: Color) -> CtColor {
    CtColor::Rgb {
        r: c.r(),
        g: c.g(),
        b: c.b(),
    }
}

/// A terminal back-end using crossterm, with mouse capture.
pub struct CrosstermDriver {
    viewport: Viewport,
    prev: Option<Canvas>,
}

impl CrosstermDriver {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            prev: None,
        }
    }

    fn read_action(&mut self) -> Result<Option<Action>, Error> {
        let ev = event::read()?;
        let action = input::translate(&ev, &self.viewport);
        if action == Some(Action::Redraw) {
            // Terminal contents are undefined after a resize.
            self.prev = None;
            execute!(io::stdout(), terminal::Clear(ClearType::All))?;
        }
        Ok(action)
    }

    fn check_size(&self) -> Result<(), Error> {
        let (cols, rows) = terminal::size()?;
        let (need_cols, need_rows) = self.viewport.required_size();
        if cols < need_cols || rows < need_rows {
            return Err(Error::TerminalTooSmall {
                size: self.viewport.n,
                need_cols,
                need_rows,
                cols,
                rows,
            });
        }
        Ok(())
    }
}

impl Driver for CrosstermDriver {
    fn init(&mut self) -> Result<(), Error> {
        self.check_size()?;
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            event::EnableMouseCapture,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        self.prev = None;
        log::info!("terminal ready for a {0}x{0} grid", self.viewport.n);
        Ok(())
    }

    fn poll(&mut self, timeout: Duration) -> Result<Option<Action>, Error> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        self.read_action()
    }

    fn interrupted(&mut self, wait: Duration) -> Result<bool, Error> {
        let deadline = Instant::now() + wait;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if !event::poll(remaining)? {
                return Ok(false);
            }
            if self.read_action()? == Some(Action::Quit) {
                return Ok(true);
            }
            if remaining.is_zero() {
                return Ok(false);
            }
        }
    }

    fn draw(&mut self, grid: &Grid, status: &str) -> Result<(), Error> {
        let canvas = render::compose(grid, &self.viewport, status);
        let changes = render::diff(self.prev.as_ref(), &canvas);

        let mut stdout = io::stdout();
        for (p, glyph) in &changes {
            queue!(
                stdout,
                cursor::MoveTo(p.x as u16, p.y as u16),
                SetForegroundColor(to_ct_color(glyph.fg)),
                SetBackgroundColor(to_ct_color(glyph.bg)),
                Print(glyph.ch)
            )?;
        }
        stdout.flush()?;

        self.prev = Some(canvas);
        Ok(())
    }

    fn close(&mut self) {
        let _ = execute!(
            io::stdout(),
            event::DisableMouseCapture,
            crossterm::style::ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
