//! Translation of terminal events into visualizer [`Action`]s.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use gridstar_core::Point;

use crate::render::Viewport;

/// A user intent, already mapped to grid coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Primary button on a cell: start, then end, then barriers.
    Paint(Point),
    /// Secondary button on a cell: back to unvisited.
    Erase(Point),
    /// Run the search.
    Run,
    /// Rebuild an empty grid.
    Clear,
    /// Fill the grid with random barriers.
    Scatter,
    Quit,
    /// The screen needs a full repaint (e.g. after a resize).
    Redraw,
}

/// Map a crossterm event to an action. Returns `None` for events the
/// visualizer ignores, including clicks outside the grid.
pub fn translate(ev: &Event, viewport: &Viewport) -> Option<Action> {
    match ev {
        Event::Key(key) => translate_key(key),
        Event::Mouse(me) => translate_mouse(me, viewport),
        Event::Resize(..) => Some(Action::Redraw),
        _ => None,
    }
}

fn translate_key(key: &KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char(' ') => Some(Action::Run),
        KeyCode::Char('c') => Some(Action::Clear),
        KeyCode::Char('r') => Some(Action::Scatter),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

fn translate_mouse(me: &MouseEvent, viewport: &Viewport) -> Option<Action> {
    let button = match me.kind {
        MouseEventKind::Down(b) | MouseEventKind::Drag(b) => b,
        _ => return None,
    };
    let cell = viewport.cell_at(me.column, me.row)?;
    match button {
        MouseButton::Left => Some(Action::Paint(cell)),
        MouseButton::Right => Some(Action::Erase(cell)),
        MouseButton::Middle => None,
    }
}
