//! Cell-state rendering: [`Color`] palette, [`Canvas`] composition and frame
//! diffing, and the [`Viewport`] mapping between grid cells and terminal
//! positions.

use gridstar_core::{CellState, Grid, Point};

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// An RGB colour packed into a `u32` (0x00RRGGBB).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Color(pub u32);

impl Color {
    pub const WHITE: Self = Self::from_rgb(255, 255, 255);
    pub const BLACK: Self = Self::from_rgb(0, 0, 0);
    pub const RED: Self = Self::from_rgb(255, 0, 0);
    pub const GREEN: Self = Self::from_rgb(0, 255, 0);
    pub const ORANGE: Self = Self::from_rgb(255, 165, 0);
    pub const TURQUOISE: Self = Self::from_rgb(64, 224, 208);
    pub const PURPLE: Self = Self::from_rgb(128, 0, 128);
    pub const GREY: Self = Self::from_rgb(128, 128, 128);

    /// Construct from individual RGB components.
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    #[inline]
    pub const fn r(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 & 0xFF) as u8
    }
}

/// Background colour for a cell state.
pub const fn state_color(state: CellState) -> Color {
    match state {
        CellState::Unvisited => Color::WHITE,
        CellState::Frontier => Color::GREEN,
        CellState::Visited => Color::RED,
        CellState::Barrier => Color::BLACK,
        CellState::Start => Color::ORANGE,
        CellState::End => Color::TURQUOISE,
        CellState::Path => Color::PURPLE,
    }
}

// ---------------------------------------------------------------------------
// Glyph / Canvas
// ---------------------------------------------------------------------------

/// One terminal character with colours.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

impl Default for Glyph {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::WHITE,
            bg: Color::BLACK,
        }
    }
}

/// A screen-sized buffer of glyphs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    glyphs: Vec<Glyph>,
    width: i32,
    height: i32,
}

impl Canvas {
    pub fn new(width: i32, height: i32) -> Self {
        let (w, h) = (width.max(0), height.max(0));
        Self {
            glyphs: vec![Glyph::default(); (w * h) as usize],
            width: w,
            height: h,
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if p.x >= 0 && p.y >= 0 && p.x < self.width && p.y < self.height {
            Some((p.y * self.width + p.x) as usize)
        } else {
            None
        }
    }

    /// Glyph at `p`, or the default glyph outside the canvas.
    pub fn at(&self, p: Point) -> Glyph {
        self.index(p).map(|i| self.glyphs[i]).unwrap_or_default()
    }

    /// Set the glyph at `p`. No-op outside the canvas.
    pub fn set(&mut self, p: Point, glyph: Glyph) {
        if let Some(i) = self.index(p) {
            self.glyphs[i] = glyph;
        }
    }

    /// Write `text` starting at `p`, clipped to the canvas width.
    pub fn put_str(&mut self, p: Point, text: &str, fg: Color, bg: Color) {
        for (dx, ch) in text.chars().enumerate() {
            self.set(p.shift(dx as i32, 0), Glyph { ch, fg, bg });
        }
    }

    /// Row-major iterator over `(Point, Glyph)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Glyph)> + '_ {
        let w = self.width.max(1);
        self.glyphs
            .iter()
            .enumerate()
            .map(move |(i, g)| (Point::new(i as i32 % w, i as i32 / w), *g))
    }
}

/// Glyphs of `curr` that differ from `prev`. A size change (or no previous
/// frame) yields every glyph.
pub fn diff(prev: Option<&Canvas>, curr: &Canvas) -> Vec<(Point, Glyph)> {
    match prev {
        Some(prev) if prev.width == curr.width && prev.height == curr.height => curr
            .iter()
            .filter(|&(p, g)| prev.at(p) != g)
            .collect(),
        _ => curr.iter().collect(),
    }
}

// ---------------------------------------------------------------------------
// Viewport
// ---------------------------------------------------------------------------

/// Terminal columns per grid cell; two columns make cells roughly square.
pub const CELL_WIDTH: i32 = 2;

/// Placement of an N×N grid on the terminal, plus a status line below it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub origin: Point,
    pub n: i32,
}

impl Viewport {
    /// Grid anchored at the top-left corner of the terminal.
    pub fn for_grid(n: i32) -> Self {
        Self {
            origin: Point::ZERO,
            n,
        }
    }

    /// Grid cell under the terminal position `(column, row)`.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Point> {
        let x = column as i32 - self.origin.x;
        let y = row as i32 - self.origin.y;
        if x < 0 || y < 0 {
            return None;
        }
        let p = Point::new(x / CELL_WIDTH, y);
        (p.x < self.n && p.y < self.n).then_some(p)
    }

    /// Terminal position of the left half of `cell`.
    pub fn screen_pos(&self, cell: Point) -> Point {
        Point::new(self.origin.x + cell.x * CELL_WIDTH, self.origin.y + cell.y)
    }

    /// Terminal row of the status line (one blank row below the grid).
    pub fn status_row(&self) -> i32 {
        self.origin.y + self.n + 1
    }

    /// Minimum terminal size `(columns, rows)` that fits grid and status.
    pub fn required_size(&self) -> (u16, u16) {
        let cols = self.origin.x + self.n * CELL_WIDTH;
        let rows = self.status_row() + 1;
        (cols.clamp(0, u16::MAX as i32) as u16, rows.clamp(0, u16::MAX as i32) as u16)
    }
}

/// Draw the grid's cell states and the status line onto a fresh canvas.
pub fn compose(grid: &Grid, viewport: &Viewport, status: &str) -> Canvas {
    let (cols, rows) = viewport.required_size();
    let mut canvas = Canvas::new(cols as i32, rows as i32);
    for cell in grid {
        let bg = state_color(cell.state());
        let glyph = Glyph {
            ch: ' ',
            fg: Color::GREY,
            bg,
        };
        let sp = viewport.screen_pos(cell.pos());
        for dx in 0..CELL_WIDTH {
            canvas.set(sp.shift(dx, 0), glyph);
        }
    }
    canvas.put_str(
        Point::new(viewport.origin.x, viewport.status_row()),
        status,
        Color::WHITE,
        Color::BLACK,
    );
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_components() {
        let c = Color::TURQUOISE;
        assert_eq!((c.r(), c.g(), c.b()), (64, 224, 208));
    }

    #[test]
    fn every_state_has_a_distinct_color() {
        let states = [
            CellState::Unvisited,
            CellState::Frontier,
            CellState::Visited,
            CellState::Barrier,
            CellState::Start,
            CellState::End,
            CellState::Path,
        ];
        for (i, a) in states.iter().enumerate() {
            for b in &states[i + 1..] {
                assert_ne!(state_color(*a), state_color(*b), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn viewport_maps_double_width_cells() {
        let vp = Viewport::for_grid(4);
        assert_eq!(vp.cell_at(0, 0), Some(Point::new(0, 0)));
        assert_eq!(vp.cell_at(1, 0), Some(Point::new(0, 0)));
        assert_eq!(vp.cell_at(2, 3), Some(Point::new(1, 3)));
        assert_eq!(vp.cell_at(7, 3), Some(Point::new(3, 3)));
        assert_eq!(vp.cell_at(8, 0), None);
        assert_eq!(vp.cell_at(0, 4), None);
        assert_eq!(vp.screen_pos(Point::new(3, 2)), Point::new(6, 2));
        assert_eq!(vp.required_size(), (8, 6));
    }

    #[test]
    fn viewport_with_offset_origin() {
        let vp = Viewport {
            origin: Point::new(2, 1),
            n: 3,
        };
        assert_eq!(vp.cell_at(1, 1), None);
        assert_eq!(vp.cell_at(2, 0), None);
        assert_eq!(vp.cell_at(3, 1), Some(Point::new(0, 0)));
        assert_eq!(vp.cell_at(7, 3), Some(Point::new(2, 2)));
    }

    #[test]
    fn compose_colors_cells_and_writes_status() {
        let mut g = Grid::new(2);
        g.set_state(Point::at(1, 0), CellState::Barrier);
        g.set_state(Point::at(0, 1), CellState::Start);
        let vp = Viewport::for_grid(2);
        let canvas = compose(&g, &vp, "ok");

        assert_eq!(canvas.at(Point::new(0, 0)).bg, Color::WHITE);
        assert_eq!(canvas.at(Point::new(2, 0)).bg, Color::ORANGE);
        assert_eq!(canvas.at(Point::new(3, 0)).bg, Color::ORANGE);
        assert_eq!(canvas.at(Point::new(0, 1)).bg, Color::BLACK);
        assert_eq!(canvas.at(Point::new(0, 3)).ch, 'o');
        assert_eq!(canvas.at(Point::new(1, 3)).ch, 'k');
    }

    #[test]
    fn status_is_clipped() {
        let vp = Viewport::for_grid(2);
        let canvas = compose(&Grid::new(2), &vp, "a long status line");
        assert_eq!(canvas.width(), 4);
        assert_eq!(canvas.at(Point::new(3, 3)).ch, 'o');
    }

    #[test]
    fn diff_reports_only_changes() {
        let vp = Viewport::for_grid(3);
        let mut g = Grid::new(3);
        let before = compose(&g, &vp, "");
        g.set_state(Point::at(1, 1), CellState::Frontier);
        let after = compose(&g, &vp, "");

        let changes = diff(Some(&before), &after);
        assert_eq!(changes.len(), 2);
        assert!(changes.iter().all(|(_, gl)| gl.bg == Color::GREEN));
        assert_eq!(changes[0].0, Point::new(2, 1));

        assert!(diff(Some(&after), &after).is_empty());
        assert_eq!(diff(None, &after).len(), (after.width() * after.height()) as usize);
    }
}
