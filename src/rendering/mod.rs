//! # Rendering Module
//!
//! Frames are composed headlessly as a grid of colored glyphs and then handed
//! to a [`Renderer`]: the macroquad window in the binary, or an in-memory
//! [`FrameRenderer`] in tests and scripted runs.

pub mod color;
pub mod display;
pub mod ui;

pub use color::*;
pub use display::*;
pub use ui::*;

use crate::config::{SCREEN_H, SCREEN_W};
use crate::debug::DebugParser;
use crate::game::{GameSession, Item, Position, Spell};

/// What is drawn on top of, or instead of, the map screen.
#[derive(Debug, Clone, Copy)]
pub enum Overlay<'a> {
    /// Plain map screen
    None,
    /// Lettered item list replacing the map
    ItemList {
        title: &'a str,
        items: &'a [Item],
        /// Show the special items column
        special: bool,
    },
    /// Lettered spell list replacing the map
    SpellList { title: &'a str, spells: &'a [Spell] },
    /// Map screen with a highlighted cursor
    Look { cursor: Position },
    /// Debug console replacing the map
    Console(&'a DebugParser),
}

/// Anything that can show a frame of the game.
///
/// Renderers only read the session.
pub trait Renderer {
    fn render(&mut self, session: &GameSession, overlay: Overlay<'_>);

    /// Releases the output surface once the loop terminates.
    fn teardown(&mut self) {}
}

/// One glyph cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Rgb,
    pub bg: Rgb,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: WHITE,
            bg: BLACK,
        }
    }
}

/// A screen's worth of glyph cells.
///
/// # Examples
///
/// ```
/// use troll_temple::{Frame, WHITE};
///
/// let mut frame = Frame::new(20, 3);
/// frame.print(2, 1, "Hello", WHITE);
/// assert_eq!(frame.row_text(1).trim(), "Hello");
/// assert!(frame.contains("ell"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub width: i32,
    pub height: i32,
    cells: Vec<Cell>,
}

impl Default for Frame {
    fn default() -> Self {
        Self::new(SCREEN_W, SCREEN_H)
    }
}

impl Frame {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); (width.max(0) * height.max(0)) as usize],
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        (x >= 0 && y >= 0 && x < self.width && y < self.height)
            .then(|| (y * self.width + x) as usize)
    }

    pub fn cell(&self, x: i32, y: i32) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Writes one glyph; off-screen writes are dropped.
    pub fn put(&mut self, x: i32, y: i32, ch: char, fg: Rgb) {
        if let Some(i) = self.index(x, y) {
            self.cells[i].ch = ch;
            self.cells[i].fg = fg;
        }
    }

    pub fn set_bg(&mut self, x: i32, y: i32, bg: Rgb) {
        if let Some(i) = self.index(x, y) {
            self.cells[i].bg = bg;
        }
    }

    /// Writes text left to right, clipped at the right edge. Returns the
    /// column after the last character.
    pub fn print(&mut self, x: i32, y: i32, text: &str, fg: Rgb) -> i32 {
        let mut cx = x;
        for ch in text.chars() {
            self.put(cx, y, ch, fg);
            cx += 1;
        }
        cx
    }

    /// Like [`Frame::print`] with a background color.
    pub fn print_bg(&mut self, x: i32, y: i32, text: &str, fg: Rgb, bg: Rgb) -> i32 {
        let end = self.print(x, y, text, fg);
        for cx in x..end {
            self.set_bg(cx, y, bg);
        }
        end
    }

    /// Characters of row `y`, for assertions and logging.
    pub fn row_text(&self, y: i32) -> String {
        (0..self.width)
            .filter_map(|x| self.cell(x, y))
            .map(|c| c.ch)
            .collect()
    }

    /// Whether any row contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        (0..self.height).any(|y| self.row_text(y).contains(needle))
    }

    /// Cells of row `y`, left to right.
    pub fn row(&self, y: i32) -> &[Cell] {
        match self.index(0, y) {
            Some(start) => &self.cells[start..start + self.width as usize],
            None => &[],
        }
    }
}

/// Headless renderer that keeps the last composed frame.
#[derive(Debug, Clone, Default)]
pub struct FrameRenderer {
    pub last: Frame,
    /// Frames rendered so far
    pub frames: usize,
    pub torn_down: bool,
}

impl FrameRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for FrameRenderer {
    fn render(&mut self, session: &GameSession, overlay: Overlay<'_>) {
        self.last = compose(session, overlay);
        self.frames += 1;
    }

    fn teardown(&mut self) {
        self.torn_down = true;
    }
}
