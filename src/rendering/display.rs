//! # Display Management
//!
//! Window output and keyboard input through macroquad. The display keeps the
//! last composed frame and blits it every window frame.

use crate::config::{SCREEN_H, SCREEN_W};
use crate::game::GameSession;
use crate::input::Key;
use crate::rendering::{compose, Frame, Overlay, Renderer, Rgb, BLACK};
use crate::{TITLE, VERSION};
use log::info;
use macroquad::prelude::{
    clear_background, draw_rectangle, draw_text, get_char_pressed, is_key_pressed, Color, KeyCode,
};

/// Glyph cell width relative to the font size.
const CELL_ASPECT: f32 = 0.6;

/// Special keys read as key codes; everything printable arrives as a char.
const KEY_CODES: &[(KeyCode, Key)] = &[
    (KeyCode::Up, Key::Up),
    (KeyCode::Down, Key::Down),
    (KeyCode::Left, Key::Left),
    (KeyCode::Right, Key::Right),
    (KeyCode::Kp1, Key::Keypad(1)),
    (KeyCode::Kp2, Key::Keypad(2)),
    (KeyCode::Kp3, Key::Keypad(3)),
    (KeyCode::Kp4, Key::Keypad(4)),
    (KeyCode::Kp5, Key::Keypad(5)),
    (KeyCode::Kp6, Key::Keypad(6)),
    (KeyCode::Kp7, Key::Keypad(7)),
    (KeyCode::Kp8, Key::Keypad(8)),
    (KeyCode::Kp9, Key::Keypad(9)),
    (KeyCode::Enter, Key::Enter),
    (KeyCode::KpEnter, Key::Enter),
    (KeyCode::Escape, Key::Escape),
    (KeyCode::Backspace, Key::Backspace),
    (KeyCode::Tab, Key::Tab),
];

/// Window title, flagged in wizard mode.
pub fn window_title(wizard: bool) -> String {
    let flag = if wizard { " [WIZARD]" } else { "" };
    format!("{TITLE} v{VERSION}{flag}")
}

/// Window size in pixels fitting the whole screen grid.
pub fn window_size(font_size: f32) -> (i32, i32) {
    (
        (SCREEN_W as f32 * font_size * CELL_ASPECT).ceil() as i32,
        (SCREEN_H as f32 * font_size).ceil() as i32,
    )
}

fn to_color(rgb: Rgb) -> Color {
    Color::from_rgba(rgb.r, rgb.g, rgb.b, 255)
}

/// Macroquad window renderer.
pub struct MacroquadDisplay {
    frame: Frame,
    font_size: f32,
    cell_w: f32,
    cell_h: f32,
}

impl MacroquadDisplay {
    pub fn new(font_size: f32) -> Self {
        Self {
            frame: Frame::default(),
            font_size,
            cell_w: font_size * CELL_ASPECT,
            cell_h: font_size,
        }
    }

    /// Blits the last composed frame to the window.
    pub fn draw(&self) {
        clear_background(to_color(BLACK));
        let mut glyph = [0u8; 4];
        for y in 0..self.frame.height {
            for (x, cell) in self.frame.row(y).iter().enumerate() {
                let px = x as f32 * self.cell_w;
                let py = y as f32 * self.cell_h;
                if cell.bg != BLACK {
                    draw_rectangle(px, py, self.cell_w, self.cell_h, to_color(cell.bg));
                }
                if cell.ch != ' ' {
                    let text = cell.ch.encode_utf8(&mut glyph);
                    draw_text(text, px, py + self.cell_h * 0.8, self.font_size, to_color(cell.fg));
                }
            }
        }
    }

    /// Keys pressed since the last window frame, in a stable order.
    pub fn pressed_keys(&self) -> Vec<Key> {
        let mut keys: Vec<Key> = KEY_CODES
            .iter()
            .filter(|(code, _)| is_key_pressed(*code))
            .map(|&(_, key)| key)
            .collect();
        let keypad_used = keys.iter().any(|k| matches!(k, Key::Keypad(_)));
        while let Some(c) = get_char_pressed() {
            let key = match c {
                ' ' => Key::Space,
                '`' => Key::Backquote,
                c if keypad_used && c.is_ascii_digit() => continue,
                c if c.is_ascii_graphic() => Key::Char(c),
                _ => continue,
            };
            keys.push(key);
        }
        keys
    }
}

impl Renderer for MacroquadDisplay {
    fn render(&mut self, session: &GameSession, overlay: Overlay<'_>) {
        self.frame = compose(session, overlay);
    }

    fn teardown(&mut self) {
        info!("closing the window");
    }
}
