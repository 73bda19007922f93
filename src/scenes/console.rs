//! Debug console key handling.

use super::{Game, Scene};
use crate::debug::DebugParser;
use crate::input::Key;
use crate::rendering::Renderer;

impl<R: Renderer> Game<R> {
    pub(super) fn console_key(&mut self, mut parser: DebugParser, key: Key) {
        match key {
            Key::Enter => {
                parser.submit(&mut self.session);
                self.render_top();
                return;
            }
            Key::Escape => {
                self.render_top();
                return;
            }
            Key::Tab => parser.complete(),
            Key::Up => parser.select_prev(),
            Key::Down => parser.select_next(),
            Key::Backspace => parser.backspace(),
            _ => match key.as_char() {
                Some(c) => parser.push_char(c),
                None => {
                    self.scenes.push(Scene::Console(parser));
                    return;
                }
            },
        }
        self.scenes.push(Scene::Console(parser));
        self.render_top();
    }
}
