//! Look mode: a free cursor over the map describing what it points at.

use super::{Game, Scene};
use crate::game::{GameSession, MessageLog, Position};
use crate::input::{decode_key, Command, Key};
use crate::rendering::{Renderer, COLOR_TITLE, GREY};
use std::mem;

/// Look mode state: the cursor and the main log set aside while scouting.
#[derive(Debug, Clone)]
pub struct LookMode {
    pub cursor: Position,
    saved: MessageLog,
}

impl LookMode {
    /// Swaps in a fresh log holding only the look mode banner.
    pub(super) fn enter(session: &mut GameSession) -> Self {
        let saved = mem::take(&mut session.messages);
        session
            .messages
            .push("Look mode - use movement keys, ESC to exit.", COLOR_TITLE);
        session.messages.new_ui_turn();
        Self {
            cursor: session.player.pos,
            saved,
        }
    }
}

/// Appends one line per thing visible at `pos`.
pub(super) fn describe_tile(session: &mut GameSession, pos: Position) {
    let level = &session.level;
    let log = &mut session.messages;
    let Some(tile) = level.tile_at(pos).filter(|tile| tile.visible) else {
        log.push("Out of sight.", GREY);
        return;
    };
    let (_, color) = tile.kind.glyph();
    log.push(format!("{}.", tile.kind.name()), color);
    if let Some(monster) = level.monster_at(pos) {
        log.push(format!("{}.", monster.name), monster.color);
    }
    for item in &tile.items {
        log.push(format!("{}.", item.descr), item.color);
    }
}

impl<R: Renderer> Game<R> {
    pub(super) fn look_key(&mut self, mut look: LookMode, key: Key) {
        match decode_key(key) {
            Some(Command::Quit) => {
                self.session.messages = look.saved;
                self.render_top();
            }
            Some(Command::Walk(direction)) => {
                let target = look.cursor + direction.to_delta();
                let moved = self.session.level.in_bounds(target);
                if moved {
                    look.cursor = target;
                }
                self.scenes.push(Scene::Look(look));
                if moved {
                    self.render_top();
                }
            }
            _ => self.scenes.push(Scene::Look(look)),
        }
    }
}
