//! # User Interface Elements
//!
//! Composes a [`Frame`] from the session: map, status panel, message panel,
//! and the list, look and console screens.

use crate::config::{BUFFER_H, MAP_H, MAP_W};
use crate::debug::DebugParser;
use crate::game::{GameSession, Item, Position, Spell};
use crate::rendering::*;

/// Left edge of the status and message panels.
const PANEL_X: i32 = 60;
/// First row of the message panel.
const MESSAGES_Y: i32 = 13;
/// Visible tiles farther than this are drawn dimmer.
const LIGHT_RANGE: i32 = 6;
/// Fade applied to old messages and tiles outside the light range.
const FADE: f32 = 0.6;
/// Interior width of the status bars.
const BAR_W: i32 = 18;

/// Builds the full frame for `overlay`.
pub fn compose(session: &GameSession, overlay: Overlay<'_>) -> Frame {
    let mut frame = Frame::default();
    match overlay {
        Overlay::None => draw_map(&mut frame, session),
        Overlay::Look { cursor } => {
            draw_map(&mut frame, session);
            draw_cursor(&mut frame, session, cursor);
        }
        Overlay::ItemList {
            title,
            items,
            special,
        } => {
            draw_items(&mut frame, title, items);
            if special {
                draw_special_items(&mut frame, session);
            }
        }
        Overlay::SpellList { title, spells } => draw_spells(&mut frame, title, spells),
        Overlay::Console(parser) => {
            draw_console(&mut frame, parser);
            return frame;
        }
    }
    draw_messages(&mut frame, session);
    draw_status(&mut frame, session);
    frame
}

fn draw_map(frame: &mut Frame, session: &GameSession) {
    let level = &session.level;
    let player = session.player.pos;
    for y in 0..MAP_H.min(level.height) {
        for x in 0..MAP_W.min(level.width) {
            let pos = Position::new(x, y);
            let Some(tile) = level.tile_at(pos) else {
                continue;
            };
            let (ch, color) = if tile.visible {
                let (ch, color) = if pos == player {
                    ('@', WHITE)
                } else if let Some(monster) = level.monster_at(pos) {
                    (monster.glyph, monster.color)
                } else if let Some(item) = tile.items.last() {
                    (item.glyph, item.color)
                } else {
                    tile.kind.glyph()
                };
                if pos.euclidean_distance(player) > (LIGHT_RANGE + 1) as f64 {
                    (ch, color.dim(FADE))
                } else {
                    (ch, color)
                }
            } else if tile.explored {
                (tile.kind.glyph().0, DARK_GREY)
            } else {
                continue;
            };
            frame.put(x + 1, y + 1, ch, color);
        }
    }
}

fn draw_cursor(frame: &mut Frame, session: &GameSession, cursor: Position) {
    if session.level.is_visible(cursor) {
        frame.set_bg(cursor.x + 1, cursor.y + 1, LIGHT_GREY);
    }
}

fn draw_bar(frame: &mut Frame, y: i32, current: i32, max: i32, color: Rgb) {
    let filled = if max > 0 {
        ((current.max(0) * BAR_W) as f32 / max as f32).round() as i32
    } else {
        0
    };
    for i in 0..filled.min(BAR_W) {
        frame.put(PANEL_X + 20 + i, y, '=', color);
    }
    frame.put(PANEL_X + 19, y, '[', DARK_GREY);
    frame.put(PANEL_X + 20 + BAR_W, y, ']', DARK_GREY);
}

fn draw_status(frame: &mut Frame, session: &GameSession) {
    let player = &session.player;
    frame.print(
        PANEL_X,
        1,
        &format!("Troll Temple (Depth: {})", session.level.depth),
        LIGHT_GREEN,
    );
    frame.print(
        PANEL_X,
        3,
        &format!("Trollhunter {} Level {}", player.class.name(), player.level),
        player.class.color(),
    );

    frame.print(
        PANEL_X,
        5,
        &format!("Exp.:   {}/{}", player.exp, player.max_exp()),
        LIGHT_GREY,
    );
    draw_bar(frame, 5, player.exp as i32, player.max_exp() as i32, LIGHT_YELLOW);
    frame.print(
        PANEL_X,
        6,
        &format!("Health: {}/{}", player.hp, player.max_hp),
        LIGHT_GREY,
    );
    draw_bar(frame, 6, player.hp, player.max_hp, LIGHT_RED);
    frame.print(
        PANEL_X,
        7,
        &format!("Mana:   {}/{}", player.mp, player.max_mp),
        LIGHT_GREY,
    );
    draw_bar(frame, 7, player.mp, player.max_mp, LIGHT_BLUE);

    frame.print(
        PANEL_X,
        8,
        &format!("Damage: {} Armor: {}", player.dice(), player.armor()),
        LIGHT_GREY,
    );
    let mut turns = format!("Turns:  {} Kills: {}", session.turns, player.kills);
    if session.wizard {
        turns.push_str(&format!(" Deaths: {}", player.deaths));
    }
    frame.print(PANEL_X, 9, &turns, LIGHT_GREY);
}

fn draw_messages(frame: &mut Frame, session: &GameSession) {
    for (row, message) in session.messages.recent(BUFFER_H).iter().enumerate() {
        let color = if message.latest {
            message.color
        } else {
            message.color.dim(FADE)
        };
        frame.print(PANEL_X, MESSAGES_Y + row as i32, &message.text, color);
    }
}

/// Letter addressing the `index`-th entry of a list.
fn letter(index: usize) -> char {
    (b'a' + index as u8) as char
}

fn draw_items(frame: &mut Frame, title: &str, items: &[Item]) {
    frame.print(2, 1, title, COLOR_TITLE);
    for (i, item) in items.iter().enumerate() {
        let y = i as i32 + 3;
        frame.put(3, y, letter(i), LIGHT_GREY);
        frame.put(5, y, item.glyph, item.color);
        let color = if item.equipped {
            frame.put(1, y, '*', WHITE);
            WHITE
        } else {
            LIGHT_GREY
        };
        frame.print(7, y, &item.descr, color);
    }
}

fn draw_special_items(frame: &mut Frame, session: &GameSession) {
    if session.player.has_spellbook {
        frame.print(45, 1, "Special items", COLOR_TITLE);
        frame.print(45, 3, "spellbook", LIGHT_BLUE);
    }
}

fn draw_spells(frame: &mut Frame, title: &str, spells: &[Spell]) {
    frame.print(2, 1, title, COLOR_TITLE);
    for (i, spell) in spells.iter().enumerate() {
        let y = i as i32 + 3;
        frame.put(3, y, letter(i), LIGHT_GREY);
        frame.print(5, y, &spell.descr(), LIGHT_GREY);
    }
}

fn draw_console(frame: &mut Frame, parser: &DebugParser) {
    let mut x = 1;
    let tokens = parser.tokens();
    for (i, token) in tokens.iter().enumerate() {
        let color = if parser.is_known(i) {
            LIGHTER_GREEN
        } else {
            LIGHTER_RED
        };
        x = frame.print(x, 0, token, color);
        if i + 1 < tokens.len() {
            x = frame.print(x, 0, " ", WHITE);
        }
    }
    frame.print(x, 0, "_", WHITE);

    for (i, candidate) in parser.last_candidates().iter().enumerate() {
        let y = i as i32 + 1;
        if i == parser.selection() {
            frame.print_bg(1, y, candidate, LIGHTER_BLUE, DARKER_GREY);
        } else {
            frame.print(1, y, candidate, LIGHTER_BLUE);
        }
    }

    frame.print(50, 0, "Debug commands", COLOR_TITLE);
    for (i, command) in parser.registry().iter().enumerate() {
        frame.print(50, i as i32 + 2, command.name, WHITE);
    }
    frame.print(50, parser.registry().len() as i32 + 3, "TAB complete, ENTER run, ESC close", LIGHT_GREY);
}
