//! # Debug Command Registry
//!
//! The static registry of console commands. Each entry pairs a name with
//! plain function pointers, so the table is built at compile time.

use crate::game::{GameSession, Item, Monster, Position};
use crate::rendering::{LIGHT_RED, LIGHTER_BLUE};
use log::info;
use rand::seq::SliceRandom;

/// A console command.
#[derive(Debug, Clone, Copy)]
pub struct DebugCommand {
    /// Name typed as the first token, matched case-insensitively
    pub name: &'static str,
    /// Runs the command with the remaining tokens as arguments
    pub run: fn(&mut GameSession, &[String]),
    /// Completion candidates for argument `index` given its partial value
    pub auto_complete_arg: fn(&str, usize) -> Vec<String>,
}

/// Every command the console knows.
pub static DEBUG_COMMANDS: &[DebugCommand] = &[
    DebugCommand {
        name: "Get",
        run: run_get,
        auto_complete_arg: complete_item,
    },
    DebugCommand {
        name: "Spawn",
        run: run_spawn,
        auto_complete_arg: complete_monster,
    },
    DebugCommand {
        name: "LevelUp",
        run: run_level_up,
        auto_complete_arg: complete_nothing,
    },
];

/// Finds a command by exact, case-insensitive name.
pub fn find_command<'a>(registry: &'a [DebugCommand], name: &str) -> Option<&'a DebugCommand> {
    registry.iter().find(|c| c.name.eq_ignore_ascii_case(name))
}

fn matching(names: impl Iterator<Item = &'static str>, value: &str) -> Vec<String> {
    let value = value.to_lowercase();
    names
        .map(str::to_lowercase)
        .filter(|name| name.contains(&value))
        .collect()
}

fn complete_item(value: &str, index: usize) -> Vec<String> {
    if index > 0 {
        return Vec::new();
    }
    matching(Item::names(), value)
}

fn complete_monster(value: &str, index: usize) -> Vec<String> {
    if index > 0 {
        return Vec::new();
    }
    matching(Monster::names(), value)
}

fn complete_nothing(_value: &str, _index: usize) -> Vec<String> {
    Vec::new()
}

fn run_get(session: &mut GameSession, args: &[String]) {
    let Some(name) = args.first() else {
        session.messages.push("Get what?", LIGHT_RED);
        return;
    };
    match Item::from_name(name) {
        Some(item) => {
            info!("debug: giving {}", item.name);
            session.player.receive(item, &mut session.messages);
        }
        None => session
            .messages
            .push(format!("No item called {name}."), LIGHT_RED),
    }
}

fn run_spawn(session: &mut GameSession, args: &[String]) {
    let Some(name) = args.first() else {
        session.messages.push("Spawn what?", LIGHT_RED);
        return;
    };
    let Some(mut monster) = Monster::from_name(name, session.player.pos) else {
        session
            .messages
            .push(format!("No monster called {name}."), LIGHT_RED);
        return;
    };
    let player = session.player.pos;
    let free: Vec<Position> = session
        .level
        .positions()
        .filter(|&p| p != player && session.level.is_walkable(p))
        .collect();
    let spot = free.choose(&mut session.rng).copied();
    match spot {
        Some(pos) => {
            info!("debug: spawning {} at ({}, {})", monster.name, pos.x, pos.y);
            monster.pos = pos;
            session
                .messages
                .push(format!("A {} appears.", monster.name.to_lowercase()), LIGHTER_BLUE);
            session.level.monsters.push(monster);
        }
        None => session
            .messages
            .push("There is no room for it.", LIGHT_RED),
    }
}

fn run_level_up(session: &mut GameSession, _args: &[String]) {
    session.player.advance(&mut session.messages);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_command_ignores_case() {
        assert_eq!(find_command(DEBUG_COMMANDS, "levelup").unwrap().name, "LevelUp");
        assert!(find_command(DEBUG_COMMANDS, "level").is_none());
    }

    #[test]
    fn test_item_completion() {
        let names = complete_item("POTION", 0);
        assert!(names.contains(&"healthpotion".to_string()));
        assert!(names.contains(&"manapotion".to_string()));
        assert!(complete_item("potion", 1).is_empty());
    }

    #[test]
    fn test_monster_completion() {
        assert_eq!(complete_monster("tro", 0), vec!["troll".to_string()]);
    }
}
