//! # Command Definitions
//!
//! Abstract commands and the static key table that produces them.

use crate::game::Direction;
use crate::input::Key;

/// What a key asks the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move or attack one step
    Walk(Direction),
    Wait,
    Quit,
    Descend,
    PickUp,
    Inventory,
    Spellbook,
    Drop,
    Look,
    /// Wizard mode: jump to the next level
    WizardDescend,
    /// Wizard mode: open the debug console
    Console,
}

impl Command {
    /// Walking direction as a `(dx, dy)` pair.
    pub fn delta(self) -> Option<(i32, i32)> {
        match self {
            Command::Walk(direction) => {
                let delta = direction.to_delta();
                Some((delta.x, delta.y))
            }
            _ => None,
        }
    }
}

/// Key bindings, keypad and arrows for movement.
pub const COMMAND_TABLE: &[(Key, Command)] = &[
    (Key::Keypad(7), Command::Walk(Direction::Northwest)),
    (Key::Keypad(8), Command::Walk(Direction::North)),
    (Key::Up, Command::Walk(Direction::North)),
    (Key::Keypad(9), Command::Walk(Direction::Northeast)),
    (Key::Keypad(4), Command::Walk(Direction::West)),
    (Key::Left, Command::Walk(Direction::West)),
    (Key::Keypad(5), Command::Wait),
    (Key::Keypad(6), Command::Walk(Direction::East)),
    (Key::Right, Command::Walk(Direction::East)),
    (Key::Keypad(1), Command::Walk(Direction::Southwest)),
    (Key::Keypad(2), Command::Walk(Direction::South)),
    (Key::Down, Command::Walk(Direction::South)),
    (Key::Keypad(3), Command::Walk(Direction::Southeast)),
    (Key::Escape, Command::Quit),
    (Key::Char('.'), Command::Descend),
    (Key::Char('g'), Command::PickUp),
    (Key::Char('i'), Command::Inventory),
    (Key::Char('b'), Command::Spellbook),
    (Key::Char('d'), Command::Drop),
    (Key::Char('l'), Command::Look),
    (Key::Char('w'), Command::WizardDescend),
    (Key::Backquote, Command::Console),
];

/// Looks up the command bound to `key`.
///
/// # Examples
///
/// ```
/// use troll_temple::{decode_key, Command, Direction, Key};
///
/// assert_eq!(decode_key(Key::Up), Some(Command::Walk(Direction::North)));
/// assert_eq!(decode_key(Key::Char('z')), None);
/// ```
pub fn decode_key(key: Key) -> Option<Command> {
    COMMAND_TABLE
        .iter()
        .find(|(bound, _)| *bound == key)
        .map(|&(_, command)| command)
}
