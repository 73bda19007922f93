//! # Input Module
//!
//! The fixed key set the game understands, the blocking key sources that
//! feed the loop, and the static command table.

pub mod commands;

pub use commands::*;

use crate::TempleResult;
use log::warn;
use std::collections::VecDeque;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// A raw key identifier.
///
/// Window backends and scripts translate their own events into this set;
/// nothing past the input layer sees platform key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    /// Numeric keypad digit, 1 to 9
    Keypad(u8),
    Enter,
    Escape,
    Space,
    Backspace,
    Tab,
    Backquote,
    /// Letters, digits and punctuation
    Char(char),
}

impl Key {
    /// Position of a lowercase letter in the alphabet, used by lettered lists.
    ///
    /// # Examples
    ///
    /// ```
    /// use troll_temple::Key;
    ///
    /// assert_eq!(Key::Char('c').letter_index(), Some(2));
    /// assert_eq!(Key::Char('C').letter_index(), None);
    /// assert_eq!(Key::Enter.letter_index(), None);
    /// ```
    pub fn letter_index(self) -> Option<usize> {
        match self {
            Key::Char(c @ 'a'..='z') => Some(c as usize - 'a' as usize),
            _ => None,
        }
    }

    /// Printable character typed by this key, if any.
    pub fn as_char(self) -> Option<char> {
        match self {
            Key::Char(c) => Some(c),
            Key::Space => Some(' '),
            _ => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Up => write!(f, "up"),
            Key::Down => write!(f, "down"),
            Key::Left => write!(f, "left"),
            Key::Right => write!(f, "right"),
            Key::Keypad(n) => write!(f, "kp{n}"),
            Key::Enter => write!(f, "enter"),
            Key::Escape => write!(f, "esc"),
            Key::Space => write!(f, "space"),
            Key::Backspace => write!(f, "bksp"),
            Key::Tab => write!(f, "tab"),
            Key::Backquote => write!(f, "backquote"),
            Key::Char(c) => write!(f, "{c}"),
        }
    }
}

impl FromStr for Key {
    type Err = String;

    /// Parses a script token.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let key = match token {
            "up" => Key::Up,
            "down" => Key::Down,
            "left" => Key::Left,
            "right" => Key::Right,
            "enter" => Key::Enter,
            "esc" => Key::Escape,
            "space" => Key::Space,
            "bksp" => Key::Backspace,
            "tab" => Key::Tab,
            "backquote" | "`" => Key::Backquote,
            _ => {
                if let Some(digit) = token.strip_prefix("kp") {
                    match digit.parse::<u8>() {
                        Ok(n @ 1..=9) => Key::Keypad(n),
                        _ => return Err(format!("bad keypad key {token:?}")),
                    }
                } else {
                    let mut chars = token.chars();
                    match (chars.next(), chars.next()) {
                        (Some(c), None) => Key::Char(c),
                        _ => return Err(format!("unknown key {token:?}")),
                    }
                }
            }
        };
        Ok(key)
    }
}

/// A blocking source of key events.
pub trait InputSource {
    /// Waits for the next key; `None` once the source is exhausted.
    fn read_key(&mut self) -> Option<Key>;
}

/// Replays a fixed key script, for headless runs and tests.
///
/// Scripts hold whitespace-separated tokens; lines starting with `#` are
/// comments.
///
/// # Examples
///
/// ```
/// use troll_temple::{InputSource, Key, ScriptedInput};
///
/// let mut input = ScriptedInput::from_script("# walk north then quit\nkp8 esc y");
/// assert_eq!(input.read_key(), Some(Key::Keypad(8)));
/// assert_eq!(input.read_key(), Some(Key::Escape));
/// assert_eq!(input.read_key(), Some(Key::Char('y')));
/// assert_eq!(input.read_key(), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    keys: VecDeque<Key>,
}

impl ScriptedInput {
    pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    /// Parses a script, skipping unknown tokens with a warning.
    pub fn from_script(script: &str) -> Self {
        let mut keys = VecDeque::new();
        for line in script.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            for token in line.split_whitespace() {
                match token.parse::<Key>() {
                    Ok(key) => keys.push_back(key),
                    Err(e) => warn!("skipping script token: {e}"),
                }
            }
        }
        Self { keys }
    }

    pub fn from_file(path: impl AsRef<Path>) -> TempleResult<Self> {
        Ok(Self::from_script(&fs::read_to_string(path)?))
    }

    /// Keys not yet replayed.
    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl InputSource for ScriptedInput {
    fn read_key(&mut self) -> Option<Key> {
        self.keys.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_parsing() {
        assert_eq!("kp5".parse::<Key>(), Ok(Key::Keypad(5)));
        assert_eq!(".".parse::<Key>(), Ok(Key::Char('.')));
        assert_eq!("bksp".parse::<Key>(), Ok(Key::Backspace));
        assert!("kp0".parse::<Key>().is_err());
        assert!("shift".parse::<Key>().is_err());
    }

    #[test]
    fn test_display_matches_script_tokens() {
        for key in [Key::Up, Key::Keypad(3), Key::Escape, Key::Char('g'), Key::Backquote] {
            assert_eq!(key.to_string().parse::<Key>(), Ok(key));
        }
    }

    #[test]
    fn test_script_skips_comments_and_unknown_tokens() {
        let mut input = ScriptedInput::from_script("# header\n  g  nope\n\n# kp1\nenter");
        assert_eq!(input.remaining(), 2);
        assert_eq!(input.read_key(), Some(Key::Char('g')));
        assert_eq!(input.read_key(), Some(Key::Enter));
        assert_eq!(input.read_key(), None);
    }
}
