//! # Message Log
//!
//! Ordered log of player-facing messages. Entries appended since the last
//! player-initiated turn are "latest" and drawn at full brightness; older
//! entries fade.

use crate::rendering::{Rgb, WHITE};
use log::debug;
use serde::{Deserialize, Serialize};

/// One line of the message log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Whether the message belongs to the current UI turn
    pub latest: bool,
    /// Message text, first letter capitalized
    pub text: String,
    /// Display color
    pub color: Rgb,
}

/// Append-only message log.
///
/// # Examples
///
/// ```
/// use troll_temple::MessageLog;
///
/// let mut log = MessageLog::new();
/// log.message("welcome!");
/// assert_eq!(log.last().unwrap().text, "Welcome!");
/// assert!(log.last().unwrap().latest);
///
/// log.new_ui_turn();
/// assert!(!log.last().unwrap().latest);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageLog {
    entries: Vec<Message>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a white message.
    pub fn message(&mut self, text: impl Into<String>) {
        self.push(text, WHITE);
    }

    /// Appends a message as latest, capitalizing its first letter.
    pub fn push(&mut self, text: impl Into<String>, color: Rgb) {
        let text = capitalize(&text.into());
        debug!("{text}");
        self.entries.push(Message {
            latest: true,
            text,
            color,
        });
    }

    /// Marks the trailing run of latest entries as not latest.
    ///
    /// Entries that are already faded stop the walk, so calling this twice in
    /// a row leaves the log unchanged.
    pub fn new_ui_turn(&mut self) {
        for entry in self.entries.iter_mut().rev() {
            if !entry.latest {
                break;
            }
            entry.latest = false;
        }
    }

    /// Removes entries from the end while the last one is still latest.
    pub fn pop_latest(&mut self) {
        while self.entries.last().is_some_and(|m| m.latest) {
            self.entries.pop();
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.entries.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.entries.iter()
    }

    /// The last `n` entries in order, as shown by the message panel.
    pub fn recent(&self, n: usize) -> &[Message] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::GREEN;

    #[test]
    fn test_messages_are_capitalized() {
        let mut log = MessageLog::new();
        log.push("you feel better.", GREEN);
        assert_eq!(log.last().unwrap().text, "You feel better.");
        assert_eq!(log.last().unwrap().color, GREEN);
    }

    #[test]
    fn test_empty_message_is_kept() {
        let mut log = MessageLog::new();
        log.message("");
        assert_eq!(log.len(), 1);
        assert_eq!(log.last().unwrap().text, "");
    }

    #[test]
    fn test_new_ui_turn_stops_at_faded_entries() {
        let mut log = MessageLog::new();
        log.message("first");
        log.new_ui_turn();
        log.message("second");
        log.message("third");
        log.new_ui_turn();
        assert!(log.iter().all(|m| !m.latest));
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn test_pop_latest_keeps_older_entries() {
        let mut log = MessageLog::new();
        log.message("old");
        log.new_ui_turn();
        log.message("transient one");
        log.message("transient two");
        log.pop_latest();
        assert_eq!(log.len(), 1);
        assert_eq!(log.last().unwrap().text, "Old");
    }

    #[test]
    fn test_recent_returns_tail() {
        let mut log = MessageLog::new();
        for i in 0..5 {
            log.message(format!("m{i}"));
        }
        let tail: Vec<_> = log.recent(2).iter().map(|m| m.text.as_str()).collect();
        assert_eq!(tail, vec!["M3", "M4"]);
        assert_eq!(log.recent(10).len(), 5);
    }
}
