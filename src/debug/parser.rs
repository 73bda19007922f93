//! # Console Line Parser
//!
//! Tokenizes the console line on single spaces and keeps one completion
//! list per token, recomputed on every edit.

use crate::debug::{find_command, DebugCommand};
use crate::game::GameSession;
use log::debug;

/// Editable console line with incremental completion.
///
/// Tokens are split on single spaces, so consecutive spaces produce empty
/// tokens and there is always at least one token.
///
/// # Examples
///
/// ```
/// use troll_temple::{DebugParser, DEBUG_COMMANDS};
///
/// let mut parser = DebugParser::with_text(DEBUG_COMMANDS, "get healt");
/// assert_eq!(parser.last_candidates(), ["healthpotion"]);
/// parser.complete();
/// assert_eq!(parser.text(), "get healthpotion");
/// ```
#[derive(Debug, Clone)]
pub struct DebugParser {
    registry: &'static [DebugCommand],
    text: String,
    tokens: Vec<String>,
    candidates: Vec<Vec<String>>,
    selection: usize,
}

impl DebugParser {
    pub fn new(registry: &'static [DebugCommand]) -> Self {
        Self::with_text(registry, "")
    }

    pub fn with_text(registry: &'static [DebugCommand], text: &str) -> Self {
        let mut parser = Self {
            registry,
            text: text.to_string(),
            tokens: Vec::new(),
            candidates: Vec::new(),
            selection: 0,
        };
        parser.parse();
        parser
    }

    pub fn registry(&self) -> &'static [DebugCommand] {
        self.registry
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Completion candidates for the token at `index`.
    pub fn candidates(&self, index: usize) -> &[String] {
        self.candidates.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Completion candidates for the token being typed.
    pub fn last_candidates(&self) -> &[String] {
        self.candidates.last().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    /// Whether the token at `index` equals one of its candidates.
    pub fn is_known(&self, index: usize) -> bool {
        match self.tokens.get(index) {
            Some(token) => self
                .candidates(index)
                .iter()
                .any(|c| c.eq_ignore_ascii_case(token)),
            None => false,
        }
    }

    /// Command named by the first token, if it names one exactly.
    pub fn command(&self) -> Option<&'static DebugCommand> {
        self.tokens
            .first()
            .and_then(|name| find_command(self.registry, name))
    }

    /// Appends a typed character, space included.
    pub fn push_char(&mut self, c: char) {
        self.text.push(c);
        self.parse();
    }

    pub fn backspace(&mut self) {
        self.text.pop();
        self.parse();
    }

    pub fn select_next(&mut self) {
        self.selection = (self.selection + 1) % self.cycle_len();
    }

    pub fn select_prev(&mut self) {
        let len = self.cycle_len();
        self.selection = (self.selection + len - 1) % len;
    }

    fn cycle_len(&self) -> usize {
        self.last_candidates().len().max(1)
    }

    /// Replaces the last token with the selected candidate.
    pub fn complete(&mut self) {
        let Some(choice) = self.last_candidates().get(self.selection).cloned() else {
            return;
        };
        if let Some(last) = self.tokens.last_mut() {
            *last = choice;
        }
        self.text = self.deparse();
        self.parse();
    }

    /// Tokens joined back with single spaces.
    pub fn deparse(&self) -> String {
        self.tokens.join(" ")
    }

    /// Runs the named command with the remaining tokens.
    ///
    /// Returns whether a command was found.
    pub fn submit(&self, session: &mut GameSession) -> bool {
        match self.command() {
            Some(command) => {
                debug!("console: running {:?}", self.text);
                (command.run)(session, &self.tokens[1..]);
                true
            }
            None => {
                debug!("console: no command named {:?}", self.tokens[0]);
                false
            }
        }
    }

    fn parse(&mut self) {
        self.tokens = self.text.split(' ').map(str::to_string).collect();
        self.candidates = (0..self.tokens.len())
            .map(|index| self.complete_token(index))
            .collect();
        self.selection = 0;
    }

    fn complete_token(&self, index: usize) -> Vec<String> {
        let token = self.tokens[index].to_lowercase();
        if index == 0 {
            return self
                .registry
                .iter()
                .filter(|c| c.name.to_lowercase().contains(&token))
                .map(|c| c.name.to_string())
                .collect();
        }
        match self.command() {
            Some(command) => (command.auto_complete_arg)(&self.tokens[index], index - 1)
                .into_iter()
                .filter(|name| name.to_lowercase().contains(&token))
                .collect(),
            None => Vec::new(),
        }
    }
}
