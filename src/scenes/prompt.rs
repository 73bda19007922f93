//! Blocking prompts: quit confirmation, resurrection, game over and victory.

use super::{Game, Scene};
use crate::game::GameSession;
use crate::input::Key;
use crate::rendering::{Renderer, GREEN};
use log::info;

/// Which question a prompt asks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// "Quit? (Y/N)"
    ConfirmQuit,
    /// Wizard mode offer to undo a death
    Resurrect,
    /// Death acknowledgement
    GameOver,
    /// Victory acknowledgement
    Victory,
}

/// What a key means to a prompt.
enum Answer {
    Yes,
    No,
    Acknowledge,
}

impl PromptKind {
    fn text(self, session: &GameSession) -> String {
        match self {
            PromptKind::ConfirmQuit => "Quit? (Y/N)".to_string(),
            PromptKind::Resurrect => "Die? (Y/N)".to_string(),
            PromptKind::GameOver => format!(
                "Game over: {}. Press ENTER",
                session.player.death.as_deref().unwrap_or("died")
            ),
            PromptKind::Victory => "Congratulations! You have won. Press ENTER".to_string(),
        }
    }

    /// Keys outside the prompt's choices are not answers.
    fn answer(self, key: Key) -> Option<Answer> {
        match self {
            PromptKind::ConfirmQuit | PromptKind::Resurrect => match key {
                Key::Char('y' | 'Y') => Some(Answer::Yes),
                Key::Char('n' | 'N') => Some(Answer::No),
                _ => None,
            },
            PromptKind::GameOver | PromptKind::Victory => {
                (key == Key::Enter).then_some(Answer::Acknowledge)
            }
        }
    }
}

impl<R: Renderer> Game<R> {
    /// Shows the prompt text in the message log and waits for an answer.
    pub(super) fn open_prompt(&mut self, kind: PromptKind) {
        let text = kind.text(&self.session);
        self.session.messages.push(text, GREEN);
        self.push_scene(Scene::Prompt(kind));
    }

    pub(super) fn prompt_key(&mut self, kind: PromptKind, key: Key) {
        let Some(answer) = kind.answer(key) else {
            self.scenes.push(Scene::Prompt(kind));
            return;
        };
        match (kind, answer) {
            (PromptKind::ConfirmQuit, Answer::Yes) => {
                info!("player quit");
                self.terminate();
            }
            (PromptKind::ConfirmQuit, _) => {
                self.session.messages.new_ui_turn();
                self.render_top();
            }
            (PromptKind::Resurrect, Answer::No) => {
                self.session.messages.new_ui_turn();
                self.session.resurrect();
                self.render_top();
                self.check_terminal();
            }
            (PromptKind::Resurrect, _) => self.open_prompt(PromptKind::GameOver),
            (PromptKind::GameOver, _) => {
                info!(
                    "game over on depth {}: {}",
                    self.session.level.depth,
                    self.session.player.death.as_deref().unwrap_or("died")
                );
                self.terminate();
            }
            (PromptKind::Victory, _) => {
                info!("victory after {} turns", self.session.turns);
                self.terminate();
            }
        }
    }
}
