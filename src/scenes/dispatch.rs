//! Command dispatch on the map screen.

use super::{Game, LookMode, PromptKind, Purpose, Scene};
use crate::debug::{DebugParser, DEBUG_COMMANDS};
use crate::input::{decode_key, Command, Key};
use crate::rendering::Renderer;
use log::debug;

impl<R: Renderer> Game<R> {
    /// Decodes `key` and runs its command. Unbound keys do nothing at all.
    pub(super) fn dispatch(&mut self, key: Key) {
        let Some(command) = decode_key(key) else {
            return;
        };
        debug!("dispatching {command:?}");
        self.session.messages.new_ui_turn();
        let depth = self.scenes.len();
        self.run_command(command);
        if self.scenes.len() == depth && !self.is_terminated() {
            self.render_top();
        }
    }

    fn run_command(&mut self, command: Command) {
        let session = &mut self.session;
        match command {
            Command::Walk(direction) => {
                let delta = direction.to_delta();
                session.player.attempt_move(
                    delta.x,
                    delta.y,
                    &mut session.level,
                    &mut session.messages,
                    &mut session.rng,
                );
                session.refresh_visibility();
            }
            Command::Wait => session.player.wait(),
            Command::Quit => self.open_prompt(PromptKind::ConfirmQuit),
            Command::Descend => {
                session.descend();
            }
            Command::PickUp => self.pick_up(),
            Command::Inventory => self.open_item_selection(Purpose::Use),
            Command::Drop => self.open_item_selection(Purpose::Drop),
            Command::Spellbook => self.open_spellbook(),
            Command::Look => {
                let look = LookMode::enter(session);
                self.push_scene(Scene::Look(look));
            }
            Command::WizardDescend => session.wizard_descend(),
            Command::Console => {
                if session.wizard {
                    self.push_scene(Scene::Console(DebugParser::new(DEBUG_COMMANDS)));
                }
            }
        }
    }

    fn pick_up(&mut self) {
        let session = &mut self.session;
        let count = session
            .level
            .tile_at(session.player.pos)
            .map_or(0, |tile| tile.items.len());
        match count {
            0 => session.messages.message("There is nothing here to pick up."),
            1 => {
                session
                    .player
                    .pick_up(&mut session.level, 0, &mut session.messages);
            }
            _ => self.open_item_selection(Purpose::PickUp),
        }
    }

    fn open_spellbook(&mut self) {
        let player = &self.session.player;
        if !player.has_spellbook {
            self.session.messages.message("You don't have a spellbook!");
        } else if !player.spells.is_empty() {
            self.push_scene(Scene::SpellSelection);
        }
    }
}
