//! Lettered item and spell lists.

use super::{Game, Scene};
use crate::config::{BOOK_SIZE, INV_SIZE};
use crate::game::{GameSession, Item};
use crate::input::Key;
use crate::rendering::Renderer;

/// What picking an item from the list does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Purpose {
    PickUp,
    Drop,
    Use,
}

impl Purpose {
    pub fn title(self) -> &'static str {
        match self {
            Purpose::PickUp => "Select an item to pick up, ESC to exit",
            Purpose::Drop => "Select an item to drop, ESC to exit",
            Purpose::Use => "Select an item to use, ESC to exit",
        }
    }
}

/// An open item list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemSelection {
    pub purpose: Purpose,
}

impl ItemSelection {
    /// The entries on offer, one page at most.
    pub fn items<'a>(&self, session: &'a GameSession) -> &'a [Item] {
        let items: &[Item] = match self.purpose {
            Purpose::PickUp => session
                .level
                .tile_at(session.player.pos)
                .map(|tile| tile.items.as_slice())
                .unwrap_or(&[]),
            Purpose::Drop | Purpose::Use => &session.player.items,
        };
        &items[..items.len().min(INV_SIZE)]
    }
}

/// Maps a key to a list entry: letters within the list only.
fn choose(key: Key, len: usize) -> Option<usize> {
    key.letter_index().filter(|&i| i < len)
}

impl<R: Renderer> Game<R> {
    /// Opens an item list, or does nothing when there is nothing to list.
    pub(super) fn open_item_selection(&mut self, purpose: Purpose) {
        let selection = ItemSelection { purpose };
        if selection.items(&self.session).is_empty() {
            return;
        }
        self.push_scene(Scene::ItemSelection(selection));
    }

    pub(super) fn item_selection_key(&mut self, selection: ItemSelection, key: Key) {
        if key == Key::Escape {
            self.render_top();
            return;
        }
        let Some(index) = choose(key, selection.items(&self.session).len()) else {
            self.scenes.push(Scene::ItemSelection(selection));
            return;
        };

        let session = &mut self.session;
        let stay_open = match selection.purpose {
            Purpose::PickUp => {
                session
                    .player
                    .pick_up(&mut session.level, index, &mut session.messages);
                session.player.action_points > 0 && !selection.items(session).is_empty()
            }
            Purpose::Drop => {
                session
                    .player
                    .drop(&mut session.level, index, &mut session.messages);
                false
            }
            Purpose::Use => {
                session.player.use_item(index, &mut session.messages);
                false
            }
        };
        if stay_open {
            self.scenes.push(Scene::ItemSelection(selection));
        }
        self.render_top();
    }

    pub(super) fn spell_selection_key(&mut self, key: Key) {
        if key == Key::Escape {
            self.render_top();
            return;
        }
        let spells = &self.session.player.spells;
        let Some(index) = choose(key, spells.len().min(BOOK_SIZE)) else {
            self.scenes.push(Scene::SpellSelection);
            return;
        };
        let spell = spells[index];
        let session = &mut self.session;
        session.player.use_spell(
            spell,
            &mut session.level,
            &mut session.messages,
            &mut session.rng,
        );
        self.render_top();
    }
}
