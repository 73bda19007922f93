//! # Scene Management System
//!
//! The turn loop and its modal screens.
//!
//! Modal screens (prompts, item and spell selection, look mode, the debug
//! console) live on a stack. The top scene owns every key until it exits;
//! with an empty stack keys go to the command dispatcher. Whenever the stack
//! is empty after a key the loop settles: exhausted action points advance the
//! world one turn, the frame is redrawn and death or victory push their
//! prompts.

mod console;
mod dispatch;
mod look;
mod prompt;
mod select;

pub use look::LookMode;
pub use prompt::PromptKind;
pub use select::{ItemSelection, Purpose};

use crate::config::BOOK_SIZE;
use crate::debug::DebugParser;
use crate::game::GameSession;
use crate::input::{InputSource, Key};
use crate::rendering::{Overlay, Renderer};
use log::{debug, info};

/// Whether the loop keeps running after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Terminated,
}

/// Where the turn cycle currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopPhase {
    AwaitingPlayerInput,
    ResolvingPlayerAction,
    AdvancingWorld,
    CheckingTerminalConditions,
    Terminated,
}

/// A modal screen on the scene stack.
#[derive(Debug, Clone)]
pub enum Scene {
    Prompt(PromptKind),
    ItemSelection(ItemSelection),
    SpellSelection,
    Look(LookMode),
    Console(DebugParser),
}

/// The turn loop: session, renderer and scene stack.
pub struct Game<R: Renderer> {
    pub session: GameSession,
    pub renderer: R,
    scenes: Vec<Scene>,
    phase: LoopPhase,
}

impl<R: Renderer> Game<R> {
    pub fn new(session: GameSession, renderer: R) -> Self {
        Self {
            session,
            renderer,
            scenes: Vec::new(),
            phase: LoopPhase::AwaitingPlayerInput,
        }
    }

    pub fn phase(&self) -> LoopPhase {
        self.phase
    }

    pub fn is_terminated(&self) -> bool {
        self.phase == LoopPhase::Terminated
    }

    /// The scene currently receiving keys, if any.
    pub fn top_scene(&self) -> Option<&Scene> {
        self.scenes.last()
    }

    pub fn scene_depth(&self) -> usize {
        self.scenes.len()
    }

    /// Draws the first frame and checks whether the game is already over.
    pub fn start(&mut self) {
        self.render_top();
        self.check_terminal();
    }

    /// Feeds keys from `input` until the game terminates or input runs out,
    /// then tears the renderer down.
    pub fn run(&mut self, input: &mut impl InputSource) -> Flow {
        self.start();
        let mut flow = Flow::Continue;
        while flow == Flow::Continue {
            match input.read_key() {
                Some(key) => flow = self.handle_key(key),
                None => break,
            }
        }
        self.renderer.teardown();
        info!(
            "loop ended after {} turns on depth {}",
            self.session.turns, self.session.level.depth
        );
        flow
    }

    /// Processes one key.
    pub fn handle_key(&mut self, key: Key) -> Flow {
        if self.is_terminated() {
            return Flow::Terminated;
        }
        match self.scenes.pop() {
            Some(scene) => self.handle_scene_key(scene, key),
            None => {
                self.enter_phase(LoopPhase::ResolvingPlayerAction);
                self.dispatch(key);
            }
        }
        if self.is_terminated() {
            return Flow::Terminated;
        }
        if self.scenes.is_empty() {
            self.settle();
        }
        if self.is_terminated() {
            Flow::Terminated
        } else {
            Flow::Continue
        }
    }

    fn handle_scene_key(&mut self, scene: Scene, key: Key) {
        match scene {
            Scene::Prompt(kind) => self.prompt_key(kind, key),
            Scene::ItemSelection(selection) => self.item_selection_key(selection, key),
            Scene::SpellSelection => self.spell_selection_key(key),
            Scene::Look(look) => self.look_key(look, key),
            Scene::Console(parser) => self.console_key(parser, key),
        }
    }

    /// Runs the world once the player is out of action points.
    fn settle(&mut self) {
        if self.session.player.action_points > 0 {
            self.enter_phase(LoopPhase::AwaitingPlayerInput);
            return;
        }
        self.enter_phase(LoopPhase::AdvancingWorld);
        self.session.advance_world();
        self.render_top();
        self.check_terminal();
    }

    /// Pushes the prompt for death or victory, if either happened.
    fn check_terminal(&mut self) {
        self.enter_phase(LoopPhase::CheckingTerminalConditions);
        if self.session.is_dead() {
            let kind = if self.session.wizard {
                PromptKind::Resurrect
            } else {
                PromptKind::GameOver
            };
            self.open_prompt(kind);
        } else if self.session.has_won() {
            self.open_prompt(PromptKind::Victory);
        } else {
            self.enter_phase(LoopPhase::AwaitingPlayerInput);
        }
    }

    fn terminate(&mut self) {
        self.enter_phase(LoopPhase::Terminated);
        self.scenes.clear();
    }

    fn enter_phase(&mut self, phase: LoopPhase) {
        if self.phase != phase {
            debug!("loop phase {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
        }
    }

    /// Pushes a scene and draws it.
    fn push_scene(&mut self, scene: Scene) {
        debug!("entering scene {}", scene_name(&scene));
        self.scenes.push(scene);
        self.render_top();
    }

    /// Draws whatever is on top of the stack, the map screen if nothing is.
    fn render_top(&mut self) {
        let session = &mut self.session;
        match self.scenes.last() {
            None | Some(Scene::Prompt(_)) => self.renderer.render(session, Overlay::None),
            Some(Scene::ItemSelection(selection)) => {
                let items = selection.items(session);
                self.renderer.render(
                    session,
                    Overlay::ItemList {
                        title: selection.purpose.title(),
                        items,
                        special: selection.purpose == Purpose::Use,
                    },
                );
            }
            Some(Scene::SpellSelection) => {
                let spells = &session.player.spells;
                self.renderer.render(
                    session,
                    Overlay::SpellList {
                        title: "Select a spell to cast, ESC to exit",
                        spells: &spells[..spells.len().min(BOOK_SIZE)],
                    },
                );
            }
            Some(Scene::Look(look)) => {
                let cursor = look.cursor;
                look::describe_tile(session, cursor);
                self.renderer.render(session, Overlay::Look { cursor });
                session.messages.pop_latest();
            }
            Some(Scene::Console(parser)) => self.renderer.render(session, Overlay::Console(parser)),
        }
    }
}

fn scene_name(scene: &Scene) -> &'static str {
    match scene {
        Scene::Prompt(_) => "prompt",
        Scene::ItemSelection(_) => "item selection",
        Scene::SpellSelection => "spell selection",
        Scene::Look(_) => "look mode",
        Scene::Console(_) => "debug console",
    }
}
