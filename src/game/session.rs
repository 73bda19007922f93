//! # Game Session
//!
//! The explicit context of one playthrough: everything the turn loop, the
//! command handlers and the modal screens read and mutate.

use crate::config::{MAX_DLEVEL, SIGHT_RADIUS};
use crate::game::{Level, MessageLog, Player, Position, TileKind};
use crate::generation::{GenerationConfig, Generator, RoomCorridorGenerator};
use crate::rendering::{LIGHT_GREEN, LIGHT_RED, PINK};
use crate::settings::GameSettings;
use crate::{TempleError, TempleResult};
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// How many times a level is regenerated before giving up.
const GENERATION_ATTEMPTS: u32 = 5;

/// State of one playthrough.
///
/// Created when the game starts and dropped when the loop terminates.
pub struct GameSession {
    pub player: Player,
    pub level: Level,
    /// World turns elapsed, including rest turns on the stairs
    pub turns: u64,
    pub wizard: bool,
    pub messages: MessageLog,
    pub rng: StdRng,
    generator: Box<dyn Generator<Level>>,
    generation: GenerationConfig,
}

impl GameSession {
    /// Starts a session on procedurally generated levels.
    pub fn new(settings: &GameSettings) -> TempleResult<Self> {
        let seed = settings.seed.unwrap_or_else(rand::random);
        Self::with_generator(
            settings,
            Box::new(RoomCorridorGenerator::new()),
            GenerationConfig::new(seed),
        )
    }

    /// Starts a session drawing its levels from `generator`.
    ///
    /// # Examples
    ///
    /// ```
    /// use troll_temple::{FixedLayouts, GameSession, GameSettings, GenerationConfig};
    ///
    /// let layouts = FixedLayouts::new(vec![vec!["#####", "#@.>#", "#####"]]);
    /// let session = GameSession::with_generator(
    ///     &GameSettings::default(),
    ///     Box::new(layouts),
    ///     GenerationConfig::for_testing(1),
    /// )
    /// .unwrap();
    /// assert_eq!(session.level.depth, 1);
    /// assert_eq!(session.turns, 0);
    /// assert_eq!(session.messages.len(), 1);
    /// ```
    pub fn with_generator(
        settings: &GameSettings,
        generator: Box<dyn Generator<Level>>,
        generation: GenerationConfig,
    ) -> TempleResult<Self> {
        settings.validate()?;
        let mut rng = StdRng::seed_from_u64(generation.seed);
        let (level, pos) = arrive(generator.as_ref(), &generation.at_depth(1), &mut rng)?;
        let mut session = Self {
            player: Player::new(settings.player_name.clone(), settings.class, pos),
            level,
            turns: 0,
            wizard: settings.wizard,
            messages: MessageLog::new(),
            rng,
            generator,
            generation,
        };
        session.refresh_visibility();
        session
            .messages
            .push("Welcome to Troll Temple!", session.player.class.color());
        info!(
            "session started: {} the {} (seed {}, wizard {})",
            session.player.name,
            session.player.class.name(),
            session.generation.seed,
            session.wizard
        );
        Ok(session)
    }

    /// Loads the level at `depth` and places the player on it.
    pub fn start_map(&mut self, depth: u32) -> TempleResult<()> {
        let config = self.generation.at_depth(depth);
        let (level, pos) = arrive(self.generator.as_ref(), &config, &mut self.rng)?;
        self.level = level;
        self.player.pos = pos;
        self.refresh_visibility();
        info!("entered depth {depth} at ({}, {})", pos.x, pos.y);
        Ok(())
    }

    /// Runs one world turn and hands the player fresh action points.
    pub fn advance_world(&mut self) {
        self.turns += 1;
        self.level.advance_one_turn(
            self.turns,
            &mut self.player,
            &mut self.messages,
            &mut self.rng,
        );
        self.player.replenish();
        self.refresh_visibility();
    }

    pub fn refresh_visibility(&mut self) {
        self.level.update_visibility(self.player.pos, SIGHT_RADIUS);
    }

    /// Rests on the stairs and goes one level deeper.
    ///
    /// Off the stairs this only logs a hint and consumes nothing.
    pub fn descend(&mut self) -> bool {
        let on_stairs = self
            .level
            .tile_at(self.player.pos)
            .is_some_and(|t| t.kind == TileKind::StairsDown);
        if !on_stairs {
            self.messages.message("Stand on a down stairway to descend.");
            return false;
        }

        self.player.heal(self.player.max_hp / 2);
        self.messages
            .push("You take a moment to rest, and recover your strength.", LIGHT_GREEN);
        self.turns += 1;
        match self.start_map(self.level.depth + 1) {
            Ok(()) => self.messages.message(
                "After a rare moment of peace, you descend deeper into the heart of the dungeon...",
            ),
            Err(e) => {
                warn!("could not load depth {}: {e}", self.level.depth + 1);
                self.messages.push("The stairs are blocked by rubble.", LIGHT_RED);
            }
        }
        self.player.spend_action();
        true
    }

    /// Wizard shortcut: next level without resting or spending actions.
    pub fn wizard_descend(&mut self) {
        if !self.wizard || self.level.depth >= MAX_DLEVEL {
            return;
        }
        if let Err(e) = self.start_map(self.level.depth + 1) {
            warn!("could not load depth {}: {e}", self.level.depth + 1);
            self.messages.message(format!("Level generation failed: {e}"));
        }
    }

    pub fn is_dead(&self) -> bool {
        self.player.death.is_some()
    }

    pub fn has_won(&self) -> bool {
        self.player.won
    }

    /// Undoes the player's death.
    pub fn resurrect(&mut self) {
        self.player.resurrect();
        self.messages.push("You are resurrected!", PINK);
        info!("player resurrected ({} deaths)", self.player.deaths);
    }
}

/// Generates a level and finds where the player lands on it.
fn arrive(
    generator: &dyn Generator<Level>,
    config: &GenerationConfig,
    rng: &mut StdRng,
) -> TempleResult<(Level, Position)> {
    let mut last_error = None;
    for attempt in 1..=GENERATION_ATTEMPTS {
        match generator.generate(config, rng) {
            Ok(level) => {
                let pos = level
                    .player_spawn
                    .or_else(|| level.random_empty_tile(rng))
                    .ok_or_else(|| {
                        TempleError::InvalidLevel(format!("no room for the player on depth {}", config.depth))
                    })?;
                return Ok((level, pos));
            }
            Err(e) => {
                warn!(
                    "{} attempt {attempt} failed on depth {}: {e}",
                    generator.generator_type(),
                    config.depth
                );
                last_error = Some(e);
            }
        }
    }
    Err(last_error.unwrap_or_else(|| {
        TempleError::GenerationFailed(format!("depth {} was never generated", config.depth))
    }))
}
