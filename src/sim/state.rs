//! Session state
//!
//! The session owns every level and the single player. Levels are built up
//! front in play order; restarting rebuilds all of them, so coins and spikes
//! are re-scattered from the continuing RNG stream.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entities::{Coin, Hazard, HazardKind, Intent, LevelHandle, Platform, Player};
use super::layout::LevelLayout;
use super::level::Level;
use super::physics;
use super::rect::Rect;
use crate::consts::WIN_SCORE;
use crate::error::SimError;
use crate::settings::Settings;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Life reached zero
    GameOver,
    /// Score reached the win threshold
    Won,
}

impl GamePhase {
    /// GameOver and Won freeze the simulation
    pub fn is_terminal(self) -> bool {
        !matches!(self, GamePhase::Playing)
    }
}

/// Things that happened during a tick, for audio/HUD hooks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    CoinCollected { count: u32, score: u32 },
    HazardHit { kind: HazardKind, life: u8 },
    LevelAdvanced { index: usize },
    Won,
    GameOver,
    Restarted,
}

/// Menu commands accepted on the game-over and win screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Restart,
    Quit,
}

/// What the driver loop should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Exit,
}

/// Complete game session
#[derive(Debug, Clone)]
pub struct Session {
    pub(crate) settings: Settings,
    /// Scatter RNG, kept across restarts
    pub(crate) rng: Pcg32,
    /// Levels in play order
    pub(crate) levels: Vec<Level>,
    /// Index of the level being played
    pub(crate) current_level: usize,
    pub(crate) player: Player,
    pub(crate) phase: GamePhase,
    /// Simulation tick counter (gameplay ticks only)
    pub(crate) time_ticks: u64,
    /// Events since the last drain
    pub(crate) events: Vec<GameEvent>,
}

impl Session {
    /// Build a session and all its levels
    pub fn new(settings: Settings) -> Result<Self, SimError> {
        settings.validate()?;
        let mut rng = Pcg32::seed_from_u64(settings.seed);
        let levels = build_levels(&settings.levels, &mut rng)?;
        log::info!(
            "New session: seed={}, levels={}",
            settings.seed,
            levels.len()
        );

        Ok(Self {
            settings,
            rng,
            levels,
            current_level: 0,
            player: Player::new(LevelHandle(0)),
            phase: GamePhase::Playing,
            time_ticks: 0,
            events: Vec::new(),
        })
    }

    /// Fresh player, first level, every level rebuilt
    pub fn restart(&mut self) -> Result<(), SimError> {
        self.levels = build_levels(&self.settings.levels, &mut self.rng)?;
        self.current_level = 0;
        self.player = Player::new(LevelHandle(0));
        self.phase = GamePhase::Playing;
        self.time_ticks = 0;
        self.events.push(GameEvent::Restarted);
        log::info!("Session restarted");
        Ok(())
    }

    /// Apply a player command immediately (ignored outside gameplay)
    pub fn apply_intent(&mut self, intent: Intent) {
        if self.phase.is_terminal() {
            return;
        }
        let level = &self.levels[self.player.level.index()];
        physics::apply_intent(&mut self.player, level, intent);
    }

    /// Advance one frame
    pub fn tick(&mut self) {
        super::tick::tick(self);
    }

    /// Handle a menu command
    ///
    /// Only the game-over and win screens take commands; during play they are
    /// dropped.
    pub fn handle_command(&mut self, command: Command) -> Result<Control, SimError> {
        if !self.phase.is_terminal() {
            log::debug!("Ignoring {:?} while playing", command);
            return Ok(Control::Continue);
        }
        match command {
            Command::Restart => {
                self.restart()?;
                Ok(Control::Continue)
            }
            Command::Quit => {
                log::info!("Quit requested");
                Ok(Control::Exit)
            }
        }
    }

    /// Move to GameOver/Won once a threshold is crossed
    pub(crate) fn evaluate_phase(&mut self) {
        if self.phase.is_terminal() {
            return;
        }
        if self.player.is_dead() {
            self.phase = GamePhase::GameOver;
            self.events.push(GameEvent::GameOver);
            log::info!("Game over at tick {}, score {}", self.time_ticks, self.player.score);
        } else if self.player.score >= WIN_SCORE {
            self.phase = GamePhase::Won;
            self.events.push(GameEvent::Won);
            log::info!("Won at tick {}, life {}", self.time_ticks, self.player.life);
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_rect(&self) -> Rect {
        self.player.rect
    }

    pub fn score(&self) -> u32 {
        self.player.score
    }

    pub fn life(&self) -> u8 {
        self.player.life
    }

    pub fn level_index(&self) -> usize {
        self.current_level
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    pub fn current_level(&self) -> &Level {
        &self.levels[self.current_level]
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.current_level().platforms
    }

    pub fn coins(&self) -> &[Coin] {
        &self.current_level().coins
    }

    /// Lava followed by spikes
    pub fn hazards(&self) -> impl Iterator<Item = &Hazard> {
        self.current_level().hazards()
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Take all events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

fn build_levels(layouts: &[LevelLayout], rng: &mut Pcg32) -> Result<Vec<Level>, SimError> {
    layouts
        .iter()
        .enumerate()
        .map(|(i, layout)| Level::new(i, layout, &mut *rng))
        .collect()
}
