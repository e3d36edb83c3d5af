//! Scroll Platformer - simulation core for a 2D side-scrolling platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, levels, session state)
//! - `settings`: Level tables and RNG seed
//! - `error`: Construction/configuration errors

pub mod error;
pub mod settings;
pub mod sim;

pub use error::SimError;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate
    pub const TICK_HZ: u32 = 60;
    pub const SIM_DT: f32 = 1.0 / TICK_HZ as f32;

    /// Screen dimensions (the floor line is the bottom of the screen)
    pub const SCREEN_WIDTH: i32 = 800;
    pub const SCREEN_HEIGHT: i32 = 600;

    /// Player sprite size
    pub const PLAYER_WIDTH: i32 = 40;
    pub const PLAYER_HEIGHT: i32 = 40;
    /// Spawn x at session start
    pub const PLAYER_SPAWN_X: i32 = 340;

    /// Horizontal walk speed (pixels per tick)
    pub const WALK_SPEED: f32 = 6.0;
    /// Fall-start impulse applied when vertical velocity is exactly zero
    pub const FALL_START: f32 = 1.0;
    /// Gravity (pixels per tick²)
    pub const GRAVITY: f32 = 0.35;
    /// Upward impulse on a successful jump
    pub const JUMP_IMPULSE: f32 = -10.0;
    /// How far below the player the grounded check looks
    pub const GROUND_CHECK_DEPTH: i32 = 2;

    /// Scroll band: the world slides once the player crosses these screen x values
    pub const SCROLL_RIGHT_EDGE: i32 = 500;
    pub const SCROLL_LEFT_EDGE: i32 = 120;

    /// Player vitals
    pub const MAX_LIFE: u8 = 6;
    pub const WIN_SCORE: u32 = 6;

    /// Scatter never picks more than this many platforms per level
    pub const MAX_SCATTER: usize = 4;

    /// Collectible and hazard sprite sizes
    pub const COIN_SIZE: i32 = 20;
    /// Gap between a coin's bottom and its platform's top
    pub const COIN_HOVER: i32 = 10;
    pub const SPIKE_WIDTH: i32 = 30;
    pub const SPIKE_HEIGHT: i32 = 20;
}
