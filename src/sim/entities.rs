//! Entity records: player, platforms, coins and hazards

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// Non-owning handle to a level in the session's level list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct LevelHandle(pub usize);

impl LevelHandle {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Decoded player commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    Left,
    Right,
    Stop,
    Jump,
    /// Left key released: stop only if still walking left
    StopLeft,
    /// Right key released: stop only if still walking right
    StopRight,
}

/// The player-controlled sprite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    /// (change_x, change_y) in pixels per tick
    pub vel: Vec2,
    pub score: u32,
    pub life: u8,
    /// Level the player is colliding against (reassigned on level advance)
    pub level: LevelHandle,
}

impl Player {
    /// New player standing on the floor at the spawn column
    pub fn new(level: LevelHandle) -> Self {
        Self {
            rect: Rect::new(
                PLAYER_SPAWN_X,
                SCREEN_HEIGHT - PLAYER_HEIGHT,
                PLAYER_WIDTH,
                PLAYER_HEIGHT,
            ),
            vel: Vec2::ZERO,
            score: 0,
            life: MAX_LIFE,
            level,
        }
    }

    #[inline]
    pub fn change_x(&self) -> f32 {
        self.vel.x
    }

    #[inline]
    pub fn change_y(&self) -> f32 {
        self.vel.y
    }

    pub fn go_left(&mut self) {
        self.vel.x = -WALK_SPEED;
    }

    pub fn go_right(&mut self) {
        self.vel.x = WALK_SPEED;
    }

    pub fn stop(&mut self) {
        self.vel.x = 0.0;
    }

    /// Lose one life point (never below zero)
    pub fn take_damage(&mut self) {
        self.life = self.life.saturating_sub(1);
    }

    pub fn is_dead(&self) -> bool {
        self.life == 0
    }
}

/// A static platform the player can stand on
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Rect,
}

/// A collectible coin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coin {
    pub rect: Rect,
}

impl Coin {
    /// Coin hovering centered above a platform
    pub fn above(platform: &Rect) -> Self {
        let x = platform.x + (platform.width - COIN_SIZE) / 2;
        let y = platform.top() - COIN_HOVER - COIN_SIZE;
        Self {
            rect: Rect::new(x, y, COIN_SIZE, COIN_SIZE),
        }
    }
}

/// Hazard types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HazardKind {
    Lava,
    Spike,
}

/// Anything that costs life on contact
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hazard {
    pub kind: HazardKind,
    pub rect: Rect,
}

impl Hazard {
    /// Spike sitting on the right end of a platform's top
    pub fn spike_on(platform: &Rect) -> Self {
        let width = SPIKE_WIDTH.min(platform.width);
        Self {
            kind: HazardKind::Spike,
            rect: Rect::new(
                platform.right() - width,
                platform.top() - SPIKE_HEIGHT,
                width,
                SPIKE_HEIGHT,
            ),
        }
    }
}
