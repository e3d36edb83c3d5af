//! Static level tables
//!
//! Every level is the same `Level` type built from one of these tables; the
//! differences between stages are data, not code.

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::SCREEN_HEIGHT;
use crate::error::SimError;

/// One platform row: (width, height, x, y)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformRecord {
    pub width: i32,
    pub height: i32,
    pub x: i32,
    pub y: i32,
}

impl PlatformRecord {
    pub const fn new(width: i32, height: i32, x: i32, y: i32) -> Self {
        Self {
            width,
            height,
            x,
            y,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

impl From<[i32; 4]> for PlatformRecord {
    fn from([width, height, x, y]: [i32; 4]) -> Self {
        Self::new(width, height, x, y)
    }
}

/// How many platforms receive a coin or spike
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScatterRule {
    /// Nothing is scattered
    None,
    /// Uniform count in [1, min(4, platform_count)], distinct platforms
    #[default]
    Random,
}

/// Lava pool resting on the floor line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LavaStrip {
    pub x: i32,
    pub width: i32,
    pub height: i32,
}

impl LavaStrip {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, SCREEN_HEIGHT - self.height, self.width, self.height)
    }
}

/// Full description of one stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelLayout {
    pub platforms: Vec<PlatformRecord>,
    /// Shifted-world x below which the level counts as traversed
    pub level_limit: i32,
    #[serde(default)]
    pub coins: ScatterRule,
    #[serde(default = "no_scatter")]
    pub spikes: ScatterRule,
    pub lava: LavaStrip,
}

impl LevelLayout {
    /// Check that this layout can be built as level `index`
    pub fn validate(&self, index: usize) -> Result<(), SimError> {
        if self.platforms.is_empty() {
            return Err(SimError::EmptyLayout { level: index });
        }
        let extents = self
            .platforms
            .iter()
            .map(|p| (p.width, p.height))
            .chain(std::iter::once((self.lava.width, self.lava.height)));
        for (width, height) in extents {
            if width < 0 || height < 0 {
                return Err(SimError::InvalidExtent {
                    level: index,
                    width,
                    height,
                });
            }
        }
        Ok(())
    }
}

fn no_scatter() -> ScatterRule {
    ScatterRule::None
}

fn records(rows: &[[i32; 4]]) -> Vec<PlatformRecord> {
    rows.iter().copied().map(PlatformRecord::from).collect()
}

/// Built-in stages in play order
pub fn builtin_levels() -> Vec<LevelLayout> {
    vec![
        LevelLayout {
            platforms: records(&[
                [210, 70, 500, 500],
                [210, 70, 800, 400],
                [210, 70, 1100, 300],
                [210, 70, 1360, 380],
                [210, 70, 1600, 250],
                [210, 70, 1900, 350],
            ]),
            level_limit: -2000,
            coins: ScatterRule::Random,
            spikes: ScatterRule::None,
            lava: LavaStrip {
                x: 1100,
                width: 1200,
                height: 20,
            },
        },
        LevelLayout {
            platforms: records(&[
                [210, 30, 450, 570],
                [210, 30, 720, 460],
                [210, 30, 900, 520],
                [210, 30, 1100, 280],
            ]),
            level_limit: -2000,
            coins: ScatterRule::Random,
            spikes: ScatterRule::Random,
            lava: LavaStrip {
                x: 1350,
                width: 1000,
                height: 20,
            },
        },
        LevelLayout {
            platforms: records(&[
                [180, 40, 450, 520],
                [180, 40, 700, 430],
                [180, 40, 950, 340],
                [180, 40, 1200, 420],
                [180, 40, 1450, 330],
                [180, 40, 1700, 250],
                [180, 40, 1950, 360],
                [180, 40, 2200, 470],
                [180, 40, 2450, 540],
            ]),
            level_limit: -2400,
            coins: ScatterRule::Random,
            spikes: ScatterRule::Random,
            lava: LavaStrip {
                x: 900,
                width: 1700,
                height: 20,
            },
        },
    ]
}
