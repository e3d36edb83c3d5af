//! Level container
//!
//! A level owns its platforms, coins, spikes and lava. Platform and hazard
//! membership is fixed at construction; only coins disappear over time.
//! Scrolling is done by sliding every owned rect by the same offset.

use glam::IVec2;
use rand::Rng;
use rand::seq::index;
use serde::{Deserialize, Serialize};

use super::entities::{Coin, Hazard, HazardKind, Platform, Player};
use super::layout::{LevelLayout, ScatterRule};
use super::rect::{Rect, overlaps};
use crate::consts::MAX_SCATTER;
use crate::error::SimError;

/// One playable stage
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    pub platforms: Vec<Platform>,
    pub coins: Vec<Coin>,
    pub spikes: Vec<Hazard>,
    pub lava: Hazard,
    /// Cumulative horizontal offset applied so far
    pub world_shift: i32,
    pub level_limit: i32,
}

impl Level {
    /// Build a level from its layout table, scattering coins and spikes with `rng`
    ///
    /// `index` is only used for error reporting and logs.
    pub fn new<R: Rng + ?Sized>(
        index: usize,
        layout: &LevelLayout,
        rng: &mut R,
    ) -> Result<Self, SimError> {
        layout.validate(index)?;

        let platforms: Vec<Platform> = layout
            .platforms
            .iter()
            .map(|rec| Platform { rect: rec.rect() })
            .collect();

        let coins = scatter(layout.coins, platforms.len(), rng)
            .into_iter()
            .map(|i| Coin::above(&platforms[i].rect))
            .collect::<Vec<_>>();
        let spikes = scatter(layout.spikes, platforms.len(), rng)
            .into_iter()
            .map(|i| Hazard::spike_on(&platforms[i].rect))
            .collect::<Vec<_>>();

        log::info!(
            "Level {}: platforms={}, coins={}, spikes={}, limit={}",
            index,
            platforms.len(),
            coins.len(),
            spikes.len(),
            layout.level_limit
        );

        Ok(Self {
            platforms,
            coins,
            spikes,
            lava: Hazard {
                kind: HazardKind::Lava,
                rect: layout.lava.rect(),
            },
            world_shift: 0,
            level_limit: layout.level_limit,
        })
    }

    /// Per-tick level update; returns the number of coins picked up
    ///
    /// Platforms, spikes and lava are static. Every coin touching the player
    /// this tick is removed and scored.
    pub fn update(&mut self, player: &mut Player) -> u32 {
        let before = self.coins.len();
        self.coins.retain(|coin| !overlaps(&coin.rect, &player.rect));
        let collected = (before - self.coins.len()) as u32;
        if collected > 0 {
            player.score += collected;
            log::debug!("Collected {} coin(s), score {}", collected, player.score);
        }
        collected
    }

    /// Slide the whole level horizontally
    pub fn shift_world(&mut self, shift_x: i32) {
        self.world_shift += shift_x;
        let offset = IVec2::new(shift_x, 0);

        for platform in &mut self.platforms {
            platform.rect.translate(offset);
        }
        for coin in &mut self.coins {
            coin.rect.translate(offset);
        }
        for spike in &mut self.spikes {
            spike.rect.translate(offset);
        }
        self.lava.rect.translate(offset);
    }

    /// Platforms currently overlapping `rect`, in enumeration order
    pub fn platform_hits<'a>(&'a self, rect: &'a Rect) -> impl Iterator<Item = Rect> + 'a {
        self.platforms
            .iter()
            .map(|p| p.rect)
            .filter(move |p| overlaps(p, rect))
    }

    /// All hazards, lava first
    pub fn hazards(&self) -> impl Iterator<Item = &Hazard> {
        std::iter::once(&self.lava).chain(self.spikes.iter())
    }

    /// First hazard touching `rect`, if any
    pub fn hazard_hit(&self, rect: &Rect) -> Option<HazardKind> {
        self.hazards()
            .find(|h| overlaps(&h.rect, rect))
            .map(|h| h.kind)
    }
}

/// Pick the platform indices that receive a scattered entity
fn scatter<R: Rng + ?Sized>(rule: ScatterRule, platform_count: usize, rng: &mut R) -> Vec<usize> {
    match rule {
        ScatterRule::None => Vec::new(),
        ScatterRule::Random => {
            let max = platform_count.min(MAX_SCATTER);
            let count = rng.random_range(1..=max);
            index::sample(rng, platform_count, count).into_vec()
        }
    }
}
