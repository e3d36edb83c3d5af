//! World scrolling and level progression
//!
//! The player stays inside a screen-space band [120, 500]; pushing past either
//! edge slides the level instead. Once the player has travelled past the
//! level's limit the session moves on to the next level.

use super::entities::{LevelHandle, Player};
use super::level::Level;
use super::state::{GameEvent, Session};
use crate::consts::{SCROLL_LEFT_EDGE, SCROLL_RIGHT_EDGE};

/// Keep the player inside the scroll band by shifting the level
pub fn scroll_world(player: &mut Player, level: &mut Level) {
    if player.rect.right() >= SCROLL_RIGHT_EDGE {
        let diff = player.rect.right() - SCROLL_RIGHT_EDGE;
        player.rect.set_right(SCROLL_RIGHT_EDGE);
        level.shift_world(-diff);
    }

    if player.rect.left() <= SCROLL_LEFT_EDGE {
        let diff = SCROLL_LEFT_EDGE - player.rect.left();
        player.rect.set_left(SCROLL_LEFT_EDGE);
        level.shift_world(diff);
    }
}

/// Player x combined with the level's accumulated shift
pub fn current_position(player: &Player, level: &Level) -> i32 {
    player.rect.x + level.world_shift
}

pub fn level_complete(player: &Player, level: &Level) -> bool {
    current_position(player, level) < level.level_limit
}

/// Scroll the current level and advance to the next one when it is complete
///
/// Returns the new level index if the session advanced. On the final level the
/// player is only moved back to the restart margin.
pub fn update(session: &mut Session) -> Option<usize> {
    let index = session.current_level;
    let level = &mut session.levels[index];
    let player = &mut session.player;

    scroll_world(player, level);

    if !level_complete(player, level) {
        return None;
    }

    player.rect.set_left(session.settings.restart_margin);
    if index + 1 >= session.levels.len() {
        return None;
    }

    let next = index + 1;
    session.current_level = next;
    player.level = LevelHandle(next);
    session.events.push(GameEvent::LevelAdvanced { index: next });
    log::info!("Advanced to level {}", next);
    Some(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::layout::{LavaStrip, LevelLayout, PlatformRecord, ScatterRule};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn flat_layout() -> LevelLayout {
        LevelLayout {
            platforms: vec![PlatformRecord::new(100, 20, 5000, 100)],
            level_limit: -2000,
            coins: ScatterRule::None,
            spikes: ScatterRule::None,
            lava: LavaStrip {
                x: 20_000,
                width: 100,
                height: 20,
            },
        }
    }

    fn session(levels: usize) -> Session {
        let settings = Settings {
            levels: vec![flat_layout(); levels],
            ..Settings::default()
        };
        Session::new(settings).unwrap()
    }

    #[test]
    fn test_right_edge_scroll() {
        let mut level = Level::new(0, &flat_layout(), &mut Pcg32::seed_from_u64(0)).unwrap();
        let mut player = Player::new(LevelHandle(0));
        player.rect.set_right(506);

        scroll_world(&mut player, &mut level);
        assert_eq!(player.rect.right(), 500);
        assert_eq!(level.world_shift, -6);
        assert_eq!(level.platforms[0].rect.x, 4994);
    }

    #[test]
    fn test_left_edge_scroll() {
        let mut level = Level::new(0, &flat_layout(), &mut Pcg32::seed_from_u64(0)).unwrap();
        let mut player = Player::new(LevelHandle(0));
        player.rect.set_left(114);

        scroll_world(&mut player, &mut level);
        assert_eq!(player.rect.left(), 120);
        assert_eq!(level.world_shift, 6);
    }

    #[test]
    fn test_inside_band_no_scroll() {
        let mut level = Level::new(0, &flat_layout(), &mut Pcg32::seed_from_u64(0)).unwrap();
        let mut player = Player::new(LevelHandle(0));
        scroll_world(&mut player, &mut level);
        assert_eq!(level.world_shift, 0);
        assert_eq!(player.rect.x, crate::consts::PLAYER_SPAWN_X);
    }

    #[test]
    fn test_level_advance() {
        let mut s = session(2);
        // 340 - 2400 = -2060
        s.levels[0].shift_world(-2400);
        assert_eq!(update(&mut s), Some(1));
        assert_eq!(s.current_level, 1);
        assert_eq!(s.player.level, LevelHandle(1));
        assert_eq!(s.player.rect.x, 120);
        assert_eq!(s.events, vec![GameEvent::LevelAdvanced { index: 1 }]);
    }

    #[test]
    fn test_not_past_limit() {
        let mut s = session(2);
        // 340 - 2300 = -1960, still short of -2000
        s.levels[0].shift_world(-2300);
        assert_eq!(update(&mut s), None);
        assert_eq!(s.current_level, 0);
    }

    #[test]
    fn test_final_level_does_not_wrap() {
        let mut s = session(1);
        s.levels[0].shift_world(-3000);
        assert_eq!(update(&mut s), None);
        assert_eq!(s.current_level, 0);
        assert_eq!(s.player.rect.x, 120);
    }

    proptest! {
        #[test]
        fn player_stays_in_scroll_band(x in -200i32..1000, y in 0i32..560) {
            let mut level = Level::new(0, &flat_layout(), &mut Pcg32::seed_from_u64(0)).unwrap();
            let mut player = Player::new(LevelHandle(0));
            player.rect.x = x;
            player.rect.y = y;
            let gap = level.platforms[0].rect.x - x;

            scroll_world(&mut player, &mut level);

            prop_assert!(player.rect.right() <= SCROLL_RIGHT_EDGE);
            prop_assert!(player.rect.left() >= SCROLL_LEFT_EDGE);
            // The world slides with the player, so relative geometry is unchanged
            prop_assert_eq!(level.platforms[0].rect.x - player.rect.x, gap);
        }
    }
}
