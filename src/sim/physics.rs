//! Player physics and collision resolution
//!
//! The player moves one axis at a time and is pushed back out of any platform
//! it ends up inside. The order matters:
//! 1. gravity (with the floor acting as an implicit ground collider)
//! 2. horizontal move, then resolve against platforms
//! 3. vertical move, then resolve against platforms
//! 4. hazard contact
//!
//! Resolving each axis right after moving along it keeps a fast-falling player
//! from being pushed sideways through a platform edge.

use super::entities::{HazardKind, Intent, Player};
use super::level::Level;
use super::rect::Rect;
use crate::consts::*;

/// Advance the player by one tick against `level`
///
/// Returns the hazard touched this tick, if any.
pub fn update_player(player: &mut Player, level: &Level) -> Option<HazardKind> {
    apply_gravity(player);
    move_horizontal(player, level);
    move_vertical(player, level);
    check_hazards(player, level)
}

/// Gravity step, including the ground clamp
pub fn apply_gravity(player: &mut Player) {
    if player.vel.y == 0.0 {
        player.vel.y = FALL_START;
    } else {
        player.vel.y += GRAVITY;
    }

    if on_floor(&player.rect) && player.vel.y >= 0.0 {
        player.vel.y = 0.0;
        player.rect.set_bottom(SCREEN_HEIGHT);
    }
}

/// Move along x and clamp against every platform now overlapped
///
/// Overlaps are applied in platform order, so with several hits the last one wins.
pub fn move_horizontal(player: &mut Player, level: &Level) {
    let dx = player.vel.x;
    player.rect.x = step(player.rect.x, dx);

    let hits: Vec<Rect> = level.platform_hits(&player.rect).collect();
    for block in hits {
        if dx > 0.0 {
            player.rect.set_right(block.left());
        } else if dx < 0.0 {
            player.rect.set_left(block.right());
        }
    }
}

/// Move along y and clamp against the platforms now overlapped
///
/// Any vertical contact (landing or hitting a ceiling) stops vertical motion,
/// so only the first platform in layout order clamps.
pub fn move_vertical(player: &mut Player, level: &Level) {
    player.rect.y = step(player.rect.y, player.vel.y);

    let hits: Vec<Rect> = level.platform_hits(&player.rect).collect();
    for block in hits {
        if player.vel.y > 0.0 {
            player.rect.set_bottom(block.top());
        } else if player.vel.y < 0.0 {
            player.rect.set_top(block.bottom());
        }
        player.vel.y = 0.0;
    }
}

/// Damage and drop the player back in from the top on hazard contact
///
/// Fires on every tick of contact, so standing in lava keeps draining life.
pub fn check_hazards(player: &mut Player, level: &Level) -> Option<HazardKind> {
    let kind = level.hazard_hit(&player.rect)?;
    player.take_damage();
    player.rect.set_top(0);
    log::debug!("Hit {:?}, life {}", kind, player.life);
    Some(kind)
}

/// Jump if standing on a platform or the floor
///
/// Looks two pixels below the player instead of keeping a grounded flag.
/// Returns false when the jump was refused (mid-air).
pub fn try_jump(player: &mut Player, level: &Level) -> bool {
    player.rect.y += GROUND_CHECK_DEPTH;
    let standing = level.platform_hits(&player.rect).next().is_some();
    player.rect.y -= GROUND_CHECK_DEPTH;

    if standing || on_floor(&player.rect) {
        player.vel.y = JUMP_IMPULSE;
        true
    } else {
        log::trace!("Jump refused: airborne");
        false
    }
}

/// Apply a decoded command immediately
pub fn apply_intent(player: &mut Player, level: &Level, intent: Intent) {
    match intent {
        Intent::Left => player.go_left(),
        Intent::Right => player.go_right(),
        Intent::Stop => player.stop(),
        Intent::Jump => {
            try_jump(player, level);
        }
        Intent::StopLeft => {
            if player.vel.x < 0.0 {
                player.stop();
            }
        }
        Intent::StopRight => {
            if player.vel.x > 0.0 {
                player.stop();
            }
        }
    }
}

/// New pixel coordinate after moving `delta`; the sum is truncated, not the delta
#[inline]
fn step(pos: i32, delta: f32) -> i32 {
    (pos as f32 + delta) as i32
}

#[inline]
fn on_floor(rect: &Rect) -> bool {
    rect.bottom() >= SCREEN_HEIGHT
}
