//! Fixed timestep simulation tick
//!
//! One call advances the session by one frame, in this order:
//! physics → level update (coins) → scroll/progression → phase evaluation.
//! Intents are applied as they arrive via `Session::apply_intent`.

use super::physics;
use super::scroll;
use super::state::{GameEvent, Session};

/// Advance the session by one fixed timestep
pub fn tick(session: &mut Session) {
    // GameOver and Won freeze the world until a restart
    if session.phase.is_terminal() {
        return;
    }

    session.time_ticks += 1;

    let handle = session.player.level.index();
    debug_assert_eq!(handle, session.current_level);
    let level = &mut session.levels[handle];
    let player = &mut session.player;

    if let Some(kind) = physics::update_player(player, level) {
        session.events.push(GameEvent::HazardHit {
            kind,
            life: player.life,
        });
    }

    let count = level.update(player);
    if count > 0 {
        session.events.push(GameEvent::CoinCollected {
            count,
            score: player.score,
        });
    }

    scroll::update(session);
    session.evaluate_phase();
}
