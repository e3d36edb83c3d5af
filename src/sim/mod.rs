//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (layout order for platforms, coins and spikes)
//! - No rendering or platform dependencies

pub mod entities;
pub mod layout;
pub mod level;
pub mod physics;
pub mod rect;
pub mod scroll;
pub mod state;
pub mod tick;

pub use entities::{Coin, Hazard, HazardKind, Intent, LevelHandle, Platform, Player};
pub use layout::{LavaStrip, LevelLayout, PlatformRecord, ScatterRule, builtin_levels};
pub use level::Level;
pub use rect::{Rect, overlaps};
pub use state::{Command, Control, GameEvent, GamePhase, Session};
pub use tick::tick;
