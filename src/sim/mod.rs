//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (velocities are per tick)
//! - Stable iteration order (platforms in level order)
//! - No rendering or platform dependencies

pub mod driver;
pub mod level;
pub mod rect;
pub mod state;
pub mod tick;

pub use driver::{Session, StopCondition, after_frames, never, run};
pub use level::{Level, LevelDef, LevelError, PlatformId, dorm};
pub use rect::{Rect, overlaps};
pub use state::{Enemy, GameEvent, GameState, InputState, Player, RespawnCause};
pub use tick::{check_enemy_contact, move_player, step_enemy, step_player, tick};
