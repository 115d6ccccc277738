//! Physics tuning
//!
//! Defaults reproduce the shipped feel. Hosts may override any subset of
//! fields from JSON; missing fields keep their defaults.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Physics constants and world bounds used by the simulation step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration added to vy every tick
    pub gravity: f32,
    /// Horizontal speed while a direction is held
    pub move_speed: f32,
    /// Magnitude of the upward velocity set by a jump
    pub jump_force: f32,
    /// Horizontal extent the player is clamped to
    pub world_width: f32,
    /// Falling past this y respawns the player
    pub world_height: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            move_speed: MOVE_SPEED,
            jump_force: JUMP_FORCE,
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
        }
    }
}

impl Tuning {
    /// Parse tuning overrides from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
