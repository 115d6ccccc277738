//! Dorm Runner - A single-screen platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, patrol, respawn)
//! - `renderer`: WebGPU rendering pipeline
//! - `input`: Keyboard code to action mapping
//! - `tuning`: Data-driven physics constants

pub mod input;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Instructional text shown above the level
pub const HUD_TEXT: &str =
    "Reach the right side. Avoid the zombie. Falling or touching zombie respawns you.";

/// Game configuration constants
pub mod consts {
    /// Downward acceleration (pixels/tick²)
    pub const GRAVITY: f32 = 0.8;
    /// Horizontal walk speed (pixels/tick)
    pub const MOVE_SPEED: f32 = 2.5;
    /// Upward velocity applied on jump (pixels/tick)
    pub const JUMP_FORCE: f32 = 14.0;

    /// World dimensions (matches the canvas)
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 450.0;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 32.0;
    pub const PLAYER_HEIGHT: f32 = 44.0;
    pub const PLAYER_SPAWN_X: f32 = 60.0;
    pub const PLAYER_SPAWN_Y: f32 = 300.0;

    /// Zombie defaults
    pub const ENEMY_WIDTH: f32 = 28.0;
    pub const ENEMY_HEIGHT: f32 = 40.0;
    pub const ENEMY_SPEED: f32 = 1.5;
}
