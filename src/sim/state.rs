//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives in [`GameState`]; there is no
//! module-level mutable state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::level::{Level, LevelError, PlatformId};
use super::rect::Rect;
use crate::consts::*;
use crate::tuning::Tuning;

/// Logical input for a single tick
///
/// A plain snapshot: the host copies it out of its key state before each
/// tick, so the step never observes a half-applied key event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

/// Why the player was sent back to spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RespawnCause {
    /// Top edge dropped below the bottom of the world
    FellOutOfWorld,
    /// Touched the zombie
    EnemyContact,
}

/// Something notable that happened during a tick, for the host to report
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Respawned { tick: u64, cause: RespawnCause },
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub vel: Vec2,
    pub on_ground: bool,
    /// Where respawn puts the player back
    pub spawn: Vec2,
}

impl Player {
    pub fn new(spawn: Vec2) -> Self {
        Self {
            pos: spawn,
            size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            vel: Vec2::ZERO,
            on_ground: false,
            spawn,
        }
    }

    /// Current bounding box
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    /// Reset position and velocity to the spawn point
    ///
    /// `on_ground` is not touched; the next tick recomputes it.
    pub fn respawn(&mut self) {
        self.pos = self.spawn;
        self.vel = Vec2::ZERO;
    }
}

/// The zombie: paces back and forth across a single platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Horizontal velocity (sign is the facing direction)
    pub vx: f32,
    /// Patrol speed magnitude
    pub speed: f32,
    /// Platform whose edges bound the patrol
    pub patrol: PlatformId,
}

impl Enemy {
    /// Place an enemy standing at `x` on top of `platform`, walking left
    ///
    /// The feet sink `ENEMY_HEIGHT - ENEMY_STAND_OFFSET` pixels into the
    /// platform, matching the level art.
    pub fn on_platform(x: f32, platform: &Rect, patrol: PlatformId) -> Self {
        Self {
            pos: Vec2::new(x, platform.top() - ENEMY_STAND_OFFSET),
            size: Vec2::new(ENEMY_WIDTH, ENEMY_HEIGHT),
            vx: -ENEMY_SPEED,
            speed: ENEMY_SPEED,
            patrol,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }
}

/// How far above the platform top the zombie's head sits
pub const ENEMY_STAND_OFFSET: f32 = 28.0;

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub level: Level,
    pub player: Player,
    pub enemy: Enemy,
    pub tuning: Tuning,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events produced since the host last drained them
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a session on the built-in dorm level with default tuning
    pub fn new() -> Self {
        Self::with_tuning(Tuning::default())
    }

    pub fn with_tuning(tuning: Tuning) -> Self {
        let (level, player, enemy) = super::level::dorm();
        Self::assemble(level, player, enemy, tuning)
    }

    /// Create a session from a custom level and entity placement
    ///
    /// Fails if the enemy's patrol platform is not part of `level` or if
    /// either entity has a negative size. The player's respawn point is
    /// taken from the level.
    pub fn from_parts(
        level: Level,
        mut player: Player,
        enemy: Enemy,
        tuning: Tuning,
    ) -> Result<Self, LevelError> {
        level.check_platform(enemy.patrol)?;
        if player.size.cmplt(Vec2::ZERO).any() {
            return Err(LevelError::NegativeEntitySize { entity: "player" });
        }
        if enemy.size.cmplt(Vec2::ZERO).any() {
            return Err(LevelError::NegativeEntitySize { entity: "enemy" });
        }
        player.spawn = level.player_spawn();
        Ok(Self::assemble(level, player, enemy, tuning))
    }

    fn assemble(level: Level, player: Player, enemy: Enemy, tuning: Tuning) -> Self {
        log::debug!(
            "Level loaded: {} platforms, world {}x{}",
            level.platforms().len(),
            tuning.world_width,
            tuning.world_height
        );
        Self {
            level,
            player,
            enemy,
            tuning,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Send the player back to spawn and record why
    pub fn respawn_player(&mut self, cause: RespawnCause) {
        self.player.respawn();
        log::info!("Player respawned at tick {} ({:?})", self.time_ticks, cause);
        self.events.push(GameEvent::Respawned {
            tick: self.time_ticks,
            cause,
        });
    }

    /// Take all events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = GameState::new();
        assert_eq!(state.player.pos, Vec2::new(60.0, 300.0));
        assert_eq!(state.player.vel, Vec2::ZERO);
        assert!(!state.player.on_ground);
        assert_eq!(state.enemy.pos, Vec2::new(600.0, 182.0));
        assert_eq!(state.enemy.vx, -1.5);
        assert_eq!(state.enemy.speed, 1.5);
        assert_eq!(state.time_ticks, 0);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_respawn_is_idempotent() {
        let mut player = Player::new(Vec2::new(60.0, 300.0));
        player.pos = Vec2::new(412.0, 37.5);
        player.vel = Vec2::new(2.5, -9.0);
        player.on_ground = true;

        player.respawn();
        let once = player.clone();
        player.respawn();

        assert_eq!(player.pos, once.pos);
        assert_eq!(player.vel, once.vel);
        assert_eq!(player.pos, Vec2::new(60.0, 300.0));
        assert_eq!(player.vel, Vec2::ZERO);
        // Grounded flag survives respawn
        assert!(player.on_ground);
    }

    #[test]
    fn test_respawn_records_event() {
        let mut state = GameState::new();
        state.time_ticks = 42;
        state.respawn_player(RespawnCause::EnemyContact);

        let events = state.drain_events();
        assert_eq!(
            events,
            vec![GameEvent::Respawned {
                tick: 42,
                cause: RespawnCause::EnemyContact
            }]
        );
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_from_parts_rejects_unknown_patrol() {
        use crate::sim::level::dorm;

        let (level, player, mut enemy) = dorm();
        enemy.patrol = PlatformId(7);
        let err = GameState::from_parts(level, player, enemy, Tuning::default()).unwrap_err();
        assert!(matches!(err, LevelError::UnknownPlatform { .. }));
    }

    #[test]
    fn test_from_parts_rejects_negative_entity_size() {
        use crate::sim::level::dorm;

        let (level, mut player, enemy) = dorm();
        player.size.y = -1.0;
        let err = GameState::from_parts(level, player, enemy, Tuning::default()).unwrap_err();
        assert_eq!(err, LevelError::NegativeEntitySize { entity: "player" });

        let (level, player, mut enemy) = dorm();
        enemy.size.x = -28.0;
        let err = GameState::from_parts(level, player, enemy, Tuning::default()).unwrap_err();
        assert_eq!(err, LevelError::NegativeEntitySize { entity: "enemy" });
        assert_eq!(err.to_string(), "enemy has a negative size");
    }

    #[test]
    fn test_from_parts_respawns_at_level_spawn() {
        use crate::sim::level::dorm;

        let (level, _, enemy) = dorm();
        let spawn = level.player_spawn();
        let player = Player::new(Vec2::new(500.0, 100.0));
        let mut state = GameState::from_parts(level, player, enemy, Tuning::default()).unwrap();

        // Starts where it was placed, comes back to the level's spawn
        assert_eq!(state.player.pos, Vec2::new(500.0, 100.0));
        assert_eq!(state.player.spawn, spawn);
        state.respawn_player(RespawnCause::FellOutOfWorld);
        assert_eq!(state.player.pos, spawn);
    }

    #[test]
    fn test_state_snapshot_roundtrip() {
        let mut state = GameState::new();
        state.player.pos.x = 123.0;
        let json = serde_json::to_string(&state).unwrap();
        let restored: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.player.pos.x, 123.0);
        assert_eq!(restored.enemy.patrol, state.enemy.patrol);
    }
}
