//! Static level data
//!
//! A level is a fixed, ordered list of platforms plus the player spawn
//! point. Platforms are referred to by [`PlatformId`] so entities can name
//! the platform they belong to without depending on list positions at
//! the call site.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::state::{Enemy, Player};
use crate::consts::*;

/// Index of a platform within its level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlatformId(pub usize);

/// Reasons a level definition is rejected
#[derive(Debug, Clone, PartialEq)]
pub enum LevelError {
    NoPlatforms,
    /// A platform has a negative width or height
    NegativeSize { platform: PlatformId },
    /// A platform id does not exist in this level
    UnknownPlatform { platform: PlatformId, count: usize },
    /// The player or enemy has a negative width or height
    NegativeEntitySize { entity: &'static str },
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::NoPlatforms => write!(f, "level has no platforms"),
            LevelError::NegativeSize { platform } => {
                write!(f, "platform {} has a negative size", platform.0)
            }
            LevelError::UnknownPlatform { platform, count } => write!(
                f,
                "platform {} does not exist (level has {} platforms)",
                platform.0, count
            ),
            LevelError::NegativeEntitySize { entity } => {
                write!(f, "{} has a negative size", entity)
            }
        }
    }
}

impl std::error::Error for LevelError {}

/// Unvalidated level description (deserialization target)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelDef {
    pub platforms: Vec<Rect>,
    pub player_spawn: Vec2,
}

/// A validated level: at least one platform, no negative sizes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "LevelDef", into = "LevelDef")]
pub struct Level {
    platforms: Vec<Rect>,
    player_spawn: Vec2,
}

impl Level {
    pub fn new(platforms: Vec<Rect>, player_spawn: Vec2) -> Result<Self, LevelError> {
        if platforms.is_empty() {
            return Err(LevelError::NoPlatforms);
        }
        if let Some(i) = platforms
            .iter()
            .position(|p| p.width < 0.0 || p.height < 0.0)
        {
            return Err(LevelError::NegativeSize {
                platform: PlatformId(i),
            });
        }
        Ok(Self {
            platforms,
            player_spawn,
        })
    }

    /// Platforms in level order (the order collision resolution walks them)
    pub fn platforms(&self) -> &[Rect] {
        &self.platforms
    }

    pub fn player_spawn(&self) -> Vec2 {
        self.player_spawn
    }

    /// Look up a platform by id
    pub fn platform(&self, id: PlatformId) -> Option<&Rect> {
        self.platforms.get(id.0)
    }

    /// Resolve `id` against this level, rejecting ids that don't exist
    pub fn check_platform(&self, id: PlatformId) -> Result<PlatformId, LevelError> {
        if id.0 < self.platforms.len() {
            Ok(id)
        } else {
            Err(LevelError::UnknownPlatform {
                platform: id,
                count: self.platforms.len(),
            })
        }
    }
}

impl TryFrom<LevelDef> for Level {
    type Error = LevelError;

    fn try_from(def: LevelDef) -> Result<Self, Self::Error> {
        Level::new(def.platforms, def.player_spawn)
    }
}

impl From<Level> for LevelDef {
    fn from(level: Level) -> Self {
        LevelDef {
            platforms: level.platforms,
            player_spawn: level.player_spawn,
        }
    }
}

/// Index of the main floor in the dorm level
pub const DORM_FLOOR: PlatformId = PlatformId(0);
/// The high platform the zombie patrols
pub const DORM_ZOMBIE_PLATFORM: PlatformId = PlatformId(3);

/// The single dorm level, with its player and zombie placed
pub fn dorm() -> (Level, Player, Enemy) {
    let platforms = vec![
        // main floor
        Rect::new(0.0, 400.0, 800.0, 50.0),
        // mid platforms
        Rect::new(150.0, 320.0, 140.0, 20.0),
        Rect::new(360.0, 260.0, 140.0, 20.0),
        // high platform where the zombie patrols
        Rect::new(580.0, 210.0, 140.0, 20.0),
    ];
    let spawn = Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y);
    let zombie_platform = platforms[DORM_ZOMBIE_PLATFORM.0];

    let level = Level {
        platforms,
        player_spawn: spawn,
    };
    let player = Player::new(level.player_spawn());
    let enemy = Enemy::on_platform(600.0, &zombie_platform, DORM_ZOMBIE_PLATFORM);
    (level, player, enemy)
}
