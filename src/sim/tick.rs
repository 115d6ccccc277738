//! Fixed timestep simulation tick
//!
//! One call to [`tick`] advances the world by exactly one frame. There is
//! no delta time: velocities are in pixels per tick.

use super::rect::{Rect, overlaps};
use super::state::{GameState, InputState, Player, RespawnCause};
use crate::tuning::Tuning;

/// Advance the game state by one tick
///
/// Order is fixed: player physics, enemy patrol, then player/enemy contact.
pub fn tick(state: &mut GameState, input: &InputState) {
    state.time_ticks += 1;

    step_player(state, input);
    step_enemy(state);
    check_enemy_contact(state);
}

/// Apply input, gravity and platform landing to the player
pub fn step_player(state: &mut GameState, input: &InputState) {
    let fell = move_player(
        &mut state.player,
        state.level.platforms(),
        &state.tuning,
        input,
    );
    if fell {
        state.respawn_player(RespawnCause::FellOutOfWorld);
    }
}

/// Integrate one tick of player motion
///
/// Returns true if the player dropped out of the bottom of the world and
/// needs a respawn.
pub fn move_player(
    player: &mut Player,
    platforms: &[Rect],
    tuning: &Tuning,
    input: &InputState,
) -> bool {
    // Horizontal: right is applied last, so it wins when both are held
    player.vel.x = 0.0;
    if input.left {
        player.vel.x = -tuning.move_speed;
    }
    if input.right {
        player.vel.x = tuning.move_speed;
    }

    player.vel.y += tuning.gravity;

    if input.jump && player.on_ground {
        player.vel.y = -tuning.jump_force;
        player.on_ground = false;
    }

    player.pos += player.vel;

    // Platforms only block from above. Once a landing zeroes vy no other
    // platform can match, so the first hit in level order is kept.
    player.on_ground = false;
    for platform in platforms {
        if overlaps(&player.rect(), platform) && lands_on(player, platform) {
            player.pos.y = platform.top() - player.size.y;
            player.vel.y = 0.0;
            player.on_ground = true;
        }
    }

    let max_x = tuning.world_width - player.size.x;
    if player.pos.x < 0.0 {
        player.pos.x = 0.0;
    }
    if player.pos.x > max_x {
        player.pos.x = max_x;
    }

    player.pos.y > tuning.world_height
}

/// Falling, and the bottom edge was at or above the platform top before
/// this tick's vertical move
#[inline]
fn lands_on(player: &Player, platform: &Rect) -> bool {
    let vy = player.vel.y;
    vy > 0.0 && player.pos.y + player.size.y - vy <= platform.top()
}

/// Walk the enemy along its patrol platform, turning around at the edges
pub fn step_enemy(state: &mut GameState) {
    let enemy = &mut state.enemy;
    enemy.pos.x += enemy.vx;

    // Patrol id is validated when the state is built
    let Some(platform) = state.level.platform(enemy.patrol) else {
        return;
    };

    let rect = enemy.rect();
    if rect.left() <= platform.left() || rect.right() >= platform.right() {
        enemy.vx = -enemy.vx;
    }
}

/// Respawn the player if it is touching the enemy
///
/// Returns true if a respawn happened.
pub fn check_enemy_contact(state: &mut GameState) -> bool {
    if overlaps(&state.player.rect(), &state.enemy.rect()) {
        state.respawn_player(RespawnCause::EnemyContact);
        true
    } else {
        false
    }
}
