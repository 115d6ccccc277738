//! Shape generation for the scene
//!
//! Everything in the game is an axis-aligned rectangle, emitted as two
//! triangles in world coordinates.

use glam::Vec2;

use super::vertex::{Vertex, colors};
use crate::sim::{GameState, Rect};

/// Face stripe drawn on the player: offset from top-left, then size
const PLAYER_FACE: (Vec2, Vec2) = (Vec2::new(8.0, 10.0), Vec2::new(16.0, 3.0));
/// Face stripe drawn on the zombie
const ZOMBIE_FACE: (Vec2, Vec2) = (Vec2::new(6.0, 10.0), Vec2::new(16.0, 3.0));

/// Append a filled rectangle (two triangles)
pub fn push_rect(vertices: &mut Vec<Vertex>, rect: &Rect, color: [f32; 4]) {
    let (l, t, r, b) = (rect.left(), rect.top(), rect.right(), rect.bottom());

    vertices.push(Vertex::new(l, t, color));
    vertices.push(Vertex::new(l, b, color));
    vertices.push(Vertex::new(r, t, color));

    vertices.push(Vertex::new(r, t, color));
    vertices.push(Vertex::new(l, b, color));
    vertices.push(Vertex::new(r, b, color));
}

/// Build the whole frame: platforms, then the player, then the zombie
///
/// Later rectangles draw over earlier ones.
pub fn scene(state: &GameState) -> Vec<Vertex> {
    let platforms = state.level.platforms();
    let mut vertices = Vec::with_capacity((platforms.len() + 4) * 6);

    for platform in platforms {
        push_rect(&mut vertices, platform, colors::PLATFORM);
    }

    let player = state.player.rect();
    push_rect(&mut vertices, &player, colors::PLAYER);
    push_rect(&mut vertices, &face(&player, PLAYER_FACE), colors::PLAYER_FACE);

    let zombie = state.enemy.rect();
    push_rect(&mut vertices, &zombie, colors::ZOMBIE);
    push_rect(&mut vertices, &face(&zombie, ZOMBIE_FACE), colors::ZOMBIE_FACE);

    vertices
}

fn face(body: &Rect, (offset, size): (Vec2, Vec2)) -> Rect {
    Rect::from_pos_size(body.min() + offset, size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_rect_covers_corners() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        let mut vertices = vec![Vertex::new(0.0, 0.0, colors::BACKGROUND)];
        push_rect(&mut vertices, &r, colors::PLATFORM);
        // Appends after what is already there
        assert_eq!(vertices.len(), 7);
        let vertices = &vertices[1..];

        let xs: Vec<f32> = vertices.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = vertices.iter().map(|v| v.position[1]).collect();
        assert!(xs.iter().all(|&x| x == 10.0 || x == 40.0));
        assert!(ys.iter().all(|&y| y == 20.0 || y == 60.0));
        assert!(vertices.iter().all(|v| v.color == colors::PLATFORM));
    }

    #[test]
    fn test_scene_layers() {
        let state = GameState::new();
        let vertices = scene(&state);

        // 4 platforms + player + face + zombie + face
        assert_eq!(vertices.len(), 8 * 6);
        assert!(vertices[..24].iter().all(|v| v.color == colors::PLATFORM));
        assert_eq!(vertices[24].color, colors::PLAYER);
        assert_eq!(vertices[30].color, colors::PLAYER_FACE);
        assert_eq!(vertices[36].color, colors::ZOMBIE);
        assert_eq!(vertices[42].color, colors::ZOMBIE_FACE);
    }

    #[test]
    fn test_faces_follow_entities() {
        let state = GameState::new();
        let vertices = scene(&state);

        // Player at (60, 300): face top-left at (68, 310)
        assert_eq!(vertices[30].position, [68.0, 310.0]);
        // Zombie at (600, 182): face top-left at (606, 192)
        assert_eq!(vertices[42].position, [606.0, 192.0]);
    }
}
