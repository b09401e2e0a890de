//! Shape generation for 2D primitives

use glam::Vec2;

use super::vertex::{Vertex, colors};
use crate::sim::{FrameView, Sprite};

/// Two triangles covering an axis-aligned rectangle centered on `center`
pub fn rect(center: Vec2, size: Vec2, color: [f32; 4]) -> [Vertex; 6] {
    let half = size * 0.5;
    let min = center - half;
    let max = center + half;

    [
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

fn push_sprite(vertices: &mut Vec<Vertex>, sprite: &Sprite, color: [f32; 4]) {
    vertices.extend_from_slice(&rect(sprite.pos, sprite.size, color));
}

/// Triangle list for a whole frame in field coordinates.
///
/// Draw order: enemies, projectiles, then the player on top.
pub fn frame_vertices(view: &FrameView) -> Vec<Vertex> {
    let count = view.enemies.len() + view.projectiles.len() + 1;
    let mut vertices = Vec::with_capacity(count * 6);

    for enemy in &view.enemies {
        push_sprite(&mut vertices, enemy, colors::ENEMY);
    }
    for projectile in &view.projectiles {
        push_sprite(&mut vertices, projectile, colors::PROJECTILE);
    }
    push_sprite(&mut vertices, &view.player, colors::PLAYER);

    vertices
}

/// Map field coordinates (origin top-left, +y down) to clip space
/// (origin center, +y up) in place
pub fn to_clip_space(vertices: &mut [Vertex], field: Vec2) {
    if field.x <= 0.0 || field.y <= 0.0 {
        return;
    }
    for v in vertices {
        let [x, y] = v.position;
        v.position = [x / field.x * 2.0 - 1.0, 1.0 - y / field.y * 2.0];
    }
}
