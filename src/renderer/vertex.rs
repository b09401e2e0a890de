//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Vertex data as raw bytes, ready for a vertex buffer
    pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
        bytemuck::cast_slice(vertices)
    }
}

const fn rgb(r: u8, g: u8, b: u8) -> [f32; 4] {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
}

/// Colors for game elements
pub mod colors {
    use super::rgb;

    pub const PLAYER: [f32; 4] = rgb(50, 200, 255);
    pub const ENEMY: [f32; 4] = rgb(255, 60, 60);
    pub const PROJECTILE: [f32; 4] = rgb(255, 255, 0);
    pub const BACKGROUND: [f32; 4] = rgb(30, 30, 30);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout() {
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
        let verts = [Vertex::new(1.0, 2.0, colors::PLAYER); 2];
        assert_eq!(Vertex::as_bytes(&verts).len(), 48);
    }

    #[test]
    fn test_colors_are_opaque() {
        assert_eq!(colors::PROJECTILE, [1.0, 1.0, 0.0, 1.0]);
        assert_eq!(colors::ENEMY[3], 1.0);
    }
}
