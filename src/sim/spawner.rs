//! Periodic enemy spawning along the field edges

use glam::Vec2;
use rand::Rng;

use super::entities::Enemy;

/// One side of the playfield
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];

    /// Point on this edge at fraction `t` (0..=1) of its length
    pub fn point(self, t: f32, field: Vec2) -> Vec2 {
        match self {
            Edge::Top => Vec2::new(t * field.x, 0.0),
            Edge::Bottom => Vec2::new(t * field.x, field.y),
            Edge::Left => Vec2::new(0.0, t * field.y),
            Edge::Right => Vec2::new(field.x, t * field.y),
        }
    }
}

/// Uniformly random edge, then a uniformly random point along it (corners included)
pub fn spawn_point<R: Rng + ?Sized>(rng: &mut R, field: Vec2) -> Vec2 {
    let edge = Edge::ALL[rng.random_range(0..Edge::ALL.len())];
    let t = rng.random_range(0.0..=1.0f32);
    edge.point(t, field)
}

/// Accumulates frame time and emits one enemy per interval
#[derive(Debug, Clone, Default)]
pub struct Spawner {
    timer: f32,
}

impl Spawner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds accumulated toward the next spawn
    pub fn timer(&self) -> f32 {
        self.timer
    }

    /// Advance the timer; returns a new enemy when the interval is reached.
    ///
    /// The timer resets to zero rather than carrying the overshoot, so at most
    /// one enemy spawns per call no matter how long the frame was.
    pub fn advance<R: Rng + ?Sized>(
        &mut self,
        dt: f32,
        interval: f32,
        field: Vec2,
        enemy_size: Vec2,
        rng: &mut R,
    ) -> Option<Enemy> {
        self.timer += dt;
        if self.timer < interval {
            return None;
        }
        self.timer = 0.0;
        Some(Enemy::new(spawn_point(rng, field), enemy_size))
    }
}
