//! Player, enemy and projectile kinematics
//!
//! Each entity owns only its own motion rule. Collision checks live in
//! [`super::collision`]; everything an update needs from the rest of the
//! round (player position, speeds, field size) is passed in explicitly.

use glam::Vec2;

use super::body::Body;
use crate::direction_to;

/// Directional input flags sampled once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveIntent {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl MoveIntent {
    /// Unit-length intent (or zero). Screen coordinates: up is -y.
    /// With opposite flags held, down and right win.
    pub fn vector(&self) -> Vec2 {
        let axis = |neg: bool, pos: bool| {
            if pos {
                1.0
            } else if neg {
                -1.0
            } else {
                0.0
            }
        };
        Vec2::new(axis(self.left, self.right), axis(self.up, self.down)).normalize_or_zero()
    }
}

/// The player's avatar
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Player {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Move by the input intent, then keep the bounding box inside the field
    pub fn advance(&mut self, intent: MoveIntent, speed: f32, field: Vec2, dt: f32) {
        self.pos += intent.vector() * speed * dt;
        self.clamp_to(field);
    }

    /// Clamp each axis so the box stays within `[0, field]`.
    ///
    /// Uses max/min rather than `f32::clamp` so a field smaller than the
    /// player pins it to the lower edge instead of panicking.
    pub fn clamp_to(&mut self, field: Vec2) {
        let half = self.size * 0.5;
        self.pos.x = self.pos.x.max(half.x).min(field.x - half.x);
        self.pos.y = self.pos.y.max(half.y).min(field.y - half.y);
    }

    /// Direction for a shot at `target`; zero when aiming at ourselves
    pub fn aim(&self, target: Vec2) -> Vec2 {
        direction_to(self.pos, target)
    }
}

impl Body for Player {
    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn size(&self) -> Vec2 {
        self.size
    }
}

/// A pursuer that walks straight at the player
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub pos: Vec2,
    /// Fixed at spawn from the active difficulty tier
    pub size: Vec2,
}

impl Enemy {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Step toward `target` at constant speed
    pub fn advance(&mut self, target: Vec2, speed: f32, dt: f32) {
        self.pos += direction_to(self.pos, target) * speed * dt;
    }
}

impl Body for Enemy {
    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn size(&self) -> Vec2 {
        self.size
    }
}

/// A straight-flying shot with a time-to-live
#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pub pos: Vec2,
    pub size: Vec2,
    /// Unit direction, or zero for a shot fired at the player's own center
    pub dir: Vec2,
    /// Seconds since creation
    pub age: f32,
}

impl Projectile {
    pub fn new(origin: Vec2, dir: Vec2, size: Vec2) -> Self {
        Self {
            pos: origin,
            size,
            dir,
            age: 0.0,
        }
    }

    pub fn advance(&mut self, speed: f32, dt: f32) {
        self.pos += self.dir * speed * dt;
        self.age += dt;
    }

    pub fn expired(&self, lifetime: f32) -> bool {
        self.age >= lifetime
    }
}

impl Body for Projectile {
    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn size(&self) -> Vec2 {
        self.size
    }
}
