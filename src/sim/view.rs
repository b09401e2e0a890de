//! Read-only per-frame snapshot handed to presentation code

use glam::Vec2;

use super::body::Body;
use super::state::GamePhase;

/// Position and extents of one drawable entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Sprite {
    pub fn of(body: &impl Body) -> Self {
        Self {
            pos: body.pos(),
            size: body.size(),
        }
    }
}

/// Numbers shown on the heads-up display
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HudStats {
    pub score: u32,
    pub shots: u32,
    pub accuracy_percent: u32,
    /// Whole seconds since round start
    pub elapsed_secs: u32,
}

impl HudStats {
    /// HUD lines in display order
    pub fn lines(&self) -> [String; 4] {
        [
            format!("Score: {}", self.score),
            format!("Time: {}", self.elapsed_secs),
            format!("Shots: {}", self.shots),
            format!("Accuracy: {}%", self.accuracy_percent),
        ]
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct FrameView {
    pub phase: GamePhase,
    pub player: Sprite,
    pub enemies: Vec<Sprite>,
    pub projectiles: Vec<Sprite>,
    pub hud: HudStats,
}
