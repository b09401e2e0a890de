//! Arena Survival - a top-down survive-the-waves shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawner, collisions, round state)
//! - `config`: Immutable simulation tuning and difficulty tiers
//! - `session`: Round controller that feeds the simulation and its collaborators
//! - `leaderboard`: Per-difficulty result lists persisted as JSON
//! - `settings`: Player preferences
//! - `audio`: Named sound triggers
//! - `renderer`: CPU-side geometry for the frame view

pub mod audio;
pub mod config;
pub mod leaderboard;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use config::{DifficultyTier, SimConfig};
pub use leaderboard::{Leaderboard, RoundResult};
pub use session::Session;
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Nominal frame rate the native loop paces itself to
    pub const TARGET_FPS: u32 = 60;
    /// Largest frame step handed to the simulation (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Playfield dimensions (pixels)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Movement speeds (pixels/s)
    pub const PLAYER_SPEED: f32 = 250.0;
    pub const ENEMY_SPEED: f32 = 100.0;
    pub const PROJECTILE_SPEED: f32 = 400.0;

    /// Projectile time-to-live (seconds)
    pub const PROJECTILE_LIFETIME: f32 = 0.5;
    /// Seconds between enemy spawns
    pub const SPAWN_INTERVAL: f32 = 2.0;

    /// Entity extents (square, pixels)
    pub const PLAYER_SIZE: f32 = 40.0;
    pub const PROJECTILE_SIZE: f32 = 10.0;
    /// Fallback enemy size when no tier is configured
    pub const DEFAULT_ENEMY_SIZE: f32 = 30.0;
}

/// Unit vector pointing from `from` toward `to`, or zero if they coincide
#[inline]
pub fn direction_to(from: Vec2, to: Vec2) -> Vec2 {
    (to - from).normalize_or_zero()
}

/// Integer percentage of `part / whole`, 0 when `whole` is 0
#[inline]
pub fn percent(part: u32, whole: u32) -> u32 {
    if whole == 0 {
        0
    } else {
        u32::try_from(u64::from(part) * 100 / u64::from(whole)).unwrap_or(u32::MAX)
    }
}
