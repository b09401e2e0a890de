//! Simulation tuning
//!
//! Built once per session and handed to the simulation by reference.
//! Can be loaded from JSON; missing fields fall back to the defaults in
//! [`crate::consts`].

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while building a [`SimConfig`] from JSON
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// A named difficulty level and the enemy size it spawns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyTier {
    pub name: String,
    /// Enemy (width, height) in pixels
    pub enemy_size: Vec2,
}

impl DifficultyTier {
    pub fn new(name: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            name: name.into(),
            enemy_size: Vec2::new(width, height),
        }
    }
}

/// Immutable simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Playfield extents; the field spans `[0, field.x] x [0, field.y]`
    pub field: Vec2,
    pub player_speed: f32,
    pub enemy_speed: f32,
    pub projectile_speed: f32,
    /// Seconds a projectile lives before expiring
    pub projectile_lifetime: f32,
    /// Seconds between spawns
    pub spawn_interval: f32,
    pub player_size: Vec2,
    pub projectile_size: Vec2,
    /// Ordered difficulty tiers; the first one is the default
    pub tiers: Vec<DifficultyTier>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            field: Vec2::new(FIELD_WIDTH, FIELD_HEIGHT),
            player_speed: PLAYER_SPEED,
            enemy_speed: ENEMY_SPEED,
            projectile_speed: PROJECTILE_SPEED,
            projectile_lifetime: PROJECTILE_LIFETIME,
            spawn_interval: SPAWN_INTERVAL,
            player_size: Vec2::splat(PLAYER_SIZE),
            projectile_size: Vec2::splat(PROJECTILE_SIZE),
            tiers: vec![
                DifficultyTier::new("Lama", 40.0, 40.0),
                DifficultyTier::new("Machr", 30.0, 30.0),
                DifficultyTier::new("Superman", 22.0, 22.0),
            ],
        }
    }
}

impl SimConfig {
    /// Parse and validate a config from JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the invariants the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |v: Vec2| v.is_finite() && v.x > 0.0 && v.y > 0.0;

        if !positive(self.field) {
            return Err(ConfigError::Invalid("field must be positive".into()));
        }
        if !positive(self.player_size) || !positive(self.projectile_size) {
            return Err(ConfigError::Invalid("entity sizes must be positive".into()));
        }
        for (name, value) in [
            ("player_speed", self.player_speed),
            ("enemy_speed", self.enemy_speed),
            ("projectile_speed", self.projectile_speed),
            ("projectile_lifetime", self.projectile_lifetime),
            ("spawn_interval", self.spawn_interval),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid(format!("{name} must be >= 0")));
            }
        }
        if self.spawn_interval == 0.0 {
            return Err(ConfigError::Invalid("spawn_interval must be > 0".into()));
        }
        if self.tiers.is_empty() {
            return Err(ConfigError::Invalid("at least one difficulty tier is required".into()));
        }
        if let Some(tier) = self.tiers.iter().find(|t| !positive(t.enemy_size)) {
            return Err(ConfigError::Invalid(format!(
                "tier '{}' has a non-positive enemy size",
                tier.name
            )));
        }
        Ok(())
    }

    /// Tier at `index`, falling back to the first tier
    pub fn tier(&self, index: usize) -> Option<&DifficultyTier> {
        self.tiers.get(index).or_else(|| self.tiers.first())
    }

    /// Name of the tier at `index` (first tier if out of range)
    pub fn tier_name(&self, index: usize) -> &str {
        self.tier(index).map_or("default", |t| t.name.as_str())
    }

    /// Enemy size for the tier at `index`
    pub fn enemy_size(&self, index: usize) -> Vec2 {
        self.tier(index)
            .map_or(Vec2::splat(DEFAULT_ENEMY_SIZE), |t| t.enemy_size)
    }

    /// Center of the playfield
    pub fn field_center(&self) -> Vec2 {
        self.field * 0.5
    }
}
