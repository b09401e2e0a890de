//! Audio dispatch
//!
//! Maps simulation events to named sound effects and hands them to a
//! pluggable backend. Backend failures never reach the game.

use thiserror::Error;

use crate::sim::GameEvent;

/// Errors a sound backend may report. Logged and dropped by [`AudioManager`].
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("sound '{0}' is not loaded")]
    Missing(String),
    #[error("audio backend failure: {0}")]
    Backend(String),
}

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// A projectile destroyed an enemy
    Hit,
    /// A projectile was fired
    Shoot,
    /// The player was caught
    GameOver,
}

impl SoundEffect {
    /// Stable trigger name passed to the backend
    pub fn name(&self) -> &'static str {
        match self {
            SoundEffect::Hit => "hit",
            SoundEffect::Shoot => "shoot",
            SoundEffect::GameOver => "game_over",
        }
    }

    /// Sound for a simulation event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::EnemiesKilled { .. } => Some(SoundEffect::Hit),
            GameEvent::Fired => Some(SoundEffect::Shoot),
            GameEvent::RoundOver => Some(SoundEffect::GameOver),
            GameEvent::EnemySpawned => None,
        }
    }
}

/// Something that can play a named sound at a volume (0.0 - 1.0)
pub trait SoundSink {
    fn play(&mut self, name: &str, volume: f32) -> Result<(), AudioError>;
}

/// Backend that only logs what would have played
#[derive(Debug, Default)]
pub struct LogSink;

impl SoundSink for LogSink {
    fn play(&mut self, name: &str, volume: f32) -> Result<(), AudioError> {
        log::debug!("play sound '{}' at {:.2}", name, volume);
        Ok(())
    }
}

/// Audio manager for the game
pub struct AudioManager {
    sink: Option<Box<dyn SoundSink>>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::silent()
    }
}

impl AudioManager {
    pub fn new(sink: Box<dyn SoundSink>) -> Self {
        Self {
            sink: Some(sink),
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Manager with no backend; every play is a no-op
    pub fn silent() -> Self {
        Self {
            sink: None,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        let Some(sink) = self.sink.as_mut() else { return };

        if let Err(e) = sink.play(effect.name(), vol) {
            log::debug!("Ignoring audio failure for '{}': {}", effect.name(), e);
        }
    }

    /// Play whatever sound belongs to each event
    pub fn play_events(&mut self, events: &[GameEvent]) {
        for effect in events.iter().filter_map(SoundEffect::for_event) {
            self.play(effect);
        }
    }
}
