//! Game settings and preferences
//!
//! Persisted as a small JSON file next to the leaderboards.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::SimConfig;
use crate::leaderboard::DEFAULT_TOP_N;

/// Default settings file name
pub const SETTINGS_FILE: &str = "settings.json";

/// Errors raised while saving settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode settings: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Index into the config's difficulty tiers
    pub difficulty: usize,
    /// Sound effects on/off
    pub sound: bool,
    /// Background music on/off. Stored for front ends that play music;
    /// the sound-effect path only looks at `sound`.
    pub music: bool,
    /// Entries shown per leaderboard
    pub leaderboard_size: usize,
    /// Name recorded with results
    pub player_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: 0,
            sound: true,
            music: true,
            leaderboard_size: DEFAULT_TOP_N,
            player_name: "Player".to_string(),
        }
    }
}

impl Settings {
    /// Step to the next difficulty tier, wrapping around
    pub fn cycle_difficulty(&mut self, config: &SimConfig) {
        let count = config.tiers.len().max(1);
        self.difficulty = (self.difficulty + 1) % count;
    }

    /// Pull an out-of-range tier index back to the default tier
    pub fn sanitize(&mut self, config: &SimConfig) {
        if self.difficulty >= config.tiers.len() {
            log::warn!(
                "Difficulty index {} out of range, using {}",
                self.difficulty,
                config.tier_name(0)
            );
            self.difficulty = 0;
        }
        if self.leaderboard_size == 0 {
            self.leaderboard_size = DEFAULT_TOP_N;
        }
    }

    /// Load settings from `path`, falling back to defaults on any error
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            log::info!("Using default settings");
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {:?}", path);
                    settings
                }
                Err(e) => {
                    log::warn!("Failed to parse settings {:?}: {}", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Failed to read settings {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Save settings to `path`
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| SettingsError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, json).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "arena-survival-settings-{}-{}.json",
            name,
            std::process::id()
        ))
    }

    #[test]
    fn test_cycle_difficulty_wraps() {
        let config = SimConfig::default();
        let mut settings = Settings::default();
        settings.cycle_difficulty(&config);
        settings.cycle_difficulty(&config);
        assert_eq!(settings.difficulty, 2);
        settings.cycle_difficulty(&config);
        assert_eq!(settings.difficulty, 0);
    }

    #[test]
    fn test_sanitize() {
        let config = SimConfig::default();
        let mut settings = Settings {
            difficulty: 9,
            leaderboard_size: 0,
            ..Settings::default()
        };
        settings.sanitize(&config);
        assert_eq!(settings.difficulty, 0);
        assert_eq!(settings.leaderboard_size, DEFAULT_TOP_N);
    }

    #[test]
    fn test_save_and_load() {
        let path = scratch("roundtrip");
        let settings = Settings {
            difficulty: 2,
            sound: false,
            music: false,
            ..Settings::default()
        };
        settings.save_to(&path).unwrap();
        assert_eq!(Settings::load_from(&path), settings);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_bad_file_gives_defaults() {
        let path = scratch("garbage");
        fs::write(&path, "[1, 2").unwrap();
        assert_eq!(Settings::load_from(&path), Settings::default());
        let _ = fs::remove_file(&path);

        assert_eq!(Settings::load_from(&scratch("missing")), Settings::default());
    }
}
