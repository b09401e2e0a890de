//! Leaderboard system
//!
//! One JSON file per difficulty tier holding every finished round. Ranking
//! is longest survival first, then score, then accuracy.

use std::cmp::Reverse;
use std::fs;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default number of entries shown
pub const DEFAULT_TOP_N: usize = 5;

/// Errors raised while writing a leaderboard file
#[derive(Debug, Error)]
pub enum LeaderboardError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode leaderboard: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Outcome of one round
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundResult {
    /// Player's name
    pub name: String,
    /// Enemies destroyed
    pub score: u32,
    /// Projectiles fired
    #[serde(alias = "shoots")]
    pub shots: u32,
    /// Whole-percent accuracy
    pub accuracy: u32,
    /// Survival time (ms)
    #[serde(alias = "game_duration_ms")]
    pub duration_ms: u64,
    /// Unix timestamp (ms) when the round started
    pub started_at_ms: u64,
    /// Difficulty tier name
    pub difficulty: String,
}

/// Sort best-first: duration, then score, then accuracy (all descending).
/// The sort is stable, so ties keep insertion order.
pub fn rank(results: &mut [RoundResult]) {
    results.sort_by_key(|r| (Reverse(r.duration_ms), Reverse(r.score), Reverse(r.accuracy)));
}

/// Ranked copy truncated to `limit`
pub fn top_n(mut results: Vec<RoundResult>, limit: usize) -> Vec<RoundResult> {
    rank(&mut results);
    results.truncate(limit);
    results
}

/// File name for a difficulty: lowercase, anything odd replaced by `_`
fn file_stem(difficulty: &str) -> String {
    let stem: String = difficulty
        .chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    if stem.is_empty() { "default".to_string() } else { stem }
}

/// Directory-backed per-difficulty leaderboards
#[derive(Debug, Clone)]
pub struct Leaderboard {
    dir: PathBuf,
}

impl Leaderboard {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the file backing `difficulty`
    pub fn path_for(&self, difficulty: &str) -> PathBuf {
        self.dir.join(format!("{}.json", file_stem(difficulty)))
    }

    /// Every stored result for `difficulty`, unranked.
    ///
    /// A missing, unreadable or corrupt file reads as an empty board.
    pub fn load(&self, difficulty: &str) -> Vec<RoundResult> {
        let path = self.path_for(difficulty);
        if !path.exists() {
            return Vec::new();
        }

        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(results) => results,
                Err(e) => {
                    log::warn!("Failed to parse leaderboard {:?}: {}", path, e);
                    Vec::new()
                }
            },
            Err(e) => {
                log::warn!("Failed to read leaderboard {:?}: {}", path, e);
                Vec::new()
            }
        }
    }

    /// Append a result to its difficulty's file
    pub fn record(&self, result: &RoundResult) -> Result<(), LeaderboardError> {
        fs::create_dir_all(&self.dir).map_err(|source| LeaderboardError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let path = self.path_for(&result.difficulty);
        let mut results = self.load(&result.difficulty);
        results.push(result.clone());

        let json = serde_json::to_string_pretty(&results)?;
        fs::write(&path, json).map_err(|source| LeaderboardError::Io {
            path: path.clone(),
            source,
        })?;

        log::info!(
            "Recorded result for {} ({} entries in {:?})",
            result.name,
            results.len(),
            path
        );
        Ok(())
    }

    /// Best `limit` results for `difficulty`
    pub fn top(&self, difficulty: &str, limit: usize) -> Vec<RoundResult> {
        top_n(self.load(difficulty), limit)
    }

    /// Rank a finished round would take (1-indexed) among stored results
    pub fn potential_rank(&self, result: &RoundResult) -> usize {
        let key = |r: &RoundResult| (r.duration_ms, r.score, r.accuracy);
        let better = self
            .load(&result.difficulty)
            .iter()
            .filter(|r| key(r) >= key(result))
            .count();
        better + 1
    }
}
