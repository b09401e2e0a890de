//! Round controller
//!
//! Owns the simulation plus its collaborators. Each frame it clamps the
//! measured frame time, runs one tick, then fans the tick's events out to
//! audio and, when the round ends, to the leaderboard. Collaborator
//! failures are logged and never reach the simulation.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::audio::AudioManager;
use crate::config::SimConfig;
use crate::consts::MAX_FRAME_DT;
use crate::leaderboard::{Leaderboard, RoundResult};
use crate::settings::Settings;
use crate::sim::{FrameView, GameEvent, GamePhase, GameState, HudStats, TickInput, tick};

/// Clamp a measured frame time into `[0, MAX_FRAME_DT]`.
/// Negative, NaN or infinite readings count as no time at all.
pub fn clamp_frame_dt(raw: f32) -> f32 {
    if raw.is_finite() {
        raw.clamp(0.0, MAX_FRAME_DT)
    } else {
        0.0
    }
}

/// Wall-clock unix time in milliseconds (0 if the clock is before 1970)
pub fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// A player's session: settings, current round and collaborators
pub struct Session {
    config: SimConfig,
    settings: Settings,
    leaderboard: Leaderboard,
    audio: AudioManager,
    state: GameState,
    started_at_ms: u64,
}

impl Session {
    pub fn new(
        config: SimConfig,
        mut settings: Settings,
        leaderboard: Leaderboard,
        mut audio: AudioManager,
    ) -> Self {
        settings.sanitize(&config);
        audio.set_muted(!settings.sound);
        let state = GameState::new(&config, 0, settings.difficulty);
        Self {
            config,
            settings,
            leaderboard,
            audio,
            state,
            started_at_ms: 0,
        }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Fresh round with the selected difficulty, running immediately
    pub fn start_round(&mut self, seed: u64) {
        self.state = GameState::new(&self.config, seed, self.settings.difficulty);
        self.state.start();
        self.started_at_ms = now_ms();
        log::info!(
            "Round started (seed {}, difficulty {})",
            seed,
            self.config.tier_name(self.settings.difficulty)
        );
    }

    /// Throw away the current round (ended or not) and start over
    pub fn reset(&mut self, seed: u64) {
        self.start_round(seed);
    }

    /// Run one frame. Returns the round's result on the frame it ends.
    pub fn frame(&mut self, raw_dt: f32, input: &TickInput) -> Option<RoundResult> {
        let dt = clamp_frame_dt(raw_dt);
        tick(&mut self.state, &self.config, input, dt);

        let events = self.state.drain_events();
        self.audio.play_events(&events);

        if !events.contains(&GameEvent::RoundOver) {
            return None;
        }

        let result = self.round_result();
        log::info!(
            "{} survived {} ms, ranking #{} on {}",
            result.name,
            result.duration_ms,
            self.leaderboard.potential_rank(&result),
            result.difficulty
        );
        if let Err(e) = self.leaderboard.record(&result) {
            log::warn!("Could not save result: {}", e);
        }
        Some(result)
    }

    /// Summary of the current round
    pub fn round_result(&self) -> RoundResult {
        RoundResult {
            name: self.settings.player_name.clone(),
            score: self.state.score,
            shots: self.state.shots,
            accuracy: self.state.accuracy_percent(),
            duration_ms: (f64::from(self.state.elapsed) * 1000.0).round() as u64,
            started_at_ms: self.started_at_ms,
            difficulty: self.config.tier_name(self.state.difficulty).to_string(),
        }
    }

    /// Change difficulty; a live round keeps its existing enemies as they are
    pub fn set_difficulty(&mut self, index: usize) {
        self.settings.difficulty = index;
        self.settings.sanitize(&self.config);
        self.state.set_difficulty(self.settings.difficulty);
    }

    pub fn cycle_difficulty(&mut self) {
        self.settings.cycle_difficulty(&self.config);
        self.state.set_difficulty(self.settings.difficulty);
    }

    pub fn set_sound(&mut self, enabled: bool) {
        self.settings.sound = enabled;
        self.audio.set_muted(!enabled);
    }

    pub fn set_player_name(&mut self, name: impl Into<String>) {
        self.settings.player_name = name.into();
    }

    pub fn hud(&self) -> HudStats {
        self.state.hud()
    }

    pub fn view(&self) -> FrameView {
        self.state.view()
    }

    /// Ranked results for the selected difficulty
    pub fn top_results(&self) -> Vec<RoundResult> {
        self.leaderboard.top(
            self.config.tier_name(self.settings.difficulty),
            self.settings.leaderboard_size,
        )
    }
}
