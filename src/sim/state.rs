//! Round state and core simulation types
//!
//! Everything a round mutates lives here and is owned by [`GameState`].

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::entities::{Enemy, Player, Projectile};
use super::spawner::Spawner;
use super::view::{FrameView, HudStats, Sprite};
use crate::config::SimConfig;
use crate::percent;

/// Lifecycle of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// Built but not started
    #[default]
    Idle,
    /// Ticking
    Running,
    /// Player was caught; terminal until reset
    Ended,
}

/// Things that happened during a tick, for collaborators (audio, UI)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A projectile was fired
    Fired,
    /// A projectile destroyed `count` enemies
    EnemiesKilled { count: u32 },
    /// The spawner added an enemy
    EnemySpawned,
    /// The player touched an enemy
    RoundOver,
}

/// Complete round state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the round's RNG was built from
    pub seed: u64,
    pub phase: GamePhase,
    pub player: Player,
    /// Live enemies in creation order
    pub enemies: Vec<Enemy>,
    /// Live projectiles in creation order
    pub projectiles: Vec<Projectile>,
    pub spawner: Spawner,
    /// Enemies destroyed
    pub score: u32,
    /// Fire actions taken
    pub shots: u32,
    /// Simulated seconds since the round started
    pub elapsed: f32,
    /// Index into the config's difficulty tiers
    pub difficulty: usize,
    /// Simulation tick counter
    pub time_ticks: u64,
    rng: Pcg32,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh idle round with the player centered in the field
    pub fn new(config: &SimConfig, seed: u64, difficulty: usize) -> Self {
        Self {
            seed,
            phase: GamePhase::Idle,
            player: Player::new(config.field_center(), config.player_size),
            enemies: Vec::new(),
            projectiles: Vec::new(),
            spawner: Spawner::new(),
            score: 0,
            shots: 0,
            elapsed: 0.0,
            difficulty,
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
            events: Vec::new(),
        }
    }

    /// Idle -> Running. No effect in any other phase.
    pub fn start(&mut self) {
        if self.phase == GamePhase::Idle {
            self.phase = GamePhase::Running;
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::Ended
    }

    /// Hits per shot; 0 before the first shot
    pub fn accuracy(&self) -> f32 {
        if self.shots == 0 {
            0.0
        } else {
            self.score as f32 / self.shots as f32
        }
    }

    /// Accuracy as a whole percentage
    pub fn accuracy_percent(&self) -> u32 {
        percent(self.score, self.shots)
    }

    /// Fire one projectile from the player toward `target`.
    ///
    /// Returns false (and does nothing) unless the round is running.
    pub fn fire(&mut self, config: &SimConfig, target: Vec2) -> bool {
        if !self.is_running() {
            return false;
        }
        let dir = self.player.aim(target);
        self.projectiles
            .push(Projectile::new(self.player.pos, dir, config.projectile_size));
        self.shots += 1;
        self.events.push(GameEvent::Fired);
        true
    }

    /// Switch tiers; only enemies spawned from now on use the new size
    pub fn set_difficulty(&mut self, difficulty: usize) {
        self.difficulty = difficulty;
    }

    /// Feed frame time to the spawner and adopt any enemy it produces
    pub fn advance_spawner(&mut self, config: &SimConfig, dt: f32) -> bool {
        let size = config.enemy_size(self.difficulty);
        match self
            .spawner
            .advance(dt, config.spawn_interval, config.field, size, &mut self.rng)
        {
            Some(enemy) => {
                log::debug!("Spawned enemy at {:?} (size {:?})", enemy.pos, enemy.size);
                self.enemies.push(enemy);
                self.events.push(GameEvent::EnemySpawned);
                true
            }
            None => false,
        }
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Events recorded since the last drain
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn hud(&self) -> HudStats {
        HudStats {
            score: self.score,
            shots: self.shots,
            accuracy_percent: self.accuracy_percent(),
            elapsed_secs: self.elapsed as u32,
        }
    }

    /// Read-only snapshot for the renderer
    pub fn view(&self) -> FrameView {
        FrameView {
            phase: self.phase,
            player: Sprite::of(&self.player),
            enemies: self.enemies.iter().map(Sprite::of).collect(),
            projectiles: self.projectiles.iter().map(Sprite::of).collect(),
            hud: self.hud(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_round_is_idle_and_centered() {
        let config = SimConfig::default();
        let state = GameState::new(&config, 1, 0);
        assert_eq!(state.phase, GamePhase::Idle);
        assert_eq!(state.player.pos, Vec2::new(400.0, 300.0));
        assert!(state.enemies.is_empty());
        assert_eq!(state.accuracy(), 0.0);
    }

    #[test]
    fn test_fire_requires_running() {
        let config = SimConfig::default();
        let mut state = GameState::new(&config, 1, 0);
        assert!(!state.fire(&config, Vec2::ZERO));
        assert_eq!(state.shots, 0);

        state.start();
        assert!(state.fire(&config, Vec2::new(400.0, 0.0)));
        assert_eq!(state.shots, 1);
        assert_eq!(state.projectiles[0].dir, Vec2::NEG_Y);
        assert_eq!(state.events(), &[GameEvent::Fired]);
    }

    #[test]
    fn test_fire_at_self_is_stationary() {
        let config = SimConfig::default();
        let mut state = GameState::new(&config, 1, 0);
        state.start();
        let target = state.player.pos;
        state.fire(&config, target);
        assert_eq!(state.projectiles[0].dir, Vec2::ZERO);
        assert_eq!(state.shots, 1);
    }

    #[test]
    fn test_accuracy() {
        let config = SimConfig::default();
        let mut state = GameState::new(&config, 1, 0);
        state.score = 3;
        state.shots = 4;
        assert_eq!(state.accuracy(), 0.75);
        assert_eq!(state.accuracy_percent(), 75);
    }

    #[test]
    fn test_difficulty_change_only_affects_new_spawns() {
        let config = SimConfig::default();
        let mut state = GameState::new(&config, 9, 0);
        state.start();

        assert!(state.advance_spawner(&config, config.spawn_interval));
        state.set_difficulty(2);
        assert!(state.advance_spawner(&config, config.spawn_interval));

        assert_eq!(state.enemies[0].size, Vec2::splat(40.0));
        assert_eq!(state.enemies[1].size, Vec2::splat(22.0));
    }

    #[test]
    fn test_drain_events_empties_queue() {
        let config = SimConfig::default();
        let mut state = GameState::new(&config, 1, 0);
        state.start();
        state.fire(&config, Vec2::ZERO);
        assert_eq!(state.drain_events(), vec![GameEvent::Fired]);
        assert!(state.events().is_empty());
    }
}
