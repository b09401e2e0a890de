//! Per-frame simulation tick
//!
//! Advances a running round by one frame: motion, projectile expiry,
//! projectile/enemy hits, player contact, then spawning.

use glam::Vec2;

use super::collision::{player_touches_enemy, resolve_projectile_hits};
use super::entities::MoveIntent;
use super::state::{GameEvent, GamePhase, GameState};
use crate::config::SimConfig;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Held direction keys
    pub movement: MoveIntent,
    /// Fire once toward this point (click/tap)
    pub fire_at: Option<Vec2>,
}

/// Advance the round by `dt` seconds
pub fn tick(state: &mut GameState, config: &SimConfig, input: &TickInput, dt: f32) {
    // Don't tick unless a round is in progress
    if state.phase != GamePhase::Running {
        return;
    }
    // Negative, NaN or infinite frame time counts as no time
    let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

    // Fire events arrive before the frame's motion, so a new shot flies this frame
    if let Some(target) = input.fire_at {
        state.fire(config, target);
    }

    state.time_ticks += 1;
    state.elapsed += dt;

    // Motion. Enemies chase where the player stood at the start of the frame.
    let target = state.player.pos;
    for projectile in &mut state.projectiles {
        projectile.advance(config.projectile_speed, dt);
    }
    for enemy in &mut state.enemies {
        enemy.advance(target, config.enemy_speed, dt);
    }
    state
        .player
        .advance(input.movement, config.player_speed, config.field, dt);

    // Expired shots never get to hit anything
    let lifetime = config.projectile_lifetime;
    state.projectiles.retain(|p| !p.expired(lifetime));

    let hits = resolve_projectile_hits(&mut state.projectiles, &mut state.enemies);
    if hits.any() {
        state.score += hits.enemies_killed;
        state.push_event(GameEvent::EnemiesKilled {
            count: hits.enemies_killed,
        });
    }

    // Checked even if this frame's hits removed enemies
    if player_touches_enemy(&state.player, &state.enemies) {
        state.phase = GamePhase::Ended;
        state.push_event(GameEvent::RoundOver);
        log::info!(
            "Round over after {:.1}s: score {}, shots {}",
            state.elapsed,
            state.score,
            state.shots
        );
        return;
    }

    // Spawn last so new enemies sit out this frame's collision pass
    state.advance_spawner(config, dt);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::entities::{Enemy, Projectile};

    fn running(config: &SimConfig) -> GameState {
        let mut state = GameState::new(config, 12345, 0);
        state.start();
        state
    }

    #[test]
    fn test_idle_and_ended_do_not_tick() {
        let config = SimConfig::default();
        let mut state = GameState::new(&config, 1, 0);
        tick(&mut state, &config, &TickInput::default(), 0.5);
        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.elapsed, 0.0);

        state.phase = GamePhase::Ended;
        tick(&mut state, &config, &TickInput::default(), 0.5);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_fire_moves_same_frame() {
        let config = SimConfig::default();
        let mut state = running(&config);
        let origin = state.player.pos;
        let input = TickInput {
            fire_at: Some(origin + Vec2::new(100.0, 0.0)),
            ..Default::default()
        };
        tick(&mut state, &config, &input, 0.25);

        assert_eq!(state.shots, 1);
        assert_eq!(state.projectiles.len(), 1);
        assert_eq!(state.projectiles[0].pos, origin + Vec2::new(100.0, 0.0));
    }

    #[test]
    fn test_projectile_expires_at_lifetime() {
        let config = SimConfig::default();
        let mut state = running(&config);
        state.projectiles.push(Projectile::new(
            Vec2::new(10.0, 10.0),
            Vec2::X,
            config.projectile_size,
        ));

        tick(&mut state, &config, &TickInput::default(), 0.25);
        assert_eq!(state.projectiles.len(), 1);
        tick(&mut state, &config, &TickInput::default(), 0.25);
        assert!(state.projectiles.is_empty());
    }

    #[test]
    fn test_multi_kill_scores_each_enemy() {
        let config = SimConfig {
            enemy_speed: 0.0,
            ..SimConfig::default()
        };
        let mut state = running(&config);
        state
            .projectiles
            .push(Projectile::new(Vec2::new(100.0, 100.0), Vec2::ZERO, config.projectile_size));
        state.enemies.push(Enemy::new(Vec2::new(90.0, 100.0), Vec2::splat(30.0)));
        state.enemies.push(Enemy::new(Vec2::new(110.0, 100.0), Vec2::splat(30.0)));

        tick(&mut state, &config, &TickInput::default(), 0.0);

        assert_eq!(state.score, 2);
        assert!(state.projectiles.is_empty());
        assert!(state.enemies.is_empty());
        assert!(state.events().contains(&GameEvent::EnemiesKilled { count: 2 }));
        assert!(state.is_running());
    }

    #[test]
    fn test_touching_enemy_ends_round() {
        let config = SimConfig {
            enemy_speed: 0.0,
            ..SimConfig::default()
        };
        let mut state = running(&config);
        // Player box spans x 380..420; enemy box 420..450
        state.enemies.push(Enemy::new(Vec2::new(435.0, 300.0), Vec2::splat(30.0)));

        tick(&mut state, &config, &TickInput::default(), 0.0);
        assert_eq!(state.phase, GamePhase::Ended);
        assert_eq!(
            state.events().iter().filter(|e| **e == GameEvent::RoundOver).count(),
            1
        );

        // Terminal: further ticks are ignored and RoundOver is not repeated
        let ticks = state.time_ticks;
        tick(&mut state, &config, &TickInput::default(), 1.0);
        assert_eq!(state.time_ticks, ticks);
        assert_eq!(
            state.events().iter().filter(|e| **e == GameEvent::RoundOver).count(),
            1
        );
    }

    #[test]
    fn test_player_check_runs_after_kills() {
        let config = SimConfig {
            enemy_speed: 0.0,
            ..SimConfig::default()
        };
        let mut state = running(&config);
        let pos = state.player.pos;
        // One shot kills one overlapping enemy, a second enemy still touches the player
        state
            .projectiles
            .push(Projectile::new(pos + Vec2::new(0.0, -100.0), Vec2::ZERO, config.projectile_size));
        state.enemies.push(Enemy::new(pos + Vec2::new(0.0, -100.0), Vec2::splat(30.0)));
        state.enemies.push(Enemy::new(pos + Vec2::new(10.0, 0.0), Vec2::splat(30.0)));

        tick(&mut state, &config, &TickInput::default(), 0.0);
        assert_eq!(state.score, 1);
        assert!(state.is_over());
    }

    #[test]
    fn test_new_spawn_sits_out_collision() {
        // Tiny field: every spawn point overlaps the player
        let config = SimConfig {
            field: Vec2::new(40.0, 40.0),
            spawn_interval: 1.0,
            ..SimConfig::default()
        };
        let mut state = running(&config);

        tick(&mut state, &config, &TickInput::default(), 1.0);
        assert_eq!(state.enemies.len(), 1);
        assert!(state.is_running());

        tick(&mut state, &config, &TickInput::default(), 0.0);
        assert!(state.is_over());
    }

    #[test]
    fn test_enemies_chase_player() {
        let config = SimConfig::default();
        let mut state = running(&config);
        state.enemies.push(Enemy::new(Vec2::new(0.0, 300.0), Vec2::splat(30.0)));

        tick(&mut state, &config, &TickInput::default(), 0.5);
        assert!((state.enemies[0].pos.x - 50.0).abs() < 1e-3);
        assert!((state.enemies[0].pos.y - 300.0).abs() < 1e-3);
    }

    #[test]
    fn test_negative_dt_is_ignored() {
        let config = SimConfig::default();
        let mut state = running(&config);
        tick(&mut state, &config, &TickInput::default(), -1.0);
        assert_eq!(state.elapsed, 0.0);
        assert_eq!(state.spawner.timer(), 0.0);
    }

    #[test]
    fn test_non_finite_dt_is_ignored() {
        let config = SimConfig::default();
        let mut state = running(&config);
        state.enemies.push(Enemy::new(Vec2::new(100.0, 100.0), Vec2::splat(30.0)));
        let player = state.player.pos;

        for dt in [f32::INFINITY, f32::NEG_INFINITY, f32::NAN] {
            tick(&mut state, &config, &TickInput::default(), dt);
        }

        assert_eq!(state.elapsed, 0.0);
        assert_eq!(state.player.pos, player);
        assert_eq!(state.enemies[0].pos, Vec2::new(100.0, 100.0));
        assert!(state.is_running());
    }

    #[test]
    fn test_determinism() {
        let config = SimConfig::default();
        let mut a = running(&config);
        let mut b = running(&config);

        let inputs = [
            TickInput {
                movement: MoveIntent {
                    up: true,
                    ..Default::default()
                },
                ..Default::default()
            },
            TickInput {
                fire_at: Some(Vec2::new(0.0, 0.0)),
                ..Default::default()
            },
            TickInput::default(),
        ];

        for i in 0..600 {
            let input = &inputs[i % inputs.len()];
            tick(&mut a, &config, input, 1.0 / 60.0);
            tick(&mut b, &config, input, 1.0 / 60.0);
        }

        assert_eq!(a.time_ticks, b.time_ticks);
        assert_eq!(a.phase, b.phase);
        assert_eq!(a.score, b.score);
        assert_eq!(a.enemies, b.enemies);
        assert_eq!(a.projectiles, b.projectiles);
        assert_eq!(a.player, b.player);
    }
}
