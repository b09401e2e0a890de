//! Arena Survival entry point
//!
//! Runs a headless round driven by a simple autopilot and prints the
//! leaderboard when the player is caught. Pass a JSON file as the first
//! argument to override the simulation tuning.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use glam::Vec2;

use arena_survival::audio::{AudioManager, LogSink};
use arena_survival::consts::TARGET_FPS;
use arena_survival::renderer::{Vertex, colors, frame_vertices, to_clip_space};
use arena_survival::settings::SETTINGS_FILE;
use arena_survival::sim::{GameState, MoveIntent, TickInput};
use arena_survival::{Leaderboard, RoundResult, Session, Settings, SimConfig};

/// Directory holding one leaderboard file per difficulty
const LEADERBOARD_DIR: &str = "leaderboards";
/// Give up after this many simulated seconds
const MAX_ROUND_SECS: u64 = 120;
/// Ticks between autopilot shots
const FIRE_EVERY: u64 = 20;

fn load_config() -> SimConfig {
    let Some(path) = std::env::args().nth(1) else {
        return SimConfig::default();
    };
    let parsed = std::fs::read_to_string(&path)
        .map_err(|e| e.to_string())
        .and_then(|json| SimConfig::from_json(&json).map_err(|e| e.to_string()));
    match parsed {
        Ok(config) => {
            log::info!("Loaded config from {}", path);
            config
        }
        Err(e) => {
            log::warn!("Ignoring config {}: {}", path, e);
            SimConfig::default()
        }
    }
}

/// Aim at the nearest enemy and back away from it
fn autopilot(state: &GameState) -> TickInput {
    let me = state.player.pos;
    let nearest = state
        .enemies
        .iter()
        .map(|e| e.pos)
        .min_by(|a, b| a.distance_squared(me).total_cmp(&b.distance_squared(me)));

    let Some(target) = nearest else {
        return TickInput::default();
    };

    let away: Vec2 = me - target;
    let movement = MoveIntent {
        up: away.y < -1.0,
        down: away.y > 1.0,
        left: away.x < -1.0,
        right: away.x > 1.0,
    };
    let fire_at = (state.time_ticks % FIRE_EVERY == 0).then_some(target);

    TickInput { movement, fire_at }
}

fn print_leaderboard(difficulty: &str, results: &[RoundResult]) {
    println!("\n=== {} leaderboard ===", difficulty);
    for (i, r) in results.iter().enumerate() {
        println!(
            "{}. {:<12} {:>6.1}s  score {:>3}  shots {:>3}  accuracy {:>3}%",
            i + 1,
            r.name,
            r.duration_ms as f64 / 1000.0,
            r.score,
            r.shots,
            r.accuracy
        );
    }
}

/// Tessellate the last frame the way a GPU front end would before upload
fn log_final_frame(session: &Session) {
    let mut vertices = frame_vertices(&session.view());
    to_clip_space(&mut vertices, session.config().field);
    log::info!(
        "Final frame: {} vertices, {} bytes, clear color {:?}",
        vertices.len(),
        Vertex::as_bytes(&vertices).len(),
        colors::BACKGROUND
    );
}

fn main() {
    env_logger::init();
    log::info!("Arena Survival (headless) starting...");

    let config = load_config();
    let settings = Settings::load_from(Path::new(SETTINGS_FILE));
    let leaderboard = Leaderboard::new(LEADERBOARD_DIR);
    let audio = AudioManager::new(Box::new(LogSink));
    let mut session = Session::new(config, settings, leaderboard, audio);

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    session.start_round(seed);

    let dt = 1.0 / TARGET_FPS as f32;
    let max_ticks = MAX_ROUND_SECS * u64::from(TARGET_FPS);

    let mut result = None;
    while result.is_none() && session.state().time_ticks < max_ticks {
        let input = autopilot(session.state());
        result = session.frame(dt, &input);

        if session.state().time_ticks % u64::from(TARGET_FPS) == 0 {
            log::info!("{}", session.hud().lines().join("  "));
        }
    }

    match result {
        Some(r) => println!(
            "Caught after {:.1}s with {} kills ({}% accuracy)",
            r.duration_ms as f64 / 1000.0,
            r.score,
            r.accuracy
        ),
        None => println!("Survived {}s, stopping", MAX_ROUND_SECS),
    }

    log_final_frame(&session);

    let difficulty = session.config().tier_name(session.settings().difficulty);
    print_leaderboard(difficulty, &session.top_results());

    if let Err(e) = session.settings().save_to(Path::new(SETTINGS_FILE)) {
        log::warn!("Could not save settings: {}", e);
    }
}
