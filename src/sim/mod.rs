//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied frame time only (no clocks)
//! - Seeded RNG only
//! - Stable iteration order (creation order)
//! - No rendering, audio or storage dependencies

pub mod body;
pub mod collision;
pub mod entities;
pub mod spawner;
pub mod state;
pub mod tick;
pub mod view;

pub use body::{Aabb, Body};
pub use collision::{HitReport, player_touches_enemy, resolve_projectile_hits};
pub use entities::{Enemy, MoveIntent, Player, Projectile};
pub use spawner::{Edge, Spawner, spawn_point};
pub use state::{GameEvent, GamePhase, GameState};
pub use tick::{TickInput, tick};
pub use view::{FrameView, HudStats, Sprite};
