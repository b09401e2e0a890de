//! Collision resolution between projectiles, enemies and the player
//!
//! All tests are AABB overlaps (edge-inclusive, see [`Aabb::intersects`]).
//! Removal is mark-and-sweep: the scan only flips keep flags, and each
//! collection is compacted once afterwards.

use super::body::{Aabb, Body};
use super::entities::{Enemy, Player, Projectile};

/// Outcome of one projectile-vs-enemy pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HitReport {
    /// Enemies destroyed this pass
    pub enemies_killed: u32,
    /// Projectiles consumed by a hit
    pub projectiles_spent: u32,
}

impl HitReport {
    pub fn any(&self) -> bool {
        self.enemies_killed > 0
    }
}

/// Drop every item whose flag is `false`, preserving order
pub fn sweep<T>(items: &mut Vec<T>, keep: &[bool]) {
    debug_assert_eq!(items.len(), keep.len());
    let mut flags = keep.iter();
    items.retain(|_| flags.next().copied().unwrap_or(true));
}

/// Test every projectile against every live enemy.
///
/// A projectile that overlaps anything is spent and takes every enemy it
/// overlaps with it, so one shot can kill several stacked enemies. Enemies
/// already killed earlier in the same pass are ignored by later projectiles.
pub fn resolve_projectile_hits(projectiles: &mut Vec<Projectile>, enemies: &mut Vec<Enemy>) -> HitReport {
    let mut report = HitReport::default();
    if projectiles.is_empty() || enemies.is_empty() {
        return report;
    }

    let enemy_bounds: Vec<Aabb> = enemies.iter().map(Body::aabb).collect();
    let mut enemy_alive = vec![true; enemies.len()];
    let mut projectile_alive = vec![true; projectiles.len()];

    for (shot_idx, projectile) in projectiles.iter().enumerate() {
        let bounds = projectile.aabb();
        let mut kills = 0u32;

        for (enemy_idx, enemy_box) in enemy_bounds.iter().enumerate() {
            if enemy_alive[enemy_idx] && bounds.intersects(enemy_box) {
                enemy_alive[enemy_idx] = false;
                kills += 1;
            }
        }

        if kills > 0 {
            projectile_alive[shot_idx] = false;
            report.projectiles_spent += 1;
            report.enemies_killed += kills;
        }
    }

    if report.any() {
        sweep(projectiles, &projectile_alive);
        sweep(enemies, &enemy_alive);
    }
    report
}

/// Whether the player's box touches any enemy
pub fn player_touches_enemy(player: &Player, enemies: &[Enemy]) -> bool {
    enemies.iter().any(|enemy| player.overlaps(enemy))
}
