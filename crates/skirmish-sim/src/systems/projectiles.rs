//! Projectile system: flight integration, lifespan expiry, enemy hits.
//!
//! Collision is O(projectiles × enemies) per tick — acceptable at this
//! scale (≤10 enemies, short-lived rounds). Each projectile lands at most
//! one hit: the first live enemy whose sphere it enters.

use glam::Vec3;
use hecs::World;

use skirmish_core::components::{
    CollisionRadius, DamageFlash, EnemyMarker, Health, Projectile,
};
use skirmish_core::constants::{DAMAGE_FLASH_SECS, PROJECTILE_RADIUS};
use skirmish_core::types::Position;

/// Advance projectiles and resolve hits against live enemies.
pub fn run(world: &mut World, dt: f32) {
    // Flight integration and lifespan expiry.
    for (_entity, (proj, pos)) in world.query_mut::<(&mut Projectile, &mut Position)>() {
        if !proj.active {
            continue;
        }
        pos.0 += proj.direction * proj.speed * dt;
        proj.lifespan_secs -= dt;
        if proj.lifespan_secs <= 0.0 {
            proj.active = false;
        }
    }

    // Collision pass over pre-collected snapshots so damage application
    // can take the world mutably per hit.
    let projectiles: Vec<(hecs::Entity, Vec3, i32)> = {
        let mut query = world.query::<(&Projectile, &Position)>();
        query
            .iter()
            .filter(|(_entity, (proj, _pos))| proj.active)
            .map(|(entity, (proj, pos))| (entity, pos.0, proj.damage))
            .collect()
    };
    let enemies: Vec<(hecs::Entity, Vec3, f32)> = {
        let mut query = world.query::<(&EnemyMarker, &Position, &CollisionRadius, &Health)>();
        query
            .iter()
            .filter(|(_entity, (_marker, _pos, _radius, health))| health.alive())
            .map(|(entity, (_marker, pos, radius, _health))| (entity, pos.0, radius.0))
            .collect()
    };

    for (proj_entity, proj_pos, damage) in projectiles {
        for &(enemy_entity, enemy_pos, enemy_radius) in &enemies {
            let threshold = enemy_radius + PROJECTILE_RADIUS;
            if proj_pos.distance_squared(enemy_pos) >= threshold * threshold {
                continue;
            }

            // The enemy may have died to an earlier projectile this tick;
            // corpses don't absorb rounds.
            let Ok((health, flash)) =
                world.query_one_mut::<(&mut Health, &mut DamageFlash)>(enemy_entity)
            else {
                continue;
            };
            if !health.alive() {
                continue;
            }

            health.take(damage);
            flash.remaining_secs = DAMAGE_FLASH_SECS;

            if let Ok(mut proj) = world.get::<&mut Projectile>(proj_entity) {
                proj.active = false;
            }
            break;
        }
    }
}
