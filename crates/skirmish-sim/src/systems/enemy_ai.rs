//! Enemy AI system: pursue the player, track facing, stick to terrain.
//!
//! Updates are buffered and applied after the query to avoid holding
//! borrows while mutating.

use glam::Vec3;
use hecs::World;

use skirmish_ai::seek::{self, SeekContext};
use skirmish_core::components::{DamageFlash, EnemyMarker, Facing, Health, Seeker};
use skirmish_core::constants::ENEMY_HOVER_HEIGHT;
use skirmish_core::types::Position;
use skirmish_terrain::HeightField;

use crate::systems::player_position;

/// Advance every live enemy toward the player's current position.
pub fn run(world: &mut World, terrain: &HeightField, dt: f32) {
    let player_pos = match player_position(world) {
        Some(pos) => pos,
        None => return,
    };

    let mut updates: Vec<(hecs::Entity, Vec3, f32)> = Vec::new();

    {
        let mut query = world.query::<(&EnemyMarker, &Position, &Seeker, &Health)>();
        for (entity, (_marker, pos, seeker, health)) in query.iter() {
            if !health.alive() {
                continue;
            }

            let update = seek::step(&SeekContext {
                position: pos.0,
                target: player_pos.0,
                speed: seeker.speed,
                dt,
            });

            // Hover a fixed offset above the terrain at the new footprint.
            let mut new_pos = update.position;
            new_pos.y = terrain.height_at(new_pos.x, new_pos.z) + ENEMY_HOVER_HEIGHT;

            updates.push((entity, new_pos, update.facing_yaw_deg));
        }
    }

    for (entity, new_pos, yaw_deg) in updates {
        if let Ok(mut pos) = world.get::<&mut Position>(entity) {
            pos.0 = new_pos;
        }
        if let Ok(mut facing) = world.get::<&mut Facing>(entity) {
            facing.yaw_deg = yaw_deg;
        }
    }

    // Damage flash decays only while the enemy lives; the renderer does
    // not draw dead enemies.
    for (_entity, (_marker, health, flash)) in
        world.query_mut::<(&EnemyMarker, &Health, &mut DamageFlash)>()
    {
        if health.alive() && flash.remaining_secs > 0.0 {
            flash.remaining_secs = (flash.remaining_secs - dt).max(0.0);
        }
    }
}
