//! Cleanup system: removes spent projectiles.
//!
//! Two-phase (collect, then despawn) into a pre-allocated buffer to avoid
//! mutating while iterating. Dead enemies are not pruned here — they
//! persist for scoring and rendering until the next wave spawn.

use hecs::{Entity, World};

use skirmish_core::components::Projectile;

/// Despawn projectiles deactivated by a hit or lifespan expiry.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, proj) in world.query_mut::<&Projectile>() {
        if !proj.active {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
