//! Player physics system: gravity, integration, drag, terrain grounding.

use hecs::World;

use skirmish_core::components::{DamageFlash, Grounded, Health, PlayerMarker};
use skirmish_core::constants::{GRAVITY, GROUND_EPSILON, HORIZONTAL_DRAG};
use skirmish_core::types::{Acceleration, Position, Velocity};
use skirmish_terrain::HeightField;

/// Integrate player motion for one tick and resolve terrain contact.
pub fn run(world: &mut World, terrain: &HeightField, dt: f32) {
    for (_entity, (_marker, pos, vel, accel, grounded, flash, health)) in world.query_mut::<(
        &PlayerMarker,
        &mut Position,
        &mut Velocity,
        &mut Acceleration,
        &mut Grounded,
        &mut DamageFlash,
        &Health,
    )>() {
        if !health.alive() {
            continue;
        }

        accel.0.y = if grounded.0 { 0.0 } else { GRAVITY };

        vel.0 += accel.0 * dt;

        // Horizontal drag as a per-second decay rate, so behavior holds
        // under any dt.
        let damping = (-HORIZONTAL_DRAG * dt).exp();
        vel.0.x *= damping;
        vel.0.z *= damping;

        pos.0 += vel.0 * dt;

        let ground = terrain.height_at(pos.0.x, pos.0.z);
        if pos.0.y < ground {
            // Below the surface: snap up and land.
            pos.0.y = ground;
            vel.0.y = 0.0;
            grounded.0 = true;
        } else if pos.0.y - ground < GROUND_EPSILON {
            grounded.0 = true;
        } else {
            grounded.0 = false;
        }

        if flash.remaining_secs > 0.0 {
            flash.remaining_secs = (flash.remaining_secs - dt).max(0.0);
        }
    }
}
