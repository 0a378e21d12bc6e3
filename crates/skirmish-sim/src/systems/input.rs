//! Frame input system: mouse look, movement, jump, reload, fire.
//!
//! Acceleration reflects only the keys held this frame — it is zeroed and
//! rebuilt on every pass rather than accumulated. Firing delegates the
//! ammo/cooldown gate to the weapon; a successful shot spawns a projectile
//! from the eye along the view direction.

use glam::Vec3;
use hecs::World;

use skirmish_core::commands::FrameInput;
use skirmish_core::components::{Grounded, Health, PlayerMarker};
use skirmish_core::constants::{EYE_HEIGHT, JUMP_FORCE, MOVE_SPEED, MUZZLE_OFFSET};
use skirmish_core::events::AudioEvent;
use skirmish_core::types::{Acceleration, Orientation, Position, Velocity};
use skirmish_core::weapon::Weapon;

use crate::world_setup;

/// Apply one frame of input to the player.
pub fn run(world: &mut World, input: &FrameInput, now: f64, audio_events: &mut Vec<AudioEvent>) {
    // (spawn position, direction, damage) for a shot fired this frame.
    // Buffered because the world cannot spawn mid-query.
    let mut shot: Option<(Position, Vec3, i32)> = None;

    for (_entity, (_marker, orientation, pos, vel, accel, grounded, weapon, health)) in world
        .query_mut::<(
            &PlayerMarker,
            &mut Orientation,
            &Position,
            &mut Velocity,
            &mut Acceleration,
            &mut Grounded,
            &mut Weapon,
            &Health,
        )>()
    {
        if !health.alive() {
            continue;
        }

        orientation.look(input.mouse_dx, input.mouse_dy);

        let forward = orientation.forward();
        let right = orientation.right();

        // Rebuild horizontal acceleration from currently held keys.
        accel.0.x = 0.0;
        accel.0.z = 0.0;
        if input.move_forward {
            accel.0 += forward * MOVE_SPEED;
        }
        if input.move_back {
            accel.0 -= forward * MOVE_SPEED;
        }
        if input.strafe_left {
            accel.0 -= right * MOVE_SPEED;
        }
        if input.strafe_right {
            accel.0 += right * MOVE_SPEED;
        }

        if input.jump && grounded.0 {
            vel.0.y = JUMP_FORCE;
            grounded.0 = false;
        }

        if input.reload && weapon.start_reload() {
            audio_events.push(AudioEvent::ReloadStarted);
        }

        if input.fire {
            if weapon.shoot(now) {
                audio_events.push(AudioEvent::ShotFired {
                    ammo_remaining: weapon.current_ammo,
                });
                let direction = orientation.view_dir();
                let muzzle = Position(
                    pos.0 + direction * MUZZLE_OFFSET + Vec3::new(0.0, EYE_HEIGHT, 0.0),
                );
                shot = Some((muzzle, direction, weapon.damage));
            } else if weapon.current_ammo == 0 && !weapon.is_reloading {
                audio_events.push(AudioEvent::DryFire);
            }
        }
    }

    if let Some((position, direction, damage)) = shot {
        world_setup::spawn_projectile(world, position, direction, damage);
    }
}
