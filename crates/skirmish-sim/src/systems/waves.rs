//! Wave director system: clearance detection, spawn cooldown, wave spawns.
//!
//! The wave lifecycle cycles Spawning → Active → Cleared → Cooldown.
//! Dead enemies persist in the world (for scoring and rendering) until
//! the next spawn pass prunes them.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use skirmish_core::components::{EnemyMarker, Health};
use skirmish_core::constants::{MAX_ACTIVE_ENEMIES_CAP, WAVE_COOLDOWN_SECS};
use skirmish_core::events::AudioEvent;
use skirmish_terrain::HeightField;

use crate::director::WaveState;
use crate::systems::player_position;
use crate::world_setup;

/// Advance the wave lifecycle one tick.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    wave: &mut WaveState,
    terrain: &HeightField,
    next_enemy_id: &mut u32,
    dt: f32,
    despawn_buffer: &mut Vec<Entity>,
    audio_events: &mut Vec<AudioEvent>,
) {
    let player_pos = match player_position(world) {
        Some(pos) => pos,
        None => return,
    };

    let live = world
        .query_mut::<(&EnemyMarker, &Health)>()
        .into_iter()
        .filter(|(_entity, (_marker, health))| health.alive())
        .count() as u32;

    // A fully-spawned wave with no survivors transitions to Cleared and
    // starts the respawn cooldown, escalating difficulty.
    if live == 0 && wave.wave_spawned {
        wave.wave_cleared = true;
        wave.wave_spawned = false;
        audio_events.push(AudioEvent::WaveCleared {
            wave: wave.wave_number,
        });
        wave.wave_number += 1;
        wave.enemies_per_wave += 1;
        wave.max_active_enemies = (wave.max_active_enemies + 1).min(MAX_ACTIVE_ENEMIES_CAP);
        wave.spawn_cooldown_secs = WAVE_COOLDOWN_SECS;
    }

    if wave.wave_cleared {
        if wave.spawn_cooldown_secs <= 0.0 {
            spawn_wave(
                world,
                rng,
                wave,
                terrain,
                next_enemy_id,
                player_pos.0,
                despawn_buffer,
                audio_events,
            );
        } else {
            wave.spawn_cooldown_secs -= dt;
        }
    }
}

/// Prune dead enemies, then spawn the full wave around the player.
#[allow(clippy::too_many_arguments)]
fn spawn_wave(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    wave: &mut WaveState,
    terrain: &HeightField,
    next_enemy_id: &mut u32,
    player_pos: glam::Vec3,
    despawn_buffer: &mut Vec<Entity>,
    audio_events: &mut Vec<AudioEvent>,
) {
    despawn_buffer.clear();
    for (entity, (_marker, health)) in world.query_mut::<(&EnemyMarker, &Health)>() {
        if !health.alive() {
            despawn_buffer.push(entity);
        }
    }
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    for _ in 0..wave.enemies_per_wave {
        world_setup::spawn_enemy(world, rng, terrain, player_pos, next_enemy_id);
    }

    wave.wave_spawned = true;
    wave.wave_cleared = false;
    audio_events.push(AudioEvent::WaveStarted {
        wave: wave.wave_number,
        enemies: wave.enemies_per_wave,
    });
}
