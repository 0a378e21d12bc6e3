//! Melee contact system: enemies in range chip the player's health.
//!
//! Each enemy id gets at most one hit per rolling cooldown window,
//! independent of frame rate, enforced through the director's per-id
//! timestamp map on the monotonic simulation clock.

use hecs::World;

use skirmish_core::components::{DamageFlash, EnemyId, EnemyMarker, Health, PlayerMarker};
use skirmish_core::constants::{DAMAGE_FLASH_SECS, MELEE_COOLDOWN_SECS, MELEE_DAMAGE, MELEE_RANGE};
use skirmish_core::events::AudioEvent;
use skirmish_core::types::Position;

use crate::director::WaveState;

/// Check enemy-player contact and apply cooldown-gated melee damage.
pub fn run(world: &mut World, wave: &mut WaveState, now: f64, audio_events: &mut Vec<AudioEvent>) {
    let (player_entity, player_pos) = {
        let mut query = world.query::<(&PlayerMarker, &Position)>();
        match query.iter().next() {
            Some((entity, (_marker, pos))) => (entity, *pos),
            None => return,
        }
    };

    let mut hitters: Vec<u32> = Vec::new();
    {
        let mut query = world.query::<(&EnemyMarker, &EnemyId, &Position, &Health)>();
        for (_entity, (_marker, id, pos, health)) in query.iter() {
            if !health.alive() {
                continue;
            }
            if pos.horizontal_distance_sq_to(&player_pos) < MELEE_RANGE * MELEE_RANGE {
                let off_cooldown = match wave.damage_cooldowns.get(&id.0) {
                    Some(&last_hit) => now - last_hit >= MELEE_COOLDOWN_SECS,
                    None => true,
                };
                if off_cooldown {
                    hitters.push(id.0);
                }
            }
        }
    }

    for id in hitters {
        wave.damage_cooldowns.insert(id, now);

        if let Ok((health, flash)) =
            world.query_one_mut::<(&mut Health, &mut DamageFlash)>(player_entity)
        {
            if !health.alive() {
                break;
            }
            let died = health.take(MELEE_DAMAGE);
            flash.remaining_secs = DAMAGE_FLASH_SECS;
            audio_events.push(AudioEvent::PlayerHit {
                health: health.current,
            });
            if died {
                audio_events.push(AudioEvent::PlayerDied);
            }
        }
    }
}
