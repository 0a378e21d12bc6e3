//! Kill scoring system: counts each enemy death exactly once.
//!
//! The `KillCounted` latch makes the increment fire on the alive→dead
//! transition and never again, even though dead enemies stay in the
//! world until the next wave prunes them.

use hecs::World;

use skirmish_core::components::{EnemyId, EnemyMarker, Health, KillCounted};
use skirmish_core::events::AudioEvent;

use crate::director::ScoreState;

/// Count newly observed enemy deaths.
pub fn run(world: &mut World, score: &mut ScoreState, audio_events: &mut Vec<AudioEvent>) {
    for (_entity, (_marker, id, health, counted)) in
        world.query_mut::<(&EnemyMarker, &EnemyId, &Health, &mut KillCounted)>()
    {
        if !health.alive() && !counted.0 {
            counted.0 = true;
            score.kills += 1;
            audio_events.push(AudioEvent::EnemyKilled { enemy_id: id.0 });
        }
    }
}
