//! Weapon upkeep system: advances reload progress each tick.

use hecs::World;

use skirmish_core::components::PlayerMarker;
use skirmish_core::events::AudioEvent;
use skirmish_core::weapon::Weapon;

/// Advance the player weapon's reload timer; emit completion.
pub fn run(world: &mut World, dt: f32, audio_events: &mut Vec<AudioEvent>) {
    for (_entity, (_marker, weapon)) in world.query_mut::<(&PlayerMarker, &mut Weapon)>() {
        if weapon.update(dt) {
            audio_events.push(AudioEvent::ReloadCompleted);
        }
    }
}
