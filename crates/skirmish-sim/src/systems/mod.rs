//! Per-tick systems operating on the simulation world.
//!
//! Systems are free functions taking `&mut World` plus whatever director
//! state they need. They do not own state — all state lives in components
//! or on the engine. The engine calls them in a fixed order each tick;
//! correctness depends on that order, not on locking.

use hecs::World;

use skirmish_core::components::PlayerMarker;
use skirmish_core::types::Position;

pub mod cleanup;
pub mod enemy_ai;
pub mod input;
pub mod melee;
pub mod player_motion;
pub mod projectiles;
pub mod scoring;
pub mod snapshot;
pub mod waves;
pub mod weapon;

/// Current player position, if a player exists.
pub(crate) fn player_position(world: &World) -> Option<Position> {
    let mut query = world.query::<(&PlayerMarker, &Position)>();
    query.iter().next().map(|(_entity, (_marker, pos))| *pos)
}
