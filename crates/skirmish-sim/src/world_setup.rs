//! Entity spawn factories for setting up the simulation world.

use glam::Vec3;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skirmish_core::components::*;
use skirmish_core::constants::*;
use skirmish_core::types::{Acceleration, Orientation, Position, Velocity};
use skirmish_core::weapon::Weapon;
use skirmish_terrain::HeightField;

/// Spawn the player at the origin, slightly above ground so the first
/// ticks settle onto the terrain.
pub fn spawn_player(world: &mut World) -> hecs::Entity {
    world.spawn((
        PlayerMarker,
        Position::new(0.0, PLAYER_SPAWN_HEIGHT, 0.0),
        Velocity::default(),
        Acceleration::default(),
        Orientation::default(),
        Grounded(false),
        Health::new(PLAYER_MAX_HEALTH),
        CollisionRadius(PLAYER_RADIUS),
        DamageFlash::default(),
        Weapon::default(),
    ))
}

/// Spawn a single enemy on the ring around the player: random angle,
/// random distance within the spawn band, health rolled in the enemy
/// health range, snapped to terrain height.
pub fn spawn_enemy(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    terrain: &HeightField,
    player_pos: Vec3,
    next_enemy_id: &mut u32,
) -> hecs::Entity {
    let angle: f32 = rng.gen_range(0.0..std::f32::consts::TAU);
    let distance: f32 = rng.gen_range(SPAWN_RADIUS_MIN..SPAWN_RADIUS_MAX);

    let x = player_pos.x + angle.sin() * distance;
    let z = player_pos.z + angle.cos() * distance;
    let y = terrain.height_at(x, z) + ENEMY_SPAWN_HEIGHT;

    let health = rng.gen_range(ENEMY_HEALTH_MIN..=ENEMY_HEALTH_MAX);

    spawn_enemy_at(world, Position::new(x, y, z), health, next_enemy_id)
}

/// Spawn an enemy at an explicit position with explicit health. Both
/// `health` and `max` are set to the same roll.
pub fn spawn_enemy_at(
    world: &mut World,
    position: Position,
    health: i32,
    next_enemy_id: &mut u32,
) -> hecs::Entity {
    let id = *next_enemy_id;
    *next_enemy_id += 1;

    world.spawn((
        EnemyMarker,
        EnemyId(id),
        position,
        Seeker { speed: ENEMY_SPEED },
        Facing::default(),
        Health {
            current: health,
            max: health,
        },
        CollisionRadius(ENEMY_RADIUS),
        DamageFlash::default(),
        KillCounted(false),
    ))
}

/// Spawn a projectile already in flight.
pub fn spawn_projectile(
    world: &mut World,
    position: Position,
    direction: Vec3,
    damage: i32,
) -> hecs::Entity {
    world.spawn((
        ProjectileMarker,
        position,
        Projectile {
            direction,
            speed: PROJECTILE_SPEED,
            damage,
            lifespan_secs: PROJECTILE_LIFESPAN_SECS,
            active: true,
        },
    ))
}
