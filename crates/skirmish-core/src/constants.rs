//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz). One tick per rendered frame.
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f32 = 1.0 / TICK_RATE as f32;

// --- Player physics ---

/// Gravitational acceleration (units/s²).
pub const GRAVITY: f32 = -9.8;

/// Horizontal acceleration from held movement keys (units/s²).
pub const MOVE_SPEED: f32 = 20.0;

/// Upward velocity applied by a grounded jump (units/s).
pub const JUMP_FORCE: f32 = 4.5;

/// Horizontal velocity decay rate (per second).
/// Equivalent to the 0.9-per-frame multiplier at the 60 Hz tick rate,
/// expressed as exp(-HORIZONTAL_DRAG * dt) so it holds under any dt.
pub const HORIZONTAL_DRAG: f32 = 6.32;

/// Distance above terrain within which the player still counts as grounded.
pub const GROUND_EPSILON: f32 = 0.1;

/// Mouse delta to rotation degrees.
pub const MOUSE_SENSITIVITY: f32 = 0.2;

/// Pitch clamp, degrees either side of level.
pub const PITCH_LIMIT_DEG: f32 = 89.0;

/// Eye level above the player's feet, in world units.
pub const EYE_HEIGHT: f32 = 1.8;

/// Player collision cylinder radius.
pub const PLAYER_RADIUS: f32 = 0.5;

/// Player starting and maximum health.
pub const PLAYER_MAX_HEALTH: i32 = 100;

/// Player spawn height above the origin, so the first tick settles onto terrain.
pub const PLAYER_SPAWN_HEIGHT: f32 = 2.0;

// --- Damage feedback ---

/// Duration of the damage flash consumed by the renderer (seconds).
pub const DAMAGE_FLASH_SECS: f32 = 0.3;

// --- Weapon ---

/// Magazine capacity.
pub const MAGAZINE_SIZE: u32 = 7;

/// Damage per round.
pub const WEAPON_DAMAGE: i32 = 40;

/// Minimum time between shots (seconds).
pub const FIRE_COOLDOWN_SECS: f64 = 0.3;

/// Full reload duration (seconds).
pub const RELOAD_SECS: f32 = 2.0;

// --- Projectiles ---

/// Projectile travel speed (units/s).
pub const PROJECTILE_SPEED: f32 = 40.0;

/// Projectile lifetime before despawn (seconds).
pub const PROJECTILE_LIFESPAN_SECS: f32 = 2.0;

/// Projectile collision sphere radius.
pub const PROJECTILE_RADIUS: f32 = 0.1;

/// Forward offset from the player's eye at spawn.
pub const MUZZLE_OFFSET: f32 = 0.5;

// --- Enemies ---

/// Enemy pursuit speed (units/s).
pub const ENEMY_SPEED: f32 = 1.0;

/// Enemy collision radius.
pub const ENEMY_RADIUS: f32 = 1.0;

/// Enemy health roll bounds, inclusive.
pub const ENEMY_HEALTH_MIN: i32 = 80;
pub const ENEMY_HEALTH_MAX: i32 = 120;

/// Height above terrain enemies hover at.
pub const ENEMY_HOVER_HEIGHT: f32 = 1.0;

/// Height above terrain enemies spawn at.
pub const ENEMY_SPAWN_HEIGHT: f32 = 1.5;

/// Seek arrival threshold preventing jitter at the target (units).
pub const SEEK_EPSILON: f32 = 0.1;

/// Fixed rotation about the upright axis the renderer applies to enemy
/// models; the other axis tracks the player.
pub const ENEMY_UPRIGHT_DEG: f32 = 270.0;

// --- Melee ---

/// Contact-damage range between an enemy and the player (units). Distinct
/// from the summed collision radii.
pub const MELEE_RANGE: f32 = 1.5;

/// Contact damage per hit.
pub const MELEE_DAMAGE: i32 = 5;

/// Minimum time between hits from the same enemy id (seconds).
pub const MELEE_COOLDOWN_SECS: f64 = 1.0;

// --- Waves ---

/// Enemies in the first wave.
pub const INITIAL_ENEMIES_PER_WAVE: u32 = 3;

/// Initial cap on concurrently active enemies.
pub const INITIAL_MAX_ACTIVE_ENEMIES: u32 = 5;

/// Hard cap on the active-enemy limit as waves escalate.
pub const MAX_ACTIVE_ENEMIES_CAP: u32 = 10;

/// Delay between clearing a wave and spawning the next (seconds).
pub const WAVE_COOLDOWN_SECS: f32 = 3.0;

/// Spawn ring around the player, inner and outer radius (units).
pub const SPAWN_RADIUS_MIN: f32 = 15.0;
pub const SPAWN_RADIUS_MAX: f32 = 25.0;

// --- Terrain ---

/// Terrain side length in world units, centered on the origin.
pub const TERRAIN_SIZE: f32 = 100.0;

/// Heightmap grid resolution (cells per side).
pub const TERRAIN_RESOLUTION: usize = 50;

/// Octaves of noise layered into the heightmap.
pub const TERRAIN_OCTAVES: u32 = 4;

/// Lattice cells across the coarsest noise octave.
pub const TERRAIN_BASE_CELLS: usize = 8;

/// Amplitude falloff per octave.
pub const TERRAIN_PERSISTENCE: f32 = 0.5;

/// Frequency growth per octave.
pub const TERRAIN_LACUNARITY: f32 = 2.0;

/// Overall height scale applied to the accumulated noise.
pub const TERRAIN_HEIGHT_SCALE: f32 = 2.0;

/// Heights below this are flattened into valleys.
pub const TERRAIN_VALLEY_THRESHOLD: f32 = -0.3;

/// Slope retained below the valley threshold.
pub const TERRAIN_VALLEY_FLATTEN: f32 = 0.3;
