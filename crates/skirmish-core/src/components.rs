//! ECS components for hecs entities.
//!
//! Components are plain data structs; per-tick logic lives in systems.
//! The few inherent methods here (health accounting) encode the damage
//! contract shared by melee and projectile systems.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Marks the player entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerMarker;

/// Marks an enemy entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnemyMarker;

/// Marks a projectile entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ProjectileMarker;

/// Stable numeric identity assigned at spawn from a monotonic counter.
/// Keys the melee damage-cooldown map; never reused within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnemyId(pub u32);

/// Hit points. `0 <= current <= max`; death (current == 0) is terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

impl Health {
    pub fn new(max: i32) -> Self {
        Self { current: max, max }
    }

    pub fn alive(&self) -> bool {
        self.current > 0
    }

    /// Apply damage, flooring at zero. No-op on the dead. Returns whether
    /// this call crossed to death, so callers react to the transition once.
    pub fn take(&mut self, amount: i32) -> bool {
        if !self.alive() {
            return false;
        }
        self.current = (self.current - amount).max(0);
        self.current == 0
    }
}

/// Horizontal-cylinder collision radius.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CollisionRadius(pub f32);

/// Whether the actor is resting on the terrain surface.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Grounded(pub bool);

/// Straight-line pursuit parameters. The target is re-set to the player's
/// position every tick by the enemy AI system.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Seeker {
    pub speed: f32,
}

/// Yaw the enemy model is turned to, tracking the player.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Facing {
    pub yaw_deg: f32,
}

/// Transient red-flash timer armed by `take_damage`, consumed by rendering.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DamageFlash {
    pub remaining_secs: f32,
}

/// Scoring latch: set once when a kill has been counted, so the score
/// increments on the alive→dead transition and never again.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct KillCounted(pub bool);

/// Projectile flight state. Exactly one hit per projectile: the first
/// qualifying target deactivates it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    /// Unit travel direction.
    pub direction: Vec3,
    /// Travel speed (units/s).
    pub speed: f32,
    /// Damage applied to the first target hit.
    pub damage: i32,
    /// Remaining flight time (seconds); expires at zero.
    pub lifespan_secs: f32,
    /// Cleared on hit or expiry; inactive projectiles are pruned.
    pub active: bool,
}
