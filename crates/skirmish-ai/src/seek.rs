//! Straight-line target pursuit.
//!
//! Enemies chase the player's current position with no pathfinding or
//! obstacle avoidance: step directly toward the target on the x/z plane,
//! never overshooting, and turn to face it.

use glam::Vec3;

use skirmish_core::constants::SEEK_EPSILON;

/// Input for one enemy's pursuit step.
pub struct SeekContext {
    pub position: Vec3,
    /// Target position, re-set to the player each tick.
    pub target: Vec3,
    /// Pursuit speed (units/s).
    pub speed: f32,
    /// Seconds this step covers.
    pub dt: f32,
}

/// Output of one pursuit step.
pub struct SeekUpdate {
    /// New position after the step. y is untouched; terrain snapping is
    /// the caller's concern.
    pub position: Vec3,
    /// Yaw toward the target, degrees.
    pub facing_yaw_deg: f32,
    /// False when within the arrival threshold (held still to avoid jitter).
    pub moved: bool,
}

/// Advance one enemy toward its target.
pub fn step(ctx: &SeekContext) -> SeekUpdate {
    let dx = ctx.target.x - ctx.position.x;
    let dz = ctx.target.z - ctx.position.z;
    let distance = (dx * dx + dz * dz).sqrt();

    let facing_yaw_deg = facing_toward(ctx.position, ctx.target);

    if distance <= SEEK_EPSILON || ctx.speed <= 0.0 {
        return SeekUpdate {
            position: ctx.position,
            facing_yaw_deg,
            moved: false,
        };
    }

    // Clamp the step to the remaining distance so the seeker never
    // overshoots and oscillates across the target.
    let step_len = (ctx.speed * ctx.dt).min(distance);
    let position = Vec3::new(
        ctx.position.x + dx / distance * step_len,
        ctx.position.y,
        ctx.position.z + dz / distance * step_len,
    );

    SeekUpdate {
        position,
        facing_yaw_deg,
        moved: true,
    }
}

/// Yaw (degrees) turning `from` to look at `to` on the x/z plane.
pub fn facing_toward(from: Vec3, to: Vec3) -> f32 {
    let dx = from.x - to.x;
    let dz = from.z - to.z;
    dx.atan2(dz).to_degrees()
}
