//! Fundamental geometric and simulation types.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::{MOUSE_SENSITIVITY, PITCH_LIMIT_DEG, TICK_RATE};

/// World-space position. x/z span the terrain plane, y is up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec3);

/// Velocity in world units per second.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Vec3);

/// Acceleration in world units per second squared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Acceleration(pub Vec3);

impl Position {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self(Vec3::new(x, y, z))
    }

    /// Squared distance on the x/z plane (cylinder collision tests ignore y).
    pub fn horizontal_distance_sq_to(&self, other: &Position) -> f32 {
        let dx = self.0.x - other.0.x;
        let dz = self.0.z - other.0.z;
        dx * dx + dz * dz
    }

    /// Distance on the x/z plane.
    pub fn horizontal_distance_to(&self, other: &Position) -> f32 {
        self.horizontal_distance_sq_to(other).sqrt()
    }
}

/// View orientation in degrees: pitch (up/down), yaw (left/right), roll.
///
/// Pitch is clamped to ±[`PITCH_LIMIT_DEG`]; yaw is kept in [0, 360).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Orientation {
    pub pitch_deg: f32,
    pub yaw_deg: f32,
    pub roll_deg: f32,
}

impl Orientation {
    /// Apply one frame of mouse movement.
    pub fn look(&mut self, mouse_dx: f32, mouse_dy: f32) {
        self.yaw_deg = (self.yaw_deg + mouse_dx * MOUSE_SENSITIVITY).rem_euclid(360.0);
        self.pitch_deg =
            (self.pitch_deg - mouse_dy * MOUSE_SENSITIVITY).clamp(-PITCH_LIMIT_DEG, PITCH_LIMIT_DEG);
    }

    /// Horizontal forward basis vector derived from yaw.
    pub fn forward(&self) -> Vec3 {
        let yaw = self.yaw_deg.to_radians();
        Vec3::new(yaw.sin(), 0.0, -yaw.cos())
    }

    /// Horizontal right basis vector derived from yaw.
    pub fn right(&self) -> Vec3 {
        let yaw = self.yaw_deg.to_radians();
        Vec3::new(yaw.cos(), 0.0, yaw.sin())
    }

    /// Unit view direction from pitch and yaw. Projectiles travel along it.
    pub fn view_dir(&self) -> Vec3 {
        let pitch = self.pitch_deg.to_radians();
        let yaw = self.yaw_deg.to_radians();
        Vec3::new(
            yaw.sin() * pitch.cos(),
            -pitch.sin(),
            -yaw.cos() * pitch.cos(),
        )
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds. The monotonic clock every
    /// cooldown comparison uses.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Seconds per tick at the fixed tick rate.
    pub fn dt(&self) -> f64 {
        1.0 / TICK_RATE as f64
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}
