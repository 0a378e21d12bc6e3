//! Player input sent from the frontend to the simulation.
//!
//! Discrete commands are queued and applied at the next tick boundary.
//! Continuous input (mouse deltas, held keys) arrives as one `FrameInput`
//! per tick alongside the tick call.

use serde::{Deserialize, Serialize};

/// Discrete player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Start (or restart) a run: resets world, waves, and score.
    StartGame,
    /// Pause the simulation.
    Pause,
    /// Resume from pause.
    Resume,
}

/// One frame of continuous input state. Held-key flags reflect only the
/// current frame; the input system rebuilds acceleration from them each
/// tick rather than accumulating history.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FrameInput {
    /// Mouse movement since the previous frame, in device units.
    pub mouse_dx: f32,
    pub mouse_dy: f32,
    pub move_forward: bool,
    pub move_back: bool,
    pub strafe_left: bool,
    pub strafe_right: bool,
    pub jump: bool,
    /// Fire button held this frame.
    pub fire: bool,
    /// Reload key held this frame.
    pub reload: bool,
}
