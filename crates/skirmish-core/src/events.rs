//! Events emitted by the simulation for audio and UI feedback.
//!
//! Fire-and-forget: the engine buffers events during a tick and drains
//! them into the snapshot; the frontend plays or displays them and
//! expects nothing back.

use serde::{Deserialize, Serialize};

/// Audio/feedback events for the frontend sound system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// A round left the barrel.
    ShotFired { ammo_remaining: u32 },
    /// Trigger pulled on an empty magazine.
    DryFire,
    /// Reload began.
    ReloadStarted,
    /// Magazine refilled.
    ReloadCompleted,
    /// The player took melee damage.
    PlayerHit { health: i32 },
    /// The player's health reached zero.
    PlayerDied,
    /// An enemy's death was counted.
    EnemyKilled { enemy_id: u32 },
    /// A new wave spawned.
    WaveStarted { wave: u32, enemies: u32 },
    /// The last enemy of a wave died.
    WaveCleared { wave: u32 },
}
