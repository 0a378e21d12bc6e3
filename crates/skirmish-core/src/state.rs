//! Game state snapshot — the complete visible state produced each tick.
//!
//! The render layer draws from it, the HUD reads ammo/wave/score from it,
//! and the audio layer drains its events. Nothing outside the simulation
//! ever touches the world directly.

use serde::{Deserialize, Serialize};

use crate::enums::GamePhase;
use crate::events::AudioEvent;
use crate::types::{Position, SimTime};

/// Complete game state after one tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub player: PlayerView,
    pub weapon: WeaponView,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    pub wave: WaveView,
    pub score: ScoreView,
    pub audio_events: Vec<AudioEvent>,
}

/// Player state the camera and HUD consume.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    pub pitch_deg: f32,
    pub yaw_deg: f32,
    pub roll_deg: f32,
    pub health: i32,
    pub max_health: i32,
    pub grounded: bool,
    pub alive: bool,
    /// Remaining red-flash time for the damage overlay.
    pub damage_flash_secs: f32,
}

/// Weapon state for the HUD ammo counter and reload bar.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeaponView {
    pub current_ammo: u32,
    pub max_ammo: u32,
    pub is_reloading: bool,
    /// Reload progress in [0, reload_secs].
    pub reload_progress: f32,
    pub reload_secs: f32,
}

/// One enemy draw record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u32,
    pub position: Position,
    /// Yaw tracking the player.
    pub yaw_deg: f32,
    /// Fixed model-upright rotation on the other axis.
    pub upright_deg: f32,
    pub health: i32,
    pub max_health: i32,
    pub alive: bool,
    pub damage_flash_secs: f32,
}

/// One projectile draw record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Position,
}

/// Wave director state for the HUD wave/enemy counters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WaveView {
    pub wave_number: u32,
    pub enemies_per_wave: u32,
    pub max_active_enemies: u32,
    pub enemies_alive: u32,
    pub wave_cleared: bool,
    pub wave_spawned: bool,
    /// Remaining delay before the next wave spawns.
    pub spawn_cooldown_secs: f32,
}

/// Running score.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub kills: u32,
}
