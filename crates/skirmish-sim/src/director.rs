//! Wave director state: the cyclic wave lifecycle and scoring.

use std::collections::HashMap;

use skirmish_core::constants::{INITIAL_ENEMIES_PER_WAVE, INITIAL_MAX_ACTIVE_ENEMIES};

/// Wave lifecycle state. Cycles Spawning → Active → Cleared → Cooldown
/// for as long as the run lasts; never terminal.
#[derive(Debug, Clone)]
pub struct WaveState {
    /// Current wave, starting at 1.
    pub wave_number: u32,
    /// Enemies spawned per wave; grows by one each clearance.
    pub enemies_per_wave: u32,
    /// Escalating cap on concurrently active enemies (hard-capped at 10).
    pub max_active_enemies: u32,
    /// Remaining delay before the next wave spawns.
    pub spawn_cooldown_secs: f32,
    /// Set when the last live enemy of a spawned wave dies.
    pub wave_cleared: bool,
    /// Set once a wave has fully spawned; clearance requires it.
    pub wave_spawned: bool,
    /// Enemy id → simulation time of its last melee hit on the player.
    pub damage_cooldowns: HashMap<u32, f64>,
}

impl Default for WaveState {
    fn default() -> Self {
        Self {
            wave_number: 1,
            enemies_per_wave: INITIAL_ENEMIES_PER_WAVE,
            max_active_enemies: INITIAL_MAX_ACTIVE_ENEMIES,
            spawn_cooldown_secs: 0.0,
            // Cleared with zero cooldown so the first wave spawns on the
            // first active tick.
            wave_cleared: true,
            wave_spawned: false,
            damage_cooldowns: HashMap::new(),
        }
    }
}

/// Running score. Kills only count on the alive→dead transition.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreState {
    pub kills: u32,
}
