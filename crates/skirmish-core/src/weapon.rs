//! Weapon state machine: ready / cooling down / reloading.
//!
//! Magazine-only ammo model — a reload always refills to capacity and
//! there is no finite reserve pool. Every fallible operation returns a
//! bool; failures (out of ammo, cooling down, already reloading) are
//! expected steady-state outcomes, never errors.

use serde::{Deserialize, Serialize};

use crate::constants::{FIRE_COOLDOWN_SECS, MAGAZINE_SIZE, RELOAD_SECS, WEAPON_DAMAGE};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Weapon {
    pub max_ammo: u32,
    pub current_ammo: u32,
    pub damage: i32,
    /// Minimum time between shots (seconds on the simulation clock).
    pub cooldown_secs: f64,
    /// Simulation time of the last successful shot. None until first fired.
    pub last_shot_time: Option<f64>,
    pub is_reloading: bool,
    /// Accumulated reload time, `0 <= progress <= reload_secs`.
    pub reload_progress: f32,
    pub reload_secs: f32,
}

impl Default for Weapon {
    fn default() -> Self {
        Self {
            max_ammo: MAGAZINE_SIZE,
            current_ammo: MAGAZINE_SIZE,
            damage: WEAPON_DAMAGE,
            cooldown_secs: FIRE_COOLDOWN_SECS,
            last_shot_time: None,
            is_reloading: false,
            reload_progress: 0.0,
            reload_secs: RELOAD_SECS,
        }
    }
}

impl Weapon {
    /// Attempt to fire at simulation time `now`. Fails without state change
    /// while reloading, within the cooldown window, or with an empty
    /// magazine; otherwise spends one round and records the shot time.
    pub fn shoot(&mut self, now: f64) -> bool {
        if self.is_reloading {
            return false;
        }
        if let Some(last) = self.last_shot_time {
            if now - last < self.cooldown_secs {
                return false;
            }
        }
        if self.current_ammo == 0 {
            return false;
        }

        self.current_ammo -= 1;
        self.last_shot_time = Some(now);
        true
    }

    /// Begin reloading. Fails if already reloading or the magazine is full.
    pub fn start_reload(&mut self) -> bool {
        if self.is_reloading || self.current_ammo == self.max_ammo {
            return false;
        }
        self.is_reloading = true;
        self.reload_progress = 0.0;
        true
    }

    /// Advance reload progress. Returns true on the update that completes
    /// the reload, refilling the magazine.
    pub fn update(&mut self, dt: f32) -> bool {
        if !self.is_reloading {
            return false;
        }
        self.reload_progress += dt;
        if self.reload_progress >= self.reload_secs {
            self.current_ammo = self.max_ammo;
            self.is_reloading = false;
            self.reload_progress = 0.0;
            return true;
        }
        false
    }
}
