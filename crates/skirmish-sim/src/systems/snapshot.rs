//! Snapshot system: flattens the world into the per-tick view the
//! render/HUD/audio layers consume.

use hecs::World;

use skirmish_core::components::{
    DamageFlash, EnemyId, EnemyMarker, Facing, Grounded, Health, PlayerMarker, Projectile,
    ProjectileMarker,
};
use skirmish_core::constants::ENEMY_UPRIGHT_DEG;
use skirmish_core::enums::GamePhase;
use skirmish_core::events::AudioEvent;
use skirmish_core::state::{
    EnemyView, GameStateSnapshot, PlayerView, ProjectileView, ScoreView, WaveView, WeaponView,
};
use skirmish_core::types::{Orientation, Position, SimTime};
use skirmish_core::weapon::Weapon;

use crate::director::{ScoreState, WaveState};

/// Build the complete snapshot for this tick.
pub fn build(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    wave: &WaveState,
    score: &ScoreState,
    audio_events: Vec<AudioEvent>,
) -> GameStateSnapshot {
    let mut player = PlayerView::default();
    let mut weapon_view = WeaponView::default();
    {
        let mut query = world.query::<(
            &PlayerMarker,
            &Position,
            &Orientation,
            &Health,
            &Grounded,
            &DamageFlash,
            &Weapon,
        )>();
        if let Some((_entity, (_marker, pos, orientation, health, grounded, flash, weapon))) =
            query.iter().next()
        {
            player = PlayerView {
                position: *pos,
                pitch_deg: orientation.pitch_deg,
                yaw_deg: orientation.yaw_deg,
                roll_deg: orientation.roll_deg,
                health: health.current,
                max_health: health.max,
                grounded: grounded.0,
                alive: health.alive(),
                damage_flash_secs: flash.remaining_secs,
            };
            weapon_view = WeaponView {
                current_ammo: weapon.current_ammo,
                max_ammo: weapon.max_ammo,
                is_reloading: weapon.is_reloading,
                reload_progress: weapon.reload_progress,
                reload_secs: weapon.reload_secs,
            };
        }
    }

    let mut enemies: Vec<EnemyView> = {
        let mut query =
            world.query::<(&EnemyMarker, &EnemyId, &Position, &Facing, &Health, &DamageFlash)>();
        query
            .iter()
            .map(|(_entity, (_marker, id, pos, facing, health, flash))| EnemyView {
                id: id.0,
                position: *pos,
                yaw_deg: facing.yaw_deg,
                upright_deg: ENEMY_UPRIGHT_DEG,
                health: health.current,
                max_health: health.max,
                alive: health.alive(),
                damage_flash_secs: flash.remaining_secs,
            })
            .collect()
    };
    // Stable ordering regardless of archetype iteration order.
    enemies.sort_by_key(|view| view.id);
    let enemies_alive = enemies.iter().filter(|view| view.alive).count() as u32;

    let projectiles: Vec<ProjectileView> = {
        let mut query = world.query::<(&ProjectileMarker, &Position, &Projectile)>();
        query
            .iter()
            .filter(|(_entity, (_marker, _pos, proj))| proj.active)
            .map(|(_entity, (_marker, pos, _proj))| ProjectileView { position: *pos })
            .collect()
    };

    GameStateSnapshot {
        time: *time,
        phase,
        player,
        weapon: weapon_view,
        enemies,
        projectiles,
        wave: WaveView {
            wave_number: wave.wave_number,
            enemies_per_wave: wave.enemies_per_wave,
            max_active_enemies: wave.max_active_enemies,
            enemies_alive,
            wave_cleared: wave.wave_cleared,
            wave_spawned: wave.wave_spawned,
            spawn_cooldown_secs: wave.spawn_cooldown_secs,
        },
        score: ScoreView { kills: score.kills },
        audio_events,
    }
}
