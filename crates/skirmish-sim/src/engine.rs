//! Simulation engine — the combat loop.
//!
//! `SimEngine` owns the hecs ECS world, the terrain, the wave director,
//! and the RNG; processes queued commands at tick boundaries; runs the
//! system pipeline in its fixed order; and produces `GameStateSnapshot`s.
//! Completely headless — rendering, audio, and input devices live on the
//! other side of the snapshot/event boundary.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use skirmish_core::commands::{FrameInput, PlayerCommand};
use skirmish_core::components::{Health, PlayerMarker};
use skirmish_core::constants::DT;
use skirmish_core::enums::GamePhase;
use skirmish_core::events::AudioEvent;
use skirmish_core::state::GameStateSnapshot;
use skirmish_core::types::SimTime;
use skirmish_terrain::HeightField;

use crate::director::{ScoreState, WaveState};
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG and terrain seed. Same seed + same inputs = same simulation.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    terrain: HeightField,
    next_enemy_id: u32,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    audio_events: Vec<AudioEvent>,
    wave: WaveState,
    score: ScoreState,
}

impl SimEngine {
    /// Create a new engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            terrain: HeightField::generate(config.seed),
            next_enemy_id: 0,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            audio_events: Vec::new(),
            wave: WaveState::default(),
            score: ScoreState::default(),
        }
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Advance the simulation one tick and return the resulting snapshot.
    /// `input` is this frame's continuous input state; it only has effect
    /// while the game is `Active`.
    pub fn tick(&mut self, input: &FrameInput) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems(input);
            self.time.advance();

            // Player death is the one terminal condition of the loop.
            if !self.player_alive() {
                self.phase = GamePhase::GameOver;
            }
        }

        let audio_events = std::mem::take(&mut self.audio_events);
        systems::snapshot::build(
            &self.world,
            &self.time,
            self.phase,
            &self.wave,
            &self.score,
            audio_events,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a read-only reference to the terrain heightfield.
    pub fn terrain(&self) -> &HeightField {
        &self.terrain
    }

    /// Get a mutable reference to the world (for test scenario setup).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Spawn an enemy at an explicit position with explicit health
    /// (for tests needing controlled scenarios).
    #[cfg(test)]
    pub fn spawn_enemy_at(&mut self, x: f32, z: f32, health: i32) -> hecs::Entity {
        let y = self.terrain.height_at(x, z);
        world_setup::spawn_enemy_at(
            &mut self.world,
            skirmish_core::types::Position::new(x, y, z),
            health,
            &mut self.next_enemy_id,
        )
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single discrete command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartGame => {
                if matches!(self.phase, GamePhase::MainMenu | GamePhase::GameOver) {
                    self.world.clear();
                    world_setup::spawn_player(&mut self.world);
                    self.wave = WaveState::default();
                    self.score = ScoreState::default();
                    self.next_enemy_id = 0;
                    self.time = SimTime::default();
                    self.audio_events.clear();
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
        }
    }

    /// Run all systems in their fixed intra-tick order. Correctness
    /// depends on this ordering: enemies are damage-checked before any
    /// prune, and projectiles see pre-prune target lists.
    fn run_systems(&mut self, input: &FrameInput) {
        let now = self.time.elapsed_secs;

        // 1. Continuous input: look, move, jump, reload, fire.
        systems::input::run(&mut self.world, input, now, &mut self.audio_events);
        // 2. Weapon reload progress.
        systems::weapon::run(&mut self.world, DT, &mut self.audio_events);
        // 3. Player physics and terrain grounding.
        systems::player_motion::run(&mut self.world, &self.terrain, DT);
        // 4. Wave director: clearance, cooldown, spawning.
        systems::waves::run(
            &mut self.world,
            &mut self.rng,
            &mut self.wave,
            &self.terrain,
            &mut self.next_enemy_id,
            DT,
            &mut self.despawn_buffer,
            &mut self.audio_events,
        );
        // 5. Enemy pursuit, facing, terrain snap.
        systems::enemy_ai::run(&mut self.world, &self.terrain, DT);
        // 6. Melee contact damage with per-id cooldowns.
        systems::melee::run(&mut self.world, &mut self.wave, now, &mut self.audio_events);
        // 7. Projectile flight and hits.
        systems::projectiles::run(&mut self.world, DT);
        // 8. Score newly observed deaths.
        systems::scoring::run(&mut self.world, &mut self.score, &mut self.audio_events);
        // 9. Prune spent projectiles.
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }

    /// Whether a live player exists in the world.
    fn player_alive(&self) -> bool {
        let mut query = self.world.query::<(&PlayerMarker, &Health)>();
        query
            .iter()
            .next()
            .is_some_and(|(_entity, (_marker, health))| health.alive())
    }
}
