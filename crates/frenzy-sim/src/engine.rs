//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use frenzy_core::commands::PlayerCommand;
use frenzy_core::components::{Facing, Player};
use frenzy_core::constants::{
    ENEMY_TARGET_COUNT, FIRE_COOLDOWN_TICKS, MISSED_SHOT_LIMIT, PLAYER_MOVE_SPEED,
    PLAYER_STARTING_LIFE, PLAYER_TURN_RATE,
};
use frenzy_core::enums::{GamePhase, TurnDirection};
use frenzy_core::events::GameEvent;
use frenzy_core::state::GameStateSnapshot;
use frenzy_core::types::{heading_vector, Position};

use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Live enemies maintained in the arena.
    pub enemy_count: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            enemy_count: ENEMY_TARGET_COUNT,
        }
    }
}

/// Run counters shown on the HUD.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Remaining life; enemy contact decrements it.
    pub life: i32,
    /// Confirmed projectile kills.
    pub score: u32,
    /// Projectiles lost without scoring.
    pub missed: u32,
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self {
            life: PLAYER_STARTING_LIFE,
            score: 0,
            missed: 0,
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    tick: u64,
    phase: GamePhase,
    assist_enabled: bool,
    cooldown: u32,
    board: Scoreboard,
    seed: u64,
    enemy_count: usize,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        let mut engine = Self {
            world: World::new(),
            tick: 0,
            phase: GamePhase::Playing,
            assist_enabled: false,
            cooldown: 0,
            board: Scoreboard::default(),
            seed: config.seed,
            enemy_count: config.enemy_count,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        };
        engine.restart();
        engine
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Playing {
            self.run_systems();
            self.tick += 1;
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            self.tick,
            self.phase,
            self.assist_enabled,
            self.cooldown,
            &self.board,
            events,
        )
    }

    /// Reset the run to its spawn state: fresh world, player at the grid
    /// center, full life, counters cleared, enemies repopulated. The RNG is
    /// re-seeded so a restarted run replays identically for a given seed.
    /// Assist mode is a toggle, not run state, and survives the reset.
    pub fn restart(&mut self) {
        self.world = World::new();
        self.rng = ChaCha8Rng::seed_from_u64(self.seed);
        self.tick = 0;
        self.phase = GamePhase::Playing;
        self.cooldown = 0;
        self.board = Scoreboard::default();
        self.events.clear();
        self.despawn_buffer.clear();

        world_setup::setup_arena(&mut self.world);
        for _ in 0..self.enemy_count {
            world_setup::spawn_enemy(&mut self.world, &mut self.rng);
        }
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current tick count.
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Whether autonomous aim-and-fire is active.
    pub fn assist_enabled(&self) -> bool {
        self.assist_enabled
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    /// Once the run has ended, only a restart is accepted.
    fn handle_command(&mut self, command: PlayerCommand) {
        if self.phase == GamePhase::GameOver && !matches!(command, PlayerCommand::Restart) {
            return;
        }

        match command {
            PlayerCommand::Move { forward } => {
                let step = if forward {
                    PLAYER_MOVE_SPEED
                } else {
                    -PLAYER_MOVE_SPEED
                };
                for (_entity, (_player, pos, facing)) in
                    self.world.query_mut::<(&Player, &mut Position, &Facing)>()
                {
                    let dir = heading_vector(facing.yaw_deg);
                    pos.x += dir.x * step;
                    pos.y += dir.y * step;
                }
            }
            PlayerCommand::Turn { direction } => {
                let delta = match direction {
                    TurnDirection::Left => PLAYER_TURN_RATE,
                    TurnDirection::Right => -PLAYER_TURN_RATE,
                };
                for (_entity, (_player, facing)) in
                    self.world.query_mut::<(&Player, &mut Facing)>()
                {
                    facing.yaw_deg += delta;
                }
            }
            PlayerCommand::Fire => self.try_fire(),
            PlayerCommand::ToggleAssist => self.assist_enabled = !self.assist_enabled,
            PlayerCommand::Restart => self.restart(),
        }
    }

    /// Attempt to fire a projectile. A no-op while on cooldown or after
    /// game over.
    fn try_fire(&mut self) {
        if self.phase == GamePhase::GameOver || self.cooldown > 0 {
            return;
        }

        let (origin, yaw_deg) = world_setup::player_pose(&self.world);
        world_setup::spawn_projectile(&mut self.world, &origin, yaw_deg);
        self.cooldown = FIRE_COOLDOWN_TICKS;
        self.events.push(GameEvent::ShotFired);
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Targeting assist: spin the aim, fire on line of sight.
        if self.assist_enabled {
            systems::assist::spin(&mut self.world);
            if systems::assist::has_line_of_sight(&self.world) {
                self.try_fire();
            }
        }
        // 2. Cooldown
        if self.cooldown > 0 {
            self.cooldown -= 1;
        }
        // 3. Projectile advance and expiry
        systems::projectiles::run(
            &mut self.world,
            &mut self.board,
            &mut self.despawn_buffer,
            &mut self.events,
        );
        // 4. Enemy pursuit
        systems::enemies::run(&mut self.world);
        // 5-6. Collision resolution (projectile vs enemy, enemy vs player)
        systems::collision::run(&mut self.world, &mut self.board, &mut self.events);
        // 7. Population top-up
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            self.enemy_count,
            &mut self.despawn_buffer,
        );
        // 8. Termination
        if self.board.life <= 0 || self.board.missed >= MISSED_SHOT_LIMIT {
            self.phase = GamePhase::GameOver;
            self.events.push(GameEvent::GameOver);
        }
    }
}

#[cfg(test)]
impl SimulationEngine {
    /// Place an enemy at an exact position (for scripted collision tests).
    pub fn spawn_enemy_at(&mut self, x: f64, y: f64) -> hecs::Entity {
        self.world.spawn((
            frenzy_core::components::Enemy {
                phase: 0.0,
                alive: true,
            },
            Position::on_floor(x, y),
        ))
    }

    /// Place a projectile with an exact position and velocity.
    pub fn spawn_test_projectile(
        &mut self,
        position: Position,
        velocity: frenzy_core::types::Velocity,
    ) -> hecs::Entity {
        self.world
            .spawn((frenzy_core::components::Projectile::default(), position, velocity))
    }

    /// Remove every enemy from the arena.
    pub fn clear_enemies(&mut self) {
        let entities: Vec<hecs::Entity> = self
            .world
            .query_mut::<&frenzy_core::components::Enemy>()
            .into_iter()
            .map(|(entity, _)| entity)
            .collect();
        for entity in entities {
            let _ = self.world.despawn(entity);
        }
    }
}
