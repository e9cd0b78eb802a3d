//! Simulation engine for the frenzy arena game.
//!
//! Owns the hecs ECS world, runs all per-tick systems, and produces
//! `GameStateSnapshot`s for the frame driver. Completely headless,
//! enabling deterministic testing.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use frenzy_core as core;
