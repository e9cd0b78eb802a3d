//! Game state snapshot — the complete visible state handed to the renderer
//! each tick.

use serde::{Deserialize, Serialize};

use crate::enums::GamePhase;
use crate::events::GameEvent;
use crate::types::Position;

/// Complete game state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    /// Tick count (only advances while playing).
    pub tick: u64,
    pub phase: GamePhase,
    /// Whether autonomous aim-and-fire is active.
    pub assist_enabled: bool,
    pub player: PlayerView,
    pub projectiles: Vec<ProjectileView>,
    pub enemies: Vec<EnemyView>,
    /// Remaining life.
    pub life: i32,
    /// Confirmed projectile kills.
    pub score: u32,
    /// Projectiles lost without scoring.
    pub missed: u32,
    /// Ticks until the next shot is allowed.
    pub cooldown: u32,
    /// Events that occurred during this tick.
    pub events: Vec<GameEvent>,
}

/// Player pose for the renderer and camera.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    pub yaw_deg: f64,
}

/// One projectile in flight.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Position,
    pub age: u32,
}

/// One enemy, with its derived pulsation radius for rendering.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnemyView {
    pub x: f64,
    pub y: f64,
    pub alive: bool,
    pub radius: f64,
}
