//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Game phase (top-level state).
///
/// The only transitions are Playing -> GameOver (life exhausted or miss
/// limit reached) and GameOver -> Playing (explicit restart).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Playing,
    GameOver,
}

/// Direction operand for turn commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnDirection {
    /// Counterclockwise (yaw increases).
    Left,
    /// Clockwise (yaw decreases).
    Right,
}
