//! Player commands sent from the input layer to the simulation.
//!
//! Commands are queued and drained at the next tick boundary, ahead of the
//! step's own update sequence.

use serde::{Deserialize, Serialize};

use crate::enums::TurnDirection;

/// All possible player actions.
///
/// While the game is over, every command except `Restart` is a no-op.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Step the player along (or against) its facing direction.
    Move { forward: bool },
    /// Rotate the player's facing.
    Turn { direction: TurnDirection },
    /// Attempt to fire a projectile (cooldown-gated).
    Fire,
    /// Toggle autonomous aim-and-fire mode.
    ToggleAssist,
    /// Reset the run: clear entities, restore counters, repopulate enemies.
    Restart,
}
