//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

/// Marks the single player entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// Player facing angle in degrees. Unbounded; trigonometric use wraps it.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Facing {
    pub yaw_deg: f64,
}

/// Projectile lifecycle state.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Projectile {
    /// Ticks since launch.
    pub age: u32,
    /// Set exactly once, on the collision that scores. A projectile with
    /// `hit` set never counts toward the missed tally.
    pub hit: bool,
}

/// Enemy pursuit state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    /// Pulsation phase angle (radians, monotonically increasing). Only used
    /// to derive the radius multiplier.
    pub phase: f64,
    /// Cleared when a projectile or the player destroys this enemy; dead
    /// enemies are replaced during the same step's population top-up.
    pub alive: bool,
}

// Position and Velocity are defined in types.rs and attached as components
// alongside the structs above.
