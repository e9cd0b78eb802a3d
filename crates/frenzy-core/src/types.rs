//! Fundamental geometric and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::{ENEMY_BASE_RADIUS, ENEMY_PULSE_AMPLITUDE};

/// 3D position in arena space (world units).
/// The arena floor is the z = 0 plane; only projectiles carry a nonzero z
/// (fixed muzzle height), enemies and the player live on the floor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Planar velocity in arena space (units per tick).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Position on the arena floor (z = 0).
    pub fn on_floor(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }

    /// Squared 3D distance to another position.
    pub fn distance_sq_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        let dz = other.z - self.z;
        dx * dx + dy * dy + dz * dz
    }

    /// Planar (x, y) distance to another position, ignoring height.
    pub fn planar_distance_to(&self, other: &Position) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Squared planar distance to another position.
    pub fn planar_distance_sq_to(&self, other: &Position) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Speed magnitude (units per tick).
    pub fn speed(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

/// Unit direction vector for a facing angle in degrees.
/// Yaw 0 points along +X; positive yaw turns counterclockwise toward +Y.
pub fn heading_vector(yaw_deg: f64) -> DVec2 {
    let rad = yaw_deg.to_radians();
    DVec2::new(rad.cos(), rad.sin())
}

/// Pulsating enemy radius for a phase angle.
/// Oscillates in `[base * (1 - amplitude), base * (1 + amplitude)]`.
pub fn pulse_radius(phase: f64) -> f64 {
    ENEMY_BASE_RADIUS * (1.0 + ENEMY_PULSE_AMPLITUDE * phase.sin())
}
