//! Events emitted by the simulation for UI and audio feedback.

use serde::{Deserialize, Serialize};

/// Gameplay events drained into each snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A projectile left the muzzle.
    ShotFired,
    /// A projectile destroyed an enemy.
    EnemyDown { score: u32 },
    /// An enemy reached the player.
    PlayerHit { life_remaining: i32 },
    /// A projectile expired or left the arena without scoring.
    ShotMissed { missed: u32 },
    /// The run ended.
    GameOver,
}
