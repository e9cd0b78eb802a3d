//! Systems that operate on the simulation world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for
//! read-only). They do not own state — all state lives in components or in
//! the engine's scalars.

pub mod assist;
pub mod collision;
pub mod enemies;
pub mod projectiles;
pub mod snapshot;
pub mod spawner;
