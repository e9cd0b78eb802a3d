//! Snapshot system: queries the world and builds a complete
//! GameStateSnapshot.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use frenzy_core::components::{Enemy, Facing, Player, Projectile};
use frenzy_core::enums::GamePhase;
use frenzy_core::events::GameEvent;
use frenzy_core::state::{EnemyView, GameStateSnapshot, PlayerView, ProjectileView};
use frenzy_core::types::{pulse_radius, Position};

use crate::engine::Scoreboard;

/// Build a complete snapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    tick: u64,
    phase: GamePhase,
    assist_enabled: bool,
    cooldown: u32,
    board: &Scoreboard,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        tick,
        phase,
        assist_enabled,
        player: build_player(world),
        projectiles: build_projectiles(world),
        enemies: build_enemies(world),
        life: board.life,
        score: board.score,
        missed: board.missed,
        cooldown,
        events,
    }
}

fn build_player(world: &World) -> PlayerView {
    world
        .query::<(&Player, &Position, &Facing)>()
        .iter()
        .next()
        .map(|(_, (_, pos, facing))| PlayerView {
            position: *pos,
            yaw_deg: facing.yaw_deg,
        })
        .unwrap_or_default()
}

/// Projectile views in stable entity-id order.
fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut rows: Vec<(u32, ProjectileView)> = world
        .query::<(&Position, &Projectile)>()
        .iter()
        .map(|(entity, (pos, projectile))| {
            (
                entity.id(),
                ProjectileView {
                    position: *pos,
                    age: projectile.age,
                },
            )
        })
        .collect();
    rows.sort_by_key(|(id, _)| *id);
    rows.into_iter().map(|(_, view)| view).collect()
}

/// Enemy views in stable entity-id order, radius derived from the
/// pulsation phase.
fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut rows: Vec<(u32, EnemyView)> = world
        .query::<(&Position, &Enemy)>()
        .iter()
        .map(|(entity, (pos, enemy))| {
            (
                entity.id(),
                EnemyView {
                    x: pos.x,
                    y: pos.y,
                    alive: enemy.alive,
                    radius: pulse_radius(enemy.phase),
                },
            )
        })
        .collect();
    rows.sort_by_key(|(id, _)| *id);
    rows.into_iter().map(|(_, view)| view).collect()
}
