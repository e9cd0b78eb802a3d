//! Projectile flight system: advance, age, and expire.

use hecs::{Entity, World};

use frenzy_core::components::Projectile;
use frenzy_core::constants::{ARENA_HALF_EXTENT, PROJECTILE_OOB_MARGIN, PROJECTILE_TTL_TICKS};
use frenzy_core::events::GameEvent;
use frenzy_core::types::{Position, Velocity};

use crate::engine::Scoreboard;

/// Advance every projectile by its velocity and remove the expired ones.
///
/// A projectile expires when its age passes the time-to-live or either
/// coordinate leaves the arena by more than the margin. Expiry counts as a
/// miss only when the projectile never scored.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(
    world: &mut World,
    board: &mut Scoreboard,
    despawn_buffer: &mut Vec<Entity>,
    events: &mut Vec<GameEvent>,
) {
    despawn_buffer.clear();
    let bound = ARENA_HALF_EXTENT + PROJECTILE_OOB_MARGIN;

    for (entity, (pos, vel, projectile)) in
        world.query_mut::<(&mut Position, &Velocity, &mut Projectile)>()
    {
        pos.x += vel.x;
        pos.y += vel.y;
        projectile.age += 1;

        if projectile.age > PROJECTILE_TTL_TICKS || pos.x.abs() > bound || pos.y.abs() > bound {
            if !projectile.hit {
                board.missed += 1;
                events.push(GameEvent::ShotMissed {
                    missed: board.missed,
                });
            }
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
