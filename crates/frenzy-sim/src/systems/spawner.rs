//! Population maintenance: replaces fallen enemies each tick.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use frenzy_core::components::Enemy;

use crate::world_setup;

/// Remove dead enemies and spawn replacements until `target` are alive.
/// Runs after collision resolution, so every step ends at full population.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    target: usize,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();

    let mut living = 0usize;
    for (entity, enemy) in world.query_mut::<&Enemy>() {
        if enemy.alive {
            living += 1;
        } else {
            despawn_buffer.push(entity);
        }
    }
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    for _ in living..target {
        world_setup::spawn_enemy(world, rng);
    }
}
