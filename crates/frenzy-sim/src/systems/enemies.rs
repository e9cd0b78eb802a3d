//! Enemy pursuit system.

use hecs::World;

use frenzy_core::components::Enemy;
use frenzy_core::constants::{DIRECTION_EPSILON, ENEMY_PHASE_RATE, ENEMY_SPEED};
use frenzy_core::types::Position;

use crate::world_setup;

/// Move every living enemy toward the player and advance its pulsation
/// phase. The normalization denominator carries an epsilon so an enemy
/// sitting exactly on the player does not divide by zero.
pub fn run(world: &mut World) {
    let (player_pos, _) = world_setup::player_pose(world);

    for (_entity, (pos, enemy)) in world.query_mut::<(&mut Position, &mut Enemy)>() {
        if !enemy.alive {
            continue;
        }
        let dx = player_pos.x - pos.x;
        let dy = player_pos.y - pos.y;
        let dist = dx.hypot(dy) + DIRECTION_EPSILON;
        pos.x += dx / dist * ENEMY_SPEED;
        pos.y += dy / dist * ENEMY_SPEED;
        enemy.phase += ENEMY_PHASE_RATE;
    }
}
