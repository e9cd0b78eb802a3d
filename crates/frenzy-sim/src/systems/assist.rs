//! Targeting assist: spins the aim and decides when to auto-fire.

use hecs::World;

use frenzy_core::components::{Enemy, Facing, Player};
use frenzy_core::constants::{
    ASSIST_CLOSE_RANGE, ASSIST_CONE_HALF_ANGLE_DEG, ASSIST_SPIN_RATE, DIRECTION_EPSILON,
};
use frenzy_core::types::{heading_vector, Position};

use crate::world_setup;

/// Rotate the player's facing by the assist spin rate.
pub fn spin(world: &mut World) {
    for (_entity, (_player, facing)) in world.query_mut::<(&Player, &mut Facing)>() {
        facing.yaw_deg += ASSIST_SPIN_RATE;
    }
}

/// True when a living enemy sits along the player's aim. Read-only.
///
/// An enemy inside the close range qualifies regardless of facing; beyond
/// that it must lie inside the forward cone, judged by the normalized dot
/// product against the cosine of the cone half-angle. The normalization
/// denominator carries an epsilon for the zero-distance case.
pub fn has_line_of_sight(world: &World) -> bool {
    let (player_pos, yaw_deg) = world_setup::player_pose(world);
    let aim = heading_vector(yaw_deg);
    let cone_cos = ASSIST_CONE_HALF_ANGLE_DEG.to_radians().cos();

    let mut query = world.query::<(&Position, &Enemy)>();
    for (_entity, (pos, enemy)) in query.iter() {
        if !enemy.alive {
            continue;
        }
        let dx = pos.x - player_pos.x;
        let dy = pos.y - player_pos.y;
        let dist = dx.hypot(dy);
        if dist < ASSIST_CLOSE_RANGE {
            return true;
        }
        let dot = (dx * aim.x + dy * aim.y) / (dist + DIRECTION_EPSILON);
        if dot > cone_cos {
            return true;
        }
    }
    false
}
