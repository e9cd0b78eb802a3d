//! Entity spawn factories for setting up the arena world.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use frenzy_core::components::{Enemy, Facing, Player, Projectile};
use frenzy_core::constants::{
    ARENA_HALF_EXTENT, PROJECTILE_MUZZLE_HEIGHT, PROJECTILE_MUZZLE_OFFSET, PROJECTILE_SPEED,
    SPAWN_AREA_FACTOR, SPAWN_MAX_ATTEMPTS, SPAWN_MIN_PLAYER_DISTANCE,
};
use frenzy_core::types::{heading_vector, Position, Velocity};

/// Set up the initial arena world: the player at the grid center, facing +X.
pub fn setup_arena(world: &mut World) -> hecs::Entity {
    world.spawn((
        Player,
        Position::on_floor(0.0, 0.0),
        Facing { yaw_deg: 0.0 },
    ))
}

/// Current player pose, for spawn offsets and pursuit targeting.
pub fn player_pose(world: &World) -> (Position, f64) {
    world
        .query::<(&Player, &Position, &Facing)>()
        .iter()
        .next()
        .map(|(_, (_, pos, facing))| (*pos, facing.yaw_deg))
        .unwrap_or_default()
}

/// Spawn a single enemy away from the player and inside the spawn region.
///
/// Rejection-samples the region until a position clears the minimum player
/// distance. The attempt count is bounded; if every sample lands too close,
/// the enemy is placed on the minimum-distance ring around the player at a
/// random angle, so the call always terminates.
pub fn spawn_enemy(world: &mut World, rng: &mut ChaCha8Rng) -> hecs::Entity {
    let (player_pos, _) = player_pose(world);
    let limit = ARENA_HALF_EXTENT * SPAWN_AREA_FACTOR;

    let mut position = None;
    for _ in 0..SPAWN_MAX_ATTEMPTS {
        let candidate =
            Position::on_floor(rng.gen_range(-limit..limit), rng.gen_range(-limit..limit));
        if candidate.planar_distance_to(&player_pos) > SPAWN_MIN_PLAYER_DISTANCE {
            position = Some(candidate);
            break;
        }
    }
    let position = position.unwrap_or_else(|| {
        let theta = rng.gen_range(0.0..std::f64::consts::TAU);
        Position::on_floor(
            player_pos.x + SPAWN_MIN_PLAYER_DISTANCE * theta.cos(),
            player_pos.y + SPAWN_MIN_PLAYER_DISTANCE * theta.sin(),
        )
    });

    let phase = rng.gen_range(0.0..std::f64::consts::TAU);
    world.spawn((Enemy { phase, alive: true }, position))
}

/// Spawn a projectile at the muzzle offset ahead of the player, flying
/// along the facing direction at the fixed muzzle height.
pub fn spawn_projectile(world: &mut World, origin: &Position, yaw_deg: f64) -> hecs::Entity {
    let dir = heading_vector(yaw_deg);
    let position = Position::new(
        origin.x + dir.x * PROJECTILE_MUZZLE_OFFSET,
        origin.y + dir.y * PROJECTILE_MUZZLE_OFFSET,
        PROJECTILE_MUZZLE_HEIGHT,
    );
    let velocity = Velocity::new(dir.x * PROJECTILE_SPEED, dir.y * PROJECTILE_SPEED);
    world.spawn((Projectile::default(), position, velocity))
}
