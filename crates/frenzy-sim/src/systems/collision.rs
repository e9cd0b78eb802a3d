//! Collision resolution: projectiles against enemies, enemies against the
//! player.

use hecs::{Entity, World};

use frenzy_core::components::{Enemy, Projectile};
use frenzy_core::constants::{
    ENEMY_BASE_RADIUS, ENEMY_CONTACT_RADIUS_FACTOR, ENEMY_HEAD_HEIGHT_FACTOR,
    ENEMY_HIT_RADIUS_FACTOR,
};
use frenzy_core::events::GameEvent;
use frenzy_core::types::{pulse_radius, Position};

use crate::engine::Scoreboard;
use crate::world_setup;

/// Resolve this tick's collisions.
///
/// Each projectile is tested against both hit spheres of every living enemy
/// (body center at height r, head center at 2.2r, both with radius 0.9r);
/// the first satisfied test destroys that enemy and spends the projectile,
/// so one projectile removes at most one enemy. Player contact is a planar
/// test against the fixed contact radius; each touching enemy costs one
/// life independently.
pub fn run(world: &mut World, board: &mut Scoreboard, events: &mut Vec<GameEvent>) {
    // Living enemy poses, captured up front; kills recorded during the scan
    // keep a later projectile from claiming the same enemy.
    let enemies: Vec<(Entity, Position, f64)> = {
        let mut query = world.query::<(&Position, &Enemy)>();
        query
            .iter()
            .filter(|(_, (_, enemy))| enemy.alive)
            .map(|(entity, (pos, enemy))| (entity, *pos, pulse_radius(enemy.phase)))
            .collect()
    };

    let mut killed: Vec<Entity> = Vec::new();
    let mut spent: Vec<Entity> = Vec::new();

    for (projectile_entity, (projectile_pos, projectile)) in
        world.query_mut::<(&Position, &mut Projectile)>()
    {
        if projectile.hit {
            continue;
        }
        'enemies: for &(enemy_entity, enemy_pos, radius) in &enemies {
            if killed.contains(&enemy_entity) {
                continue;
            }
            let hit_radius_sq = (radius * ENEMY_HIT_RADIUS_FACTOR).powi(2);
            for center_height in [radius, radius * ENEMY_HEAD_HEIGHT_FACTOR] {
                let center = Position::new(enemy_pos.x, enemy_pos.y, center_height);
                if projectile_pos.distance_sq_to(&center) <= hit_radius_sq {
                    projectile.hit = true;
                    killed.push(enemy_entity);
                    spent.push(projectile_entity);
                    board.score += 1;
                    events.push(GameEvent::EnemyDown { score: board.score });
                    break 'enemies;
                }
            }
        }
    }

    for entity in killed {
        if let Ok(mut enemy) = world.get::<&mut Enemy>(entity) {
            enemy.alive = false;
        }
    }
    // A projectile that scored is spent: it never flies on to a second kill
    // and never reaches the missed tally.
    for entity in spent {
        let _ = world.despawn(entity);
    }

    // Enemies touching the player.
    let (player_pos, _) = world_setup::player_pose(world);
    let contact_sq = (ENEMY_BASE_RADIUS * ENEMY_CONTACT_RADIUS_FACTOR).powi(2);
    for (_entity, (pos, enemy)) in world.query_mut::<(&Position, &mut Enemy)>() {
        if !enemy.alive {
            continue;
        }
        if pos.planar_distance_sq_to(&player_pos) <= contact_sq {
            board.life -= 1;
            enemy.alive = false;
            events.push(GameEvent::PlayerHit {
                life_remaining: board.life,
            });
        }
    }
}
