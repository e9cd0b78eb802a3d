//! Simulation constants and tuning parameters.
//!
//! All speeds and rates are expressed per tick; the simulation has no
//! fractional timestep.

/// Tick rate (Hz) the frame driver runs the simulation at.
pub const TICK_RATE: u32 = 60;

// --- Arena ---

/// Arena half-extent: the field spans [-ARENA_HALF_EXTENT, ARENA_HALF_EXTENT]
/// on both axes.
pub const ARENA_HALF_EXTENT: f64 = 600.0;

// --- Player ---

/// Distance covered by one move command (units).
pub const PLAYER_MOVE_SPEED: f64 = 10.0;

/// Facing change per turn command (degrees).
pub const PLAYER_TURN_RATE: f64 = 4.0;

/// Life counter at the start of a run.
pub const PLAYER_STARTING_LIFE: i32 = 5;

// --- Projectiles ---

/// Projectile speed (units per tick).
pub const PROJECTILE_SPEED: f64 = 40.0;

/// Ticks a projectile survives before it expires.
pub const PROJECTILE_TTL_TICKS: u32 = 80;

/// Margin beyond the arena edge at which projectiles are discarded.
pub const PROJECTILE_OOB_MARGIN: f64 = 120.0;

/// Distance ahead of the player at which projectiles spawn.
pub const PROJECTILE_MUZZLE_OFFSET: f64 = 45.0;

/// Height at which projectiles travel (fixed for their whole flight).
pub const PROJECTILE_MUZZLE_HEIGHT: f64 = 22.0;

/// Ticks between shots.
pub const FIRE_COOLDOWN_TICKS: u32 = 8;

/// Missed shots that end the run.
pub const MISSED_SHOT_LIMIT: u32 = 10;

// --- Enemies ---

/// Live enemies maintained in the arena.
pub const ENEMY_TARGET_COUNT: usize = 5;

/// Enemy body radius before pulsation (units).
pub const ENEMY_BASE_RADIUS: f64 = 22.0;

/// Enemy pursuit speed (units per tick).
pub const ENEMY_SPEED: f64 = 1.5;

/// Pulsation phase advance (radians per tick).
pub const ENEMY_PHASE_RATE: f64 = 0.09;

/// Pulsation amplitude as a fraction of the base radius.
pub const ENEMY_PULSE_AMPLITUDE: f64 = 0.15;

/// Height of the second hit sphere center, in multiples of the pulsating
/// radius. The enemy model stacks a head sphere above the body sphere and
/// both are valid hit volumes.
pub const ENEMY_HEAD_HEIGHT_FACTOR: f64 = 2.2;

/// Hit sphere radius as a fraction of the pulsating radius.
pub const ENEMY_HIT_RADIUS_FACTOR: f64 = 0.9;

/// Player contact radius in multiples of the base (non-pulsating) radius.
pub const ENEMY_CONTACT_RADIUS_FACTOR: f64 = 1.6;

// --- Spawning ---

/// Fraction of the arena half-extent enemies may spawn within.
pub const SPAWN_AREA_FACTOR: f64 = 0.75;

/// Minimum spawn distance from the player (units).
pub const SPAWN_MIN_PLAYER_DISTANCE: f64 = 250.0;

/// Rejection-sampling attempts before the spawner falls back to placing the
/// enemy on the minimum-distance ring around the player.
pub const SPAWN_MAX_ATTEMPTS: u32 = 64;

// --- Targeting assist ---

/// Facing spin while assist mode is active (degrees per tick).
pub const ASSIST_SPIN_RATE: f64 = 4.0;

/// Half-angle of the forward aim cone (degrees).
pub const ASSIST_CONE_HALF_ANGLE_DEG: f64 = 6.0;

/// Range inside which an enemy triggers fire regardless of facing (units).
pub const ASSIST_CLOSE_RANGE: f64 = 40.0;

// --- Numerics ---

/// Epsilon added to distance denominators when normalizing directions, so a
/// coincident enemy/player pair never divides by zero.
pub const DIRECTION_EPSILON: f64 = 1e-6;
