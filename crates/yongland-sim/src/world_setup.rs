//! Entity spawn factories for setting up the level.
//!
//! Creates the player, platforms, goal flag, and Fraud Yong entities with
//! appropriate component bundles.

use hecs::World;
use rand::Rng;

use yongland_ai::profiles::get_profile;
use yongland_ai::stepper::initial_direction;
use yongland_core::components::*;
use yongland_core::constants::*;
use yongland_core::enums::EnemyKind;
use yongland_core::types::{secs_to_ticks, HalfExtents, HitPoints, Position, Velocity};

/// Set up the stadium level: platforms, goal, player, and the five minis.
/// The giant is spawned later by the scheduler.
pub fn setup_level<R: Rng + ?Sized>(world: &mut World, rng: &mut R) -> hecs::Entity {
    spawn_platforms(world);
    spawn_goal(world);
    let player = spawn_player(world);
    spawn_minis(world, rng);
    player
}

/// Spawn every static platform.
pub fn spawn_platforms(world: &mut World) {
    for (x, y, width, height) in PLATFORMS {
        world.spawn((
            Position::new(x, y),
            Platform {
                half: HalfExtents::from_size(width, height),
            },
        ));
    }
}

/// Spawn the goal flag.
pub fn spawn_goal(world: &mut World) -> hecs::Entity {
    world.spawn((
        Position::new(GOAL_POSITION.0, GOAL_POSITION.1),
        Goal {
            half: HalfExtents::from_size(GOAL_SIZE.0, GOAL_SIZE.1),
        },
    ))
}

/// Spawn Bert Yong at the initial spawn point with a full set of lives.
pub fn spawn_player(world: &mut World) -> hecs::Entity {
    world.spawn((
        Player,
        Position::new(PLAYER_SPAWN.0, PLAYER_SPAWN.1),
        Velocity::zero(),
        Body {
            half: HalfExtents::from_size(PLAYER_SIZE.0, PLAYER_SIZE.1),
            bounce: 0.0,
        },
        Contacts::default(),
        Lives {
            remaining: PLAYER_START_LIVES,
        },
        Invulnerability::default(),
    ))
}

/// Spawn the five minis at their fixed positions.
pub fn spawn_minis<R: Rng + ?Sized>(world: &mut World, rng: &mut R) {
    for (x, y) in MINI_SPAWNS {
        spawn_enemy(world, rng, EnemyKind::Mini, Position::new(x, y));
    }
}

/// Spawn the giant at its fixed position.
pub fn spawn_giant<R: Rng + ?Sized>(world: &mut World, rng: &mut R) -> hecs::Entity {
    spawn_enemy(
        world,
        rng,
        EnemyKind::Giant,
        Position::new(GIANT_SPAWN.0, GIANT_SPAWN.1),
    )
}

/// Spawn a single enemy of `kind` at `position`, at rest, with full hit points.
pub fn spawn_enemy<R: Rng + ?Sized>(
    world: &mut World,
    rng: &mut R,
    kind: EnemyKind,
    position: Position,
) -> hecs::Entity {
    let profile = get_profile(kind);
    let enemy = Enemy {
        kind,
        hit_points: HitPoints::full(profile.hit_points),
        direction: initial_direction(kind, rng),
    };

    world.spawn((
        enemy,
        position,
        Velocity::zero(),
        Body {
            half: profile.half,
            bounce: profile.bounce,
        },
        Contacts::default(),
    ))
}

/// Put the player back at the respawn point, stationary and briefly immune.
pub fn respawn_player(world: &mut World, player: hecs::Entity) {
    if let Ok(mut pos) = world.get::<&mut Position>(player) {
        *pos = Position::new(PLAYER_RESPAWN.0, PLAYER_RESPAWN.1);
    }
    if let Ok(mut vel) = world.get::<&mut Velocity>(player) {
        *vel = Velocity::zero();
    }
    grant_invulnerability(world, player);
}

/// Open a fresh invulnerability window on the player.
pub fn grant_invulnerability(world: &mut World, player: hecs::Entity) {
    if let Ok(mut inv) = world.get::<&mut Invulnerability>(player) {
        inv.active = true;
        inv.remaining_ticks = secs_to_ticks(INVULNERABILITY_SECS);
    }
}
