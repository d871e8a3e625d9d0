//! Enemy AI stepper.
//!
//! Pure functions that compute the next velocity and patrol direction
//! for one enemy based on its kind, contacts, and the player's position.
//! No ECS dependency; operates on plain data. Randomness comes from the
//! caller's generator so runs stay reproducible.

use rand::Rng;

use yongland_core::constants::ROLL_MAX;
use yongland_core::enums::{EnemyKind, PatrolDirection};
use yongland_core::types::{Position, Velocity};

use crate::profiles::{get_profile, Disposition, EnemyBehaviorProfile};

/// Input to the stepper for a single enemy.
pub struct EnemyContext {
    pub kind: EnemyKind,
    pub position: Position,
    pub velocity: Velocity,
    pub direction: PatrolDirection,
    pub resting: bool,
    pub blocked_left: bool,
    pub blocked_right: bool,
    /// `None` when there is no player to react to.
    pub player_position: Option<Position>,
}

/// Output from the stepper.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyUpdate {
    pub new_velocity: Velocity,
    pub new_direction: PatrolDirection,
    pub jumped: bool,
}

/// Which rule set the horizontal velocity this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Steering {
    Flee,
    Chase,
    Patrol,
}

/// Advance one enemy by one tick.
pub fn step<R: Rng + ?Sized>(ctx: &EnemyContext, rng: &mut R) -> EnemyUpdate {
    let profile = get_profile(ctx.kind);

    let mut velocity = ctx.velocity;
    let mut direction = ctx.direction;

    velocity.x = match steering(ctx, &profile) {
        Steering::Flee => {
            let player_x = ctx.player_position.map_or(ctx.position.x, |p| p.x);
            // Away from the player; a player directly above counts as on the right.
            if player_x < ctx.position.x {
                profile.speed
            } else {
                -profile.speed
            }
        }
        Steering::Chase => {
            let player_x = ctx.player_position.map_or(ctx.position.x, |p| p.x);
            PatrolDirection::toward(ctx.position.x, player_x).sign() * profile.speed
        }
        Steering::Patrol => direction.sign() * profile.speed,
    };

    if let Some(turn_roll) = profile.turn_roll {
        if roll(rng) > turn_roll {
            direction = direction.reversed();
        }
    }

    // Only roll for a jump while standing on something.
    let jumped = ctx.resting && roll(rng) > profile.jump_roll;
    if jumped {
        velocity.y = profile.jump_velocity;
    }

    if ctx.blocked_left || ctx.blocked_right {
        direction = direction.reversed();
    }

    EnemyUpdate {
        new_velocity: velocity,
        new_direction: direction,
        jumped,
    }
}

/// Decide which steering rule applies, by priority.
pub fn steering(ctx: &EnemyContext, profile: &EnemyBehaviorProfile) -> Steering {
    let Some(player) = ctx.player_position else {
        return Steering::Patrol;
    };
    let distance = ctx.position.distance_to(&player);

    match profile.disposition {
        Disposition::Avoid { radius } if distance < radius => Steering::Flee,
        Disposition::Chase { radius: None } => Steering::Chase,
        Disposition::Chase {
            radius: Some(radius),
        } if distance < radius => Steering::Chase,
        _ => Steering::Patrol,
    }
}

/// Pick a spawn direction for a kind: fixed, or a coin flip.
pub fn initial_direction<R: Rng + ?Sized>(kind: EnemyKind, rng: &mut R) -> PatrolDirection {
    match get_profile(kind).initial_direction {
        Some(direction) => direction,
        None => {
            // Only one of the three outcomes of -1..=1 faces right.
            if rng.gen_range(-1..=1) > 0 {
                PatrolDirection::Right
            } else {
                PatrolDirection::Left
            }
        }
    }
}

/// Inclusive behaviour roll in `0..=ROLL_MAX`.
fn roll<R: Rng + ?Sized>(rng: &mut R) -> u32 {
    rng.gen_range(0..=ROLL_MAX)
}
