//! Kind-specific behavioural profiles.
//!
//! Consolidates per-kind parameters for the AI stepper and the
//! collision resolver.

use yongland_core::enums::{EnemyKind, PatrolDirection};
use yongland_core::types::HalfExtents;

/// How an enemy reacts to the player being nearby.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Disposition {
    /// Run away while the player is closer than `radius`.
    Avoid { radius: f64 },
    /// Run toward the player while closer than `radius` (`None` = always).
    Chase { radius: Option<f64> },
}

/// Behavioural profile for an enemy kind.
#[derive(Debug, Clone, Copy)]
pub struct EnemyBehaviorProfile {
    /// Horizontal speed (px/s).
    pub speed: f64,
    /// Vertical velocity applied on a jump (negative = up).
    pub jump_velocity: f64,
    /// Jump when the per-tick roll exceeds this.
    pub jump_roll: u32,
    /// Flip patrol direction when the per-tick roll exceeds this, if set.
    pub turn_roll: Option<u32>,
    pub disposition: Disposition,
    /// Patrol direction at spawn; `None` picks one at random.
    pub initial_direction: Option<PatrolDirection>,
    pub half: HalfExtents,
    /// Half height of the drawn sprite, used to find the head for stomps.
    pub display_half_height: f64,
    pub bounce: f64,
    pub hit_points: u32,
    /// Pixels below the enemy's top edge that still count as its head.
    pub stomp_tolerance: f64,
    /// Vertical velocity given to the player after a stomp.
    pub stomp_bounce: f64,
    /// Score for each stomp that does not finish the enemy.
    pub score_per_stomp: u32,
    /// Score for the finishing stomp.
    pub score_on_defeat: u32,
    /// Whether a stomp on this kind grants the player an invulnerability window.
    pub stomp_grants_invulnerability: bool,
}

/// Get the behavioural profile for a given kind.
pub fn get_profile(kind: EnemyKind) -> EnemyBehaviorProfile {
    use yongland_core::constants::*;

    match kind {
        EnemyKind::Mini => EnemyBehaviorProfile {
            speed: MINI_SPEED,
            jump_velocity: MINI_JUMP_VELOCITY,
            jump_roll: MINI_JUMP_ROLL,
            turn_roll: Some(MINI_TURN_ROLL),
            disposition: Disposition::Avoid {
                radius: MINI_AVOID_RADIUS,
            },
            initial_direction: None,
            half: HalfExtents::from_size(MINI_SIZE.0, MINI_SIZE.1),
            display_half_height: MINI_DISPLAY_SIZE.1 / 2.0,
            bounce: MINI_BOUNCE,
            hit_points: MINI_HIT_POINTS,
            stomp_tolerance: MINI_STOMP_TOLERANCE,
            stomp_bounce: MINI_STOMP_BOUNCE,
            score_per_stomp: 0,
            score_on_defeat: SCORE_MINI_DEFEATED,
            stomp_grants_invulnerability: false,
        },
        EnemyKind::Giant => EnemyBehaviorProfile {
            speed: GIANT_SPEED,
            jump_velocity: GIANT_JUMP_VELOCITY,
            jump_roll: GIANT_JUMP_ROLL,
            turn_roll: None,
            disposition: Disposition::Chase { radius: None },
            initial_direction: Some(PatrolDirection::Right),
            half: HalfExtents::from_size(GIANT_SIZE.0, GIANT_SIZE.1),
            display_half_height: GIANT_DISPLAY_SIZE.1 / 2.0,
            bounce: GIANT_BOUNCE,
            hit_points: GIANT_HIT_POINTS,
            stomp_tolerance: GIANT_STOMP_TOLERANCE,
            stomp_bounce: GIANT_STOMP_BOUNCE,
            score_per_stomp: SCORE_GIANT_STOMP,
            score_on_defeat: SCORE_GIANT_STOMP,
            stomp_grants_invulnerability: true,
        },
    }
}
