//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{HalfExtents, HitPoints};

/// Marks the player entity (Bert Yong).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// Remaining lives of the player.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Lives {
    pub remaining: u32,
}

/// Damage immunity after a respawn or a giant stomp.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Invulnerability {
    pub active: bool,
    /// Ticks left before the window closes.
    pub remaining_ticks: u64,
}

/// Enemy state (a Fraud Yong).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub hit_points: HitPoints,
    pub direction: PatrolDirection,
}

/// Collision body of a dynamic entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Body {
    pub half: HalfExtents,
    /// Fraction of landing speed reflected back upward.
    pub bounce: f64,
}

/// Contact flags reported by the physics stepper after each tick.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Contacts {
    /// Standing on a platform or the world floor.
    pub resting: bool,
    pub blocked_left: bool,
    pub blocked_right: bool,
}

/// Static platform the dynamic bodies collide with.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Platform {
    pub half: HalfExtents,
}

/// Goal flag. Touching it wins the level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Goal {
    pub half: HalfExtents,
}

// Position and Velocity (types.rs) are attached as components too.
