//! Collision classification and the running tally.
//!
//! The classifier is a pure function over vertical geometry so the stomp
//! rule can be tested in isolation from the ECS world.

use yongland_core::enums::Interaction;
use yongland_core::types::Velocity;

/// Vertical geometry of one player/enemy overlap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactGeometry {
    pub player_velocity: Velocity,
    /// Bottom edge of the player's sprite.
    pub player_bottom: f64,
    /// Top edge of the enemy's sprite.
    pub enemy_top: f64,
    /// Kind-dependent head allowance in pixels.
    pub tolerance: f64,
}

/// Classify an overlap: a stomp needs the player falling with its feet
/// above `enemy_top + tolerance`; anything else is a body hit.
pub fn classify(contact: &ContactGeometry) -> Interaction {
    let falling = contact.player_velocity.is_descending();
    let above_head = contact.player_bottom < contact.enemy_top + contact.tolerance;
    if falling && above_head {
        Interaction::Stomp
    } else {
        Interaction::BodyHit
    }
}

/// Score and kill counters for one game. Carried into the game-over scene.
#[derive(Debug, Clone, Default)]
pub struct Tally {
    score: u32,
    pub kills: u32,
    pub minis_defeated: u32,
}

impl Tally {
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Add points. The score can only grow.
    pub fn award(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }
}
