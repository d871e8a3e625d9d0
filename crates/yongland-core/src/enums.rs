//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Enemy kind. Determines size, speed, behaviour, and hit points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    /// Half the player's size, one stomp, flees the player.
    Mini,
    /// Twice the player's size, three stomps, chases the player.
    Giant,
}

/// Horizontal patrol direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatrolDirection {
    Left,
    #[default]
    Right,
}

/// Active scene (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScenePhase {
    #[default]
    Menu,
    Playing,
    GameOver,
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Victory,
    Defeat,
}

/// Classification of a player/enemy overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Interaction {
    /// Player came down on the enemy's head.
    Stomp,
    /// Any other contact; hurts the player.
    BodyHit,
}

/// Why the player lost a life.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifeLossCause {
    EnemyContact,
    FellOut,
}

/// Keyboard keys the game listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    A,
    D,
    W,
    S,
    Space,
    Enter,
}

/// On-screen touch buttons for mobile play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TouchButton {
    Left,
    Right,
    Jump,
}

impl PatrolDirection {
    /// -1.0 for left, +1.0 for right.
    pub fn sign(self) -> f64 {
        match self {
            PatrolDirection::Left => -1.0,
            PatrolDirection::Right => 1.0,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            PatrolDirection::Left => PatrolDirection::Right,
            PatrolDirection::Right => PatrolDirection::Left,
        }
    }

    /// Direction pointing from `from_x` toward `to_x`. Ties resolve to the right.
    pub fn toward(from_x: f64, to_x: f64) -> Self {
        if to_x < from_x {
            PatrolDirection::Left
        } else {
            PatrolDirection::Right
        }
    }
}

impl Key {
    /// Keys that start a game from the menu or leave the game-over screen.
    pub fn is_confirm(self) -> bool {
        matches!(self, Key::Space | Key::Enter)
    }
}
