//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Gameplay events raised during a tick, drained into that tick's snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// The active scene changed.
    SceneChanged { from: ScenePhase, to: ScenePhase },
    /// A stomp landed but the enemy survived.
    EnemyStomped {
        kind: EnemyKind,
        hit_points_remaining: u32,
    },
    /// An enemy lost its last hit point and was removed.
    EnemyDefeated { kind: EnemyKind, score: u32 },
    /// The player touched an enemy's body.
    PlayerHit { kind: EnemyKind },
    /// A life was lost.
    LifeLost {
        cause: LifeLossCause,
        lives_remaining: u32,
    },
    /// The player was put back at the respawn point.
    PlayerRespawned,
    /// The giant entered the level.
    GiantAppeared,
    /// The player touched the goal flag.
    GoalReached,
    /// The level was won; the victory screen follows shortly.
    GameWon { score: u32 },
    /// The last life was lost.
    GameLost { score: u32 },
}
