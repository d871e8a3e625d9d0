//! Game state snapshot: the complete visible state sent to the frontend each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{HalfExtents, Position, SimTime, Velocity};

/// Complete game state broadcast to the frontend after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub scene: ScenePhase,
    pub paused: bool,
    /// Present only while playing.
    pub player: Option<PlayerView>,
    pub enemies: Vec<EnemyView>,
    pub platforms: Vec<PlatformView>,
    pub goal: Option<PlatformView>,
    pub hud: HudView,
    /// Present only on the game-over screen.
    pub result: Option<GameResult>,
    /// Events raised during this tick.
    pub events: Vec<GameEvent>,
}

/// The player as seen by the renderer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    pub velocity: Velocity,
    pub half: HalfExtents,
    pub resting: bool,
    pub invulnerable: bool,
}

/// One enemy as seen by the renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub kind: EnemyKind,
    pub position: Position,
    pub velocity: Velocity,
    pub half: HalfExtents,
    pub hit_points: u32,
    pub max_hit_points: u32,
    pub direction: PatrolDirection,
}

/// A static rectangle (platform or goal).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlatformView {
    pub position: Position,
    pub half: HalfExtents,
}

/// Heads-up display counters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HudView {
    pub lives: u32,
    pub score: u32,
    pub kills: u32,
    pub minis_remaining: u32,
    pub minis_total: u32,
    /// Stomps landed on the giant, once it has appeared.
    pub giant_hits: Option<u32>,
    pub giant_hits_required: u32,
    /// Transient centre-screen message.
    pub banner: Option<String>,
}

/// Final tally carried from the playing scene into game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub outcome: Outcome,
    pub score: u32,
    pub kills: u32,
}
