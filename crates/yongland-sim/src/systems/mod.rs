//! ECS systems that operate on the level world each tick.
//!
//! Systems are free functions over `&mut World` (or `&World` for read-only).
//! They do not own state; all state lives in components or the scene.

pub mod arcade;
pub mod cleanup;
pub mod collision;
pub mod enemy_ai;
pub mod invulnerability;
pub mod lives;
pub mod player_control;
pub mod snapshot;
