//! Simulation engine for YONGLAND.
//!
//! Owns the scene state machine, runs the gameplay systems at a fixed
//! tick rate, and produces GameStateSnapshots for the frontend.

pub mod combat;
pub mod engine;
pub mod error;
pub mod scene;
pub mod scheduler;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use error::ConfigError;
pub use yongland_core as core;
