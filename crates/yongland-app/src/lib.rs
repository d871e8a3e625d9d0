//! YONGLAND headless application.
//!
//! Wires the simulation to a fixed-rate game loop thread and a scripted
//! autopilot so the game can be run and watched from the command line.

pub mod autopilot;
pub mod game_loop;
pub mod state;

pub use yongland_core as core;
