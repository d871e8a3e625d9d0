//! Player commands sent from the frontend to the simulation.
//!
//! Commands are queued and applied at the next tick boundary.
//! Commands that do not apply to the active scene are ignored.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Keyboard ---
    /// A key went down.
    KeyDown { key: Key },
    /// A key was released.
    KeyUp { key: Key },

    // --- Touch ---
    /// An on-screen button was pressed.
    TouchDown { button: TouchButton },
    /// An on-screen button was released (or the pointer left it).
    TouchUp { button: TouchButton },

    // --- Scene control ---
    /// Start a game from the menu (PLAY button).
    Start,
    /// Leave the game-over screen for the menu (RESTART / MENU buttons).
    Restart,

    // --- Simulation control ---
    /// Freeze the simulation (window lost focus).
    Pause,
    /// Resume after a pause.
    Resume,
    /// Set time scale (1.0 = normal, 2.0 = double, 0.0 = stopped).
    SetTimeScale { scale: f64 },
}
