//! Error types for engine construction.
//!
//! Gameplay itself has no failure paths: losing lives and game over are
//! ordinary scene transitions.

use thiserror::Error;

/// Rejected simulation configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("time scale must be a finite number between 0 and {max}, got {value}")]
    InvalidTimeScale { value: f64, max: f64 },
}
