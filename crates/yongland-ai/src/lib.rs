//! Enemy AI for YONGLAND.
//!
//! Implements per-kind behaviour profiles and the per-tick AI stepper
//! that drives Fraud Yong patrol, flee, chase, and jump decisions.

pub mod profiles;
pub mod stepper;

pub use yongland_core as core;

#[cfg(test)]
mod tests;
