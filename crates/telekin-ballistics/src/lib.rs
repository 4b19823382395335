//! Ballistics for telekin.
//!
//! Implements the closed-form launch solver and the per-tick flight
//! correction law. Pure math over plain vectors — no ECS dependency, so
//! both halves are testable and reusable on their own.

pub mod homing;
pub mod solver;

pub use telekin_core as core;

#[cfg(test)]
mod tests;
