//! Fundamental geometric and timing types.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// A tracked pose in world space (meters, Y-up, right-handed).
/// Forward is −Z, matching the usual tracked-device convention.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vec3,
    pub rotation: Quat,
}

/// One of the two cooperative clocks driving a session: the variable-rate
/// frame clock (selection, gesture sampling) and the fixed-rate physics
/// clock (flight correction). Each advances independently.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TickClock {
    /// Ticks elapsed on this clock.
    pub ticks: u64,
    /// Seconds elapsed on this clock.
    pub elapsed_secs: f64,
}

impl Pose {
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Unit forward vector of this pose (−Z rotated into world space).
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    /// Build a pose at `position` with forward pointing at `target`.
    /// Falls back to the identity rotation when the two coincide.
    pub fn looking_at(position: Vec3, target: Vec3) -> Self {
        let dir = (target - position).normalize_or_zero();
        let rotation = if dir == Vec3::ZERO {
            Quat::IDENTITY
        } else {
            Quat::from_rotation_arc(Vec3::NEG_Z, dir)
        };
        Self { position, rotation }
    }
}

impl TickClock {
    /// Advance by one tick of `dt_secs`.
    pub fn advance(&mut self, dt_secs: f64) {
        self.ticks += 1;
        self.elapsed_secs += dt_secs;
    }
}
