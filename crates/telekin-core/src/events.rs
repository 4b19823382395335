//! Events emitted by the session for the host to react to — highlight
//! changes, sound cues, attach logic. The session itself renders nothing.

use serde::{Deserialize, Serialize};

use crate::enums::{Hand, LossReason};

/// Interaction events drained from each tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InteractionEvent {
    /// A candidate acquired focus (drive its highlight on).
    FocusGained { id: u32, hand: Hand, angle_deg: f32 },
    /// A candidate lost focus (drive its highlight off).
    FocusLost { id: u32 },
    /// Fired once per focus acquisition, naming the aiming hand.
    HandSelected { hand: Hand },
    /// A flick gesture was recognized.
    FlickDetected { hand: Hand, strength: f32 },
    /// A ramped launch began its vertical pop.
    RampStarted { id: u32 },
    /// The launch velocity was applied. `degenerate` is true when the
    /// solver fell back to the fixed-speed shot.
    Launched { id: u32, speed: f32, degenerate: bool },
    /// The object reached the catch point; the host should attach it.
    Arrived { id: u32, airborne_secs: f32 },
    /// The flight ended without arriving.
    FlightLost { id: u32, reason: LossReason },
}
