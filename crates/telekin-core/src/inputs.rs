//! Input events fed from the host into the session.
//!
//! Events are queued and drained at the next frame-tick boundary, so a
//! host may deliver them from any point in its own frame.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::enums::Hand;

/// Everything the host reports into a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InputEvent {
    // --- Poses ---
    /// Tracked controller pose for one hand.
    HandPose {
        hand: Hand,
        position: Vec3,
        rotation: Quat,
    },
    /// Tracked head pose (used when aiming from the head).
    HeadPose { position: Vec3, rotation: Quat },

    // --- Buttons (edge events, already debounced by the host) ---
    /// Grip pressed or released.
    GripChanged { hand: Hand, pressed: bool },
    /// Trigger pressed or released.
    TriggerChanged { hand: Hand, pressed: bool },

    // --- Motion ---
    /// Tracked hand velocity for this frame (m/s, world space).
    VelocitySample { hand: Hand, velocity: Vec3 },

    // --- Gates ---
    /// The hand started or stopped directly holding some object. While any
    /// hand is grabbing, distant selection is blocked and any flight is
    /// cancelled.
    GrabbingChanged { hand: Hand, grabbing: bool },

    // --- Candidates ---
    /// Host-side visibility change for a candidate. Becoming visible
    /// registers it; becoming invisible deregisters it and clears any
    /// focus or flight that referenced it.
    VisibilityChanged { id: u32, visible: bool },
}
