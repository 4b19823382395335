//! Enumeration types used throughout the interaction system.

use serde::{Deserialize, Serialize};

/// Which tracked controller a value refers to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hand {
    Left,
    #[default]
    Right,
}

/// Top-level interaction phase (snapshot summary of the session state
/// machine; the session crate holds the full per-phase data).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Nothing focused, nothing in flight.
    #[default]
    Idle,
    /// A candidate holds focus; no button held yet.
    Focused,
    /// Focus locked by a held grip/trigger; flick gesture armed.
    Locked,
    /// Launch committed, vertical pop in progress, solved shot pending.
    Ramping,
    /// Object in guided ballistic flight toward the hand.
    Airborne,
}

/// Which button locks the focused candidate and ends the gesture window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionMode {
    /// Grip press locks, grip release ends the gesture window.
    #[default]
    Grip,
    /// Trigger press locks, trigger release ends the gesture window.
    Trigger,
}

/// Pose the selection ray is cast from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AimSource {
    /// Aim along the primary hand's forward vector.
    #[default]
    PrimaryHand,
    /// Aim along the head's forward vector (gaze-style selection).
    Head,
}

/// How a flick gesture is recognized from hand-velocity samples.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlickPolicy {
    /// Fire the moment a single sample exceeds the cutoff speed while locked.
    #[default]
    Threshold,
    /// Fire on lock release, with strength = median of the sample window.
    /// Robust against one-frame tracking spikes.
    Median,
}

/// How the launch velocity is produced once a flick fires.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LaunchPolicy {
    /// Apply the solved ballistic velocity immediately.
    Ballistic,
    /// Vertical pop first; apply the solved velocity once the object rises
    /// past the catch height (or the ramp times out).
    #[default]
    RampedBallistic,
    /// Skip the solver: velocity straight toward the catch point, magnitude
    /// scaled by gesture strength.
    Impulse,
}

/// Square-root handling in the trajectory solver when geometry turns
/// degenerate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RootPolicy {
    /// Reject infeasible geometry and use the fixed-speed fallback shot.
    #[default]
    Guarded,
    /// Take the absolute value under the root and always produce a shot.
    ClampedAbsolute,
}

/// Mid-flight correction style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HomingPolicy {
    /// Blend a deceleration term with hand-attraction every physics tick.
    #[default]
    Blend,
    /// While still climbing, boost toward the hand without redirecting;
    /// switch to full blend correction once descending.
    AscentBoost,
}

/// Why a guided flight ended without arriving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LossReason {
    /// Object drifted beyond the far tracking limit.
    OutOfRange,
    /// Object speed collapsed below the stall floor after the grace period.
    Stalled,
    /// Flight exceeded the timeout since launch.
    TimedOut,
    /// Target was deregistered or despawned mid-flight.
    TargetDropped,
    /// An external gate (a direct grab) forced the session to reset.
    Interrupted,
}

impl Hand {
    /// The opposite hand.
    pub fn other(self) -> Hand {
        match self {
            Hand::Left => Hand::Right,
            Hand::Right => Hand::Left,
        }
    }

    /// Stable index for per-hand arrays.
    pub fn index(self) -> usize {
        match self {
            Hand::Left => 0,
            Hand::Right => 1,
        }
    }
}
