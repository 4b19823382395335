//! Interaction state — per-hand input shadows and the grab state machine.
//!
//! `GrabState` is the single authority on what the session is doing with
//! candidates. Holding the focused / airborne target inside the active
//! variant makes the "at most one focused, at most one airborne" rule a
//! structural property instead of a runtime check.

use glam::Vec3;
use telekin_core::enums::SessionPhase;
use telekin_core::types::Pose;

/// Latest tracked state for one hand, written by input drain and read by
/// every frame system.
#[derive(Debug, Clone, Copy, Default)]
pub struct HandInput {
    pub pose: Pose,
    /// Most recent sampled linear velocity, world space.
    pub velocity: Vec3,
    pub grip: bool,
    pub trigger: bool,
    /// True while the hand is directly holding something.
    pub grabbing: bool,
}

/// An acquired selection target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusState {
    pub target: hecs::Entity,
    pub id: u32,
    /// Angle between the aim ray and the target at the last selection pass.
    pub angle_rad: f32,
}

/// An object in flight toward the catch point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightState {
    pub target: hecs::Entity,
    pub id: u32,
    /// Seconds since launch, advanced on the physics clock.
    pub age_secs: f32,
    pub phase: FlightPhase,
}

/// Sub-phase of a flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FlightPhase {
    /// Vertical pop before the solved arc is applied. The solve was taken
    /// at flick time and is committed unchanged when the object rises to
    /// `commit_height` or the ramp times out.
    Ramp {
        solved: Vec3,
        degenerate: bool,
        commit_height: f32,
    },
    /// Arcing toward the catch point under homing control.
    Ballistic { secs_since_commit: f32 },
}

/// The grab session state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum GrabState {
    #[default]
    Idle,
    /// A candidate is highlighted but not committed to.
    Focused(FocusState),
    /// The selection button is held; focus is pinned and hand speed is
    /// being sampled for a flick.
    Locked(FocusState),
    /// A candidate is airborne toward the catch point.
    Flight(FlightState),
}

impl GrabState {
    /// Public phase label for this state, as reported in snapshots.
    pub fn phase(&self) -> SessionPhase {
        match self {
            GrabState::Idle => SessionPhase::Idle,
            GrabState::Focused(_) => SessionPhase::Focused,
            GrabState::Locked(_) => SessionPhase::Locked,
            GrabState::Flight(flight) => match flight.phase {
                FlightPhase::Ramp { .. } => SessionPhase::Ramping,
                FlightPhase::Ballistic { .. } => SessionPhase::Airborne,
            },
        }
    }

    pub fn focus(&self) -> Option<&FocusState> {
        match self {
            GrabState::Focused(focus) | GrabState::Locked(focus) => Some(focus),
            _ => None,
        }
    }

    pub fn flight(&self) -> Option<&FlightState> {
        match self {
            GrabState::Flight(flight) => Some(flight),
            _ => None,
        }
    }

    /// The entity this state is bound to, whatever the phase.
    pub fn target(&self) -> Option<hecs::Entity> {
        match self {
            GrabState::Idle => None,
            GrabState::Focused(focus) | GrabState::Locked(focus) => Some(focus.target),
            GrabState::Flight(flight) => Some(flight.target),
        }
    }
}
