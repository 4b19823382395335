//! Session snapshot — the complete observable state, rebuilt on demand for
//! hosts, debugging overlays, and the replay tool.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::{Hand, SessionPhase};

/// Read-only view of a whole session at one frame.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Frame-clock tick count.
    pub frame: u64,
    /// Frame-clock elapsed seconds.
    pub elapsed_secs: f64,
    pub phase: SessionPhase,
    pub primary_hand: Hand,
    /// True while a direct grab or an active flight blocks new selection.
    pub selection_blocked: bool,
    /// Id of the focused candidate, if any.
    pub focused: Option<u32>,
    /// Id of the airborne candidate, if any.
    pub airborne: Option<u32>,
    /// Left then right.
    pub hands: [HandView; 2],
    pub candidates: Vec<CandidateView>,
}

/// One hand's observable state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HandView {
    pub hand: Hand,
    pub grip: bool,
    pub trigger: bool,
    pub grabbing: bool,
    pub position: Vec3,
    /// Latest tracked speed (m/s).
    pub speed: f32,
}

/// One candidate's observable state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateView {
    pub id: u32,
    pub position: Vec3,
    pub velocity: Vec3,
    pub speed: f32,
    pub visible: bool,
    pub registered: bool,
    pub focused: bool,
    pub airborne: bool,
}
