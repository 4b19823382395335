//! Per-session configuration.
//!
//! One struct, flat scalars plus the policy enums, defaults drawn from
//! [`crate::constants`]. Serializable so hosts and the replay tool can load
//! partial overrides from JSON.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{AimSource, FlickPolicy, HomingPolicy, LaunchPolicy, RootPolicy, SelectionMode};

/// Tuning and policy selection for one interaction session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    // --- Policies ---
    pub selection_mode: SelectionMode,
    pub aim_source: AimSource,
    pub flick_policy: FlickPolicy,
    pub launch_policy: LaunchPolicy,
    pub root_policy: RootPolicy,
    pub homing_policy: HomingPolicy,

    // --- Selection ---
    /// Acquisition cone half-angle (degrees).
    pub initial_select_angle_deg: f32,
    /// Focus-stealing cone half-angle (degrees).
    pub retain_angle_deg: f32,
    /// Release cone half-angle (degrees).
    pub release_angle_deg: f32,

    // --- Flick detection ---
    /// Samples kept in the gesture window.
    pub flick_sample_window: usize,
    /// Instantaneous speed firing a threshold-policy flick (m/s).
    pub flick_cutoff_speed: f32,
    /// Minimum gesture strength for any launch (m/s).
    pub flick_strength_floor: f32,

    // --- Launch ---
    /// Solver launch elevation (degrees).
    pub launch_angle_deg: f32,
    /// Vertical gravity (m/s², negative down).
    pub gravity_y: f32,
    /// Fallback shot speed for degenerate geometry (m/s).
    pub fallback_shot_speed: f32,
    /// Catch point height above the hand (meters).
    pub catch_height_offset: f32,
    /// Strength multiplier under the impulse launch policy.
    pub impulse_speed_scale: f32,

    // --- Pre-launch ramp ---
    /// Vertical pop speed (m/s).
    pub ramp_pop_speed: f32,
    /// Ramp duration ceiling (seconds).
    pub ramp_timeout_secs: f32,

    // --- Homing ---
    /// Post-commit correction grace (seconds).
    pub homing_grace_secs: f32,
    /// Far loss bound (meters).
    pub homing_far_limit: f32,
    /// Stall loss bound (m/s).
    pub homing_stall_speed: f32,
    /// Correction envelope outer edge (meters).
    pub homing_max_range: f32,
    /// Arrival radius / envelope inner edge (meters).
    pub arrive_radius: f32,
    /// Per-second blend rate inside the envelope.
    pub homing_blend_rate: f32,
    /// Ascent-boost acceleration (m/s²).
    pub homing_boost_accel: f32,
    /// Per-second angular damping while corrected.
    pub angular_damping_rate: f32,
    /// Flight abandonment timeout since launch (seconds).
    pub flight_timeout_secs: f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            selection_mode: SelectionMode::default(),
            aim_source: AimSource::default(),
            flick_policy: FlickPolicy::default(),
            launch_policy: LaunchPolicy::default(),
            root_policy: RootPolicy::default(),
            homing_policy: HomingPolicy::default(),
            initial_select_angle_deg: INITIAL_SELECT_ANGLE_DEG,
            retain_angle_deg: RETAIN_ANGLE_DEG,
            release_angle_deg: RELEASE_ANGLE_DEG,
            flick_sample_window: FLICK_SAMPLE_WINDOW,
            flick_cutoff_speed: FLICK_CUTOFF_SPEED,
            flick_strength_floor: FLICK_STRENGTH_FLOOR,
            launch_angle_deg: LAUNCH_ANGLE_DEG,
            gravity_y: GRAVITY_Y,
            fallback_shot_speed: FALLBACK_SHOT_SPEED,
            catch_height_offset: CATCH_HEIGHT_OFFSET,
            impulse_speed_scale: IMPULSE_SPEED_SCALE,
            ramp_pop_speed: RAMP_POP_SPEED,
            ramp_timeout_secs: RAMP_TIMEOUT_SECS,
            homing_grace_secs: HOMING_GRACE_SECS,
            homing_far_limit: HOMING_FAR_LIMIT,
            homing_stall_speed: HOMING_STALL_SPEED,
            homing_max_range: HOMING_MAX_RANGE,
            arrive_radius: ARRIVE_RADIUS,
            homing_blend_rate: HOMING_BLEND_RATE,
            homing_boost_accel: HOMING_BOOST_ACCEL,
            angular_damping_rate: ANGULAR_DAMPING_RATE,
            flight_timeout_secs: FLIGHT_TIMEOUT_SECS,
        }
    }
}
