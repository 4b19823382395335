//! Interaction constants and tuning parameters.
//!
//! These are the defaults behind [`crate::config::SessionConfig`]; hosts
//! override them per session through the config, not by editing here.

// --- Clocks ---

/// Nominal frame (render) tick rate in Hz. Hosts may call faster or slower;
/// selection and gesture sampling are per-call, not rate-locked.
pub const FRAME_RATE: u32 = 90;

/// Seconds per nominal frame tick.
pub const FRAME_DT: f32 = 1.0 / FRAME_RATE as f32;

/// Fixed physics tick rate in Hz (matches a 0.02 s host physics step).
pub const PHYSICS_RATE: u32 = 50;

/// Seconds per physics tick.
pub const PHYSICS_DT: f32 = 1.0 / PHYSICS_RATE as f32;

// --- Selection ---

/// Aim cone half-angle (degrees) a candidate must enter to acquire focus
/// when nothing is focused yet.
pub const INITIAL_SELECT_ANGLE_DEG: f32 = 45.0;

/// A challenger must come within this angle (degrees) to steal focus from
/// the current holder. Tighter than acquisition so focus does not flicker
/// between near-equal candidates.
pub const RETAIN_ANGLE_DEG: f32 = 30.0;

/// Focus is released once the held candidate drifts beyond this angle
/// (degrees). Wider than acquisition, again for hysteresis.
pub const RELEASE_ANGLE_DEG: f32 = 50.0;

// --- Flick detection ---

/// Hand-velocity magnitude samples kept for the median window
/// (9 frames ≈ 100 ms at the nominal frame rate).
pub const FLICK_SAMPLE_WINDOW: usize = 9;

/// Instantaneous speed (m/s) that fires a flick under the threshold policy.
pub const FLICK_CUTOFF_SPEED: f32 = 3.0;

/// Minimum gesture strength (m/s) for any launch to fire.
pub const FLICK_STRENGTH_FLOOR: f32 = 0.5;

// --- Launch ---

/// Launch elevation angle (degrees) fed to the trajectory solver.
pub const LAUNCH_ANGLE_DEG: f32 = 45.0;

/// Vertical gravity (m/s², negative = down) assumed by the solver and by
/// airborne integration.
pub const GRAVITY_Y: f32 = -9.81;

/// Speed (m/s) of the fallback shot used when the solve is degenerate.
pub const FALLBACK_SHOT_SPEED: f32 = 4.0;

/// Catch point height above the hand position (meters). Objects are thrown
/// at a point slightly above the palm so they drop into it.
pub const CATCH_HEIGHT_OFFSET: f32 = 0.25;

/// Gesture strength to launch speed multiplier under the impulse policy.
pub const IMPULSE_SPEED_SCALE: f32 = 1.5;

// --- Pre-launch ramp ---

/// Vertical pop speed (m/s) imparted when a ramped launch begins.
pub const RAMP_POP_SPEED: f32 = 2.5;

/// The solved shot is applied unconditionally once the ramp has run this
/// long (seconds) without the object reaching the catch height.
pub const RAMP_TIMEOUT_SECS: f32 = 0.5;

// --- Homing ---

/// No correction is applied for this long (seconds) after the solved shot
/// commits, so the launch arc is allowed to establish itself.
pub const HOMING_GRACE_SECS: f32 = 0.15;

/// An airborne object farther than this (meters) from the catch point is
/// declared lost.
pub const HOMING_FAR_LIMIT: f32 = 50.0;

/// An airborne object slower than this (m/s) after the grace period is
/// declared stalled (resting on geometry, swallowed by a collider, etc.).
pub const HOMING_STALL_SPEED: f32 = 0.08;

/// Correction applies only within this distance (meters) of the catch
/// point; beyond it the object flies its ballistic arc untouched.
pub const HOMING_MAX_RANGE: f32 = 4.0;

/// Arrival radius (meters); also the inner edge of the correction
/// envelope.
pub const ARRIVE_RADIUS: f32 = 0.15;

/// Per-second rate at which velocity blends toward the hand-pointing
/// direction inside the correction envelope.
pub const HOMING_BLEND_RATE: f32 = 6.0;

/// Acceleration (m/s²) of the boost-only correction used by the
/// ascent-boost policy while the object is still climbing.
pub const HOMING_BOOST_ACCEL: f32 = 12.0;

/// Per-second angular velocity damping applied while corrected, so spin
/// settles before the object reaches the hand.
pub const ANGULAR_DAMPING_RATE: f32 = 3.0;

/// A flight still unresolved this long (seconds) after launch is abandoned.
pub const FLIGHT_TIMEOUT_SECS: f32 = 3.0;
