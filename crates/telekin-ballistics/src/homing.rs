//! Mid-flight correction law.
//!
//! Pure functions that compute the per-physics-tick velocity correction and
//! flight verdict for an airborne object being pulled toward the hand.
//! No ECS dependency — operates on plain data.

use glam::Vec3;

use telekin_core::config::SessionConfig;
use telekin_core::enums::{HomingPolicy, LossReason};

/// Homing parameters extracted from the session config.
#[derive(Debug, Clone, Copy)]
pub struct HomingTuning {
    pub grace_secs: f32,
    pub far_limit: f32,
    pub stall_speed: f32,
    pub max_range: f32,
    pub arrive_radius: f32,
    pub blend_rate: f32,
    pub boost_accel: f32,
    pub angular_damping_rate: f32,
    pub timeout_secs: f32,
}

impl From<&SessionConfig> for HomingTuning {
    fn from(cfg: &SessionConfig) -> Self {
        Self {
            grace_secs: cfg.homing_grace_secs,
            far_limit: cfg.homing_far_limit,
            stall_speed: cfg.homing_stall_speed,
            max_range: cfg.homing_max_range,
            arrive_radius: cfg.arrive_radius,
            blend_rate: cfg.homing_blend_rate,
            boost_accel: cfg.homing_boost_accel,
            angular_damping_rate: cfg.angular_damping_rate,
            timeout_secs: cfg.flight_timeout_secs,
        }
    }
}

/// Input to the correction law for a single physics tick.
pub struct HomingContext {
    pub policy: HomingPolicy,
    /// Object position.
    pub position: Vec3,
    /// Object velocity going into this tick (gravity already applied).
    pub velocity: Vec3,
    /// Point the object is being pulled toward.
    pub catch_point: Vec3,
    /// Seconds since the launch fired (ramp included).
    pub age_secs: f32,
    /// Seconds since the solved shot was applied to the body.
    pub secs_since_commit: f32,
    /// Physics tick length in seconds.
    pub dt: f32,
}

/// Output of the correction law.
pub struct HomingUpdate {
    pub verdict: FlightVerdict,
    /// Velocity after correction (unchanged outside the envelope).
    pub velocity: Vec3,
    /// Multiplier for angular velocity this tick (1.0 = untouched).
    pub angular_factor: f32,
}

/// What the flight should do after this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightVerdict {
    Continue,
    /// Within the arrive radius — stop the body and hand it to the host.
    Arrived,
    /// Flight over without arriving; the body keeps its velocity.
    Lost(LossReason),
}

/// Evaluate one physics tick of flight. Resolution checks run first, then
/// the correction for whichever policy is active.
pub fn evaluate(ctx: &HomingContext, tuning: &HomingTuning) -> HomingUpdate {
    let offset = ctx.catch_point - ctx.position;
    let distance = offset.length();
    let speed = ctx.velocity.length();

    if distance <= tuning.arrive_radius {
        return HomingUpdate {
            verdict: FlightVerdict::Arrived,
            velocity: Vec3::ZERO,
            angular_factor: 0.0,
        };
    }
    if distance > tuning.far_limit {
        return carry(ctx, FlightVerdict::Lost(LossReason::OutOfRange));
    }
    if ctx.age_secs >= tuning.timeout_secs {
        return carry(ctx, FlightVerdict::Lost(LossReason::TimedOut));
    }

    // The arc is left alone right after commit so the launch can establish
    // itself; loss-by-stall is also suspended until then.
    if ctx.secs_since_commit < tuning.grace_secs {
        return carry(ctx, FlightVerdict::Continue);
    }
    if speed < tuning.stall_speed {
        return carry(ctx, FlightVerdict::Lost(LossReason::Stalled));
    }
    if distance > tuning.max_range {
        // Outside the envelope: free ballistic flight.
        return carry(ctx, FlightVerdict::Continue);
    }

    let to_catch = offset / distance;
    let velocity = match ctx.policy {
        HomingPolicy::Blend => {
            blend_correction(ctx.velocity, to_catch, speed, tuning.blend_rate * ctx.dt)
        }
        HomingPolicy::AscentBoost => {
            if ctx.velocity.y > 0.0 {
                // Still climbing: push toward the catch point without
                // redirecting the arc.
                ctx.velocity + to_catch * tuning.boost_accel * ctx.dt
            } else {
                blend_correction(ctx.velocity, to_catch, speed, tuning.blend_rate * ctx.dt)
            }
        }
    };

    HomingUpdate {
        verdict: FlightVerdict::Continue,
        velocity,
        angular_factor: (1.0 - tuning.angular_damping_rate * ctx.dt).max(0.0),
    }
}

/// A deceleration term opposing the current course blended with attraction
/// toward the catch point at the current speed. Equivalent to lerping the
/// velocity onto the catch direction, so the turn stays smooth and speed is
/// carried through rather than snapped.
fn blend_correction(velocity: Vec3, to_catch: Vec3, speed: f32, t: f32) -> Vec3 {
    velocity.lerp(to_catch * speed, t.clamp(0.0, 1.0))
}

fn carry(ctx: &HomingContext, verdict: FlightVerdict) -> HomingUpdate {
    HomingUpdate {
        verdict,
        velocity: ctx.velocity,
        angular_factor: 1.0,
    }
}
