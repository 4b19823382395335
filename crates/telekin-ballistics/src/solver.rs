//! Closed-form ballistic launch solving.
//!
//! Computes the initial velocity that carries an object from a launch point
//! onto a catch point along a fixed-elevation arc under constant gravity.
//! Degenerate geometry never panics or divides by zero; it resolves to a
//! fixed-speed fallback shot.

use glam::{Quat, Vec3};

use telekin_core::enums::RootPolicy;

/// Horizontal ranges below this (meters) are degenerate: the object sits
/// effectively under the catch point and gets the fallback shot.
const MIN_HORIZONTAL_RANGE: f32 = 1e-3;

/// Denominator magnitudes below this are numerically unusable.
const MIN_DENOMINATOR: f32 = 1e-6;

/// A solved launch shot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchSolution {
    /// Initial velocity to apply to the body.
    pub velocity: Vec3,
    /// True when geometry forced the fixed-speed fallback shot.
    pub degenerate: bool,
}

/// Solve the launch velocity from `launch` to `target` at `angle_deg`
/// elevation under `gravity_y` (m/s², negative = down).
///
/// Works in a shot-local frame (forward = horizontal direction toward the
/// target, up = world up). For horizontal range R and vertical rise H the
/// forward speed satisfies `Vf² = g·R² / (2·(H − R·tan α))` and the
/// vertical speed is `Vf·tan α`; the local velocity is then rotated into
/// world space by the yaw look-rotation from launch toward target.
///
/// When no real arc exists (the squared speed comes out non-positive),
/// `Guarded` falls back to [`fallback_shot`] at `fallback_speed` while
/// `ClampedAbsolute` takes the magnitude under the root and launches
/// anyway. Either way the result is finite.
pub fn solve(
    launch: Vec3,
    target: Vec3,
    angle_deg: f32,
    gravity_y: f32,
    policy: RootPolicy,
    fallback_speed: f32,
) -> LaunchSolution {
    let delta = target - launch;
    let horizontal = Vec3::new(delta.x, 0.0, delta.z);
    let range = horizontal.length();
    let rise = delta.y;

    if range < MIN_HORIZONTAL_RANGE {
        return LaunchSolution {
            velocity: fallback_shot(launch, target, fallback_speed),
            degenerate: true,
        };
    }

    let tan_angle = angle_deg.to_radians().tan();
    let denom = 2.0 * (rise - range * tan_angle);
    if denom.abs() < MIN_DENOMINATOR {
        return LaunchSolution {
            velocity: fallback_shot(launch, target, fallback_speed),
            degenerate: true,
        };
    }

    let forward_sq = gravity_y * range * range / denom;
    let forward_speed = match policy {
        RootPolicy::Guarded if forward_sq <= 0.0 => {
            return LaunchSolution {
                velocity: fallback_shot(launch, target, fallback_speed),
                degenerate: true,
            };
        }
        RootPolicy::Guarded => forward_sq.sqrt(),
        RootPolicy::ClampedAbsolute => forward_sq.abs().sqrt(),
    };
    let vertical_speed = forward_speed * tan_angle;

    let velocity = yaw_toward(horizontal / range) * Vec3::new(0.0, vertical_speed, -forward_speed);
    LaunchSolution {
        velocity,
        degenerate: false,
    }
}

/// Fixed-speed shot used when no real arc exists: straight at the target,
/// tilted one unit up so the object still lobs clear of resting contact.
pub fn fallback_shot(launch: Vec3, target: Vec3, speed: f32) -> Vec3 {
    let dir = (target - launch + Vec3::Y).normalize_or_zero();
    if dir == Vec3::ZERO {
        // Target exactly one unit below the launch point — throw straight up.
        Vec3::Y * speed
    } else {
        dir * speed
    }
}

/// Closed-form ballistic position at time `t` for a body leaving `start`
/// at `velocity` under constant vertical gravity.
pub fn point_at(start: Vec3, velocity: Vec3, gravity_y: f32, t: f32) -> Vec3 {
    start + velocity * t + Vec3::new(0.0, 0.5 * gravity_y * t * t, 0.0)
}

/// Yaw-only rotation turning local forward (−Z) onto the horizontal unit
/// direction `dir`.
fn yaw_toward(dir: Vec3) -> Quat {
    Quat::from_rotation_y((-dir.x).atan2(-dir.z))
}
