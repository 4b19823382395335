//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Interaction logic lives in systems, not components.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Marks an entity as a flick-fetchable object and carries the stable id
/// hosts use to refer to it across the API boundary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Grabbable {
    pub id: u32,
}

/// World-space position in meters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec3);

/// Physics-body handle. While an object is airborne the session writes its
/// velocity and dampens its angular velocity; at all other times the body
/// belongs to the host.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RigidBody {
    pub velocity: Vec3,
    pub angular_velocity: Vec3,
}

/// Host-reported visibility. Invisible candidates are deregistered and
/// never selectable.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Visible(pub bool);
