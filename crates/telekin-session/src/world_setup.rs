//! World population helpers.

use glam::Vec3;
use hecs::{Entity, World};

use telekin_core::components::{Grabbable, Position, RigidBody, Visible};

/// Spawn a candidate entity with the standard component set: resting body,
/// visible, carrying the host-facing id.
pub fn spawn_candidate(world: &mut World, id: u32, position: Vec3) -> Entity {
    world.spawn((
        Grabbable { id },
        Position(position),
        RigidBody::default(),
        Visible(true),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_candidate_components() {
        let mut world = World::new();
        let entity = spawn_candidate(&mut world, 42, Vec3::new(1.0, 2.0, 3.0));

        let grabbable = world.get::<&Grabbable>(entity).unwrap();
        assert_eq!(grabbable.id, 42);
        let position = world.get::<&Position>(entity).unwrap();
        assert_eq!(position.0, Vec3::new(1.0, 2.0, 3.0));
        let body = world.get::<&RigidBody>(entity).unwrap();
        assert_eq!(body.velocity, Vec3::ZERO);
        let visible = world.get::<&Visible>(entity).unwrap();
        assert!(visible.0);
    }
}
