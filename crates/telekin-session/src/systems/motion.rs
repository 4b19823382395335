//! Airborne body integration.
//!
//! The session integrates only the one airborne body; every grounded
//! candidate belongs to the host's own physics. Semi-implicit Euler, gravity
//! into velocity first so the homing pass downstream sees the tick's real
//! velocity.

use hecs::World;

use telekin_core::components::{Position, RigidBody};

/// Advance the airborne body by one physics tick. Missing entities are
/// ignored; flight resolution notices the loss separately.
pub fn run(world: &mut World, target: hecs::Entity, gravity_y: f32, dt: f32) {
    let Ok((position, body)) = world.query_one_mut::<(&mut Position, &mut RigidBody)>(target)
    else {
        return;
    };
    body.velocity.y += gravity_y * dt;
    position.0 += body.velocity * dt;
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_semi_implicit_euler_step() {
        let mut world = World::new();
        let target = world.spawn((
            Position(Vec3::ZERO),
            RigidBody {
                velocity: Vec3::new(1.0, 0.0, 0.0),
                angular_velocity: Vec3::ZERO,
            },
        ));

        run(&mut world, target, -10.0, 0.1);

        let (position, body) = world
            .query_one_mut::<(&Position, &RigidBody)>(target)
            .unwrap();
        assert!((body.velocity - Vec3::new(1.0, -1.0, 0.0)).length() < 1e-6);
        // Position moves by the updated velocity, not the entry velocity.
        assert!((position.0 - Vec3::new(0.1, -0.1, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_missing_entity_is_ignored() {
        let mut world = World::new();
        let target = world.spawn((Position(Vec3::ZERO),));
        world.despawn(target).unwrap();
        run(&mut world, target, -10.0, 0.1);
    }
}
