//! Launch application — turns a recognized flick into a flight.
//!
//! Runs at the frame the flick lands. The solved arc targets the catch
//! point, a fixed offset above the hand at that instant. Under the ramped
//! policy the body only gets the vertical pop here; the solved shot is held
//! in the flight state and committed later by the homing system.

use glam::Vec3;
use hecs::World;

use telekin_ballistics::solver::{self, LaunchSolution};
use telekin_core::components::{Position, RigidBody};
use telekin_core::config::SessionConfig;
use telekin_core::enums::LaunchPolicy;
use telekin_core::events::InteractionEvent;

use crate::interaction::{FlightPhase, FlightState, FocusState};
use crate::systems::flick::Flick;

/// The point an airborne object is pulled toward: a fixed height above the
/// catching hand, so the object settles into the palm rather than the wrist.
pub fn catch_point(hand_position: Vec3, config: &SessionConfig) -> Vec3 {
    hand_position + Vec3::Y * config.catch_height_offset
}

/// Launch the focused candidate. Returns the new flight, or None when the
/// candidate lost its body between focus and flick (the hold just ends).
pub fn run(
    world: &mut World,
    focus: &FocusState,
    flick: Flick,
    hand_position: Vec3,
    config: &SessionConfig,
    events: &mut Vec<InteractionEvent>,
) -> Option<FlightState> {
    let Ok(position) = world.get::<&Position>(focus.target) else {
        log::debug!("launch aborted: candidate {} has no position", focus.id);
        return None;
    };
    let start = position.0;
    drop(position);

    let catch = catch_point(hand_position, config);

    // `committed` is Some(degenerate) when the full shot is applied this
    // frame, None when only the ramp pop starts now.
    let (velocity, phase, committed) = match config.launch_policy {
        LaunchPolicy::Ballistic => {
            let shot = solve_shot(start, catch, config);
            (
                shot.velocity,
                FlightPhase::Ballistic {
                    secs_since_commit: 0.0,
                },
                Some(shot.degenerate),
            )
        }
        LaunchPolicy::RampedBallistic => {
            let shot = solve_shot(start, catch, config);
            (
                Vec3::Y * config.ramp_pop_speed,
                FlightPhase::Ramp {
                    solved: shot.velocity,
                    degenerate: shot.degenerate,
                    commit_height: catch.y,
                },
                None,
            )
        }
        LaunchPolicy::Impulse => (
            impulse_direction(start, catch) * flick.strength * config.impulse_speed_scale,
            FlightPhase::Ballistic {
                secs_since_commit: 0.0,
            },
            Some(false),
        ),
    };

    let Ok(mut body) = world.get::<&mut RigidBody>(focus.target) else {
        log::debug!("launch aborted: candidate {} has no body", focus.id);
        return None;
    };
    body.velocity = velocity;
    drop(body);

    match committed {
        Some(degenerate) => {
            events.push(InteractionEvent::Launched {
                id: focus.id,
                speed: velocity.length(),
                degenerate,
            });
            log::debug!(
                "launched: candidate {} at {:.2} m/s",
                focus.id,
                velocity.length()
            );
        }
        None => {
            events.push(InteractionEvent::RampStarted { id: focus.id });
            log::debug!("ramp started: candidate {}", focus.id);
        }
    }

    Some(FlightState {
        target: focus.target,
        id: focus.id,
        age_secs: 0.0,
        phase,
    })
}

fn solve_shot(start: Vec3, catch: Vec3, config: &SessionConfig) -> LaunchSolution {
    solver::solve(
        start,
        catch,
        config.launch_angle_deg,
        config.gravity_y,
        config.root_policy,
        config.fallback_shot_speed,
    )
}

/// Shot direction under the impulse policy; straight up when the candidate
/// already sits on the catch point.
fn impulse_direction(start: Vec3, catch: Vec3) -> Vec3 {
    let dir = (catch - start).normalize_or_zero();
    if dir == Vec3::ZERO {
        Vec3::Y
    } else {
        dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use telekin_core::components::{Grabbable, Visible};
    use telekin_core::enums::RootPolicy;

    fn spawn(world: &mut World, id: u32, position: Vec3) -> hecs::Entity {
        world.spawn((
            Grabbable { id },
            Position(position),
            RigidBody::default(),
            Visible(true),
        ))
    }

    fn focus_on(target: hecs::Entity, id: u32) -> FocusState {
        FocusState {
            target,
            id,
            angle_rad: 0.0,
        }
    }

    #[test]
    fn test_ramped_launch_pops_vertically() {
        let mut world = World::new();
        let target = spawn(&mut world, 3, Vec3::new(0.0, 0.0, -4.0));
        let config = SessionConfig::default();
        let mut events = Vec::new();

        let flight = run(
            &mut world,
            &focus_on(target, 3),
            Flick { strength: 4.0 },
            Vec3::new(0.0, 1.2, 0.0),
            &config,
            &mut events,
        )
        .unwrap();

        let body = world.get::<&RigidBody>(target).unwrap();
        assert_eq!(body.velocity, Vec3::Y * config.ramp_pop_speed);
        match flight.phase {
            FlightPhase::Ramp {
                solved,
                commit_height,
                ..
            } => {
                assert!(solved.length() > 0.0, "ramp must hold a solved shot");
                assert!((commit_height - (1.2 + config.catch_height_offset)).abs() < 1e-6);
            }
            FlightPhase::Ballistic { .. } => panic!("ramped policy must start in the ramp"),
        }
        assert_eq!(events, vec![InteractionEvent::RampStarted { id: 3 }]);
    }

    #[test]
    fn test_ballistic_launch_applies_solved_arc() {
        let mut world = World::new();
        let target = spawn(&mut world, 7, Vec3::new(0.0, 0.0, -5.0));
        let config = SessionConfig {
            launch_policy: LaunchPolicy::Ballistic,
            root_policy: RootPolicy::Guarded,
            catch_height_offset: 0.0,
            gravity_y: -9.8,
            ..SessionConfig::default()
        };
        let mut events = Vec::new();

        let flight = run(
            &mut world,
            &focus_on(target, 7),
            Flick { strength: 4.0 },
            Vec3::ZERO,
            &config,
            &mut events,
        )
        .unwrap();

        // Level 5 m shot at 45° under g = 9.8: |v| = sqrt(2 · 24.5) = 7.
        let body = world.get::<&RigidBody>(target).unwrap();
        assert!((body.velocity.length() - 7.0).abs() < 1e-3);
        assert!(matches!(flight.phase, FlightPhase::Ballistic { .. }));
        match events.as_slice() {
            [InteractionEvent::Launched {
                id: 7,
                speed,
                degenerate: false,
            }] => assert!((speed - 7.0).abs() < 1e-3),
            other => panic!("expected one Launched event, got {other:?}"),
        }
    }

    #[test]
    fn test_impulse_launch_scales_strength() {
        let mut world = World::new();
        let target = spawn(&mut world, 1, Vec3::new(0.0, 0.25, -2.0));
        let config = SessionConfig {
            launch_policy: LaunchPolicy::Impulse,
            ..SessionConfig::default()
        };
        let mut events = Vec::new();

        run(
            &mut world,
            &focus_on(target, 1),
            Flick { strength: 2.0 },
            Vec3::ZERO,
            &config,
            &mut events,
        )
        .unwrap();

        // Catch point sits at (0, 0.25, 0), dead ahead of the candidate.
        let body = world.get::<&RigidBody>(target).unwrap();
        let expected = Vec3::Z * 2.0 * config.impulse_speed_scale;
        assert!((body.velocity - expected).length() < 1e-5);
    }

    #[test]
    fn test_missing_candidate_aborts() {
        let mut world = World::new();
        let target = spawn(&mut world, 9, Vec3::ZERO);
        world.despawn(target).unwrap();
        let mut events = Vec::new();

        let flight = run(
            &mut world,
            &focus_on(target, 9),
            Flick { strength: 4.0 },
            Vec3::ZERO,
            &SessionConfig::default(),
            &mut events,
        );
        assert!(flight.is_none());
        assert!(events.is_empty());
    }
}
