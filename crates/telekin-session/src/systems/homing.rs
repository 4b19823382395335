//! Flight advancement at physics rate.
//!
//! Runs right after the airborne body is integrated. Arms a pending ramp
//! once the body rises past the catch height (or the ramp times out), then
//! feeds each tick through the correction law and applies its output. The
//! returned step tells the engine whether the flight is over.

use glam::Vec3;
use hecs::World;

use telekin_ballistics::homing::{self, FlightVerdict, HomingContext, HomingTuning};
use telekin_core::components::{Position, RigidBody};
use telekin_core::config::SessionConfig;
use telekin_core::enums::LossReason;
use telekin_core::events::InteractionEvent;

use crate::interaction::{FlightPhase, FlightState};

/// Whether the flight survives this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightStep {
    Continue,
    /// Arrived, lost, or dropped; the session returns to idle.
    Resolved,
}

/// Advance one flight by one physics tick, updating `flight` in place.
pub fn run(
    world: &mut World,
    flight: &mut FlightState,
    catch: Vec3,
    dt: f32,
    config: &SessionConfig,
    events: &mut Vec<InteractionEvent>,
) -> FlightStep {
    flight.age_secs += dt;

    let Some((position, velocity)) = body_state(world, flight.target) else {
        events.push(InteractionEvent::FlightLost {
            id: flight.id,
            reason: LossReason::TargetDropped,
        });
        log::debug!("flight lost: candidate {} despawned mid-air", flight.id);
        return FlightStep::Resolved;
    };

    match &mut flight.phase {
        FlightPhase::Ramp {
            solved,
            degenerate,
            commit_height,
        } => {
            let risen = position.y >= *commit_height;
            if risen || flight.age_secs >= config.ramp_timeout_secs {
                let solved = *solved;
                let degenerate = *degenerate;
                if let Ok(mut body) = world.get::<&mut RigidBody>(flight.target) {
                    body.velocity = solved;
                }
                flight.phase = FlightPhase::Ballistic {
                    secs_since_commit: 0.0,
                };
                events.push(InteractionEvent::Launched {
                    id: flight.id,
                    speed: solved.length(),
                    degenerate,
                });
                log::debug!(
                    "ramp committed: candidate {} at {:.2} m/s",
                    flight.id,
                    solved.length()
                );
            }
            FlightStep::Continue
        }
        FlightPhase::Ballistic { secs_since_commit } => {
            *secs_since_commit += dt;
            let ctx = HomingContext {
                policy: config.homing_policy,
                position,
                velocity,
                catch_point: catch,
                age_secs: flight.age_secs,
                secs_since_commit: *secs_since_commit,
                dt,
            };
            let update = homing::evaluate(&ctx, &HomingTuning::from(config));

            // A lost flight keeps its velocity; anything else takes the
            // law's output (arrival stops the body).
            if !matches!(update.verdict, FlightVerdict::Lost(_)) {
                if let Ok(mut body) = world.get::<&mut RigidBody>(flight.target) {
                    body.velocity = update.velocity;
                    body.angular_velocity *= update.angular_factor;
                }
            }

            match update.verdict {
                FlightVerdict::Continue => FlightStep::Continue,
                FlightVerdict::Arrived => {
                    events.push(InteractionEvent::Arrived {
                        id: flight.id,
                        airborne_secs: flight.age_secs,
                    });
                    log::debug!(
                        "arrived: candidate {} after {:.2} s airborne",
                        flight.id,
                        flight.age_secs
                    );
                    FlightStep::Resolved
                }
                FlightVerdict::Lost(reason) => {
                    events.push(InteractionEvent::FlightLost {
                        id: flight.id,
                        reason,
                    });
                    log::debug!("flight lost: candidate {} ({reason:?})", flight.id);
                    FlightStep::Resolved
                }
            }
        }
    }
}

fn body_state(world: &World, entity: hecs::Entity) -> Option<(Vec3, Vec3)> {
    let position = world.get::<&Position>(entity).ok()?;
    let body = world.get::<&RigidBody>(entity).ok()?;
    Some((position.0, body.velocity))
}
