//! Angle-based candidate selection with hysteresis.
//!
//! Runs once per frame. Every registered, visible candidate is scored by the
//! angle between the aim ray and the ray to the candidate; the smallest angle
//! wins. Three cones keep focus stable: a wide acquisition cone, a narrow
//! stealing cone a challenger must enter to take focus from the holder, and
//! a wider release cone the holder must leave before focus drops. A locked
//! hold pins focus entirely, and an active flight stands selection down.

use glam::Vec3;
use hecs::World;

use telekin_core::components::{Grabbable, Position, Visible};
use telekin_core::config::SessionConfig;
use telekin_core::enums::Hand;
use telekin_core::events::InteractionEvent;
use telekin_core::types::Pose;

use crate::interaction::{FocusState, GrabState};
use crate::registry::CandidateRegistry;

/// Run one selection pass, updating `state` in place.
///
/// `blocked` gates selection externally (a direct grab): it drops any focus
/// and suppresses acquisition until it clears.
pub fn run(
    world: &World,
    registry: &CandidateRegistry,
    state: &mut GrabState,
    aim: &Pose,
    hand: Hand,
    blocked: bool,
    config: &SessionConfig,
    events: &mut Vec<InteractionEvent>,
) {
    // Selection never runs against an airborne object.
    if matches!(state, GrabState::Flight(_)) {
        return;
    }
    if blocked {
        if let Some(focus) = state.focus() {
            events.push(InteractionEvent::FocusLost { id: focus.id });
            log::debug!("focus dropped: selection blocked");
        }
        *state = GrabState::Idle;
        return;
    }
    // A locked hold pins focus regardless of where the aim drifts.
    if matches!(state, GrabState::Locked(_)) {
        return;
    }

    let origin = aim.position;
    let forward = aim.forward();

    let mut best: Option<(hecs::Entity, u32, f32)> = None;
    for entity in registry.iter() {
        let Ok(grabbable) = world.get::<&Grabbable>(entity) else {
            continue;
        };
        let Some(angle) = candidate_angle(world, entity, origin, forward) else {
            continue;
        };
        if best.map_or(true, |(_, _, best_angle)| angle < best_angle) {
            best = Some((entity, grabbable.id, angle));
        }
    }

    match state {
        GrabState::Idle => {
            let Some((target, id, angle_rad)) = best else {
                return;
            };
            if angle_rad <= config.initial_select_angle_deg.to_radians() {
                *state = GrabState::Focused(FocusState {
                    target,
                    id,
                    angle_rad,
                });
                push_gained(events, id, hand, angle_rad);
            }
        }
        GrabState::Focused(focus) => {
            let held = candidate_angle(world, focus.target, origin, forward);
            match held {
                Some(angle_rad) if angle_rad <= config.release_angle_deg.to_radians() => {
                    focus.angle_rad = angle_rad;
                    let Some((target, id, best_angle)) = best else {
                        return;
                    };
                    // A challenger only steals focus from inside the
                    // stealing cone, and only by actually beating the holder.
                    if target != focus.target
                        && best_angle <= config.retain_angle_deg.to_radians()
                        && best_angle < angle_rad
                    {
                        events.push(InteractionEvent::FocusLost { id: focus.id });
                        *focus = FocusState {
                            target,
                            id,
                            angle_rad: best_angle,
                        };
                        push_gained(events, id, hand, best_angle);
                    }
                }
                // Gone, invisible, or outside the release cone.
                _ => {
                    let id = focus.id;
                    events.push(InteractionEvent::FocusLost { id });
                    log::debug!("focus lost: candidate {id} left the release cone");
                    *state = GrabState::Idle;
                }
            }
        }
        // Returned early above.
        GrabState::Locked(_) | GrabState::Flight(_) => {}
    }
}

/// Aim angle to one candidate, or None when it is despawned, invisible, or
/// coincident with the aim origin.
fn candidate_angle(
    world: &World,
    entity: hecs::Entity,
    origin: Vec3,
    forward: Vec3,
) -> Option<f32> {
    let position = world.get::<&Position>(entity).ok()?;
    let visible = world.get::<&Visible>(entity).ok()?;
    if !visible.0 {
        return None;
    }
    let offset = position.0 - origin;
    if offset.length_squared() < 1e-6 {
        return None;
    }
    Some(forward.angle_between(offset))
}

fn push_gained(events: &mut Vec<InteractionEvent>, id: u32, hand: Hand, angle_rad: f32) {
    events.push(InteractionEvent::FocusGained {
        id,
        hand,
        angle_deg: angle_rad.to_degrees(),
    });
    events.push(InteractionEvent::HandSelected { hand });
    log::debug!(
        "focus gained: candidate {id} at {:.1} deg",
        angle_rad.to_degrees()
    );
}
