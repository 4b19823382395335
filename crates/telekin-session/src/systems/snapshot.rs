//! Read-only session snapshot assembly.

use hecs::World;

use telekin_core::components::{Grabbable, Position, RigidBody, Visible};
use telekin_core::enums::Hand;
use telekin_core::state::{CandidateView, HandView, SessionSnapshot};
use telekin_core::types::TickClock;

use crate::interaction::{GrabState, HandInput};
use crate::registry::CandidateRegistry;

/// Build the complete observable state. Pure read; candidates come out
/// sorted by id so hosts and tests get a stable order.
pub fn build_snapshot(
    world: &World,
    registry: &CandidateRegistry,
    frame_clock: &TickClock,
    state: &GrabState,
    hands: &[HandInput; 2],
    primary: Hand,
    blocked: bool,
) -> SessionSnapshot {
    let focused_entity = state.focus().map(|focus| focus.target);
    let airborne_entity = state.flight().map(|flight| flight.target);

    let mut candidates: Vec<CandidateView> = world
        .query::<(&Grabbable, &Position, &RigidBody, &Visible)>()
        .iter()
        .map(|(entity, (grabbable, position, body, visible))| CandidateView {
            id: grabbable.id,
            position: position.0,
            velocity: body.velocity,
            speed: body.velocity.length(),
            visible: visible.0,
            registered: registry.contains(entity),
            focused: focused_entity == Some(entity),
            airborne: airborne_entity == Some(entity),
        })
        .collect();
    candidates.sort_by_key(|candidate| candidate.id);

    let hand_view = |hand: Hand| {
        let input = &hands[hand.index()];
        HandView {
            hand,
            grip: input.grip,
            trigger: input.trigger,
            grabbing: input.grabbing,
            position: input.pose.position,
            speed: input.velocity.length(),
        }
    };

    SessionSnapshot {
        frame: frame_clock.ticks,
        elapsed_secs: frame_clock.elapsed_secs,
        phase: state.phase(),
        primary_hand: primary,
        selection_blocked: blocked,
        focused: state.focus().map(|focus| focus.id),
        airborne: state.flight().map(|flight| flight.id),
        hands: [hand_view(Hand::Left), hand_view(Hand::Right)],
        candidates,
    }
}
