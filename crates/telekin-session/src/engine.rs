//! Session engine — the core of the interaction.
//!
//! `SessionEngine` owns the hecs ECS world, drains host input events, runs
//! the frame and physics systems, and produces `SessionSnapshot`s.
//! Completely headless (no tracking-runtime dependency), enabling
//! deterministic testing.

use std::collections::VecDeque;

use glam::Vec3;
use hecs::World;

use telekin_core::components::{Grabbable, Position, RigidBody, Visible};
use telekin_core::config::SessionConfig;
use telekin_core::constants::{FRAME_DT, PHYSICS_DT};
use telekin_core::enums::{AimSource, Hand, LossReason, SelectionMode, SessionPhase};
use telekin_core::events::InteractionEvent;
use telekin_core::inputs::InputEvent;
use telekin_core::state::SessionSnapshot;
use telekin_core::types::{Pose, TickClock};

use crate::interaction::{FocusState, GrabState, HandInput};
use crate::registry::CandidateRegistry;
use crate::systems;
use crate::systems::flick::{Flick, FlickDetector};
use crate::systems::homing::FlightStep;
use crate::world_setup;

/// The interaction engine. Owns the ECS world and all session state.
pub struct SessionEngine {
    world: World,
    registry: CandidateRegistry,
    config: SessionConfig,
    frame_clock: TickClock,
    physics_clock: TickClock,
    hands: [HandInput; 2],
    primary: Hand,
    head: Pose,
    state: GrabState,
    flick: FlickDetector,
    input_queue: VecDeque<InputEvent>,
    events: Vec<InteractionEvent>,
    next_candidate_id: u32,
}

impl SessionEngine {
    /// Create a new session engine with the given config.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            world: World::new(),
            registry: CandidateRegistry::new(),
            config,
            frame_clock: TickClock::default(),
            physics_clock: TickClock::default(),
            hands: [HandInput::default(); 2],
            primary: Hand::default(),
            head: Pose::default(),
            state: GrabState::default(),
            flick: FlickDetector::new(),
            input_queue: VecDeque::new(),
            events: Vec::new(),
            next_candidate_id: 0,
        }
    }

    /// Queue a host input event for processing at the next frame boundary.
    pub fn queue_input(&mut self, event: InputEvent) {
        self.input_queue.push_back(event);
    }

    /// Queue multiple input events.
    pub fn queue_inputs(&mut self, events: impl IntoIterator<Item = InputEvent>) {
        self.input_queue.extend(events);
    }

    /// Advance the frame clock by one tick: drain input, run selection and
    /// gesture sampling, and return the events this produced.
    pub fn frame_tick(&mut self) -> Vec<InteractionEvent> {
        // 1. Drain queued input events.
        self.process_inputs();
        // 2. Selection pass against the current aim ray.
        let aim = self.aim_pose();
        let blocked = self.any_hand_grabbing();
        systems::selection::run(
            &self.world,
            &self.registry,
            &mut self.state,
            &aim,
            self.primary,
            blocked,
            &self.config,
            &mut self.events,
        );
        // 3. Gesture sampling while a hold is locked.
        self.sample_flick();

        self.frame_clock.advance(f64::from(FRAME_DT));
        std::mem::take(&mut self.events)
    }

    /// Advance the physics clock by one fixed tick: integrate and home the
    /// airborne body, if any, and return the events this produced.
    pub fn physics_tick(&mut self) -> Vec<InteractionEvent> {
        if let GrabState::Flight(mut flight) = self.state {
            // 1. Integrate the airborne body.
            systems::motion::run(
                &mut self.world,
                flight.target,
                self.config.gravity_y,
                PHYSICS_DT,
            );
            // 2. Advance the flight toward the live catch point.
            let catch = systems::launch::catch_point(
                self.hands[self.primary.index()].pose.position,
                &self.config,
            );
            let step = systems::homing::run(
                &mut self.world,
                &mut flight,
                catch,
                PHYSICS_DT,
                &self.config,
                &mut self.events,
            );
            self.state = match step {
                FlightStep::Continue => GrabState::Flight(flight),
                FlightStep::Resolved => GrabState::Idle,
            };
        }

        self.physics_clock.advance(f64::from(PHYSICS_DT));
        std::mem::take(&mut self.events)
    }

    /// Get the session config.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Get the current session phase.
    pub fn phase(&self) -> SessionPhase {
        self.state.phase()
    }

    /// Get the current primary hand.
    pub fn primary_hand(&self) -> Hand {
        self.primary
    }

    /// Id of the focused candidate, if any.
    pub fn focused_id(&self) -> Option<u32> {
        self.state.focus().map(|focus| focus.id)
    }

    /// Id of the airborne candidate, if any.
    pub fn airborne_id(&self) -> Option<u32> {
        self.state.flight().map(|flight| flight.id)
    }

    /// True while a direct grab or an active flight blocks new selection.
    pub fn selection_blocked(&self) -> bool {
        self.any_hand_grabbing() || matches!(self.state, GrabState::Flight(_))
    }

    /// Get the frame clock.
    pub fn frame_time(&self) -> TickClock {
        self.frame_clock
    }

    /// Get the physics clock.
    pub fn physics_time(&self) -> TickClock {
        self.physics_clock
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Build the complete observable state.
    pub fn snapshot(&self) -> SessionSnapshot {
        systems::snapshot::build_snapshot(
            &self.world,
            &self.registry,
            &self.frame_clock,
            &self.state,
            &self.hands,
            self.primary,
            self.selection_blocked(),
        )
    }

    /// Spawn and register a candidate, returning its id.
    pub fn spawn_candidate(&mut self, position: Vec3) -> u32 {
        let id = self.next_candidate_id;
        self.next_candidate_id += 1;
        let entity = world_setup::spawn_candidate(&mut self.world, id, position);
        self.registry.register(entity);
        log::debug!("candidate {id} spawned at {position:?}");
        id
    }

    /// Despawn a candidate, clearing any focus or flight bound to it.
    /// Returns false for an unknown id.
    pub fn remove_candidate(&mut self, id: u32) -> bool {
        let Some(entity) = self.find_candidate(id) else {
            return false;
        };
        self.deregister_entity(entity);
        self.world.despawn(entity).is_ok()
    }

    /// Teleport a candidate (host-side physics owns grounded movement).
    /// Returns false for an unknown id.
    pub fn set_candidate_position(&mut self, id: u32, position: Vec3) -> bool {
        let Some(entity) = self.find_candidate(id) else {
            return false;
        };
        if let Ok(mut component) = self.world.get::<&mut Position>(entity) {
            component.0 = position;
            true
        } else {
            false
        }
    }

    pub fn candidate_position(&self, id: u32) -> Option<Vec3> {
        let entity = self.find_candidate(id)?;
        self.world
            .get::<&Position>(entity)
            .ok()
            .map(|position| position.0)
    }

    pub fn candidate_velocity(&self, id: u32) -> Option<Vec3> {
        let entity = self.find_candidate(id)?;
        self.world
            .get::<&RigidBody>(entity)
            .ok()
            .map(|body| body.velocity)
    }

    /// Process all queued input events.
    fn process_inputs(&mut self) {
        while let Some(event) = self.input_queue.pop_front() {
            self.handle_input(event);
        }
    }

    /// Handle a single input event.
    fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::HandPose {
                hand,
                position,
                rotation,
            } => {
                self.hands[hand.index()].pose = Pose::new(position, rotation);
            }
            InputEvent::HeadPose { position, rotation } => {
                self.head = Pose::new(position, rotation);
            }
            InputEvent::GripChanged { hand, pressed } => {
                self.hands[hand.index()].grip = pressed;
                if self.config.selection_mode == SelectionMode::Grip {
                    self.handle_lock_button(hand, pressed);
                } else if pressed {
                    self.primary = hand;
                }
            }
            InputEvent::TriggerChanged { hand, pressed } => {
                self.hands[hand.index()].trigger = pressed;
                if self.config.selection_mode == SelectionMode::Trigger {
                    self.handle_lock_button(hand, pressed);
                } else if pressed {
                    self.primary = hand;
                }
            }
            InputEvent::VelocitySample { hand, velocity } => {
                self.hands[hand.index()].velocity = velocity;
            }
            InputEvent::GrabbingChanged { hand, grabbing } => {
                self.hands[hand.index()].grabbing = grabbing;
                if grabbing {
                    self.cancel_all("direct grab");
                }
            }
            InputEvent::VisibilityChanged { id, visible } => {
                self.set_candidate_visibility(id, visible);
            }
        }
    }

    /// React to the configured selection button changing on `hand`. Any
    /// press makes that hand primary; a press over a focused candidate
    /// locks the hold, and the primary's release ends the gesture window.
    fn handle_lock_button(&mut self, hand: Hand, pressed: bool) {
        if pressed {
            self.primary = hand;
            if let GrabState::Focused(focus) = self.state {
                self.state = GrabState::Locked(focus);
                self.flick.reset();
                log::debug!("hold locked: candidate {}", focus.id);
            }
        } else if hand == self.primary {
            if let GrabState::Locked(focus) = self.state {
                match self.flick.release(&self.config) {
                    Some(flick) => self.fire_launch(focus, flick),
                    None => {
                        self.state = GrabState::Focused(focus);
                        log::debug!("hold released without a flick: candidate {}", focus.id);
                    }
                }
            }
        }
    }

    /// Feed the primary hand's speed to the gesture detector while a hold
    /// is locked, launching if the threshold policy fires mid-hold.
    fn sample_flick(&mut self) {
        let GrabState::Locked(focus) = self.state else {
            return;
        };
        let speed = self.hands[self.primary.index()].velocity.length();
        if let Some(flick) = self.flick.sample(speed, &self.config) {
            self.fire_launch(focus, flick);
        }
    }

    /// A flick landed on the locked hold: report it and launch.
    fn fire_launch(&mut self, focus: FocusState, flick: Flick) {
        self.events.push(InteractionEvent::FlickDetected {
            hand: self.primary,
            strength: flick.strength,
        });
        log::debug!(
            "flick at {:.2} m/s on the {:?} hand",
            flick.strength,
            self.primary
        );
        let hand_position = self.hands[self.primary.index()].pose.position;
        match systems::launch::run(
            &mut self.world,
            &focus,
            flick,
            hand_position,
            &self.config,
            &mut self.events,
        ) {
            Some(flight) => self.state = GrabState::Flight(flight),
            None => {
                self.events.push(InteractionEvent::FocusLost { id: focus.id });
                self.state = GrabState::Idle;
            }
        }
    }

    /// Drop whatever the session is doing (focus or flight) back to idle.
    fn cancel_all(&mut self, why: &str) {
        match self.state {
            GrabState::Idle => {}
            GrabState::Focused(focus) | GrabState::Locked(focus) => {
                self.events.push(InteractionEvent::FocusLost { id: focus.id });
                log::debug!("hold cancelled ({why}): candidate {}", focus.id);
            }
            GrabState::Flight(flight) => {
                self.events.push(InteractionEvent::FlightLost {
                    id: flight.id,
                    reason: LossReason::Interrupted,
                });
                log::debug!("flight cancelled ({why}): candidate {}", flight.id);
            }
        }
        self.state = GrabState::Idle;
        self.flick.reset();
    }

    /// Remove a candidate from the eligible set, clearing any focus or
    /// flight bound to it.
    fn deregister_entity(&mut self, entity: hecs::Entity) {
        self.registry.deregister(entity);
        if self.state.target() != Some(entity) {
            return;
        }
        match self.state {
            GrabState::Idle => {}
            GrabState::Focused(focus) | GrabState::Locked(focus) => {
                self.events.push(InteractionEvent::FocusLost { id: focus.id });
            }
            GrabState::Flight(flight) => {
                self.events.push(InteractionEvent::FlightLost {
                    id: flight.id,
                    reason: LossReason::TargetDropped,
                });
            }
        }
        self.state = GrabState::Idle;
        self.flick.reset();
    }

    fn set_candidate_visibility(&mut self, id: u32, visible: bool) {
        let Some(entity) = self.find_candidate(id) else {
            log::debug!("visibility change for unknown candidate {id}");
            return;
        };
        if let Ok(mut flag) = self.world.get::<&mut Visible>(entity) {
            flag.0 = visible;
        }
        if visible {
            self.registry.register(entity);
        } else {
            self.deregister_entity(entity);
        }
    }

    fn find_candidate(&self, id: u32) -> Option<hecs::Entity> {
        self.world
            .query::<&Grabbable>()
            .iter()
            .find(|(_, grabbable)| grabbable.id == id)
            .map(|(entity, _)| entity)
    }

    fn aim_pose(&self) -> Pose {
        match self.config.aim_source {
            AimSource::PrimaryHand => self.hands[self.primary.index()].pose,
            AimSource::Head => self.head,
        }
    }

    fn any_hand_grabbing(&self) -> bool {
        self.hands.iter().any(|hand| hand.grabbing)
    }
}
