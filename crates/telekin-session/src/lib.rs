//! Interaction session engine for telekin.
//!
//! Owns the hecs ECS world and the grab state machine, consumes host input
//! events, runs the selection/flick systems on the frame clock and the
//! flight systems on the physics clock, and emits interaction events.

pub mod engine;
pub mod interaction;
pub mod registry;
pub mod systems;
pub mod world_setup;

pub use engine::SessionEngine;
pub use telekin_core as core;
