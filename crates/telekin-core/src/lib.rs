//! Core types and definitions for the telekin interaction system.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, input events, interaction events, snapshots, configuration,
//! and constants. It has no dependency on any runtime framework or device
//! layer; hosts talk to the session crate purely through these types.

pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod inputs;
pub mod state;
pub mod types;
