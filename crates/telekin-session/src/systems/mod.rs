//! Session systems.
//!
//! Frame-rate systems (`selection`, `flick`) evaluate input and aim;
//! physics-rate systems (`motion`, `homing`) advance the airborne body.
//! `launch` bridges the two: it runs at the frame that a flick lands and
//! hands the resulting flight to the physics side. `snapshot` is read-only.

pub mod flick;
pub mod homing;
pub mod launch;
pub mod motion;
pub mod selection;
pub mod snapshot;
