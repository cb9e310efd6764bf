//! Strider Runtime - Frame timing and input for the controller host
//!
//! Provides the host-facing building blocks around the simulation:
//! - `FrameClock` — per-frame elapsed time with hitch clamping
//! - `InputState` — keyboard and mouse tracking with action bindings,
//!   producing the per-step `MoveIntent` snapshot

mod clock;
mod input;

pub use clock::{FrameClock, MAX_DELTA};
pub use input::{InputState, LOOK_SENSITIVITY};
