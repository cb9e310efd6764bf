//! Strider Sim - The character simulation core
//!
//! One `Simulation` context advances a `CharacterState` once per frame:
//! movement integration from input intent, collision resolution against
//! static geometry, ground detection, then a collision-aware follow camera.
//! A deterministic locomotion gate drives the external walk clip. All
//! tuning lives in `SimConfig`, loadable from TOML.

mod camera;
mod character;
mod config;
mod context;
mod ground;
mod integrator;
mod intent;
mod locomotion;
mod resolver;
mod spawn;

pub use camera::{compute_camera, CameraPose};
pub use character::{CharacterState, CharacterTransform, PITCH_LIMIT};
pub use config::{CameraConfig, SimConfig};
pub use context::{Simulation, StepOutput};
pub use ground::update_ground;
pub use integrator::integrate;
pub use intent::{JumpLatch, MoveIntent};
pub use locomotion::LocomotionAnimator;
pub use resolver::resolve_collisions;
pub use spawn::find_spawn_point;
