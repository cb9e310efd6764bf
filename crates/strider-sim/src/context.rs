//! Simulation context and the per-step pipeline

use crate::camera::{compute_camera, CameraPose};
use crate::character::{CharacterState, CharacterTransform};
use crate::config::SimConfig;
use crate::ground::update_ground;
use crate::integrator::integrate;
use crate::intent::{JumpLatch, MoveIntent};
use crate::locomotion::LocomotionAnimator;
use crate::resolver::resolve_collisions;
use crate::spawn::find_spawn_point;
use strider_collision::CollisionSet;
use strider_core::Vec3;

/// Everything the per-step update owns: character state, tuning, the spawn
/// point used by fall recovery, the jump latch, and the locomotion gate.
/// The collision set is borrowed per step and never mutated.
pub struct Simulation {
    pub character: CharacterState,
    pub config: SimConfig,
    spawn_point: Vec3,
    jump: JumpLatch,
    locomotion: LocomotionAnimator,
}

/// Per-step outputs handed to the rendering layer.
#[derive(Debug, Clone, Copy)]
pub struct StepOutput {
    pub transform: CharacterTransform,
    pub camera: CameraPose,
    /// Drives the external walk clip
    pub locomotion_playing: bool,
}

impl Simulation {
    /// Place the character via the spawn search and build the context.
    pub fn new(config: SimConfig, geometry: &CollisionSet) -> Self {
        let spawn_point = find_spawn_point(geometry);
        Self {
            character: CharacterState::new(spawn_point),
            locomotion: LocomotionAnimator::new(config.locomotion_fade),
            config,
            spawn_point,
            jump: JumpLatch::default(),
        }
    }

    /// The position fall recovery teleports back to.
    pub fn spawn_point(&self) -> Vec3 {
        self.spawn_point
    }

    /// Run one simulation step: integrate, resolve, ground-check, then
    /// derive the camera. A non-positive delta skips the state update but
    /// still reports the current pose.
    pub fn step(&mut self, intent: &MoveIntent, geometry: &CollisionSet, dt: f32) -> StepOutput {
        if dt > 0.0 {
            let tentative = integrate(
                &mut self.character,
                intent,
                &mut self.jump,
                &self.config,
                dt,
            );
            self.character.position = resolve_collisions(tentative, geometry, &self.config);
            update_ground(&mut self.character, geometry, &self.config, self.spawn_point);

            let active = self.character.moving && self.character.grounded;
            self.locomotion.update(active, dt);
        }

        StepOutput {
            transform: self.character.transform(),
            camera: compute_camera(&self.character, geometry, &self.config.camera),
            locomotion_playing: self.locomotion.is_playing(),
        }
    }
}
