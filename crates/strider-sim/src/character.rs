//! Character simulation state

use strider_core::Vec3;

/// Hard limit on the vertical look angle, radians.
pub const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_3;

/// Mutable per-character state, owned by the simulation context and
/// mutated exactly once per step.
#[derive(Debug, Clone)]
pub struct CharacterState {
    /// World-space feet position
    pub position: Vec3,
    /// World-space linear velocity, units/second
    pub velocity: Vec3,
    /// Horizontal facing, radians; wraps freely through trig use
    pub yaw: f32,
    /// Vertical look angle, radians; clamped to `±PITCH_LIMIT`
    pub pitch: f32,
    /// Standing on a detected surface within tolerance
    pub grounded: bool,
    /// Current movement intent is non-zero
    pub moving: bool,
}

impl CharacterState {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            grounded: false,
            moving: false,
        }
    }

    /// Apply look deltas. Yaw accumulates unbounded, pitch clamps.
    pub fn apply_look(&mut self, yaw_delta: f32, pitch_delta: f32) {
        self.yaw += yaw_delta;
        self.pitch = (self.pitch + pitch_delta).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// The transform handed to the rendering layer.
    pub fn transform(&self) -> CharacterTransform {
        CharacterTransform {
            position: self.position,
            yaw: self.yaw,
        }
    }
}

/// Position + facing snapshot exposed once per step.
#[derive(Debug, Clone, Copy)]
pub struct CharacterTransform {
    pub position: Vec3,
    pub yaw: f32,
}
