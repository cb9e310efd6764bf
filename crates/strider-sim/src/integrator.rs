//! Movement integration: intent and elapsed time to a tentative position

use crate::character::CharacterState;
use crate::config::SimConfig;
use crate::intent::{JumpLatch, MoveIntent};
use strider_core::Vec3;

/// Advance velocity from intent and produce this step's tentative position.
///
/// Horizontal velocity is set directly while input is held (instantaneous
/// acceleration) and decays exponentially once it stops. Velocity stays
/// authoritative regardless of what the collision resolver later does to
/// the position. A non-positive delta is a no-op.
pub fn integrate(
    state: &mut CharacterState,
    intent: &MoveIntent,
    jump: &mut JumpLatch,
    config: &SimConfig,
    dt: f32,
) -> Vec3 {
    if dt <= 0.0 {
        return state.position;
    }

    state.apply_look(intent.yaw_delta, intent.pitch_delta);

    let dir = intent.direction();
    state.moving = dir.length_squared() > 0.0;

    if state.moving {
        // Rotate local input by yaw so movement is always facing-relative.
        // Facing forward is (sin(yaw), 0, cos(yaw)); local -Z maps to
        // forward and local +X maps to screen-right.
        let local = dir.normalized();
        let cos_yaw = state.yaw.cos();
        let sin_yaw = state.yaw.sin();
        let world = Vec3::new(
            -local.x * cos_yaw - local.z * sin_yaw,
            0.0,
            local.x * sin_yaw - local.z * cos_yaw,
        );
        state.velocity.x = world.x * config.move_speed;
        state.velocity.z = world.z * config.move_speed;
    } else {
        // Slide to a stop rather than snapping
        state.velocity.x *= config.damping;
        state.velocity.z *= config.damping;
    }

    jump.observe(intent.jump);
    if state.grounded && jump.take() {
        state.velocity.y = config.jump_impulse;
        state.grounded = false;
    }

    if !state.grounded {
        state.velocity.y -= config.gravity * dt;
    }

    state.position + state.velocity * dt
}
