//! Collision-aware follow camera

use crate::character::CharacterState;
use crate::config::CameraConfig;
use strider_collision::{CollisionSet, Ray};
use strider_core::Vec3;

/// Camera placement for one frame: position plus the point it looks at.
/// Recomputed from scratch every step, so there is no smoothing state to
/// drift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_target: Vec3,
}

/// Compute the follow-camera pose for the current character state.
///
/// The boom extends backward from the look target along the view direction
/// derived from yaw and pitch. An obstruction along the line of sight pulls
/// the camera in to just short of the surface; when the remaining clear
/// span is too small to be useful the camera collapses onto the look
/// target instead of clipping through geometry.
pub fn compute_camera(
    state: &CharacterState,
    geometry: &CollisionSet,
    config: &CameraConfig,
) -> CameraPose {
    let look_target = state.position + Vec3::new(0.0, config.target_height, 0.0);

    let forward = Vec3::new(
        state.pitch.cos() * state.yaw.sin(),
        state.pitch.sin(),
        state.pitch.cos() * state.yaw.cos(),
    );
    let back = -forward;

    let mut distance = config.distance;
    if let Some(hit) = geometry.cast_ray(&Ray::new(look_target, back), config.distance) {
        distance = hit.distance - config.clearance;
    }

    if distance < config.min_distance {
        return CameraPose {
            position: look_target,
            look_target,
        };
    }

    CameraPose {
        position: look_target + back * distance,
        look_target,
    }
}
