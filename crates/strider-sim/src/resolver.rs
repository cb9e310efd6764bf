//! Discrete collision response via cardinal probes

use crate::config::SimConfig;
use strider_collision::{CollisionSet, Ray};
use strider_core::Vec3;

/// The four horizontal probe directions checked each step.
const PROBE_DIRECTIONS: [Vec3; 4] = [
    Vec3::new(1.0, 0.0, 0.0),
    Vec3::new(-1.0, 0.0, 0.0),
    Vec3::new(0.0, 0.0, 1.0),
    Vec3::new(0.0, 0.0, -1.0),
];

/// Push a tentative position back out of any static geometry within the
/// collision radius.
///
/// Probes originate at chest height above the tentative position. Each
/// probe that hits within the radius contributes `radius - hit_distance`
/// of pushback along its opposite direction, and corrections accumulate
/// across probes, so simultaneous contacts on both axes are both honored.
/// Radius-bounded discrete probes can tunnel through thin geometry at very
/// high speed; accepted limitation of this response model.
pub fn resolve_collisions(tentative: Vec3, geometry: &CollisionSet, config: &SimConfig) -> Vec3 {
    let chest = tentative + Vec3::new(0.0, config.collision_height * 0.5, 0.0);
    let mut corrected = tentative;

    for dir in PROBE_DIRECTIONS {
        let ray = Ray::new(chest, dir);
        if let Some(hit) = geometry.cast_ray(&ray, config.collision_radius) {
            let depth = config.collision_radius - hit.distance;
            corrected -= dir * depth;
        }
    }
    corrected
}
