//! Initial placement search

use strider_collision::{CollisionSet, Ray, UNBOUNDED};
use strider_core::Vec3;

/// Candidate probe altitudes above the origin, tried in order.
const PROBE_ALTITUDES: [f32; 4] = [5.0, 2.0, 0.0, -5.0];

/// Origin of the last-resort upward probe.
const UPWARD_ORIGIN: f32 = -50.0;

/// Offset kept above the found surface so the first frame starts clear of it.
const SPAWN_EPSILON: f32 = 0.1;

/// Find a standing position directly above the world origin.
///
/// The floor of an authored environment may sit above, at, or below origin
/// height, so a single ray is not robust: probe downward from a ladder of
/// altitudes, then upward from far below, then fall back to the origin.
pub fn find_spawn_point(geometry: &CollisionSet) -> Vec3 {
    for altitude in PROBE_ALTITUDES {
        let ray = Ray::new(Vec3::new(0.0, altitude, 0.0), Vec3::DOWN);
        if let Some(hit) = geometry.cast_ray(&ray, UNBOUNDED) {
            return hit.point + Vec3::new(0.0, SPAWN_EPSILON, 0.0);
        }
    }

    let ray = Ray::new(Vec3::new(0.0, UPWARD_ORIGIN, 0.0), Vec3::UP);
    if let Some(hit) = geometry.cast_ray(&ray, UNBOUNDED) {
        return hit.point + Vec3::new(0.0, SPAWN_EPSILON, 0.0);
    }

    log::debug!("spawn search found no surface, defaulting to origin");
    Vec3::ZERO
}
