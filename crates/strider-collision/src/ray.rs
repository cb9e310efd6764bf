//! Ray primitives and the triangle intersection test

use strider_core::Vec3;

/// Sentinel distance bound for unconstrained ray queries.
pub const UNBOUNDED: f32 = f32::MAX;

/// Tolerance below which a ray is treated as parallel to a triangle plane.
const EPSILON: f32 = 1e-7;

/// A ray with a pre-normalized direction.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub const fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    pub fn point_at(&self, distance: f32) -> Vec3 {
        self.origin + self.direction * distance
    }
}

/// Nearest-surface result of a ray query.
#[derive(Debug, Clone, Copy)]
pub struct RayHit {
    /// World-space intersection point
    pub point: Vec3,
    /// Distance from the ray origin to the intersection
    pub distance: f32,
}

/// Möller–Trumbore ray/triangle intersection, double-sided.
///
/// Returns the hit distance along the ray. Near-parallel configurations are
/// rejected by the epsilon guard before any division.
pub(crate) fn intersect_triangle(ray: &Ray, a: Vec3, b: Vec3, c: Vec3) -> Option<f32> {
    let ab = b - a;
    let ac = c - a;

    let pvec = ray.direction.cross(&ac);
    let det = ab.dot(&pvec);
    if det.abs() < EPSILON {
        return None;
    }

    let inv_det = 1.0 / det;
    let tvec = ray.origin - a;
    let u = tvec.dot(&pvec) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let qvec = tvec.cross(&ab);
    let v = ray.direction.dot(&qvec) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = ac.dot(&qvec) * inv_det;
    if t > EPSILON {
        Some(t)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ray_down_from(x: f32, y: f32, z: f32) -> Ray {
        Ray::new(Vec3::new(x, y, z), Vec3::DOWN)
    }

    // Unit triangle in the XZ plane at height 0
    fn floor_triangle() -> (Vec3, Vec3, Vec3) {
        (
            Vec3::new(-1.0, 0.0, -1.0),
            Vec3::new(1.0, 0.0, -1.0),
            Vec3::new(0.0, 0.0, 1.0),
        )
    }

    #[test]
    fn test_triangle_hit_distance() {
        let (a, b, c) = floor_triangle();
        let t = intersect_triangle(&ray_down_from(0.0, 2.0, 0.0), a, b, c);
        assert!((t.unwrap() - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_triangle_miss_outside() {
        let (a, b, c) = floor_triangle();
        assert!(intersect_triangle(&ray_down_from(5.0, 2.0, 0.0), a, b, c).is_none());
    }

    #[test]
    fn test_triangle_behind_origin() {
        let (a, b, c) = floor_triangle();
        let ray = Ray::new(Vec3::new(0.0, -2.0, 0.0), Vec3::DOWN);
        assert!(intersect_triangle(&ray, a, b, c).is_none());
    }

    #[test]
    fn test_parallel_ray_rejected() {
        let (a, b, c) = floor_triangle();
        let ray = Ray::new(Vec3::new(0.0, 0.5, 0.0), Vec3::new(1.0, 0.0, 0.0));
        assert!(intersect_triangle(&ray, a, b, c).is_none());
    }

    #[test]
    fn test_double_sided() {
        let (a, b, c) = floor_triangle();
        let from_below = Ray::new(Vec3::new(0.0, -2.0, 0.0), Vec3::UP);
        let t = intersect_triangle(&from_below, a, b, c);
        assert!((t.unwrap() - 2.0).abs() < 1e-5);
    }
}
