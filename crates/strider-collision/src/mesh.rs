//! Triangle meshes, bounding boxes, and the collision set

use crate::ray::{intersect_triangle, Ray, RayHit};
use strider_core::{Result, StriderError, Vec3};

/// Axis-aligned bounding box computed from vertex positions
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Compute bounds from a set of vertex positions
    pub fn from_positions(positions: &[[f32; 3]]) -> Option<Self> {
        if positions.is_empty() {
            return None;
        }
        let mut min = positions[0];
        let mut max = positions[0];
        for p in positions.iter().skip(1) {
            for i in 0..3 {
                if p[i] < min[i] {
                    min[i] = p[i];
                }
                if p[i] > max[i] {
                    max[i] = p[i];
                }
            }
        }
        Some(Self {
            min: Vec3::from_array(min),
            max: Vec3::from_array(max),
        })
    }

    /// Merge with another bounds to get the union
    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: Vec3::new(
                self.min.x.min(other.min.x),
                self.min.y.min(other.min.y),
                self.min.z.min(other.min.z),
            ),
            max: Vec3::new(
                self.max.x.max(other.max.x),
                self.max.y.max(other.max.y),
                self.max.z.max(other.max.z),
            ),
        }
    }

    /// Size along each axis
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Slab test: does the ray reach this box within `max_distance`?
    pub fn intersects_ray(&self, ray: &Ray, max_distance: f32) -> bool {
        let origin = ray.origin.to_array();
        let dir = ray.direction.to_array();
        let min = self.min.to_array();
        let max = self.max.to_array();

        let mut t_near = 0.0f32;
        let mut t_far = max_distance;

        for i in 0..3 {
            if dir[i].abs() < 1e-8 {
                // Ray runs parallel to this slab; inside or no intersection
                if origin[i] < min[i] || origin[i] > max[i] {
                    return false;
                }
                continue;
            }
            let inv = 1.0 / dir[i];
            let mut t0 = (min[i] - origin[i]) * inv;
            let mut t1 = (max[i] - origin[i]) * inv;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }
            t_near = t_near.max(t0);
            t_far = t_far.min(t1);
            if t_near > t_far {
                return false;
            }
        }
        true
    }
}

impl std::fmt::Display for Aabb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = self.size();
        write!(
            f,
            "{:.2} x {:.2} x {:.2} (min [{:.2}, {:.2}, {:.2}], max [{:.2}, {:.2}, {:.2}])",
            s.x, s.y, s.z, self.min.x, self.min.y, self.min.z, self.max.x, self.max.y, self.max.z,
        )
    }
}

/// An immutable triangle mesh used for ray queries
#[derive(Debug, Clone)]
pub struct TriangleMesh {
    pub name: String,
    positions: Vec<[f32; 3]>,
    indices: Vec<u32>,
    aabb: Aabb,
}

impl TriangleMesh {
    /// Build a mesh from flat vertex and index data.
    ///
    /// Index data must come in triples and stay within the vertex range.
    pub fn new(name: impl Into<String>, positions: Vec<[f32; 3]>, indices: Vec<u32>) -> Result<Self> {
        let name = name.into();
        if indices.len() % 3 != 0 {
            return Err(StriderError::MeshError(format!(
                "mesh '{}': index count {} is not a multiple of 3",
                name,
                indices.len()
            )));
        }
        if let Some(&bad) = indices.iter().find(|&&i| i as usize >= positions.len()) {
            return Err(StriderError::MeshError(format!(
                "mesh '{}': index {} out of range for {} vertices",
                name,
                bad,
                positions.len()
            )));
        }
        let aabb = Aabb::from_positions(&positions).ok_or_else(|| {
            StriderError::MeshError(format!("mesh '{}' has no vertices", name))
        })?;
        Ok(Self {
            name,
            positions,
            indices,
            aabb,
        })
    }

    /// Triangulate an axis-aligned box into 12 triangles.
    pub fn axis_aligned_box(name: impl Into<String>, center: Vec3, size: Vec3) -> Self {
        let h = size * 0.5;
        let positions = vec![
            [center.x - h.x, center.y - h.y, center.z - h.z],
            [center.x + h.x, center.y - h.y, center.z - h.z],
            [center.x + h.x, center.y + h.y, center.z - h.z],
            [center.x - h.x, center.y + h.y, center.z - h.z],
            [center.x - h.x, center.y - h.y, center.z + h.z],
            [center.x + h.x, center.y - h.y, center.z + h.z],
            [center.x + h.x, center.y + h.y, center.z + h.z],
            [center.x - h.x, center.y + h.y, center.z + h.z],
        ];
        #[rustfmt::skip]
        let indices = vec![
            0, 1, 2, 0, 2, 3, // -Z
            4, 6, 5, 4, 7, 6, // +Z
            0, 5, 1, 0, 4, 5, // -Y
            3, 2, 6, 3, 6, 7, // +Y
            0, 3, 7, 0, 7, 4, // -X
            1, 5, 6, 1, 6, 2, // +X
        ];
        Self {
            name: name.into(),
            positions,
            indices,
            aabb: Aabb {
                min: center - h,
                max: center + h,
            },
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn aabb(&self) -> Aabb {
        self.aabb
    }

    /// Iterate over triangles as vertex triples.
    fn triangles(&self) -> impl Iterator<Item = (Vec3, Vec3, Vec3)> + '_ {
        self.indices.chunks_exact(3).map(|tri| {
            (
                Vec3::from_array(self.positions[tri[0] as usize]),
                Vec3::from_array(self.positions[tri[1] as usize]),
                Vec3::from_array(self.positions[tri[2] as usize]),
            )
        })
    }
}

/// The immutable set of collidable meshes queried by the simulation.
///
/// Built once at load time and only read afterwards, so it is safe to share
/// across every ray query of every step.
#[derive(Debug, Clone, Default)]
pub struct CollisionSet {
    meshes: Vec<TriangleMesh>,
}

impl CollisionSet {
    pub fn new(meshes: Vec<TriangleMesh>) -> Self {
        Self { meshes }
    }

    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.meshes.iter().map(|m| m.triangle_count()).sum()
    }

    /// Combined bounding box across all meshes
    pub fn bounds(&self) -> Option<Aabb> {
        self.meshes
            .iter()
            .map(|m| m.aabb())
            .reduce(|a, b| a.union(&b))
    }

    /// Cast a ray against every mesh and return the nearest hit within
    /// `max_distance`, or `None`. Distance ordering is the only guarantee;
    /// ties break arbitrarily. Direction must be pre-normalized.
    pub fn cast_ray(&self, ray: &Ray, max_distance: f32) -> Option<RayHit> {
        let mut nearest: Option<RayHit> = None;
        for mesh in &self.meshes {
            if !mesh.aabb.intersects_ray(ray, max_distance) {
                continue;
            }
            for (a, b, c) in mesh.triangles() {
                if let Some(distance) = intersect_triangle(ray, a, b, c) {
                    if distance <= max_distance
                        && nearest.map_or(true, |hit| distance < hit.distance)
                    {
                        nearest = Some(RayHit {
                            point: ray.point_at(distance),
                            distance,
                        });
                    }
                }
            }
        }
        nearest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ray::UNBOUNDED;

    fn floor_plane(y: f32) -> TriangleMesh {
        TriangleMesh::new(
            "floor",
            vec![
                [-10.0, y, -10.0],
                [10.0, y, -10.0],
                [10.0, y, 10.0],
                [-10.0, y, 10.0],
            ],
            vec![0, 1, 2, 0, 2, 3],
        )
        .unwrap()
    }

    #[test]
    fn test_empty_set_returns_none() {
        let set = CollisionSet::default();
        let ray = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::DOWN);
        assert!(set.cast_ray(&ray, UNBOUNDED).is_none());
    }

    #[test]
    fn test_floor_hit_point() {
        let set = CollisionSet::new(vec![floor_plane(0.0)]);
        let ray = Ray::new(Vec3::new(1.0, 5.0, 2.0), Vec3::DOWN);
        let hit = set.cast_ray(&ray, UNBOUNDED).unwrap();
        assert!((hit.distance - 5.0).abs() < 1e-5);
        assert!((hit.point.y).abs() < 1e-5);
        assert!((hit.point.x - 1.0).abs() < 1e-5);
        assert!((hit.point.z - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_nearest_of_stacked_floors() {
        let set = CollisionSet::new(vec![floor_plane(-2.0), floor_plane(1.0)]);
        let ray = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::DOWN);
        let hit = set.cast_ray(&ray, UNBOUNDED).unwrap();
        assert!((hit.point.y - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_max_distance_bounds_search() {
        let set = CollisionSet::new(vec![floor_plane(0.0)]);
        let ray = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::DOWN);
        assert!(set.cast_ray(&ray, 2.0).is_none());
        assert!(set.cast_ray(&ray, 6.0).is_some());
    }

    #[test]
    fn test_box_triangulation() {
        let mesh = TriangleMesh::axis_aligned_box("box", Vec3::new(1.0, 2.0, 3.0), Vec3::ONE * 2.0);
        assert_eq!(mesh.triangle_count(), 12);
        let aabb = mesh.aabb();
        assert_eq!(aabb.min, Vec3::new(0.0, 1.0, 2.0));
        assert_eq!(aabb.max, Vec3::new(2.0, 3.0, 4.0));

        // Rays from all six sides land on the box surface
        let set = CollisionSet::new(vec![mesh]);
        let hit = set
            .cast_ray(&Ray::new(Vec3::new(1.0, 10.0, 3.0), Vec3::DOWN), UNBOUNDED)
            .unwrap();
        assert!((hit.point.y - 3.0).abs() < 1e-5);
        let hit = set
            .cast_ray(
                &Ray::new(Vec3::new(-5.0, 2.0, 3.0), Vec3::new(1.0, 0.0, 0.0)),
                UNBOUNDED,
            )
            .unwrap();
        assert!((hit.point.x).abs() < 1e-5);
    }

    #[test]
    fn test_mesh_index_validation() {
        let bad = TriangleMesh::new("bad", vec![[0.0; 3], [1.0; 3]], vec![0, 1, 2]);
        assert!(bad.is_err());
        let uneven = TriangleMesh::new("uneven", vec![[0.0; 3], [1.0; 3]], vec![0, 1]);
        assert!(uneven.is_err());
    }
}
