//! Strider Collision - Static geometry and the ray query service
//!
//! Collidable environment geometry is an immutable set of triangle meshes
//! built once at load time. The only query is `CollisionSet::cast_ray`,
//! which returns the nearest surface hit along a ray, or nothing. Meshes
//! carry a precomputed bounding box used as a broad-phase reject before
//! per-triangle tests.

mod mesh;
mod ray;

pub use mesh::{Aabb, CollisionSet, TriangleMesh};
pub use ray::{Ray, RayHit, UNBOUNDED};
