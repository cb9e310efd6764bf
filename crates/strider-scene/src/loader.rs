//! Scene loading: TOML to an immutable collision set

use crate::format::{SceneFile, SolidDef};
use std::fs;
use std::path::Path;
use strider_collision::{CollisionSet, TriangleMesh};
use strider_core::{Result, Vec3};
use strider_sim::SimConfig;

/// A scene ready for simulation
pub struct LoadedScene {
    pub name: String,
    pub collision: CollisionSet,
    pub config: SimConfig,
}

/// Load a scene from a TOML file
pub fn load_scene<P: AsRef<Path>>(path: P) -> Result<LoadedScene> {
    let content = fs::read_to_string(path)?;
    load_scene_string(&content)
}

/// Load a scene from a TOML string
pub fn load_scene_string(content: &str) -> Result<LoadedScene> {
    let scene_file: SceneFile = toml::from_str(content)?;
    build_scene(scene_file)
}

fn build_scene(file: SceneFile) -> Result<LoadedScene> {
    let mut meshes = Vec::with_capacity(file.solids.len());
    for (index, solid) in file.solids.iter().enumerate() {
        meshes.push(solid_mesh(index, solid)?);
    }
    Ok(LoadedScene {
        name: file.scene.name,
        collision: CollisionSet::new(meshes),
        config: file.config,
    })
}

fn solid_mesh(index: usize, solid: &SolidDef) -> Result<TriangleMesh> {
    match solid {
        SolidDef::Box { name, center, size } => Ok(TriangleMesh::axis_aligned_box(
            solid_name(index, name, "box"),
            Vec3::from_array(*center),
            Vec3::from_array(*size),
        )),
        SolidDef::Mesh {
            name,
            positions,
            indices,
        } => TriangleMesh::new(
            solid_name(index, name, "mesh"),
            positions.clone(),
            indices.clone(),
        ),
    }
}

fn solid_name(index: usize, name: &Option<String>, kind: &str) -> String {
    name.clone().unwrap_or_else(|| format!("{kind}_{index}"))
}
