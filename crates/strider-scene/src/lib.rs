//! Strider Scene - TOML scene serialization for collision geometry
//!
//! A scene file names the environment, lists its collidable solids (boxes
//! and raw triangle soups), and may override any subset of the simulation
//! tuning. Loading produces the immutable `CollisionSet` the simulation
//! queries; a malformed file is a typed error, never a partial scene.

mod format;
mod loader;

pub use format::{SceneFile, SceneMetadata, SolidDef};
pub use loader::{load_scene, load_scene_string, LoadedScene};
