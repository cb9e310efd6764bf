//! Scene validation command

use anyhow::{Context, Result};
use strider_scene::load_scene;

pub fn run(scene: &str) -> Result<()> {
    let loaded = load_scene(scene).context("Failed to load scene")?;

    println!("Scene '{}' is valid.", loaded.name);
    println!("  Meshes:    {}", loaded.collision.mesh_count());
    println!("  Triangles: {}", loaded.collision.triangle_count());
    match loaded.collision.bounds() {
        Some(bounds) => println!("  Bounds:    {bounds}"),
        None => println!("  Bounds:    (no geometry)"),
    }
    println!(
        "  Tuning:    move_speed {}, gravity {}, camera distance {}",
        loaded.config.move_speed, loaded.config.gravity, loaded.config.camera.distance
    );
    Ok(())
}
