//! Scene file format definitions

use serde::{Deserialize, Serialize};
use strider_sim::SimConfig;

/// Root structure of a scene TOML file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneFile {
    pub scene: SceneMetadata,
    #[serde(default)]
    pub solids: Vec<SolidDef>,
    /// Simulation tuning overrides; unspecified fields keep their defaults
    #[serde(default)]
    pub config: SimConfig,
}

/// Scene metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneMetadata {
    pub name: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

fn default_version() -> String {
    "1.0".to_string()
}

/// A collidable solid in the scene
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SolidDef {
    /// Axis-aligned box, triangulated at load time
    Box {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        center: [f32; 3],
        size: [f32; 3],
    },
    /// Raw triangle soup
    Mesh {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        positions: Vec<[f32; 3]>,
        indices: Vec<u32>,
    },
}

impl SceneFile {
    /// Create a new scene file
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            scene: SceneMetadata {
                name: name.into(),
                version: default_version(),
                description: None,
            },
            solids: Vec::new(),
            config: SimConfig::default(),
        }
    }

    /// Add a solid to the scene
    pub fn add_solid(&mut self, solid: SolidDef) {
        self.solids.push(solid);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_file_serialization() {
        let mut scene = SceneFile::new("Test Arena");
        scene.add_solid(SolidDef::Box {
            name: Some("floor".into()),
            center: [0.0, -0.5, 0.0],
            size: [40.0, 1.0, 40.0],
        });

        let toml_str = toml::to_string(&scene).unwrap();
        let parsed: SceneFile = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.scene.name, "Test Arena");
        assert_eq!(parsed.solids.len(), 1);
    }

    #[test]
    fn test_version_defaults() {
        let scene: SceneFile = toml::from_str("[scene]\nname = \"Empty\"\n").unwrap();
        assert_eq!(scene.scene.version, "1.0");
        assert!(scene.solids.is_empty());
    }

    #[test]
    fn test_solid_kinds_parse() {
        let content = r#"
[scene]
name = "Kinds"

[[solids]]
kind = "box"
center = [0.0, 0.0, 0.0]
size = [2.0, 2.0, 2.0]

[[solids]]
kind = "mesh"
name = "ramp"
positions = [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 1.0]]
indices = [0, 1, 2]
"#;
        let scene: SceneFile = toml::from_str(content).unwrap();
        assert_eq!(scene.solids.len(), 2);
        assert!(matches!(scene.solids[0], SolidDef::Box { .. }));
        assert!(matches!(scene.solids[1], SolidDef::Mesh { .. }));
    }
}
