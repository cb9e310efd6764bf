//! Simulation tuning, loadable from TOML

use serde::{Deserialize, Serialize};
use strider_core::Result;

/// Tunable constants for the character simulation.
///
/// Every field has a default, so a scene file may override any subset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Horizontal speed while movement input is held, units/second
    pub move_speed: f32,
    /// Horizontal velocity retained per step while idle (slide-to-stop)
    pub damping: f32,
    /// Vertical velocity applied on jump, units/second
    pub jump_impulse: f32,
    /// Downward acceleration while airborne, units/second^2
    pub gravity: f32,
    /// Horizontal probe reach of the collision resolver
    pub collision_radius: f32,
    /// Character capsule height; probes originate at half this height
    pub collision_height: f32,
    /// Height above the feet where the ground ray starts
    pub ground_probe_rise: f32,
    /// Length of the ground ray
    pub ground_probe_range: f32,
    /// Maximum feet-to-surface gap that still counts as standing
    pub ground_tolerance: f32,
    /// Offset kept above a surface when snapping onto it
    pub ground_epsilon: f32,
    /// Y below which the fall safety net teleports back to spawn
    pub kill_plane: f32,
    /// Walk-clip fade-out after locomotion stops, seconds
    pub locomotion_fade: f32,
    pub camera: CameraConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            move_speed: 6.0,
            damping: 0.9,
            jump_impulse: 8.0,
            gravity: 20.0,
            collision_radius: 0.6,
            collision_height: 1.8,
            ground_probe_rise: 0.5,
            ground_probe_range: 3.0,
            ground_tolerance: 0.3,
            ground_epsilon: 0.1,
            kill_plane: -10.0,
            locomotion_fade: 0.25,
            camera: CameraConfig::default(),
        }
    }
}

impl SimConfig {
    /// Parse a config from TOML, filling unspecified fields with defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Follow-camera tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Boom length behind the look target
    pub distance: f32,
    /// Height of the look target above the feet
    pub target_height: f32,
    /// Gap kept between the camera and an obstructing surface
    pub clearance: f32,
    /// Below this clear span the camera collapses to the look target
    pub min_distance: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            distance: 5.0,
            target_height: 1.5,
            clearance: 0.2,
            min_distance: 0.3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimConfig::default();
        assert!(config.damping > 0.0 && config.damping < 1.0);
        assert!(config.camera.min_distance < config.camera.distance);
    }

    #[test]
    fn test_partial_override_from_toml() {
        let config = SimConfig::from_toml_str("move_speed = 9.5\n[camera]\ndistance = 3.0\n").unwrap();
        assert_eq!(config.move_speed, 9.5);
        assert_eq!(config.camera.distance, 3.0);
        // Unspecified fields keep their defaults
        assert_eq!(config.gravity, SimConfig::default().gravity);
        assert_eq!(config.camera.clearance, CameraConfig::default().clearance);
    }

    #[test]
    fn test_bad_toml_is_an_error() {
        assert!(SimConfig::from_toml_str("move_speed = \"fast\"").is_err());
    }
}
