//! Ground detection, surface snapping, and the fall safety net

use crate::character::CharacterState;
use crate::config::SimConfig;
use strider_collision::{CollisionSet, Ray};
use strider_core::Vec3;

/// Finalize vertical position for this step.
///
/// A short downward ray from just above the feet finds the standing
/// surface. When the gap is within tolerance and the character is not
/// moving upward, the position snaps onto the surface and `grounded` is
/// set. `grounded` is only cleared when vertical velocity is positive or
/// no surface was found at all, so the flag stays stable during the single
/// frame between a jump impulse and visible liftoff.
pub fn update_ground(
    state: &mut CharacterState,
    geometry: &CollisionSet,
    config: &SimConfig,
    spawn_point: Vec3,
) {
    // Fall-through recovery first, so a lost character never keeps
    // integrating downward
    if state.position.y < config.kill_plane {
        log::warn!(
            "character fell below the kill plane (y = {:.2}), respawning",
            state.position.y
        );
        state.position = spawn_point;
        state.velocity = Vec3::ZERO;
        state.grounded = false;
        return;
    }

    let origin = state.position + Vec3::new(0.0, config.ground_probe_rise, 0.0);
    match geometry.cast_ray(&Ray::new(origin, Vec3::DOWN), config.ground_probe_range) {
        Some(hit) => {
            let gap = state.position.y - hit.point.y;
            if gap <= config.ground_tolerance && state.velocity.y <= 0.0 {
                state.position.y = hit.point.y + config.ground_epsilon;
                state.velocity.y = 0.0;
                state.grounded = true;
            } else if state.velocity.y > 0.0 {
                state.grounded = false;
            }
        }
        None => state.grounded = false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strider_collision::TriangleMesh;

    fn floor(y: f32) -> CollisionSet {
        CollisionSet::new(vec![TriangleMesh::new(
            "floor",
            vec![
                [-20.0, y, -20.0],
                [20.0, y, -20.0],
                [20.0, y, 20.0],
                [-20.0, y, 20.0],
            ],
            vec![0, 1, 2, 0, 2, 3],
        )
        .unwrap()])
    }

    #[test]
    fn test_snap_onto_surface() {
        let config = SimConfig::default();
        let geometry = floor(0.0);
        let mut state = CharacterState::new(Vec3::new(0.0, 0.2, 0.0));
        state.velocity.y = -1.0;

        update_ground(&mut state, &geometry, &config, Vec3::ZERO);
        assert!(state.grounded);
        assert_eq!(state.velocity.y, 0.0);
        assert!((state.position.y - config.ground_epsilon).abs() < 1e-5);
    }

    #[test]
    fn test_snap_is_idempotent() {
        let config = SimConfig::default();
        let geometry = floor(0.0);
        let mut state = CharacterState::new(Vec3::new(0.0, 0.25, 0.0));

        update_ground(&mut state, &geometry, &config, Vec3::ZERO);
        let (y, grounded) = (state.position.y, state.grounded);
        update_ground(&mut state, &geometry, &config, Vec3::ZERO);
        assert_eq!(state.position.y, y);
        assert_eq!(state.grounded, grounded);
    }

    #[test]
    fn test_rising_character_not_snapped() {
        let config = SimConfig::default();
        let geometry = floor(0.0);
        let mut state = CharacterState::new(Vec3::new(0.0, 0.1, 0.0));
        state.grounded = true;
        state.velocity.y = 5.0;

        update_ground(&mut state, &geometry, &config, Vec3::ZERO);
        assert!(!state.grounded);
        assert_eq!(state.velocity.y, 5.0);
    }

    #[test]
    fn test_grounded_stable_across_far_surface_while_descending() {
        let config = SimConfig::default();
        let geometry = floor(0.0);
        let mut state = CharacterState::new(Vec3::new(0.0, 1.0, 0.0));
        state.grounded = true;
        state.velocity.y = -0.5;

        // Gap exceeds tolerance but nothing clears the flag yet
        update_ground(&mut state, &geometry, &config, Vec3::ZERO);
        assert!(state.grounded);
    }

    #[test]
    fn test_no_surface_clears_grounded() {
        let config = SimConfig::default();
        let geometry = CollisionSet::default();
        let mut state = CharacterState::new(Vec3::new(0.0, 5.0, 0.0));
        state.grounded = true;

        update_ground(&mut state, &geometry, &config, Vec3::ZERO);
        assert!(!state.grounded);
    }

    #[test]
    fn test_fall_safety_net_resets_to_spawn() {
        let config = SimConfig::default();
        let geometry = CollisionSet::default();
        let spawn = Vec3::new(0.0, 0.1, 0.0);
        let mut state = CharacterState::new(Vec3::new(3.0, -11.0, 7.0));
        state.velocity = Vec3::new(2.0, -30.0, 1.0);

        update_ground(&mut state, &geometry, &config, spawn);
        assert_eq!(state.position, spawn);
        assert_eq!(state.velocity, Vec3::ZERO);
        assert!(!state.grounded);
    }
}
