//! Input state management

use std::collections::{HashMap, HashSet};
use strider_sim::MoveIntent;
use winit::keyboard::KeyCode;

/// Radians of look per raw mouse count.
pub const LOOK_SENSITIVITY: f32 = 0.003;

/// Tracks keyboard and mouse input state per frame.
///
/// Pointer deltas only accumulate while capture is engaged, matching an
/// exclusive-input (pointer-locked) host. `sample_intent` turns the current
/// state into the per-step snapshot the simulation consumes.
pub struct InputState {
    /// Keys currently held down
    keys_down: HashSet<KeyCode>,
    /// Keys pressed this frame
    keys_just_pressed: HashSet<KeyCode>,
    /// Keys released this frame
    keys_just_released: HashSet<KeyCode>,

    /// Raw accumulated mouse delta for the current frame
    raw_mouse_delta: (f64, f64),
    /// Whether exclusive pointer capture is engaged
    captured: bool,

    /// Action map: action name -> list of key bindings
    action_map: HashMap<String, Vec<KeyCode>>,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    pub fn new() -> Self {
        Self {
            keys_down: HashSet::new(),
            keys_just_pressed: HashSet::new(),
            keys_just_released: HashSet::new(),
            raw_mouse_delta: (0.0, 0.0),
            captured: false,
            action_map: Self::default_action_map(),
        }
    }

    fn default_action_map() -> HashMap<String, Vec<KeyCode>> {
        let mut map = HashMap::new();
        map.insert("move_forward".into(), vec![KeyCode::KeyW]);
        map.insert("move_backward".into(), vec![KeyCode::KeyS]);
        map.insert("move_left".into(), vec![KeyCode::KeyA]);
        map.insert("move_right".into(), vec![KeyCode::KeyD]);
        map.insert("jump".into(), vec![KeyCode::Space]);
        map
    }

    /// Bind an action to one or more keys
    pub fn bind_action(&mut self, action: impl Into<String>, keys: Vec<KeyCode>) {
        self.action_map.insert(action.into(), keys);
    }

    /// Process a key press event
    pub fn process_key_down(&mut self, key: KeyCode) {
        if !self.keys_down.contains(&key) {
            self.keys_just_pressed.insert(key);
        }
        self.keys_down.insert(key);
    }

    /// Process a key release event
    pub fn process_key_up(&mut self, key: KeyCode) {
        self.keys_down.remove(&key);
        self.keys_just_released.insert(key);
    }

    /// Process raw mouse delta (device motion). Ignored unless captured.
    pub fn process_mouse_raw_delta(&mut self, dx: f64, dy: f64) {
        if !self.captured {
            return;
        }
        self.raw_mouse_delta.0 += dx;
        self.raw_mouse_delta.1 += dy;
    }

    /// Engage or release exclusive pointer capture. Releasing discards any
    /// delta accumulated this frame.
    pub fn set_captured(&mut self, captured: bool) {
        self.captured = captured;
        if !captured {
            self.raw_mouse_delta = (0.0, 0.0);
        }
    }

    pub fn is_captured(&self) -> bool {
        self.captured
    }

    /// Call at end of frame to clear per-frame state
    pub fn end_frame(&mut self) {
        self.keys_just_pressed.clear();
        self.keys_just_released.clear();
        self.raw_mouse_delta = (0.0, 0.0);
    }

    // --- Query methods ---

    /// Is a key currently held down?
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    /// Was a key pressed this frame?
    pub fn is_key_just_pressed(&self, key: KeyCode) -> bool {
        self.keys_just_pressed.contains(&key)
    }

    /// Was a key released this frame?
    pub fn is_key_just_released(&self, key: KeyCode) -> bool {
        self.keys_just_released.contains(&key)
    }

    /// Is an action currently held? (any bound key is down)
    pub fn is_action_pressed(&self, action: &str) -> bool {
        self.action_map
            .get(action)
            .map(|keys| keys.iter().any(|k| self.keys_down.contains(k)))
            .unwrap_or(false)
    }

    /// Was an action just pressed this frame?
    pub fn is_action_just_pressed(&self, action: &str) -> bool {
        self.action_map
            .get(action)
            .map(|keys| keys.iter().any(|k| self.keys_just_pressed.contains(k)))
            .unwrap_or(false)
    }

    /// Get the raw mouse delta accumulated this frame
    pub fn raw_mouse_delta(&self) -> (f64, f64) {
        self.raw_mouse_delta
    }

    /// Build the intent snapshot for one simulation step.
    ///
    /// Directional flags and the jump flag are raw held states; the
    /// simulation's jump latch does the edge filtering. Look deltas follow
    /// the usual convention of mouse-right turning yaw negative.
    pub fn sample_intent(&self, look_sensitivity: f32) -> MoveIntent {
        let (dx, dy) = self.raw_mouse_delta;
        MoveIntent {
            forward: self.is_action_pressed("move_forward"),
            back: self.is_action_pressed("move_backward"),
            left: self.is_action_pressed("move_left"),
            right: self.is_action_pressed("move_right"),
            jump: self.is_action_pressed("jump"),
            yaw_delta: -(dx as f32) * look_sensitivity,
            pitch_delta: -(dy as f32) * look_sensitivity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_transitions() {
        let mut input = InputState::new();

        input.process_key_down(KeyCode::KeyW);
        assert!(input.is_key_down(KeyCode::KeyW));
        assert!(input.is_key_just_pressed(KeyCode::KeyW));

        // End frame clears just_pressed
        input.end_frame();
        assert!(input.is_key_down(KeyCode::KeyW));
        assert!(!input.is_key_just_pressed(KeyCode::KeyW));

        input.process_key_up(KeyCode::KeyW);
        assert!(!input.is_key_down(KeyCode::KeyW));
        assert!(input.is_key_just_released(KeyCode::KeyW));
    }

    #[test]
    fn test_action_map_defaults() {
        let mut input = InputState::new();
        assert!(!input.is_action_pressed("move_forward"));

        input.process_key_down(KeyCode::KeyW);
        assert!(input.is_action_pressed("move_forward"));
        assert!(input.is_action_just_pressed("move_forward"));

        input.end_frame();
        assert!(input.is_action_pressed("move_forward"));
        assert!(!input.is_action_just_pressed("move_forward"));
    }

    #[test]
    fn test_custom_binding() {
        let mut input = InputState::new();
        input.bind_action("jump", vec![KeyCode::KeyJ]);

        input.process_key_down(KeyCode::Space);
        assert!(!input.is_action_pressed("jump"));

        input.process_key_down(KeyCode::KeyJ);
        assert!(input.is_action_pressed("jump"));
    }

    #[test]
    fn test_mouse_delta_gated_by_capture() {
        let mut input = InputState::new();

        input.process_mouse_raw_delta(4.0, -2.0);
        assert_eq!(input.raw_mouse_delta(), (0.0, 0.0));

        input.set_captured(true);
        input.process_mouse_raw_delta(4.0, -2.0);
        input.process_mouse_raw_delta(1.0, 1.0);
        assert_eq!(input.raw_mouse_delta(), (5.0, -1.0));

        input.end_frame();
        assert_eq!(input.raw_mouse_delta(), (0.0, 0.0));
    }

    #[test]
    fn test_release_capture_discards_delta() {
        let mut input = InputState::new();
        input.set_captured(true);
        input.process_mouse_raw_delta(10.0, 10.0);
        input.set_captured(false);
        assert_eq!(input.raw_mouse_delta(), (0.0, 0.0));
    }

    #[test]
    fn test_sample_intent_snapshot() {
        let mut input = InputState::new();
        input.set_captured(true);
        input.process_key_down(KeyCode::KeyW);
        input.process_key_down(KeyCode::KeyD);
        input.process_key_down(KeyCode::Space);
        input.process_mouse_raw_delta(10.0, -4.0);

        let intent = input.sample_intent(LOOK_SENSITIVITY);
        assert!(intent.forward);
        assert!(intent.right);
        assert!(!intent.back);
        assert!(intent.jump);
        assert!((intent.yaw_delta - -0.03).abs() < 1e-6);
        assert!((intent.pitch_delta - 0.012).abs() < 1e-6);
    }
}
