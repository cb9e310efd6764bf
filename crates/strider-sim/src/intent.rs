//! Per-step input intent

use strider_core::Vec3;

/// Input intent for one simulation step, sampled from the host's event
/// state. Directional flags are raw held states; the jump flag is the raw
/// held state too, edge-filtered by `JumpLatch` inside the simulation.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveIntent {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    /// Horizontal look delta, radians
    pub yaw_delta: f32,
    /// Vertical look delta, radians
    pub pitch_delta: f32,
}

impl MoveIntent {
    /// Unnormalized movement direction in character-local space.
    /// Opposing keys cancel exactly.
    pub fn direction(&self) -> Vec3 {
        let mut dir = Vec3::ZERO;
        if self.forward {
            dir.z -= 1.0;
        }
        if self.back {
            dir.z += 1.0;
        }
        if self.left {
            dir.x -= 1.0;
        }
        if self.right {
            dir.x += 1.0;
        }
        dir
    }
}

/// Edge filter for the jump action.
///
/// A press transition arms the latch; `take()` consumes it. Holding the key
/// never re-arms, so one press yields at most one impulse, and a press made
/// while airborne stays armed until the character can actually jump.
#[derive(Debug, Clone, Copy, Default)]
pub struct JumpLatch {
    held: bool,
    armed: bool,
}

impl JumpLatch {
    /// Feed the raw held state for this step.
    pub fn observe(&mut self, held: bool) {
        if held && !self.held {
            self.armed = true;
        }
        self.held = held;
    }

    /// Consume the pending jump, if armed.
    pub fn take(&mut self) -> bool {
        let armed = self.armed;
        self.armed = false;
        armed
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }
}
