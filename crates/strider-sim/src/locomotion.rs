//! Locomotion animation gate

/// Playback phase of the walk clip.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Playing,
    /// Fade-out countdown after locomotion stops
    Stopping { remaining: f32 },
}

/// Deterministic gate for the external walk clip.
///
/// Entering locomotion plays immediately; leaving it starts a fade-out
/// countdown advanced by each step's delta, and only its expiry stops
/// playback. The whole state machine lives in the per-step update, so it
/// is testable without real time passing.
#[derive(Debug, Clone, Copy)]
pub struct LocomotionAnimator {
    fade_out: f32,
    phase: Phase,
}

impl LocomotionAnimator {
    pub fn new(fade_out: f32) -> Self {
        Self {
            fade_out,
            phase: Phase::Idle,
        }
    }

    /// Advance one step. `active` is `moving && grounded` for the step.
    pub fn update(&mut self, active: bool, dt: f32) {
        self.phase = match self.phase {
            _ if active => Phase::Playing,
            Phase::Playing => Phase::Stopping {
                remaining: self.fade_out,
            },
            Phase::Stopping { remaining } => {
                let remaining = remaining - dt;
                if remaining <= 0.0 {
                    Phase::Idle
                } else {
                    Phase::Stopping { remaining }
                }
            }
            Phase::Idle => Phase::Idle,
        };
    }

    /// Whether the walk clip should currently play, fade-out included.
    pub fn is_playing(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }
}
