//! Head bob filter
//!
//! A sinusoidal vertical offset proportional to current speed, layered on
//! the rendered position to suggest footsteps. The offset never touches the
//! logical position or the axis limits.

use std::f32::consts::TAU;

use crate::config::RigConfig;

/// Smoothed head-bob state: sine phase and the current vertical offset
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadBob {
    phase: f32,
    offset: f32,
}

impl HeadBob {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current vertical offset without advancing the filter
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Advance the filter by one frame and return the vertical offset
    ///
    /// Above the speed threshold the sine phase accumulates at a frequency
    /// scaled by speed; otherwise the offset eases back to zero. The phase
    /// is never reset here, so a resumed walk continues the wave smoothly.
    pub fn step(&mut self, dt: f32, speed: f32, config: &RigConfig) -> f32 {
        let smooth = 1.0 - (-config.bob_smoothing * dt).exp();

        let target = if config.enable_head_bob && speed > config.bob_speed_threshold {
            let speed_ratio = (speed / config.max_speed.max(1e-4)).clamp(0.0, 1.0);
            let frequency = config.bob_frequency * (0.5 + 0.5 * speed_ratio);
            self.phase += dt * frequency;
            (self.phase * TAU).sin() * config.bob_amplitude
        } else {
            0.0
        };

        self.offset += (target - self.offset) * smooth;
        self.offset
    }

    /// Zero the phase and offset
    pub fn reset(&mut self) {
        self.phase = 0.0;
        self.offset = 0.0;
    }
}
