//! Frame clock for the Edgecam rig
//!
//! The host environment hands us a raw delta each frame; the clock sanitizes
//! it (never negative, bounded against hitches) and tracks totals.

use serde::{Deserialize, Serialize};

/// Configuration for frame timing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeConfig {
    /// How many rig-seconds pass per real second
    pub time_scale: f32,
    /// Maximum delta time to prevent spiral of death
    pub max_delta_time: f32,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            time_scale: 1.0,
            max_delta_time: 0.25,
        }
    }
}

/// Per-frame time tracking
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Configuration
    pub config: TimeConfig,
    /// Time since start in seconds
    pub total_time: f64,
    /// Delta time for this frame (sanitized and scaled)
    pub delta_time: f32,
    /// Unscaled delta time (sanitized only)
    pub unscaled_delta_time: f32,
    /// Frame counter
    pub frame_count: u64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self {
            config: TimeConfig::default(),
            total_time: 0.0,
            delta_time: 0.0,
            unscaled_delta_time: 0.0,
            frame_count: 0,
        }
    }
}

impl FrameClock {
    /// Create a new frame clock with custom config
    pub fn new(config: TimeConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Update the clock with the raw delta from the previous frame
    ///
    /// Negative deltas (clock skew in the host) are treated as zero.
    pub fn update(&mut self, raw_delta: f32) {
        self.unscaled_delta_time = raw_delta.clamp(0.0, self.config.max_delta_time);
        self.delta_time = self.unscaled_delta_time * self.config.time_scale;
        self.total_time += self.delta_time as f64;
        self.frame_count += 1;
    }

    /// Set the time scale (0.0 = frozen, 1.0 = normal, 2.0 = double speed)
    pub fn set_time_scale(&mut self, scale: f32) {
        self.config.time_scale = scale.max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_clock_update() {
        let mut clock = FrameClock::default();
        clock.update(0.016);

        assert!(clock.delta_time > 0.0);
        assert_eq!(clock.frame_count, 1);
    }

    #[test]
    fn test_negative_delta_clamped() {
        let mut clock = FrameClock::default();
        clock.update(-0.5);
        assert_eq!(clock.delta_time, 0.0);
        assert_eq!(clock.total_time, 0.0);
    }

    #[test]
    fn test_hitch_clamped_to_max_delta() {
        let mut clock = FrameClock::default();
        clock.update(3.0);
        assert_eq!(clock.delta_time, clock.config.max_delta_time);
    }

    #[test]
    fn test_time_scale() {
        let mut clock = FrameClock::default();
        clock.set_time_scale(2.0);
        clock.update(0.1);
        assert!((clock.delta_time - 0.2).abs() < 1e-6);
        assert!((clock.unscaled_delta_time - 0.1).abs() < 1e-6);
    }
}
