//! Rig configuration

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// The single world axis the camera is allowed to translate along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovementAxis {
    X,
    Y,
    Z,
}

impl MovementAxis {
    /// Read this axis' component of a vector
    pub fn component(self, v: Vec3) -> f32 {
        match self {
            MovementAxis::X => v.x,
            MovementAxis::Y => v.y,
            MovementAxis::Z => v.z,
        }
    }

    /// Return `v` with this axis' component replaced by `value`
    pub fn with_component(self, v: Vec3, value: f32) -> Vec3 {
        match self {
            MovementAxis::X => Vec3::new(value, v.y, v.z),
            MovementAxis::Y => Vec3::new(v.x, value, v.z),
            MovementAxis::Z => Vec3::new(v.x, v.y, value),
        }
    }
}

impl Default for MovementAxis {
    fn default() -> Self {
        MovementAxis::X
    }
}

/// Camera rig configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RigConfig {
    /// Axis the camera translates along
    pub movement_axis: MovementAxis,
    /// Total travel length along the movement axis, in world units
    pub axis_range_length: f32,
    /// Where the initial position sits inside the range (0 = min end, 1 = max end)
    pub initial_offset: f32,
    /// Acceleration in world units per second squared
    pub acceleration: f32,
    /// Maximum translation speed
    pub max_speed: f32,
    /// Per-frame velocity decay factor when no zone is hovered (0-1)
    pub damping: f32,
    /// Minimum pitch angle in degrees
    pub pitch_min: f32,
    /// Maximum pitch angle in degrees
    pub pitch_max: f32,
    /// Pitch acceleration in degrees per second squared
    pub pitch_acceleration: f32,
    /// Maximum pitch speed in degrees per second
    pub max_pitch_speed: f32,
    /// Per-frame pitch velocity decay factor when no zone is hovered (0-1)
    pub pitch_damping: f32,
    /// Whether the head bob overlay is active
    pub enable_head_bob: bool,
    /// Bob amplitude in world units
    pub bob_amplitude: f32,
    /// Bob frequency (cycles per second at full speed)
    pub bob_frequency: f32,
    /// Speed below which the bob fades out
    pub bob_speed_threshold: f32,
    /// Exponential smoothing coefficient for the bob offset
    pub bob_smoothing: f32,
    /// Left zone width as a fraction of viewport width (0-0.5)
    pub left_width_fraction: f32,
    /// Right zone width as a fraction of viewport width (0-0.5)
    pub right_width_fraction: f32,
    /// Top zone height as a fraction of viewport height (0-0.5)
    pub top_height_fraction: f32,
    /// Bottom zone height as a fraction of viewport height (0-0.5)
    pub bottom_height_fraction: f32,
    /// Whether the edge-zone guides should be drawn by the UI
    pub show_edge_zones: bool,
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            movement_axis: MovementAxis::X,
            axis_range_length: 10.0,
            initial_offset: 0.5,
            acceleration: 2.0,
            max_speed: 5.0,
            damping: 0.95,
            pitch_min: -30.0,
            pitch_max: 30.0,
            pitch_acceleration: 50.0,
            max_pitch_speed: 30.0,
            pitch_damping: 0.95,
            enable_head_bob: true,
            bob_amplitude: 0.05,
            bob_frequency: 6.0,
            bob_speed_threshold: 0.1,
            bob_smoothing: 8.0,
            left_width_fraction: 0.15,
            right_width_fraction: 0.15,
            top_height_fraction: 0.15,
            bottom_height_fraction: 0.15,
            show_edge_zones: true,
        }
    }
}

impl RigConfig {
    /// Range length with negative values treated as zero
    pub fn range_length(&self) -> f32 {
        self.axis_range_length.max(0.0)
    }

    /// Initial offset clamped into [0, 1]
    pub fn offset_fraction(&self) -> f32 {
        self.initial_offset.clamp(0.0, 1.0)
    }

    /// Pitch bounds ordered as (min, max)
    pub fn pitch_bounds(&self) -> (f32, f32) {
        if self.pitch_min <= self.pitch_max {
            (self.pitch_min, self.pitch_max)
        } else {
            (self.pitch_max, self.pitch_min)
        }
    }

    /// Left zone fraction clamped into [0, 0.5]
    pub fn left_fraction(&self) -> f32 {
        self.left_width_fraction.clamp(0.0, 0.5)
    }

    /// Right zone fraction clamped into [0, 0.5]
    pub fn right_fraction(&self) -> f32 {
        self.right_width_fraction.clamp(0.0, 0.5)
    }

    /// Top zone fraction clamped into [0, 0.5]
    pub fn top_fraction(&self) -> f32 {
        self.top_height_fraction.clamp(0.0, 0.5)
    }

    /// Bottom zone fraction clamped into [0, 0.5]
    pub fn bottom_fraction(&self) -> f32 {
        self.bottom_height_fraction.clamp(0.0, 0.5)
    }
}
