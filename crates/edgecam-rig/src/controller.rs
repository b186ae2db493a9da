//! Camera rig controller
//!
//! Owns the motion state, edge zones, and head bob, and advances them once
//! per frame from a plain input snapshot. The host drives it with
//! [`CameraRig::update`]; there is no engine lifecycle.

use edgecam_core::Transform;
use glam::{Vec2, Vec3};
use tracing::debug;

use crate::bob::HeadBob;
use crate::config::RigConfig;
use crate::limits::AxisLimits;
use crate::motion::MotionState;
use crate::pose;
use crate::zone::{EdgeZones, ZoneDirection};

/// Everything the rig reads from the host for one frame
#[derive(Debug, Clone, Copy)]
pub struct FrameInput {
    /// Seconds since the last frame (negative values are treated as zero)
    pub dt: f32,
    /// Pointer position in pixels, origin at the bottom-left corner
    pub pointer: Vec2,
    /// Viewport size in pixels
    pub viewport: Vec2,
    /// True while an automatic camera move or a full-screen overlay owns the
    /// camera; the whole update becomes a no-op
    pub suspend: bool,
}

/// Rig activity state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RigState {
    /// No zone hovered; velocities decay toward rest
    Idle,
    /// A zone is hovered and actively driving the velocities
    Engaged,
    /// Input disabled via [`CameraRig::set_controllable`]; all state frozen
    Disabled,
}

/// Debug-panel snapshot of the rig's per-frame signals
#[derive(Debug, Clone, Copy)]
pub struct DebugSnapshot {
    pub pointer: Vec2,
    pub in_any_zone: bool,
    pub hovered_zone: Option<ZoneDirection>,
    pub velocity: Vec3,
    pub base_position: Vec3,
    pub rendered_position: Vec3,
    pub pitch_deg: f32,
}

/// Pointer-driven edge-zone camera rig
///
/// Hovering a screen-edge zone accelerates the camera along the configured
/// world axis (and pitches it for the top/bottom zones); leaving all zones
/// decays the motion. A speed-driven head bob overlays the rendered
/// vertical position.
pub struct CameraRig {
    /// Configuration
    pub config: RigConfig,
    zones: EdgeZones,
    motion: MotionState,
    bob: HeadBob,
    limits: AxisLimits,
    state: RigState,
    rendered: Transform,
    initial_position: Vec3,
    initial_pitch_deg: f32,
    initial_yaw_deg: f32,
    initial_roll_deg: f32,
    yaw_deg: f32,
    roll_deg: f32,
    last_pointer: Vec2,
    last_viewport: Vec2,
}

impl CameraRig {
    /// Create a rig at the origin with default configuration
    pub fn new() -> Self {
        Self::with_config(RigConfig::default())
    }

    /// Create a rig at the origin with a custom configuration
    pub fn with_config(config: RigConfig) -> Self {
        Self::with_pose(config, Vec3::ZERO, Vec3::ZERO)
    }

    /// Create a rig with a custom configuration and initial pose
    ///
    /// `rotation_deg` holds (pitch, yaw, roll) in degrees. The pose is
    /// captured as the reset target and as the pin values for the two
    /// inactive axes.
    pub fn with_pose(config: RigConfig, position: Vec3, rotation_deg: Vec3) -> Self {
        let initial_pitch = pose::normalize_pitch_deg(rotation_deg.x);
        let limits = AxisLimits::derive(
            config.movement_axis.component(position),
            config.range_length(),
            config.offset_fraction(),
        );
        let motion = MotionState::new(position, initial_pitch);
        let rendered = pose::compose(position, 0.0, initial_pitch, rotation_deg.y, rotation_deg.z);
        let mut zones = EdgeZones::new();
        zones.set_visible(config.show_edge_zones);
        Self {
            config,
            zones,
            motion,
            bob: HeadBob::new(),
            limits,
            state: RigState::Idle,
            rendered,
            initial_position: position,
            initial_pitch_deg: initial_pitch,
            initial_yaw_deg: rotation_deg.y,
            initial_roll_deg: rotation_deg.z,
            yaw_deg: rotation_deg.y,
            roll_deg: rotation_deg.z,
            last_pointer: Vec2::ZERO,
            last_viewport: Vec2::ZERO,
        }
    }

    /// Advance the rig by one frame
    ///
    /// Frame order is fixed: suspend check, zone layout, hit test, velocity
    /// integration (or damping), clamped advancement, head bob, pose
    /// composition. While suspended the frame is a complete no-op; while
    /// disabled the rig stays frozen, without damping.
    pub fn update(&mut self, input: &FrameInput) {
        if input.suspend {
            return;
        }
        if self.state == RigState::Disabled {
            return;
        }
        let dt = input.dt.max(0.0);
        self.last_pointer = input.pointer;
        if input.viewport.x > 0.0 && input.viewport.y > 0.0 {
            self.last_viewport = input.viewport;
        }
        self.zones.layout(input.viewport, &self.config);

        match self.zones.hit_test(input.pointer) {
            Some(direction) => {
                self.transition(RigState::Engaged);
                let zone = *self.zones.zone(direction);
                self.motion
                    .apply_zone(&zone, input.pointer, &self.config, self.limits, dt);
            }
            None => {
                self.transition(RigState::Idle);
                self.motion.apply_damping(&self.config);
            }
        }

        self.motion
            .integrate(&self.config, self.limits, self.initial_position, dt);
        let bob_offset = self.bob.step(dt, self.motion.speed(), &self.config);
        self.rendered = pose::compose(
            self.motion.base_position,
            bob_offset,
            self.motion.pitch_deg,
            self.yaw_deg,
            self.roll_deg,
        );
    }

    /// Restore the initial pose and zero all derived state
    ///
    /// Velocities, pitch velocity, and the bob filter reset; the axis
    /// limits are recomputed; hover flags clear. Idempotent.
    pub fn reset(&mut self) {
        self.motion = MotionState::new(self.initial_position, self.initial_pitch_deg);
        self.yaw_deg = self.initial_yaw_deg;
        self.roll_deg = self.initial_roll_deg;
        self.bob.reset();
        self.recompute_limits();
        self.zones.clear_hover();
        if self.state == RigState::Engaged {
            self.state = RigState::Idle;
        }
        self.rendered = pose::compose(
            self.initial_position,
            0.0,
            self.initial_pitch_deg,
            self.yaw_deg,
            self.roll_deg,
        );
    }

    /// Enable or disable pointer control
    ///
    /// While disabled the rig is frozen entirely: no input is read, no
    /// damping runs, and the pose stays put. Hover highlights clear on
    /// disable so the UI does not show a stale highlight.
    pub fn set_controllable(&mut self, controllable: bool) {
        let target = if controllable {
            if self.state == RigState::Disabled {
                RigState::Idle
            } else {
                self.state
            }
        } else {
            self.zones.clear_hover();
            RigState::Disabled
        };
        self.transition(target);
    }

    /// Whether pointer control is currently enabled
    pub fn controllable(&self) -> bool {
        self.state != RigState::Disabled
    }

    /// Replace the configuration, recomputing limits and the zone layout
    pub fn set_config(&mut self, config: RigConfig) {
        self.config = config;
        self.recompute_limits();
        self.zones.set_visible(self.config.show_edge_zones);
        self.zones.layout(self.last_viewport, &self.config);
    }

    /// Show or hide the edge-zone guides
    pub fn set_edge_zones_visible(&mut self, visible: bool) {
        self.config.show_edge_zones = visible;
        self.zones.set_visible(visible);
    }

    /// Flip the head bob on or off
    pub fn toggle_head_bob(&mut self) {
        self.config.enable_head_bob = !self.config.enable_head_bob;
    }

    /// Whether the head bob is active
    pub fn head_bob_enabled(&self) -> bool {
        self.config.enable_head_bob
    }

    /// Set the pass-through yaw in degrees
    pub fn set_yaw(&mut self, yaw_deg: f32) {
        self.yaw_deg = yaw_deg;
    }

    /// Set the pass-through roll in degrees
    pub fn set_roll(&mut self, roll_deg: f32) {
        self.roll_deg = roll_deg;
    }

    /// The rendered pose, bob included
    pub fn pose(&self) -> Transform {
        self.rendered
    }

    /// The rendered position, bob included
    pub fn position(&self) -> Vec3 {
        self.rendered.position
    }

    /// The logical, bob-free position
    pub fn base_position(&self) -> Vec3 {
        self.motion.base_position
    }

    /// Current translation velocity
    pub fn velocity(&self) -> Vec3 {
        self.motion.velocity
    }

    /// Current pitch in degrees
    pub fn pitch_deg(&self) -> f32 {
        self.motion.pitch_deg
    }

    /// Current activity state
    pub fn state(&self) -> RigState {
        self.state
    }

    /// The currently hovered zone, if any
    pub fn hovered_zone(&self) -> Option<ZoneDirection> {
        self.zones.hovered()
    }

    /// The edge zones, for UI drawing
    pub fn zones(&self) -> &EdgeZones {
        &self.zones
    }

    /// The current axis travel limits
    pub fn limits(&self) -> AxisLimits {
        self.limits
    }

    /// Snapshot of the per-frame signals for a debug overlay
    pub fn debug_snapshot(&self) -> DebugSnapshot {
        DebugSnapshot {
            pointer: self.last_pointer,
            in_any_zone: self.zones.hovered().is_some(),
            hovered_zone: self.zones.hovered(),
            velocity: self.motion.velocity,
            base_position: self.motion.base_position,
            rendered_position: self.rendered.position,
            pitch_deg: self.motion.pitch_deg,
        }
    }

    fn recompute_limits(&mut self) {
        self.limits = AxisLimits::derive(
            self.config
                .movement_axis
                .component(self.initial_position),
            self.config.range_length(),
            self.config.offset_fraction(),
        );
    }

    fn transition(&mut self, target: RigState) {
        if self.state != target {
            debug!(from = ?self.state, to = ?target, "rig state change");
            self.state = target;
        }
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new()
    }
}
