//! Edgecam Rig - pointer-driven edge-zone camera rig
//!
//! Moving the pointer into one of four screen-edge zones accelerates the
//! camera along a single configured world axis; the top and bottom zones
//! also pitch it within a bounded range. Leaving all zones decays the
//! motion back toward rest, and a speed-driven head bob overlays the
//! rendered vertical position.
//!
//! The rig is a plain state object: the host calls [`CameraRig::update`]
//! once per frame with a [`FrameInput`] snapshot and reads the resulting
//! pose back. No windowing or rendering dependencies.

pub mod bob;
pub mod config;
pub mod controller;
pub mod limits;
pub mod motion;
pub mod pose;
pub mod zone;

pub use bob::HeadBob;
pub use config::{MovementAxis, RigConfig};
pub use controller::{CameraRig, DebugSnapshot, FrameInput, RigState};
pub use limits::AxisLimits;
pub use motion::MotionState;
pub use zone::{EdgeZones, Zone, ZoneDirection, ZoneRect, HOVER_COLOR};
