//! Edgecam Core - Core types and utilities for the Edgecam rig
//!
//! This crate provides the foundational types used throughout the rig:
//! - Mathematical primitives (re-exported from glam)
//! - Transform type for camera poses
//! - Frame clock for delta-time bookkeeping
//! - Color type for zone highlighting

pub mod time;
pub mod types;

pub use glam::{Quat, Vec2, Vec3};
pub use time::{FrameClock, TimeConfig};
pub use types::{Color, Transform};
