//! Axis travel limits
//!
//! The rig translates along a single world axis; the reachable interval is
//! derived from the initial axis value, the configured range length, and the
//! fraction of the range that lies below the initial value.

use serde::{Deserialize, Serialize};

/// Reachable [min, max] interval along the movement axis, in world units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisLimits {
    pub min: f32,
    pub max: f32,
}

impl AxisLimits {
    /// Distance from a bound below which the position counts as "at" it
    pub const BOUND_EPSILON: f32 = 1e-4;

    /// Derive limits from the initial axis value, range length, and offset fraction
    ///
    /// `range_length` is clamped to >= 0 and `offset_fraction` into [0, 1]
    /// before use. With offset 0 the initial value sits at the min end, with
    /// offset 1 at the max end.
    pub fn derive(initial_value: f32, range_length: f32, offset_fraction: f32) -> Self {
        let length = range_length.max(0.0);
        let t = offset_fraction.clamp(0.0, 1.0);
        let mut min = initial_value - t * length;
        let mut max = min + length;
        if min > max {
            std::mem::swap(&mut min, &mut max);
        }
        Self { min, max }
    }

    /// Clamp a value into the limits
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }

    /// Whether a value lies inside the limits (inclusive)
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Whether a value sits at either bound, within [`Self::BOUND_EPSILON`]
    pub fn at_bound(&self, value: f32) -> bool {
        (value - self.min).abs() < Self::BOUND_EPSILON
            || (value - self.max).abs() < Self::BOUND_EPSILON
    }

    /// The bound approached when moving in the given direction
    pub fn bound_for_sign(&self, sign: f32) -> f32 {
        if sign > 0.0 {
            self.max
        } else {
            self.min
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_offset() {
        let limits = AxisLimits::derive(0.0, 10.0, 0.5);
        assert_eq!(limits.min, -5.0);
        assert_eq!(limits.max, 5.0);
        assert!(limits.contains(0.0));
    }

    #[test]
    fn test_boundary_offsets() {
        let at_min = AxisLimits::derive(3.0, 8.0, 0.0);
        assert_eq!(at_min.min, 3.0);
        assert_eq!(at_min.max, 11.0);

        let at_max = AxisLimits::derive(3.0, 8.0, 1.0);
        assert_eq!(at_max.min, -5.0);
        assert_eq!(at_max.max, 3.0);
    }

    #[test]
    fn test_initial_value_always_inside() {
        for &(initial, length, offset) in
            &[(0.0, 10.0, 0.3), (-7.5, 2.0, 0.9), (100.0, 0.0, 0.5)]
        {
            let limits = AxisLimits::derive(initial, length, offset);
            assert!(limits.min <= limits.max);
            assert!(limits.contains(initial));
        }
    }

    #[test]
    fn test_negative_length_collapses() {
        let limits = AxisLimits::derive(2.0, -5.0, 0.5);
        assert_eq!(limits.min, 2.0);
        assert_eq!(limits.max, 2.0);
        assert!(limits.at_bound(2.0));
    }

    #[test]
    fn test_idempotent_derivation() {
        let a = AxisLimits::derive(1.0, 4.0, 0.25);
        let b = AxisLimits::derive(1.0, 4.0, 0.25);
        assert_eq!(a, b);
    }

    #[test]
    fn test_at_bound_tolerance() {
        let limits = AxisLimits::derive(0.0, 10.0, 0.5);
        assert!(limits.at_bound(5.0));
        assert!(limits.at_bound(4.99995));
        assert!(!limits.at_bound(4.9));
    }
}
