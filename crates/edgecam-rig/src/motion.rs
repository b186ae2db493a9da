//! Velocity and pitch-velocity integration
//!
//! Hovering a zone accelerates the camera toward the limit bound on the
//! active axis (and toward a pitch bound for the top/bottom zones); leaving
//! all zones decays both velocities. Advancement always pins the two
//! inactive position components to the initial pose.

use glam::{Vec2, Vec3};

use crate::config::RigConfig;
use crate::limits::AxisLimits;
use crate::pose::normalize_pitch_deg;
use crate::zone::{Zone, ZoneDirection};

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Mutable motion state of one camera rig
///
/// `base_position` is the logical, bob-free position used for every limit
/// and velocity calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionState {
    pub base_position: Vec3,
    pub velocity: Vec3,
    pub pitch_deg: f32,
    pub pitch_velocity: f32,
}

impl MotionState {
    /// Motion state at rest at the given pose
    pub fn new(position: Vec3, pitch_deg: f32) -> Self {
        Self {
            base_position: position,
            velocity: Vec3::ZERO,
            pitch_deg: normalize_pitch_deg(pitch_deg),
            pitch_velocity: 0.0,
        }
    }

    /// Current translation speed
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Accelerate toward the hovered zone's target, from the pointer's
    /// offset inside the zone rectangle
    pub fn apply_zone(
        &mut self,
        zone: &Zone,
        pointer: Vec2,
        config: &RigConfig,
        limits: AxisLimits,
        dt: f32,
    ) {
        let relative = zone.rect.relative_offset(pointer);
        let magnitude = relative.x.abs().max(relative.y.abs());

        let target = self.target_position(zone.direction, magnitude, config, limits);
        let direction = (target - self.base_position).normalize_or_zero();
        self.velocity += direction * config.acceleration * dt;
        self.velocity = self.velocity.clamp_length_max(config.max_speed);

        if zone.direction.enables_pitch() {
            let (pitch_min, pitch_max) = config.pitch_bounds();
            let current = normalize_pitch_deg(self.pitch_deg);
            // Up tilts toward the minimum pitch, Down toward the maximum.
            let goal = if zone.direction == ZoneDirection::Up {
                pitch_min
            } else {
                pitch_max
            };
            let target_pitch = lerp(current, goal, (magnitude * 2.0).clamp(0.0, 1.0));
            let pitch_dir = (target_pitch - current).signum();
            self.pitch_velocity += pitch_dir * config.pitch_acceleration * magnitude * dt;
            self.pitch_velocity = self
                .pitch_velocity
                .clamp(-config.max_pitch_speed, config.max_pitch_speed);
        }
    }

    /// Decay both velocities when no zone is hovered
    ///
    /// Raw per-frame exponential decay, deliberately not time-normalized.
    pub fn apply_damping(&mut self, config: &RigConfig) {
        self.velocity *= config.damping;
        self.pitch_velocity *= config.pitch_damping;
    }

    /// Advance position and pitch by one frame, clamping both to their
    /// ranges and zeroing the corresponding velocity at a bound
    pub fn integrate(
        &mut self,
        config: &RigConfig,
        limits: AxisLimits,
        initial_position: Vec3,
        dt: f32,
    ) {
        let axis = config.movement_axis;
        let axis_velocity = axis.component(self.velocity);

        let advanced = axis.component(self.base_position) + axis_velocity * dt;
        let clamped = limits.clamp(advanced);
        // Inactive axes stay pinned to the initial pose.
        self.base_position = axis.with_component(initial_position, clamped);

        // Only the active axis ever carries velocity.
        self.velocity = if limits.at_bound(clamped) {
            Vec3::ZERO
        } else {
            axis.with_component(Vec3::ZERO, axis_velocity)
        };

        let (pitch_min, pitch_max) = config.pitch_bounds();
        let advanced_pitch = normalize_pitch_deg(self.pitch_deg + self.pitch_velocity * dt);
        self.pitch_deg = advanced_pitch.clamp(pitch_min, pitch_max);
        if self.pitch_deg <= pitch_min || self.pitch_deg >= pitch_max {
            self.pitch_velocity = 0.0;
        }
    }

    /// Target position on the active axis for a zone hover of the given
    /// magnitude: a lerp from the current axis value toward the limit bound
    /// in the zone's direction
    fn target_position(
        &self,
        direction: ZoneDirection,
        magnitude: f32,
        config: &RigConfig,
        limits: AxisLimits,
    ) -> Vec3 {
        let axis = config.movement_axis;
        let sign = direction.axis_sign(axis);
        if sign == 0.0 {
            return self.base_position;
        }
        let current = axis.component(self.base_position);
        let goal = lerp(current, limits.bound_for_sign(sign), magnitude);
        axis.with_component(self.base_position, goal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MovementAxis;
    use crate::zone::ZoneRect;

    const DT: f32 = 1.0 / 60.0;

    fn test_zone(direction: ZoneDirection) -> Zone {
        Zone {
            direction,
            rect: ZoneRect {
                x: 0.0,
                y: 0.0,
                width: 100.0,
                height: 100.0,
            },
            hovered: true,
        }
    }

    fn default_limits() -> AxisLimits {
        AxisLimits::derive(0.0, 10.0, 0.5)
    }

    #[test]
    fn test_zone_center_produces_no_velocity() {
        // Scenario A: pointer at the exact zone center, magnitude 0.
        let mut motion = MotionState::new(Vec3::ZERO, 0.0);
        let zone = test_zone(ZoneDirection::Right);
        let config = RigConfig::default();
        for _ in 0..60 {
            motion.apply_zone(&zone, Vec2::new(50.0, 50.0), &config, default_limits(), DT);
            motion.integrate(&config, default_limits(), Vec3::ZERO, DT);
        }
        assert_eq!(motion.velocity, Vec3::ZERO);
        assert_eq!(motion.base_position, Vec3::ZERO);
    }

    #[test]
    fn test_right_zone_edge_accelerates_to_clamp() {
        // Scenario B: far-edge hover, velocity builds toward max_speed and
        // position walks monotonically to the +5 bound, then stops.
        let mut motion = MotionState::new(Vec3::ZERO, 0.0);
        let zone = test_zone(ZoneDirection::Right);
        let config = RigConfig::default();
        let limits = default_limits();
        let pointer = Vec2::new(100.0, 50.0); // relative.x = 0.5

        let mut last_x = motion.base_position.x;
        for _ in 0..600 {
            motion.apply_zone(&zone, pointer, &config, limits, DT);
            motion.integrate(&config, limits, Vec3::ZERO, DT);
            assert!(motion.speed() <= config.max_speed + 1e-4);
            assert!(motion.base_position.x >= last_x);
            assert!(limits.contains(motion.base_position.x));
            last_x = motion.base_position.x;
        }
        assert!((motion.base_position.x - limits.max).abs() < 1e-3);
        assert_eq!(motion.velocity, Vec3::ZERO);
    }

    #[test]
    fn test_up_zone_drives_pitch_to_min() {
        // Scenario C: Up hover pitches toward pitch_min; the velocity is
        // forced to zero on the frame the bound is reached.
        let mut motion = MotionState::new(Vec3::ZERO, 0.0);
        let zone = test_zone(ZoneDirection::Up);
        let config = RigConfig::default();
        let limits = default_limits();
        let pointer = Vec2::new(50.0, 100.0); // relative.y = 0.5

        let mut reached_bound = false;
        for _ in 0..1200 {
            motion.apply_zone(&zone, pointer, &config, limits, DT);
            motion.integrate(&config, limits, Vec3::ZERO, DT);
            assert!(motion.pitch_deg >= config.pitch_min);
            assert!(motion.pitch_velocity.abs() <= config.max_pitch_speed + 1e-4);
            if motion.pitch_deg == config.pitch_min {
                assert_eq!(motion.pitch_velocity, 0.0);
                reached_bound = true;
                break;
            }
        }
        assert!(reached_bound);
    }

    #[test]
    fn test_up_zone_does_not_translate_on_x_axis() {
        let mut motion = MotionState::new(Vec3::ZERO, 0.0);
        let zone = test_zone(ZoneDirection::Up);
        let config = RigConfig::default(); // movement_axis = X
        motion.apply_zone(&zone, Vec2::new(50.0, 100.0), &config, default_limits(), DT);
        assert_eq!(motion.velocity, Vec3::ZERO);
    }

    #[test]
    fn test_damping_monotone_convergence() {
        let mut motion = MotionState::new(Vec3::ZERO, 0.0);
        motion.velocity = Vec3::new(3.0, 0.0, 0.0);
        motion.pitch_velocity = -20.0;
        let config = RigConfig::default();

        let mut last_speed = motion.speed();
        let mut last_pitch_speed = motion.pitch_velocity.abs();
        for _ in 0..200 {
            motion.apply_damping(&config);
            assert!(motion.speed() <= last_speed);
            assert!(motion.pitch_velocity.abs() <= last_pitch_speed);
            last_speed = motion.speed();
            last_pitch_speed = motion.pitch_velocity.abs();
        }
        assert!(motion.speed() < 1e-3);
        assert!(motion.pitch_velocity.abs() < 1e-2);
    }

    #[test]
    fn test_inactive_axes_pinned() {
        let initial = Vec3::new(0.0, 1.6, -2.0);
        let mut motion = MotionState::new(initial, 0.0);
        motion.velocity = Vec3::new(1.0, 0.0, 0.0);
        let config = RigConfig::default();
        let limits = AxisLimits::derive(initial.x, 10.0, 0.5);

        motion.base_position.y += 5.0; // perturb an inactive axis
        motion.integrate(&config, limits, initial, DT);
        assert_eq!(motion.base_position.y, initial.y);
        assert_eq!(motion.base_position.z, initial.z);
    }

    #[test]
    fn test_collapsed_range_stays_functional() {
        let limits = AxisLimits::derive(2.0, 0.0, 0.5);
        let mut motion = MotionState::new(Vec3::new(2.0, 0.0, 0.0), 0.0);
        motion.velocity = Vec3::new(4.0, 0.0, 0.0);
        let config = RigConfig::default();

        motion.integrate(&config, limits, Vec3::new(2.0, 0.0, 0.0), DT);
        assert_eq!(motion.base_position.x, 2.0);
        assert_eq!(motion.velocity, Vec3::ZERO);
    }

    #[test]
    fn test_z_axis_up_zone_translates_positive_z() {
        let config = RigConfig {
            movement_axis: MovementAxis::Z,
            ..Default::default()
        };
        let limits = AxisLimits::derive(0.0, 10.0, 0.5);
        let mut motion = MotionState::new(Vec3::ZERO, 0.0);
        let zone = test_zone(ZoneDirection::Up);

        for _ in 0..60 {
            motion.apply_zone(&zone, Vec2::new(50.0, 100.0), &config, limits, DT);
            motion.integrate(&config, limits, Vec3::ZERO, DT);
        }
        assert!(motion.base_position.z > 0.0);
        assert_eq!(motion.base_position.x, 0.0);
    }
}
