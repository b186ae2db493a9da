//! Final pose composition
//!
//! Combines the logical position with the head-bob offset and builds the
//! camera rotation from pitch, with yaw and roll passed through unchanged.

use edgecam_core::Transform;
use glam::{EulerRot, Quat, Vec3};

/// Wrap an angle in degrees into the signed (-180, 180] range
///
/// Pitch is normalized before every comparison against the pitch range so
/// values read back near the 0/360 boundary never clamp to the wrong side.
pub fn normalize_pitch_deg(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Compose the rendered camera pose
///
/// The bob offset is applied to the rendered vertical component only; the
/// logical position used for limit checks stays bob-free.
pub fn compose(
    base_position: Vec3,
    bob_offset: f32,
    pitch_deg: f32,
    yaw_deg: f32,
    roll_deg: f32,
) -> Transform {
    let position = base_position + Vec3::new(0.0, bob_offset, 0.0);
    let rotation = Quat::from_euler(
        EulerRot::YXZ,
        yaw_deg.to_radians(),
        pitch_deg.to_radians(),
        roll_deg.to_radians(),
    );
    Transform::from_position_rotation(position, rotation)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_wraps_high_angles() {
        assert_eq!(normalize_pitch_deg(190.0), -170.0);
        assert_eq!(normalize_pitch_deg(359.0), -1.0);
        assert_eq!(normalize_pitch_deg(360.0), 0.0);
        assert_eq!(normalize_pitch_deg(-190.0), 170.0);
    }

    #[test]
    fn test_normalize_identity_in_range() {
        assert_eq!(normalize_pitch_deg(45.0), 45.0);
        assert_eq!(normalize_pitch_deg(-45.0), -45.0);
        assert_eq!(normalize_pitch_deg(180.0), 180.0);
    }

    #[test]
    fn test_compose_applies_bob_to_vertical_only() {
        let pose = compose(Vec3::new(1.0, 2.0, 3.0), 0.25, 0.0, 0.0, 0.0);
        assert_eq!(pose.position, Vec3::new(1.0, 2.25, 3.0));
    }

    #[test]
    fn test_compose_passes_yaw_through() {
        let pose = compose(Vec3::ZERO, 0.0, 0.0, 90.0, 0.0);
        let forward = pose.forward();
        // Yaw 90 degrees turns -Z forward onto -X.
        assert!((forward.x - -1.0).abs() < 1e-5);
        assert!(forward.z.abs() < 1e-5);
    }

    #[test]
    fn test_compose_pitch_tilts_forward_vector() {
        let pose = compose(Vec3::ZERO, 0.0, 30.0, 0.0, 0.0);
        assert!(pose.forward().y > 0.0);

        let pose = compose(Vec3::ZERO, 0.0, -30.0, 0.0, 0.0);
        assert!(pose.forward().y < 0.0);
    }
}
