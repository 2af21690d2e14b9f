//! Angle and smoothing helpers
//!
//! All angles in this module are in degrees. The controller's tuning
//! (slope limits, tilt thresholds, pitch clamp) is expressed in degrees, so
//! conversions to radians only happen at the trigonometry boundary.
//!
//! # Yaw Convention
//!
//! - Yaw 0 faces +Z, +X is to the right
//! - Yaw increases clockwise when seen from above (+Y)
//! - `forward(yaw) = (sin yaw, 0, cos yaw)`, `right(yaw) = (cos yaw, 0, -sin yaw)`

use glam::Vec3;

/// World up direction.
pub const WORLD_UP: Vec3 = Vec3::Y;

/// World forward direction (yaw 0).
pub const WORLD_FORWARD: Vec3 = Vec3::Z;

/// Shortest signed difference `target - current`, wrapped to (-180, 180].
///
/// Both inputs may be unbounded (e.g. an accumulated yaw of 1000 degrees).
#[inline]
pub fn delta_angle(current: f32, target: f32) -> f32 {
    let mut delta = (target - current).rem_euclid(360.0);
    if delta > 180.0 {
        delta -= 360.0;
    }
    delta
}

/// Unsigned angle between two vectors in degrees, in [0, 180].
///
/// Returns 0 when either vector is (close to) zero-length instead of NaN.
pub fn angle_between(from: Vec3, to: Vec3) -> f32 {
    let denominator = (from.length_squared() * to.length_squared()).sqrt();
    if denominator < 1.0e-15 {
        return 0.0;
    }
    let dot = (from.dot(to) / denominator).clamp(-1.0, 1.0);
    dot.acos().to_degrees()
}

/// Signed angle from `from` to `to` about `axis`, in degrees.
///
/// The magnitude is the unsigned angle between the vectors; the sign follows
/// the handedness of `from x to` relative to `axis` (zero counts as positive).
pub fn signed_angle(from: Vec3, to: Vec3, axis: Vec3) -> f32 {
    let unsigned = angle_between(from, to);
    let handedness = axis.dot(from.cross(to));
    if handedness < 0.0 { -unsigned } else { unsigned }
}

/// Heading of a vector on the XZ plane in degrees (`atan2(x, z)`).
#[inline]
pub fn heading_of(v: Vec3) -> f32 {
    v.x.atan2(v.z).to_degrees()
}

/// Horizontal forward direction for a yaw angle in degrees.
#[inline]
pub fn yaw_forward(yaw_deg: f32) -> Vec3 {
    let yaw = yaw_deg.to_radians();
    Vec3::new(yaw.sin(), 0.0, yaw.cos())
}

/// Horizontal right direction for a yaw angle in degrees.
#[inline]
pub fn yaw_right(yaw_deg: f32) -> Vec3 {
    let yaw = yaw_deg.to_radians();
    Vec3::new(yaw.cos(), 0.0, -yaw.sin())
}

/// Critically damped spring toward `target` ("smooth damp").
///
/// `velocity` is the spring's derivative state and must be kept by the caller
/// between calls. `smooth_time` is roughly the time to reach the target.
/// Never overshoots the target. A non-positive `dt` leaves `current` untouched.
pub fn smooth_damp(current: f32, target: f32, velocity: &mut f32, smooth_time: f32, dt: f32) -> f32 {
    if dt <= 0.0 {
        return current;
    }

    let smooth_time = smooth_time.max(1.0e-4);
    let omega = 2.0 / smooth_time;

    // Pade approximation of exp(-omega * dt)
    let x = omega * dt;
    let decay = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * decay;
    let mut output = target + (change + temp) * decay;

    if (target - current > 0.0) == (output > target) {
        output = target;
        *velocity = (output - target) / dt;
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_angle_wraps() {
        assert!((delta_angle(0.0, 90.0) - 90.0).abs() < 1e-4);
        assert!((delta_angle(350.0, 10.0) - 20.0).abs() < 1e-4);
        assert!((delta_angle(10.0, 350.0) - (-20.0)).abs() < 1e-4);
        assert!((delta_angle(720.0 + 45.0, 0.0) - (-45.0)).abs() < 1e-3);
    }

    #[test]
    fn test_delta_angle_half_turn_is_positive() {
        assert!((delta_angle(0.0, 180.0) - 180.0).abs() < 1e-4);
        assert!((delta_angle(0.0, -180.0) - 180.0).abs() < 1e-4);
    }

    #[test]
    fn test_angle_between() {
        assert!((angle_between(Vec3::Y, Vec3::X) - 90.0).abs() < 1e-4);
        assert!(angle_between(Vec3::Y, Vec3::Y).abs() < 1e-2);
        assert!((angle_between(Vec3::Y, Vec3::NEG_Y) - 180.0).abs() < 1e-2);
        assert_eq!(angle_between(Vec3::ZERO, Vec3::X), 0.0);
    }

    #[test]
    fn test_signed_angle_about_up() {
        // +X is a quarter turn clockwise from +Z when seen from above
        assert!((signed_angle(WORLD_FORWARD, Vec3::X, WORLD_UP) - 90.0).abs() < 1e-4);
        assert!((signed_angle(WORLD_FORWARD, Vec3::NEG_X, WORLD_UP) - (-90.0)).abs() < 1e-4);
    }

    #[test]
    fn test_yaw_directions() {
        let f = yaw_forward(0.0);
        assert!((f - Vec3::Z).length() < 1e-5);
        let r = yaw_right(0.0);
        assert!((r - Vec3::X).length() < 1e-5);

        let f90 = yaw_forward(90.0);
        assert!((f90 - Vec3::X).length() < 1e-5);
        let r90 = yaw_right(90.0);
        assert!((r90 - Vec3::NEG_Z).length() < 1e-5);
    }

    #[test]
    fn test_heading_matches_yaw_forward() {
        for yaw in [-135.0_f32, -30.0, 0.0, 45.0, 170.0] {
            let heading = heading_of(yaw_forward(yaw));
            assert!(delta_angle(yaw, heading).abs() < 1e-3, "yaw {yaw} heading {heading}");
        }
    }

    #[test]
    fn test_smooth_damp_converges_without_overshoot() {
        let mut value = 0.0;
        let mut velocity = 0.0;
        let mut previous = value;
        for _ in 0..240 {
            value = smooth_damp(value, 15.0, &mut velocity, 0.2, 1.0 / 60.0);
            assert!(value <= 15.0 + 1e-4);
            assert!(value >= previous - 1e-6);
            previous = value;
        }
        assert!((value - 15.0).abs() < 0.01);
    }

    #[test]
    fn test_smooth_damp_zero_dt_is_noop() {
        let mut velocity = 3.0;
        let value = smooth_damp(4.0, 10.0, &mut velocity, 0.2, 0.0);
        assert_eq!(value, 4.0);
        assert_eq!(velocity, 3.0);
    }
}
