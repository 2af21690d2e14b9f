//! First-person look controller
//!
//! Turns raw look deltas into an unbounded yaw and a clamped pitch, and blends
//! in the camera roll produced while wall-running.
//!
//! Key features:
//! - Look deltas are scaled by sensitivity and the *fixed* physics step
//! - Pitch clamped to ±90 degrees, yaw never wraps
//! - Wall-run tilt smoothed with a critically damped spring (0.2 s)
//! - Only the camera rolls; the body gets yaw alone
//!
//! Angles are degrees throughout. The produced [`ViewPose`] builds quaternions
//! in YXZ order (yaw, then pitch, then roll), so positive pitch looks down and
//! yaw 0 looks along +Z.

use glam::{EulerRot, Quat, Vec3};

use crate::math::{smooth_damp, yaw_forward, yaw_right};

/// Lower pitch limit in degrees.
pub const PITCH_LIMIT_MIN: f32 = -90.0;
/// Upper pitch limit in degrees.
pub const PITCH_LIMIT_MAX: f32 = 90.0;
/// Time the tilt spring takes to roughly reach its target, in seconds.
pub const TILT_SMOOTH_TIME_S: f32 = 0.2;

/// Camera and body orientation for one frame.
///
/// ## Usage
/// ```rust,ignore
/// let pose = controller.update(&mut body, &input, tick);
/// camera_transform.rotation = pose.camera_rotation();
/// pivot_transform.rotation = pose.body_rotation();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewPose {
    /// Degrees, positive looks down
    pub pitch: f32,
    /// Degrees, unbounded
    pub yaw: f32,
    /// Degrees of camera roll (wall-run tilt)
    pub roll: f32,
}

impl ViewPose {
    /// Full camera rotation: yaw, pitch and roll.
    pub fn camera_rotation(&self) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            self.yaw.to_radians(),
            self.pitch.to_radians(),
            self.roll.to_radians(),
        )
    }

    /// Body rotation: yaw only.
    pub fn body_rotation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw.to_radians())
    }

    /// Horizontal forward direction of the body.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        yaw_forward(self.yaw)
    }

    /// Horizontal right direction of the body.
    #[inline]
    pub fn right(&self) -> Vec3 {
        yaw_right(self.yaw)
    }

    /// Direction the camera looks, including pitch.
    pub fn camera_forward(&self) -> Vec3 {
        self.camera_rotation() * Vec3::Z
    }
}

/// Yaw/pitch accumulator with smoothed wall-run tilt.
///
/// ## Usage
/// ```rust,ignore
/// let mut look = LookController::new();
///
/// // Once per variable tick
/// look.apply_look_delta(dx, dy, config.look_sensitivity, config.fixed_timestep);
/// look.blend_tilt(target_tilt, frame_dt);
/// let pose = look.pose();
/// ```
#[derive(Clone, Debug, Default)]
pub struct LookController {
    yaw: f32,
    pitch: f32,
    tilt: f32,
    tilt_velocity: f32,
}

impl LookController {
    /// Create a look controller facing +Z with a level horizon.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start facing the given direction (degrees, pitch clamped).
    pub fn with_orientation(yaw: f32, pitch: f32) -> Self {
        Self {
            yaw,
            pitch: pitch.clamp(PITCH_LIMIT_MIN, PITCH_LIMIT_MAX),
            ..Default::default()
        }
    }

    /// Current yaw in degrees.
    #[inline]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Current pitch in degrees, positive looks down.
    #[inline]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Current (smoothed) camera roll in degrees.
    #[inline]
    pub fn tilt(&self) -> f32 {
        self.tilt
    }

    /// Derivative state of the tilt spring.
    #[inline]
    pub fn tilt_velocity(&self) -> f32 {
        self.tilt_velocity
    }

    /// Apply one tick of raw look input.
    ///
    /// # Arguments
    /// * `dx` - Horizontal look delta. Positive turns right (increases yaw)
    /// * `dy` - Vertical look delta. Positive looks up (decreases pitch)
    /// * `sensitivity` - Degrees per unit of delta per second
    /// * `fixed_dt` - The fixed physics step, not the frame delta
    pub fn apply_look_delta(&mut self, dx: f32, dy: f32, sensitivity: f32, fixed_dt: f32) {
        let scale = sensitivity * fixed_dt;
        self.yaw += dx * scale;
        self.pitch = (self.pitch - dy * scale).clamp(PITCH_LIMIT_MIN, PITCH_LIMIT_MAX);
    }

    /// Move the tilt toward `target` over [`TILT_SMOOTH_TIME_S`].
    pub fn blend_tilt(&mut self, target: f32, dt: f32) {
        self.tilt = smooth_damp(self.tilt, target, &mut self.tilt_velocity, TILT_SMOOTH_TIME_S, dt);
    }

    /// Compose the current orientation with the current tilt as roll.
    pub fn pose(&self) -> ViewPose {
        ViewPose {
            pitch: self.pitch,
            yaw: self.yaw,
            roll: self.tilt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let look = LookController::new();
        assert_eq!(look.yaw(), 0.0);
        assert_eq!(look.pitch(), 0.0);
        assert_eq!(look.tilt(), 0.0);
        assert_eq!(look.tilt_velocity(), 0.0);
    }

    #[test]
    fn test_apply_look_delta_uses_fixed_step() {
        let mut look = LookController::new();
        look.apply_look_delta(10.0, 0.0, 75.0, 0.02);

        // 10 * 75 * 0.02 = 15 degrees
        assert!((look.yaw() - 15.0).abs() < 1e-4);
        assert_eq!(look.pitch(), 0.0);
    }

    #[test]
    fn test_positive_dy_looks_up() {
        let mut look = LookController::new();
        look.apply_look_delta(0.0, 2.0, 75.0, 0.02);
        assert!((look.pitch() - (-3.0)).abs() < 1e-4);
    }

    #[test]
    fn test_pitch_clamping() {
        let mut look = LookController::new();
        look.apply_look_delta(0.0, -1.0e9, 75.0, 0.02);
        assert_eq!(look.pitch(), PITCH_LIMIT_MAX);

        look.apply_look_delta(0.0, 1.0e9, 75.0, 0.02);
        assert_eq!(look.pitch(), PITCH_LIMIT_MIN);

        let look = LookController::with_orientation(0.0, 400.0);
        assert_eq!(look.pitch(), PITCH_LIMIT_MAX);
    }

    #[test]
    fn test_yaw_is_unbounded() {
        let mut look = LookController::new();
        for _ in 0..10 {
            look.apply_look_delta(100.0, 0.0, 75.0, 0.02);
        }
        assert!((look.yaw() - 1500.0).abs() < 1e-2);
    }

    #[test]
    fn test_tilt_blends_toward_target() {
        let mut look = LookController::new();
        look.blend_tilt(15.0, 0.02);
        let first = look.tilt();
        assert!(first > 0.0 && first < 15.0);

        for _ in 0..200 {
            look.blend_tilt(15.0, 0.02);
        }
        assert!((look.tilt() - 15.0).abs() < 0.01);

        for _ in 0..200 {
            look.blend_tilt(0.0, 0.02);
        }
        assert!(look.tilt().abs() < 0.01);
    }

    #[test]
    fn test_pose_body_rotation_is_yaw_only() {
        let mut look = LookController::with_orientation(90.0, 30.0);
        for _ in 0..100 {
            look.blend_tilt(10.0, 0.05);
        }
        let pose = look.pose();

        let body_forward = pose.body_rotation() * Vec3::Z;
        assert!((body_forward - Vec3::X).length() < 1e-4);
        assert!((pose.forward() - Vec3::X).length() < 1e-4);
        assert!((pose.right() - Vec3::NEG_Z).length() < 1e-4);

        // Camera pitched down, body not
        assert!(pose.camera_forward().y < -0.4);
        assert!(body_forward.y.abs() < 1e-5);
    }

    #[test]
    fn test_camera_rotation_roundtrip_euler() {
        let pose = ViewPose { pitch: -20.0, yaw: 45.0, roll: 12.0 };
        let (yaw, pitch, roll) = pose.camera_rotation().to_euler(EulerRot::YXZ);
        assert!((yaw.to_degrees() - 45.0).abs() < 1e-3);
        assert!((pitch.to_degrees() - (-20.0)).abs() < 1e-3);
        assert!((roll.to_degrees() - 12.0).abs() < 1e-3);
    }
}
