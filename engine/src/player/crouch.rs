//! Player Crouch System
//!
//! Crouching is instant: pressing shifts the body down and squashes its
//! collider, releasing shifts it back up. A crouch started while moving on
//! the ground gets a forward kick (slide).
//!
//! # Usage
//!
//! ```rust,ignore
//! use wallrun_engine::player::CrouchController;
//!
//! let mut crouch = CrouchController::new();
//!
//! // On crouch input level change:
//! crouch.set_held(&mut body, held, grounded, yaw);
//! collider.height_scale = crouch.height_scale();
//! ```

use glam::Vec3;

use crate::math::yaw_forward;
use crate::physics::{ForceMode, RigidBody};

use super::state::Stance;

/// How far the body moves down on crouch and up on release (meters)
pub const CROUCH_POSITION_OFFSET: f32 = 0.5;

/// Vertical collider scale while crouching
pub const CROUCH_HEIGHT_SCALE: f32 = 0.5;

/// Vertical collider scale after standing back up
pub const STAND_HEIGHT_SCALE: f32 = 1.5;

/// Vertical collider scale before the first crouch
pub const INITIAL_HEIGHT_SCALE: f32 = 1.0;

/// One-shot forward force when crouching while moving on the ground
pub const CROUCH_SLIDE_FORCE: f32 = 400.0;

/// Minimum speed for the slide kick (m/s)
pub const CROUCH_SLIDE_MIN_SPEED: f32 = 0.1;

/// Tracks the stance and the collider height scale the host should apply.
#[derive(Debug, Clone)]
pub struct CrouchController {
    stance: Stance,
    height_scale: f32,
}

impl Default for CrouchController {
    fn default() -> Self {
        Self {
            stance: Stance::Standing,
            height_scale: INITIAL_HEIGHT_SCALE,
        }
    }
}

impl CrouchController {
    /// Create a standing controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current stance.
    pub fn stance(&self) -> Stance {
        self.stance
    }

    /// True while crouched.
    pub fn is_crouching(&self) -> bool {
        self.stance == Stance::Crouching
    }

    /// Vertical scale for the host's collider.
    pub fn height_scale(&self) -> f32 {
        self.height_scale
    }

    /// Apply the crouch input level. Only edges do anything: holding while
    /// already crouched (or releasing while standing) is a no-op.
    ///
    /// Returns `true` if the stance changed.
    pub fn set_held<B: RigidBody + ?Sized>(&mut self, body: &mut B, held: bool, grounded: bool, yaw: f32) -> bool {
        match (self.stance, held) {
            (Stance::Standing, true) => {
                self.start(body, grounded, yaw);
                true
            }
            (Stance::Crouching, false) => {
                self.stop(body);
                true
            }
            _ => false,
        }
    }

    fn start<B: RigidBody + ?Sized>(&mut self, body: &mut B, grounded: bool, yaw: f32) {
        self.stance = Stance::Crouching;
        self.height_scale = CROUCH_HEIGHT_SCALE;
        body.set_position(body.position() - Vec3::Y * CROUCH_POSITION_OFFSET);

        let slide = body.velocity().length() > CROUCH_SLIDE_MIN_SPEED && grounded;
        if slide {
            body.add_force(yaw_forward(yaw) * CROUCH_SLIDE_FORCE, ForceMode::Force);
        }
        log::debug!("Crouch start (slide: {slide})");
    }

    fn stop<B: RigidBody + ?Sized>(&mut self, body: &mut B) {
        self.stance = Stance::Standing;
        self.height_scale = STAND_HEIGHT_SCALE;
        body.set_position(body.position() + Vec3::Y * CROUCH_POSITION_OFFSET);
        log::debug!("Crouch stop");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::PointMassBody;

    #[test]
    fn test_default_standing() {
        let crouch = CrouchController::new();
        assert_eq!(crouch.stance(), Stance::Standing);
        assert!(!crouch.is_crouching());
        assert_eq!(crouch.height_scale(), INITIAL_HEIGHT_SCALE);
    }

    #[test]
    fn test_crouch_and_release_move_body() {
        let mut body = PointMassBody::new(Vec3::new(0.0, 2.0, 0.0), 1.0).with_force_log();
        let mut crouch = CrouchController::new();

        assert!(crouch.set_held(&mut body, true, true, 0.0));
        assert!(crouch.is_crouching());
        assert!((body.position().y - 1.5).abs() < 1e-6);
        assert_eq!(crouch.height_scale(), CROUCH_HEIGHT_SCALE);

        // Holding again is not a new press
        assert!(!crouch.set_held(&mut body, true, true, 0.0));
        assert!((body.position().y - 1.5).abs() < 1e-6);

        assert!(crouch.set_held(&mut body, false, true, 0.0));
        assert!((body.position().y - 2.0).abs() < 1e-6);
        assert_eq!(crouch.height_scale(), STAND_HEIGHT_SCALE);
    }

    #[test]
    fn test_slide_kick_when_moving_on_ground() {
        let mut body = PointMassBody::new(Vec3::ZERO, 1.0)
            .with_velocity(Vec3::new(0.0, 0.0, 5.0))
            .with_force_log();
        let mut crouch = CrouchController::new();
        crouch.set_held(&mut body, true, true, 90.0);

        assert_eq!(body.count_applied(ForceMode::Force), 1);
        let kick = body.total_applied(ForceMode::Force);
        assert!((kick - Vec3::new(400.0, 0.0, 0.0)).length() < 1e-3);
    }

    #[test]
    fn test_no_slide_when_still_or_airborne() {
        let mut still = PointMassBody::new(Vec3::ZERO, 1.0).with_force_log();
        CrouchController::new().set_held(&mut still, true, true, 0.0);
        assert!(still.applied().is_empty());

        let mut falling = PointMassBody::new(Vec3::ZERO, 1.0)
            .with_velocity(Vec3::new(0.0, 0.0, 5.0))
            .with_force_log();
        CrouchController::new().set_held(&mut falling, true, false, 0.0);
        assert!(falling.applied().is_empty());
    }
}
