//! Rigid body boundary
//!
//! The movement controller never owns or integrates a body. It borrows one
//! through [`RigidBody`] for the duration of each tick, reads its velocity and
//! mass, and pushes forces into it. Whatever physics engine the host uses
//! implements this trait.
//!
//! [`PointMassBody`] is a deliberately tiny implementation (semi-implicit Euler
//! point mass with gravity) used by the headless simulator and the tests. With
//! [`PointMassBody::with_force_log`] it records every force handed to it so
//! behavior can be asserted exactly.

use super::types::{ForceMode, Quat, Vec3};

/// Standard gravity used by [`PointMassBody::new`].
pub const DEFAULT_GRAVITY: Vec3 = Vec3::new(0.0, -9.81, 0.0);

/// A physics body driven by the controller.
///
/// Forces added with [`ForceMode::Force`] are accumulated and integrated over
/// the next physics step. Velocity reads return the state as of the last step:
/// forces added during a tick are not visible through [`velocity`](Self::velocity)
/// until the engine steps.
pub trait RigidBody {
    /// Current linear velocity in world space.
    fn velocity(&self) -> Vec3;

    /// Overwrite the linear velocity.
    fn set_velocity(&mut self, velocity: Vec3);

    /// Current position in world space.
    fn position(&self) -> Vec3;

    /// Teleport the body.
    fn set_position(&mut self, position: Vec3);

    /// Body mass in kilograms.
    fn mass(&self) -> f32;

    /// Current orientation.
    fn rotation(&self) -> Quat;

    /// Overwrite the orientation.
    fn set_rotation(&mut self, rotation: Quat);

    /// Queue a force or impulse for the next physics step.
    fn add_force(&mut self, force: Vec3, mode: ForceMode);
}

/// One entry of a [`PointMassBody`]'s force log.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppliedForce {
    pub vector: Vec3,
    pub mode: ForceMode,
}

/// Minimal point-mass rigid body for tests and headless simulation.
#[derive(Debug, Clone)]
pub struct PointMassBody {
    position: Vec3,
    velocity: Vec3,
    rotation: Quat,
    mass: f32,
    gravity: Vec3,
    pending_force: Vec3,
    pending_impulse: Vec3,
    log_forces: bool,
    applied: Vec<AppliedForce>,
}

impl PointMassBody {
    /// Create a resting body at `position`. Non-positive masses are clamped
    /// to a tiny positive value so integration stays finite.
    pub fn new(position: Vec3, mass: f32) -> Self {
        Self {
            position,
            velocity: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            mass: mass.max(f32::EPSILON),
            gravity: DEFAULT_GRAVITY,
            pending_force: Vec3::ZERO,
            pending_impulse: Vec3::ZERO,
            log_forces: false,
            applied: Vec::new(),
        }
    }

    /// Replace the gravity vector (use `Vec3::ZERO` for force-only tests).
    pub fn with_gravity(mut self, gravity: Vec3) -> Self {
        self.gravity = gravity;
        self
    }

    /// Start with the given velocity.
    pub fn with_velocity(mut self, velocity: Vec3) -> Self {
        self.velocity = velocity;
        self
    }

    /// Record every force and impulse in [`applied`](Self::applied).
    /// Off by default; the log grows until [`clear_applied`](Self::clear_applied).
    pub fn with_force_log(mut self) -> Self {
        self.log_forces = true;
        self
    }

    /// Whether forces are being recorded.
    pub fn is_logging_forces(&self) -> bool {
        self.log_forces
    }

    /// Gravity applied on every step.
    pub fn gravity(&self) -> Vec3 {
        self.gravity
    }

    /// Integrate one physics step: gravity, queued forces and impulses, then
    /// position. Queued forces are consumed; the force log is kept.
    pub fn step(&mut self, dt: f32) {
        let inv_mass = 1.0 / self.mass;
        self.velocity += self.gravity * dt
            + self.pending_force * (dt * inv_mass)
            + self.pending_impulse * inv_mass;
        self.position += self.velocity * dt;
        self.pending_force = Vec3::ZERO;
        self.pending_impulse = Vec3::ZERO;
    }

    /// Every force handed to this body since the last [`clear_applied`](Self::clear_applied).
    pub fn applied(&self) -> &[AppliedForce] {
        &self.applied
    }

    /// Forget the force log.
    pub fn clear_applied(&mut self) {
        self.applied.clear();
    }

    /// Sum of logged vectors with the given mode.
    pub fn total_applied(&self, mode: ForceMode) -> Vec3 {
        self.applied
            .iter()
            .filter(|f| f.mode == mode)
            .fold(Vec3::ZERO, |acc, f| acc + f.vector)
    }

    /// Number of logged entries with the given mode.
    pub fn count_applied(&self, mode: ForceMode) -> usize {
        self.applied.iter().filter(|f| f.mode == mode).count()
    }

    /// Force queued for the next step (not yet integrated).
    pub fn pending_force(&self) -> Vec3 {
        self.pending_force
    }

    /// Impulse queued for the next step (not yet integrated).
    pub fn pending_impulse(&self) -> Vec3 {
        self.pending_impulse
    }
}

impl RigidBody for PointMassBody {
    fn velocity(&self) -> Vec3 {
        self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    fn position(&self) -> Vec3 {
        self.position
    }

    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    fn mass(&self) -> f32 {
        self.mass
    }

    fn rotation(&self) -> Quat {
        self.rotation
    }

    fn set_rotation(&mut self, rotation: Quat) {
        self.rotation = rotation;
    }

    fn add_force(&mut self, force: Vec3, mode: ForceMode) {
        match mode {
            ForceMode::Force => self.pending_force += force,
            ForceMode::Impulse => self.pending_impulse += force,
        }
        if self.log_forces {
            self.applied.push(AppliedForce { vector: force, mode });
        }
    }
}
