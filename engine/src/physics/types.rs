//! Physics type re-exports from glam
//!
//! This module provides the core mathematical types used throughout
//! the physics layer, re-exported from the glam library, plus the force
//! application modes understood by every [`RigidBody`](super::RigidBody).

pub use glam::{EulerRot, Quat, Vec3};

/// How a force vector handed to a rigid body is integrated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ForceMode {
    /// Continuous force, accumulated and scaled by the physics step
    /// (`dv = F * dt / m`). Applying it once gives a one-step kick.
    Force,
    /// Instantaneous change in momentum (`dv = J / m`), applied once.
    Impulse,
}
