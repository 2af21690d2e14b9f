//! Physics boundary for the movement controller
//!
//! The controller is not a physics engine. It drives one externally supplied
//! rigid body and reacts to the contacts that body reports.
//!
//! # Unit System
//!
//! **1 unit = 1 meter** (SI units throughout)
//!
//! - Distances in meters
//! - Velocities in m/s
//! - Forces in N, impulses in N·s
//! - Mass in kg
//!
//! # Submodules
//!
//! - [`types`] - Vec3/Quat re-exported from glam, plus [`ForceMode`]
//! - [`body`] - The [`RigidBody`] trait and the [`PointMassBody`] test body
//! - [`collision`] - Contact samples, layer masks and floor/wall classification

pub mod body;
pub mod collision;
pub mod types;

pub use body::{AppliedForce, PointMassBody, RigidBody};
pub use collision::{ContactSample, LayerMask, is_floor, is_wall};
pub use types::{ForceMode, Quat, Vec3};
