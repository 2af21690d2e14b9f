//! Contact classification
//!
//! The host physics engine reports contacts as [`ContactSample`]s: a surface
//! normal pointing from the touched surface toward the body, plus the physics
//! layer of the touched collider. [`is_floor`] and [`is_wall`] are independent
//! predicates: with a 90 degree slope limit a near-vertical normal is both.
//!
//! # Example
//!
//! ```ignore
//! use wallrun_engine::physics::collision::{is_floor, is_wall};
//! use glam::Vec3;
//!
//! assert!(is_floor(Vec3::Y, 35.0));
//! assert!(is_wall(Vec3::X));
//! ```

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::math::{WORLD_UP, angle_between};

/// How far from exactly vertical (in degrees) a surface may lean and still be a wall.
pub const WALL_ANGLE_TOLERANCE_DEG: f32 = 0.1;

/// Number of physics layers addressable by a [`LayerMask`].
pub const LAYER_COUNT: u8 = 32;

/// Bit set of physics layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerMask(pub u32);

impl LayerMask {
    /// Mask matching nothing.
    pub const NONE: LayerMask = LayerMask(0);

    /// Mask matching every layer.
    pub const ALL: LayerMask = LayerMask(u32::MAX);

    /// Mask containing a single layer. Layers outside `0..32` yield [`LayerMask::NONE`].
    pub fn from_layer(layer: u8) -> Self {
        if layer < LAYER_COUNT {
            LayerMask(1 << layer)
        } else {
            LayerMask::NONE
        }
    }

    /// Mask with `layer` added.
    pub fn with_layer(self, layer: u8) -> Self {
        LayerMask(self.0 | LayerMask::from_layer(layer).0)
    }

    /// True if `layer` is in the mask. Out-of-range layers are never contained.
    pub fn contains(self, layer: u8) -> bool {
        layer < LAYER_COUNT && self.0 & (1 << layer) != 0
    }
}

/// One contact reported by the physics engine. Transient, not retained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactSample {
    /// Unit surface normal pointing away from the surface toward the body
    pub normal: Vec3,
    /// Physics layer of the touched collider
    pub layer: u8,
}

impl ContactSample {
    /// Create a contact sample.
    pub fn new(normal: Vec3, layer: u8) -> Self {
        Self { normal, layer }
    }
}

/// True if the normal is within `max_slope_deg` of straight up.
#[inline]
pub fn is_floor(normal: Vec3, max_slope_deg: f32) -> bool {
    angle_between(WORLD_UP, normal) < max_slope_deg
}

/// True if the normal is perpendicular to up within [`WALL_ANGLE_TOLERANCE_DEG`].
#[inline]
pub fn is_wall(normal: Vec3) -> bool {
    (90.0 - angle_between(WORLD_UP, normal)).abs() < WALL_ANGLE_TOLERANCE_DEG
}
