//! Movement Force Model
//!
//! Converts movement axes and the body's current velocity into forces. Nothing
//! here integrates velocity: every function either pushes forces into a
//! [`RigidBody`] or returns the numbers the state machine needs to decide
//! which forces to push.
//!
//! # Force Model (per fixed tick)
//!
//! - Constant downward bias of 10 N·dt
//! - Counter-movement: `moveForce·dt·(−component)·0.16` per look-relative axis
//!   whose velocity the input is not asking for
//! - Grounded horizontal speed cap at `walkSpeed`
//! - Drive: `axis·moveForce·dt` scaled by [`DriveMultipliers`]
//!
//! All forces are continuous-mode ([`ForceMode::Force`]).
//!
//! # Usage
//!
//! ```rust,ignore
//! use wallrun_engine::player::movement_controller::*;
//!
//! let relative = RelativeVelocity::measure(body.velocity(), yaw);
//! apply_counter_movement(&mut body, relative, forward, strafe, yaw, move_force, dt);
//! cap_horizontal_speed(&mut body, walk_speed);
//! let (forward, strafe) = saturation_guard(forward, strafe, relative, walk_speed);
//! apply_drive(&mut body, forward, strafe, yaw, move_force, dt, DriveMultipliers::for_state(true, false, false));
//! ```

use glam::Vec3;

use crate::math::{WORLD_UP, delta_angle, heading_of, yaw_forward, yaw_right};
use crate::physics::{ForceMode, RigidBody};

/// Downward bias applied every fixed tick (scaled by dt)
pub const DOWN_BIAS_FORCE: f32 = 10.0;

/// Fraction of the move force used to damp unwanted velocity
pub const COUNTER_MOVEMENT: f32 = 0.16;

/// Velocity components smaller than this are left alone
pub const COUNTER_MOVEMENT_THRESHOLD: f32 = 0.01;

/// Input magnitudes below this count as "no input"
pub const INPUT_DEAD_ZONE: f32 = 0.05;

/// Multiplier for both drive axes while airborne
pub const AIR_MULTIPLIER: f32 = 0.5;

/// Multiplier for both drive axes while wall-running
pub const WALL_RUN_MULTIPLIER: f32 = 0.3;

/// Velocity decomposed along the body's yaw axes.
///
/// Uses the full 3D speed projected by the horizontal heading, so vertical
/// velocity leaks into both components while falling.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RelativeVelocity {
    /// Along forward(yaw)
    pub forward: f32,
    /// Along right(yaw)
    pub lateral: f32,
}

impl RelativeVelocity {
    /// Project a world velocity onto the look basis for `yaw` degrees.
    pub fn measure(velocity: Vec3, yaw: f32) -> Self {
        let angle = delta_angle(yaw, heading_of(velocity));
        let magnitude = velocity.length();
        Self {
            forward: magnitude * angle.to_radians().cos(),
            lateral: magnitude * (90.0 - angle).to_radians().cos(),
        }
    }
}

/// Per-axis drive scaling for the current state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriveMultipliers {
    /// Applied to both axes
    pub speed: f32,
    /// Applied to the forward axis only
    pub forward: f32,
}

impl Default for DriveMultipliers {
    fn default() -> Self {
        Self {
            speed: 1.0,
            forward: 1.0,
        }
    }
}

impl DriveMultipliers {
    /// Airborne halves both axes, crouching on the ground removes forward
    /// drive, and wall-running overrides everything with 0.3.
    pub fn for_state(grounded: bool, crouching: bool, wall_running: bool) -> Self {
        let mut multipliers = Self::default();
        if !grounded {
            multipliers.speed = AIR_MULTIPLIER;
            multipliers.forward = AIR_MULTIPLIER;
        }
        if grounded && crouching {
            multipliers.forward = 0.0;
        }
        if wall_running {
            multipliers.speed = WALL_RUN_MULTIPLIER;
            multipliers.forward = WALL_RUN_MULTIPLIER;
        }
        multipliers
    }
}

/// Push the constant downward bias.
pub fn apply_down_bias<B: RigidBody + ?Sized>(body: &mut B, dt: f32) {
    body.add_force(-WORLD_UP * (DOWN_BIAS_FORCE * dt), ForceMode::Force);
}

/// Whether a velocity component should be damped given the input on its axis.
///
/// True when the component is non-negligible and the input is either idle
/// or pointing the other way.
pub fn should_counter(component: f32, input: f32) -> bool {
    component.abs() > COUNTER_MOVEMENT_THRESHOLD
        && (input.abs() < INPUT_DEAD_ZONE
            || (component < -COUNTER_MOVEMENT_THRESHOLD && input > 0.0)
            || (component > COUNTER_MOVEMENT_THRESHOLD && input < 0.0))
}

/// Apply counter-movement on both axes. Returns the total force pushed.
pub fn apply_counter_movement<B: RigidBody + ?Sized>(
    body: &mut B,
    relative: RelativeVelocity,
    forward_input: f32,
    strafe_input: f32,
    yaw: f32,
    move_force: f32,
    dt: f32,
) -> Vec3 {
    let mut total = Vec3::ZERO;

    if should_counter(relative.lateral, strafe_input) {
        let force = yaw_right(yaw) * (move_force * dt * -relative.lateral * COUNTER_MOVEMENT);
        body.add_force(force, ForceMode::Force);
        total += force;
    }

    if should_counter(relative.forward, forward_input) {
        let force = yaw_forward(yaw) * (move_force * dt * -relative.forward * COUNTER_MOVEMENT);
        body.add_force(force, ForceMode::Force);
        total += force;
    }

    total
}

/// Rescale horizontal velocity to exactly `cap` if it exceeds it. Vertical
/// velocity is untouched. Returns whether the cap engaged.
pub fn cap_horizontal_speed<B: RigidBody + ?Sized>(body: &mut B, cap: f32) -> bool {
    let velocity = body.velocity();
    let horizontal = Vec3::new(velocity.x, 0.0, velocity.z);
    if horizontal.length() <= cap {
        return false;
    }
    let capped = horizontal.normalize_or_zero() * cap;
    body.set_velocity(Vec3::new(capped.x, velocity.y, capped.z));
    true
}

/// Drop drive input on the first axis already past `walk_speed` in the
/// input's direction. Only one axis is ever zeroed per tick; strafe is
/// checked first.
pub fn saturation_guard(
    forward_input: f32,
    strafe_input: f32,
    relative: RelativeVelocity,
    walk_speed: f32,
) -> (f32, f32) {
    if strafe_input > 0.0 && relative.lateral > walk_speed {
        (forward_input, 0.0)
    } else if strafe_input < 0.0 && relative.lateral < -walk_speed {
        (forward_input, 0.0)
    } else if forward_input > 0.0 && relative.forward > walk_speed {
        (0.0, strafe_input)
    } else if forward_input < 0.0 && relative.forward < -walk_speed {
        (0.0, strafe_input)
    } else {
        (forward_input, strafe_input)
    }
}

/// Push the forward and lateral drive forces. Returns the total force pushed.
pub fn apply_drive<B: RigidBody + ?Sized>(
    body: &mut B,
    forward_input: f32,
    strafe_input: f32,
    yaw: f32,
    move_force: f32,
    dt: f32,
    multipliers: DriveMultipliers,
) -> Vec3 {
    let forward = yaw_forward(yaw) * (forward_input * move_force * dt * multipliers.speed * multipliers.forward);
    let lateral = yaw_right(yaw) * (strafe_input * move_force * dt * multipliers.speed);
    body.add_force(forward, ForceMode::Force);
    body.add_force(lateral, ForceMode::Force);
    forward + lateral
}

/// Vertical velocity after a jump: small or falling speeds are zeroed,
/// rising speeds halved.
pub fn jump_vertical_velocity(vy: f32) -> f32 {
    if vy < 0.5 { 0.0 } else { vy / 2.0 }
}
