//! Wall-Run Controller
//!
//! Owns the [`WallRunPhase`] and every force and angle that depends on it:
//! the start lift, the per-frame sustain, the camera tilt target, and the
//! delayed push-off when the player looks or backs away from the wall.
//!
//! # Timing
//!
//! - Cancel trigger must hold for [`CANCEL_DELAY_S`] before the push-off
//! - After the push-off no wall run can start for [`REFRACTORY_S`]
//!
//! Deadlines are absolute clock times checked by [`WallRunController::poll`].

use glam::Vec3;

use crate::math::{WORLD_FORWARD, WORLD_UP, delta_angle, signed_angle};
use crate::physics::{ForceMode, RigidBody};

use super::state::WallRunPhase;

/// Upward impulse granted once when a wall run starts
pub const WALL_RUN_START_IMPULSE: f32 = 20.0;

/// Upward sustain factor (multiplied by mass, gravity scale and dt)
pub const WALL_RUN_LIFT: f32 = 100.0;

/// Camera roll at 90 degrees between view and wall normal
pub const MAX_WALL_TILT_DEG: f32 = 15.0;

/// Target tilt below which looking away from the wall triggers a cancel
pub const CANCEL_FACING_AWAY_TILT_DEG: f32 = 4.0;

/// Target tilt above which backing off the wall triggers a cancel
pub const CANCEL_FACING_WALL_TILT_DEG: f32 = 22.0;

/// Strafe input must stay below this for a cancel
pub const CANCEL_STRAFE_DEAD_ZONE: f32 = 0.1;

/// Seconds the cancel trigger must hold
pub const CANCEL_DELAY_S: f64 = 0.2;

/// Push-off force along the wall normal when the cancel fires
pub const CANCEL_PUSH_FORCE: f32 = 600.0;

/// Seconds after a push-off during which no wall run can start
pub const REFRACTORY_S: f64 = 0.1;

/// Wall-run state plus the forces it drives.
#[derive(Debug, Clone, Default)]
pub struct WallRunController {
    phase: WallRunPhase,
}

impl WallRunController {
    /// Create an idle controller.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    pub fn phase(&self) -> WallRunPhase {
        self.phase
    }

    /// Running or Cancelling.
    pub fn is_wall_running(&self) -> bool {
        self.phase.is_running()
    }

    /// Outside the refractory window.
    pub fn is_ready(&self) -> bool {
        self.phase.is_ready()
    }

    /// True while a cancel is pending.
    pub fn is_cancelling(&self) -> bool {
        self.phase.is_cancelling()
    }

    /// Normal of the wall being run on, if any.
    pub fn wall_normal(&self) -> Option<Vec3> {
        self.phase.wall_normal()
    }

    /// Fire due deadlines: the cancel push-off and the end of the
    /// refractory window.
    pub fn poll<B: RigidBody + ?Sized>(&mut self, body: &mut B, now: f64) {
        if let WallRunPhase::Cancelling { wall_normal, fire_at } = self.phase {
            if now >= fire_at {
                body.add_force(wall_normal * CANCEL_PUSH_FORCE, ForceMode::Force);
                self.phase = WallRunPhase::Refractory {
                    until: now + REFRACTORY_S,
                };
                log::debug!("Wall run cancelled, pushing off {wall_normal:?}");
            }
        }

        if let WallRunPhase::Refractory { until } = self.phase {
            if now >= until {
                self.phase = WallRunPhase::Idle;
                log::debug!("Wall run ready");
            }
        }
    }

    /// Handle a wall contact. Starts a run when airborne and ready; while
    /// already running only the stored normal changes.
    ///
    /// Returns `true` if a new run started.
    pub fn try_start<B: RigidBody + ?Sized>(&mut self, body: &mut B, normal: Vec3, airborne: bool) -> bool {
        if !airborne || !self.phase.is_ready() {
            return false;
        }

        match &mut self.phase {
            WallRunPhase::Running { wall_normal } | WallRunPhase::Cancelling { wall_normal, .. } => {
                *wall_normal = normal;
                false
            }
            _ => {
                let velocity = body.velocity();
                body.set_velocity(Vec3::new(velocity.x, 0.0, velocity.z));
                body.add_force(WORLD_UP * WALL_RUN_START_IMPULSE, ForceMode::Impulse);
                self.phase = WallRunPhase::Running { wall_normal: normal };
                log::debug!("Wall run start, normal {normal:?}");
                true
            }
        }
    }

    /// Leave the wall immediately (landing, jumping, wall lost). Does not
    /// touch the refractory window.
    ///
    /// Returns `true` if a run was in progress.
    pub fn stop(&mut self) -> bool {
        if self.phase.is_running() {
            self.phase = WallRunPhase::Idle;
            true
        } else {
            false
        }
    }

    /// Camera roll the tilt spring should move toward for the given yaw.
    pub fn target_tilt(&self, yaw: f32) -> f32 {
        match self.phase.wall_normal() {
            Some(normal) => {
                let wall_heading = signed_angle(WORLD_FORWARD, normal, WORLD_UP);
                -(delta_angle(yaw, wall_heading) / 90.0) * MAX_WALL_TILT_DEG
            }
            None => 0.0,
        }
    }

    /// Whether the given tilt and input ask to leave the wall.
    pub fn cancel_triggered(target_tilt: f32, forward_input: f32, strafe_input: f32) -> bool {
        let no_strafe = strafe_input.abs() < CANCEL_STRAFE_DEAD_ZONE;
        (target_tilt.abs() < CANCEL_FACING_AWAY_TILT_DEG && forward_input > 0.0 && no_strafe)
            || (target_tilt.abs() > CANCEL_FACING_WALL_TILT_DEG && forward_input < 0.0 && no_strafe)
    }

    /// Re-evaluate the cancel trigger (once per variable tick). Only acts
    /// while running.
    pub fn update_cancel(&mut self, now: f64, target_tilt: f32, forward_input: f32, strafe_input: f32) {
        let triggered = Self::cancel_triggered(target_tilt, forward_input, strafe_input);
        match self.phase {
            WallRunPhase::Running { wall_normal } if triggered => {
                self.phase = WallRunPhase::Cancelling {
                    wall_normal,
                    fire_at: now + CANCEL_DELAY_S,
                };
            }
            WallRunPhase::Cancelling { wall_normal, .. } if !triggered => {
                self.phase = WallRunPhase::Running { wall_normal };
            }
            _ => {}
        }
    }

    /// Hold the body against the wall and lift it. Runs once per frame.
    ///
    /// Returns the total force pushed (zero when not running).
    pub fn sustain<B: RigidBody + ?Sized>(&self, body: &mut B, move_force: f32, wall_run_gravity: f32, dt: f32) -> Vec3 {
        let Some(normal) = self.phase.wall_normal() else {
            return Vec3::ZERO;
        };
        let hold = -normal * (dt * move_force);
        let lift = WORLD_UP * (dt * body.mass() * WALL_RUN_LIFT * wall_run_gravity);
        body.add_force(hold, ForceMode::Force);
        body.add_force(lift, ForceMode::Force);
        hold + lift
    }
}
