//! Movement State Machine
//!
//! [`PlayerController`] owns every piece of movement state and sequences the
//! force model, the wall-run controller and the look controller across the
//! three update cadences plus contact callbacks.
//!
//! # Entry points
//!
//! | Call | Cadence | Work |
//! |------|---------|------|
//! | [`update`](PlayerController::update) | every frame | sample input, look, tilt, cancel trigger |
//! | [`fixed_update`](PlayerController::fixed_update) | every physics step | bias, counter-movement, cap, jump, drive |
//! | [`late_update`](PlayerController::late_update) | every frame, after `update` | wall-run sustain |
//! | [`on_contacts`](PlayerController::on_contacts) | every physics step with contacts | floor/wall tracking |
//!
//! Every entry point first fires due deadlines (jump cooldown, contact
//! debounces, wall-run cancel and refractory) against `tick.now`.
//!
//! # Usage
//!
//! ```rust,ignore
//! let mut controller = PlayerController::new(MovementConfig::default());
//!
//! // Per frame
//! let pose = controller.update(&mut body, &input, Tick::new(now, frame_dt));
//! for _ in 0..fixed_steps {
//!     controller.on_contacts(&mut body, &contacts, Tick::new(now, fixed_dt));
//!     controller.fixed_update(&mut body, Tick::new(now, fixed_dt));
//!     physics.step(fixed_dt);
//! }
//! controller.late_update(&mut body, Tick::new(now, frame_dt));
//! ```

use glam::Vec3;

use crate::camera::{LookController, ViewPose};
use crate::input::FrameInput;
use crate::math::WORLD_UP;
use crate::physics::collision::{ContactSample, is_floor, is_wall};
use crate::physics::{ForceMode, RigidBody};

use super::config::MovementConfig;
use super::crouch::CrouchController;
use super::movement_controller::{
    DriveMultipliers, RelativeVelocity, apply_counter_movement, apply_down_bias, apply_drive,
    cap_horizontal_speed, jump_vertical_velocity, saturation_guard,
};
use super::state::{GroundContact, JumpState, MovementState, Stance, WallRunPhase};
use super::timer::{DebounceTimer, Tick};
use super::wall_run::WallRunController;

/// Upward jump force as a multiple of `jump_force`
pub const JUMP_UP_SCALE: f32 = 1.5;

/// Jump force along the last floor normal as a multiple of `jump_force`
pub const JUMP_NORMAL_SCALE: f32 = 0.5;

/// Jump force away from the wall as a multiple of `jump_force`
pub const WALL_JUMP_SCALE: f32 = 3.0;

/// Extra downward force (times dt) while jump is held crouched on the ground
pub const CROUCH_JUMP_DOWN_FORCE: f32 = 3000.0;

/// Contact debounce delay in physics steps
pub const CONTACT_DEBOUNCE_STEPS: f32 = 3.0;

/// First-person movement controller driving one external rigid body.
#[derive(Debug, Clone)]
pub struct PlayerController {
    config: MovementConfig,
    look: LookController,
    wall_run: WallRunController,
    crouch: CrouchController,
    ground: GroundContact,
    jump: JumpState,
    jump_held: bool,
    input: FrameInput,
    ground_normal: Vec3,
    ground_debounce: DebounceTimer,
    wall_debounce: DebounceTimer,
}

impl PlayerController {
    /// Create an airborne, standing controller facing +Z.
    pub fn new(config: MovementConfig) -> Self {
        Self {
            config,
            look: LookController::new(),
            wall_run: WallRunController::new(),
            crouch: CrouchController::new(),
            ground: GroundContact::Airborne,
            jump: JumpState::Ready,
            jump_held: false,
            input: FrameInput::default(),
            ground_normal: Vec3::ZERO,
            ground_debounce: DebounceTimer::new(),
            wall_debounce: DebounceTimer::new(),
        }
    }

    /// Start facing the given yaw/pitch in degrees.
    pub fn with_orientation(mut self, yaw: f32, pitch: f32) -> Self {
        self.look = LookController::with_orientation(yaw, pitch);
        self
    }

    /// Tuning in use.
    pub fn config(&self) -> &MovementConfig {
        &self.config
    }

    /// Flat view of every movement flag.
    pub fn state(&self) -> MovementState {
        MovementState::from_parts(
            self.ground,
            self.jump,
            self.wall_run.phase(),
            self.crouch.stance(),
            self.jump_held,
        )
    }

    /// Floor contact state.
    pub fn ground_contact(&self) -> GroundContact {
        self.ground
    }

    /// Jump readiness.
    pub fn jump_state(&self) -> JumpState {
        self.jump
    }

    /// Wall-run phase, including cancel and refractory timing.
    pub fn wall_run_phase(&self) -> WallRunPhase {
        self.wall_run.phase()
    }

    /// Crouch stance.
    pub fn stance(&self) -> Stance {
        self.crouch.stance()
    }

    /// True while touching walkable floor.
    pub fn is_grounded(&self) -> bool {
        self.ground == GroundContact::Grounded
    }

    /// True while running on a wall, including a pending cancel.
    pub fn is_wall_running(&self) -> bool {
        self.wall_run.is_wall_running()
    }

    /// Last floor normal seen (zero before the first floor contact).
    pub fn ground_normal(&self) -> Vec3 {
        self.ground_normal
    }

    /// Vertical collider scale the host should apply.
    pub fn height_scale(&self) -> f32 {
        self.crouch.height_scale()
    }

    /// Look angles and camera tilt.
    pub fn look(&self) -> &LookController {
        &self.look
    }

    /// Current camera and body orientation.
    pub fn pose(&self) -> ViewPose {
        self.look.pose()
    }

    /// Movement axes sampled by the last [`update`](Self::update).
    pub fn input(&self) -> FrameInput {
        self.input
    }

    /// Jump input level.
    pub fn set_jump_held(&mut self, held: bool) {
        self.jump_held = held;
    }

    /// Crouch input level. Presses and releases move the body immediately.
    pub fn set_crouch_held<B: RigidBody + ?Sized>(&mut self, body: &mut B, held: bool, tick: Tick) {
        self.poll_timers(body, tick.now);
        let grounded = self.is_grounded();
        self.crouch.set_held(body, held, grounded, self.look.yaw());
    }

    /// Variable tick: sample input, turn, evaluate the wall-run cancel and
    /// move the tilt toward its target. Writes the yaw-only rotation to the
    /// body and returns the full pose for the camera.
    pub fn update<B: RigidBody + ?Sized>(&mut self, body: &mut B, input: &FrameInput, tick: Tick) -> ViewPose {
        self.poll_timers(body, tick.now);
        self.input = *input;

        self.look.apply_look_delta(
            input.look_dx,
            input.look_dy,
            self.config.look_sensitivity,
            self.config.fixed_timestep,
        );

        let target_tilt = self.wall_run.target_tilt(self.look.yaw());
        self.wall_run.update_cancel(tick.now, target_tilt, input.forward, input.strafe);
        self.look.blend_tilt(target_tilt, tick.dt);

        let pose = self.look.pose();
        body.set_rotation(pose.body_rotation());
        pose
    }

    /// Fixed tick: the force model.
    pub fn fixed_update<B: RigidBody + ?Sized>(&mut self, body: &mut B, tick: Tick) {
        self.poll_timers(body, tick.now);
        let dt = tick.dt;
        let yaw = self.look.yaw();
        let move_force = self.config.move_force;
        let walk_speed = self.config.walk_speed;

        apply_down_bias(body, dt);

        let relative = RelativeVelocity::measure(body.velocity(), yaw);

        let mut counter = Vec3::ZERO;
        if self.is_grounded() && !self.jump_held {
            counter = apply_counter_movement(body, relative, self.input.forward, self.input.strafe, yaw, move_force, dt);
            cap_horizontal_speed(body, walk_speed);
        }

        if self.jump == JumpState::Ready && self.jump_held {
            self.try_jump(body, tick.now);
            if self.crouch.is_crouching() && self.is_grounded() {
                body.add_force(-WORLD_UP * (dt * CROUCH_JUMP_DOWN_FORCE), ForceMode::Force);
                return;
            }
        }

        let (forward, strafe) = saturation_guard(self.input.forward, self.input.strafe, relative, walk_speed);
        let multipliers = DriveMultipliers::for_state(
            self.is_grounded(),
            self.crouch.is_crouching(),
            self.wall_run.is_wall_running(),
        );
        let drive = apply_drive(body, forward, strafe, yaw, move_force, dt, multipliers);

        log::trace!(
            "fixed tick: rel=({:.2}, {:.2}) counter={counter:?} drive={drive:?}",
            relative.forward,
            relative.lateral
        );
    }

    /// Late variable tick: wall-run sustain at frame cadence.
    pub fn late_update<B: RigidBody + ?Sized>(&mut self, body: &mut B, tick: Tick) {
        self.poll_timers(body, tick.now);
        self.wall_run.sustain(body, self.config.move_force, self.config.wall_run_gravity, tick.dt);
    }

    /// Contact callback for one physics step. `tick.dt` is that step's duration.
    pub fn on_contacts<B: RigidBody + ?Sized>(&mut self, body: &mut B, contacts: &[ContactSample], tick: Tick) {
        self.poll_timers(body, tick.now);

        let mut any_accepted = false;
        for contact in contacts {
            if !self.config.ground_layers.contains(contact.layer) {
                continue;
            }
            any_accepted = true;
            let normal = contact.normal;

            if is_floor(normal, self.config.max_slope_angle) {
                if self.wall_run.stop() {
                    log::debug!("Landed, wall run ended");
                }
                if self.ground == GroundContact::Airborne {
                    log::debug!("Grounded, normal {normal:?}");
                }
                self.ground = GroundContact::Grounded;
                self.ground_normal = normal;
                self.ground_debounce.cancel();
            }

            if is_wall(normal) && contact.layer == self.config.ground_layer {
                let airborne = self.ground == GroundContact::Airborne;
                self.wall_run.try_start(body, normal, airborne);
                self.wall_debounce.cancel();
            }
        }

        if any_accepted {
            let delay = CONTACT_DEBOUNCE_STEPS * tick.dt;
            self.ground_debounce.touch(tick.now, delay);
            self.wall_debounce.touch(tick.now, delay);
        }
    }

    fn try_jump<B: RigidBody + ?Sized>(&mut self, body: &mut B, now: f64) -> bool {
        if !(self.is_grounded() || self.wall_run.is_wall_running()) {
            return false;
        }

        let jump_force = self.config.jump_force;
        self.jump = JumpState::Cooldown {
            ready_at: now + f64::from(self.config.jump_cooldown),
        };

        body.add_force(WORLD_UP * (jump_force * JUMP_UP_SCALE), ForceMode::Force);
        body.add_force(self.ground_normal * (jump_force * JUMP_NORMAL_SCALE), ForceMode::Force);

        let velocity = body.velocity();
        body.set_velocity(Vec3::new(velocity.x, jump_vertical_velocity(velocity.y), velocity.z));

        if let Some(wall_normal) = self.wall_run.wall_normal() {
            body.add_force(wall_normal * (jump_force * WALL_JUMP_SCALE), ForceMode::Force);
            self.wall_run.stop();
            log::debug!("Wall jump off {wall_normal:?}");
        } else {
            log::debug!("Jump");
        }
        true
    }

    fn poll_timers<B: RigidBody + ?Sized>(&mut self, body: &mut B, now: f64) {
        if let JumpState::Cooldown { ready_at } = self.jump {
            if now >= ready_at {
                self.jump = JumpState::Ready;
            }
        }

        if self.ground_debounce.poll(now) && self.ground == GroundContact::Grounded {
            self.ground = GroundContact::Airborne;
            log::debug!("Left ground");
        }

        if self.wall_debounce.poll(now) && self.wall_run.stop() {
            log::debug!("Lost wall contact");
        }

        self.wall_run.poll(body, now);
    }
}
