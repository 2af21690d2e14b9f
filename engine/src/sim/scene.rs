//! Headless Simulated Scene
//!
//! Runs a [`PlayerController`] against a [`PointMassBody`] among infinite
//! planes, in the same frame order a game loop would use:
//!
//! 1. `update` (variable tick)
//! 2. Fixed steps from the accumulator: `fixed_update`, integrate, resolve
//!    plane contacts, `on_contacts`
//! 3. `late_update` (variable tick)
//!
//! All entry points in one frame see the same clock reading. This is a test
//! and demo harness, not a physics engine: bodies are points with a radius
//! and surfaces are unbounded.

use glam::Vec3;

use crate::camera::ViewPose;
use crate::input::FrameInput;
use crate::physics::collision::ContactSample;
use crate::physics::{PointMassBody, RigidBody};
use crate::player::{PlayerController, Tick};

/// Upper bound on fixed steps run in a single frame.
pub const MAX_FIXED_STEPS_PER_FRAME: usize = 8;

/// Frame deltas are clamped to this before feeding the accumulator.
pub const MAX_FRAME_DELTA_S: f32 = 0.1;

/// Distance from a surface at which contact is still reported.
pub const CONTACT_SKIN: f32 = 0.01;

/// Default body radius in meters.
pub const DEFAULT_BODY_RADIUS: f32 = 0.5;

/// An infinite plane `normal · x = offset`, solid on the side opposite the normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfacePlane {
    pub normal: Vec3,
    pub offset: f32,
    pub layer: u8,
}

impl SurfacePlane {
    /// Plane through `point` facing `normal` (normalized here).
    pub fn new(point: Vec3, normal: Vec3, layer: u8) -> Self {
        let normal = normal.normalize_or_zero();
        Self {
            normal,
            offset: normal.dot(point),
            layer,
        }
    }

    /// Horizontal floor at height `y`.
    pub fn floor(y: f32, layer: u8) -> Self {
        Self::new(Vec3::new(0.0, y, 0.0), Vec3::Y, layer)
    }

    /// Signed distance from the plane (positive on the open side).
    #[inline]
    pub fn distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) - self.offset
    }
}

/// What happened during one [`SimulatedScene::frame`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    pub pose: ViewPose,
    pub fixed_steps: usize,
    pub contacts: usize,
}

/// Controller, body and world, stepped together.
#[derive(Debug, Clone)]
pub struct SimulatedScene {
    controller: PlayerController,
    body: PointMassBody,
    surfaces: Vec<SurfacePlane>,
    body_radius: f32,
    time_s: f64,
    simulation_accumulator_s: f32,
    contacts: Vec<ContactSample>,
}

impl SimulatedScene {
    /// Create an empty scene around a controller and its body.
    pub fn new(controller: PlayerController, body: PointMassBody) -> Self {
        Self {
            controller,
            body,
            surfaces: Vec::new(),
            body_radius: DEFAULT_BODY_RADIUS,
            time_s: 0.0,
            simulation_accumulator_s: 0.0,
            contacts: Vec::new(),
        }
    }

    /// Add a collision plane.
    pub fn with_surface(mut self, surface: SurfacePlane) -> Self {
        self.surfaces.push(surface);
        self
    }

    /// Set the body's collision radius.
    pub fn with_body_radius(mut self, radius: f32) -> Self {
        self.body_radius = radius;
        self
    }

    /// The controller under simulation.
    pub fn controller(&self) -> &PlayerController {
        &self.controller
    }

    /// Mutable access to the controller.
    pub fn controller_mut(&mut self) -> &mut PlayerController {
        &mut self.controller
    }

    /// The simulated body.
    pub fn body(&self) -> &PointMassBody {
        &self.body
    }

    /// Mutable access to the body.
    pub fn body_mut(&mut self) -> &mut PointMassBody {
        &mut self.body
    }

    /// Clock reading of the last frame.
    pub fn time(&self) -> f64 {
        self.time_s
    }

    /// Contacts reported by the last fixed step.
    pub fn contacts(&self) -> &[ContactSample] {
        &self.contacts
    }

    /// Jump input level.
    pub fn set_jump_held(&mut self, held: bool) {
        self.controller.set_jump_held(held);
    }

    /// Crouch input level, applied at the last frame's clock.
    pub fn set_crouch_held(&mut self, held: bool) {
        let tick = Tick::new(self.time_s, 0.0);
        self.controller.set_crouch_held(&mut self.body, held, tick);
    }

    /// Advance one rendered frame.
    pub fn frame(&mut self, delta: f32, input: &FrameInput) -> FrameReport {
        let delta = delta.clamp(0.0, MAX_FRAME_DELTA_S);
        let fixed_step = self.controller.config().fixed_timestep;
        self.time_s += f64::from(delta);
        let frame_tick = Tick::new(self.time_s, delta);

        let pose = self.controller.update(&mut self.body, input, frame_tick);

        self.simulation_accumulator_s =
            (self.simulation_accumulator_s + delta).min(fixed_step * MAX_FIXED_STEPS_PER_FRAME as f32);

        let mut steps = 0usize;
        let mut contacts = 0usize;
        while self.simulation_accumulator_s >= fixed_step && steps < MAX_FIXED_STEPS_PER_FRAME {
            contacts += self.fixed_step(fixed_step);
            self.simulation_accumulator_s -= fixed_step;
            steps += 1;
        }

        self.controller.late_update(&mut self.body, frame_tick);

        FrameReport {
            pose,
            fixed_steps: steps,
            contacts,
        }
    }

    fn fixed_step(&mut self, dt: f32) -> usize {
        let tick = Tick::new(self.time_s, dt);
        self.controller.fixed_update(&mut self.body, tick);
        self.body.step(dt);
        self.resolve_contacts();
        self.controller.on_contacts(&mut self.body, &self.contacts, tick);
        self.contacts.len()
    }

    /// Push the body out of every plane it penetrates, remove velocity into
    /// the plane, and collect contact samples.
    fn resolve_contacts(&mut self) {
        self.contacts.clear();
        for surface in &self.surfaces {
            let distance = surface.distance(self.body.position());
            if distance >= self.body_radius + CONTACT_SKIN {
                continue;
            }

            if distance < self.body_radius {
                let correction = surface.normal * (self.body_radius - distance);
                self.body.set_position(self.body.position() + correction);
            }

            let velocity = self.body.velocity();
            let into = velocity.dot(surface.normal);
            if into < 0.0 {
                self.body.set_velocity(velocity - surface.normal * into);
            }

            self.contacts.push(ContactSample::new(surface.normal, surface.layer));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::MovementConfig;

    fn scene_on_floor() -> SimulatedScene {
        let controller = PlayerController::new(MovementConfig::default());
        let body = PointMassBody::new(Vec3::new(0.0, 0.5, 0.0), 1.0);
        SimulatedScene::new(controller, body).with_surface(SurfacePlane::floor(0.0, 0))
    }

    #[test]
    fn test_plane_distance() {
        let wall = SurfacePlane::new(Vec3::new(-2.0, 0.0, 0.0), Vec3::X, 0);
        assert!((wall.distance(Vec3::ZERO) - 2.0).abs() < 1e-6);
        assert!((wall.distance(Vec3::new(-3.0, 5.0, 1.0)) - (-1.0)).abs() < 1e-6);
    }

    #[test]
    fn test_fixed_steps_per_frame() {
        let mut scene = scene_on_floor();
        let report = scene.frame(0.02, &FrameInput::default());
        assert_eq!(report.fixed_steps, 1);

        // Huge frame is clamped
        let report = scene.frame(5.0, &FrameInput::default());
        assert!(report.fixed_steps <= MAX_FIXED_STEPS_PER_FRAME);
        assert!(report.fixed_steps >= 4);
    }

    #[test]
    fn test_resting_on_floor_is_grounded() {
        let mut scene = scene_on_floor();
        for _ in 0..10 {
            scene.frame(0.02, &FrameInput::default());
        }
        assert!(scene.controller().is_grounded());
        assert!(scene.body().position().y >= 0.5 - 1e-4);
        assert_eq!(scene.contacts().len(), 1);
    }

    #[test]
    fn test_free_fall_is_airborne() {
        let controller = PlayerController::new(MovementConfig::default());
        let body = PointMassBody::new(Vec3::new(0.0, 50.0, 0.0), 1.0);
        let mut scene = SimulatedScene::new(controller, body).with_surface(SurfacePlane::floor(0.0, 0));
        for _ in 0..10 {
            scene.frame(0.02, &FrameInput::default());
        }
        assert!(!scene.controller().is_grounded());
        assert!(scene.body().velocity().y < 0.0);
        assert!(scene.contacts().is_empty());
    }

    #[test]
    fn test_long_run_keeps_no_force_log() {
        let mut scene = scene_on_floor();
        let run = FrameInput::movement(1.0, 0.0);
        for _ in 0..1000 {
            scene.frame(0.02, &run);
        }
        assert!(scene.body().applied().is_empty());
        assert!(scene.body().velocity().z > 0.0);
    }
}
