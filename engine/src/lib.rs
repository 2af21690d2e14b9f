//! Wall-Run Movement Engine
//!
//! A force-based first-person movement controller: walking, crouching,
//! jumping and wall-running, driven by pushing forces into an externally
//! owned rigid body.
//!
//! # Modules
//!
//! - [`player`] - The controller, its state machines, force model and config
//! - [`camera`] - Yaw/pitch look control and wall-run camera tilt
//! - [`input`] - Per-frame movement axes and look deltas
//! - [`physics`] - Rigid body trait, force modes, contact classification
//! - [`math`] - Degree-based angle helpers and smooth damping
//! - [`sim`] - Headless scene for tests and demos
//!
//! # Example
//!
//! ```ignore
//! use wallrun_engine::input::FrameInput;
//! use wallrun_engine::physics::{PointMassBody, Vec3};
//! use wallrun_engine::player::{MovementConfig, PlayerController};
//! use wallrun_engine::sim::{SimulatedScene, SurfacePlane};
//!
//! let controller = PlayerController::new(MovementConfig::default());
//! let body = PointMassBody::new(Vec3::new(0.0, 0.5, 0.0), 1.0);
//! let mut scene = SimulatedScene::new(controller, body).with_surface(SurfacePlane::floor(0.0, 0));
//!
//! for _ in 0..60 {
//!     scene.frame(1.0 / 60.0, &FrameInput::movement(1.0, 0.0));
//! }
//! ```

pub mod camera;
pub mod input;
pub mod math;
pub mod physics;
pub mod player;
pub mod sim;

// Re-export the types most hosts touch
pub use camera::ViewPose;
pub use input::FrameInput;
pub use physics::{ContactSample, ForceMode, LayerMask, RigidBody};
pub use player::{MovementConfig, MovementState, PlayerController, Tick};
