//! Simulation Module
//!
//! Headless harness for exercising the controller without a game engine.
//! See [`SimulatedScene`].

pub mod scene;

pub use scene::{FrameReport, SimulatedScene, SurfacePlane};
