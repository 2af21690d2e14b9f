//! Camera Module
//!
//! Orientation state only: yaw/pitch accumulation, wall-run roll, and the
//! composed [`ViewPose`]. Rendering the camera is the host's job.

pub mod fps_controller;

pub use fps_controller::{LookController, PITCH_LIMIT_MAX, PITCH_LIMIT_MIN, ViewPose};
