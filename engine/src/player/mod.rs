//! Player Module
//!
//! Force-based first-person movement with wall-running.
//!
//! # Components
//!
//! - [`PlayerController`] - Owns the movement state and sequences every tick
//! - [`movement_controller`] - Drive, counter-movement, speed cap and jump math
//! - [`WallRunController`] - Wall-run start, sustain, tilt and cancel
//! - [`CrouchController`] - Instant crouch with slide kick
//! - [`DebounceTimer`] / [`Tick`] - Deadline timers against the caller's clock
//! - [`MovementConfig`] - Tuning, loadable from JSON

pub mod config;
pub mod crouch;
pub mod movement_controller;
pub mod state;
pub mod state_machine;
pub mod timer;
pub mod wall_run;

pub use config::{ConfigError, MovementConfig};
pub use crouch::CrouchController;
pub use movement_controller::{DriveMultipliers, RelativeVelocity};
pub use state::{GroundContact, JumpState, MovementState, Stance, WallRunPhase};
pub use state_machine::PlayerController;
pub use timer::{DebounceTimer, Tick};
pub use wall_run::WallRunController;
