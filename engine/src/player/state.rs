//! Movement state machines
//!
//! Each concern owns one small enum, so combinations such as "wall-running
//! while cancelling but not running" cannot be represented. [`MovementState`]
//! flattens them into the boolean view hosts usually want.

use glam::Vec3;

/// Floor contact, debounced by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroundContact {
    #[default]
    Airborne,
    Grounded,
}

/// Jump availability.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum JumpState {
    #[default]
    Ready,
    /// A jump happened; ready again at `ready_at` (clock seconds)
    Cooldown { ready_at: f64 },
}

/// Wall-run lifecycle.
///
/// ```text
/// Idle ──wall contact (airborne)──▶ Running ◀──trigger released──┐
///                                     │                          │
///                                     └──cancel trigger──▶ Cancelling
///                                                              │ 0.2 s
/// Idle ◀──0.1 s── Refractory ◀──────────push-off──────────────┘
/// ```
///
/// Landing, jumping or losing the wall returns Running/Cancelling straight to Idle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum WallRunPhase {
    #[default]
    Idle,
    Running { wall_normal: Vec3 },
    /// Still running; a push-off fires at `fire_at` unless the trigger is released
    Cancelling { wall_normal: Vec3, fire_at: f64 },
    /// Just pushed off; no new wall run until `until`
    Refractory { until: f64 },
}

impl WallRunPhase {
    /// Running or Cancelling.
    pub fn is_running(&self) -> bool {
        matches!(self, WallRunPhase::Running { .. } | WallRunPhase::Cancelling { .. })
    }

    /// A new wall run may start (not in the refractory window).
    pub fn is_ready(&self) -> bool {
        !matches!(self, WallRunPhase::Refractory { .. })
    }

    /// True while a cancel is waiting for its deadline.
    pub fn is_cancelling(&self) -> bool {
        matches!(self, WallRunPhase::Cancelling { .. })
    }

    /// Normal of the wall being run on.
    pub fn wall_normal(&self) -> Option<Vec3> {
        match *self {
            WallRunPhase::Running { wall_normal } | WallRunPhase::Cancelling { wall_normal, .. } => {
                Some(wall_normal)
            }
            _ => None,
        }
    }
}

/// Crouch stance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stance {
    #[default]
    Standing,
    Crouching,
}

/// Flat snapshot of the controller's flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MovementState {
    pub grounded: bool,
    pub wall_running: bool,
    pub crouching: bool,
    /// Jump input is held
    pub jump_requested: bool,
    pub ready_to_jump: bool,
    pub ready_to_wall_run: bool,
    pub wall_run_cancelling: bool,
}

impl MovementState {
    /// Flatten the individual state machines into one snapshot.
    pub fn from_parts(
        ground: GroundContact,
        jump: JumpState,
        wall_run: WallRunPhase,
        stance: Stance,
        jump_held: bool,
    ) -> Self {
        Self {
            grounded: ground == GroundContact::Grounded,
            wall_running: wall_run.is_running(),
            crouching: stance == Stance::Crouching,
            jump_requested: jump_held,
            ready_to_jump: jump == JumpState::Ready,
            ready_to_wall_run: wall_run.is_ready(),
            wall_run_cancelling: wall_run.is_cancelling(),
        }
    }
}
