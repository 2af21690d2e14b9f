//! Input Module
//!
//! The controller does not bind devices. Once per variable tick the host hands
//! it a [`FrameInput`]: two movement axes in [-1, 1] and the raw look delta
//! accumulated since the previous tick. Jump and crouch are level changes
//! delivered separately.
//!
//! # Example
//!
//! ```rust,ignore
//! use wallrun_engine::input::{FrameInput, LookAccumulator, MovementKeys};
//!
//! look.accumulate(raw_dx, raw_dy); // per device report
//! let input = FrameInput::sample(&keys, &mut look); // once per tick
//! let pose = controller.update(&mut body, &input, tick);
//! ```

pub mod keyboard;
pub mod mouse_state;

pub use keyboard::MovementKeys;
pub use mouse_state::LookAccumulator;

/// Input sampled for one variable tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    /// Forward axis, positive forward
    pub forward: f32,
    /// Strafe axis, positive right
    pub strafe: f32,
    /// Raw horizontal look delta, positive turns right
    pub look_dx: f32,
    /// Raw vertical look delta, positive looks up
    pub look_dy: f32,
}

impl FrameInput {
    /// Movement axes only. Values are clamped to [-1, 1].
    pub fn movement(forward: f32, strafe: f32) -> Self {
        Self {
            forward: forward.clamp(-1.0, 1.0),
            strafe: strafe.clamp(-1.0, 1.0),
            ..Default::default()
        }
    }

    /// Add a look delta.
    pub fn with_look(mut self, dx: f32, dy: f32) -> Self {
        self.look_dx = dx;
        self.look_dy = dy;
        self
    }

    /// Axes from held buttons plus a look delta.
    pub fn from_keys(keys: &MovementKeys, look_dx: f32, look_dy: f32) -> Self {
        Self::movement(keys.forward_axis(), keys.strafe_axis()).with_look(look_dx, look_dy)
    }

    /// Sample held buttons and consume everything the accumulator has
    /// gathered since the previous tick.
    pub fn sample(keys: &MovementKeys, look: &mut LookAccumulator) -> Self {
        let (dx, dy) = look.consume();
        Self::from_keys(keys, dx, dy)
    }
}
