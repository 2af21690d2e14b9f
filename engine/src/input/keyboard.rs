//! Digital movement buttons
//!
//! Hosts with analog sticks feed axes straight into [`FrameInput`](super::FrameInput).
//! Hosts with keys track which ones are down here and derive the axes.

/// Held state of the movement buttons.
///
/// Opposing buttons cancel out: forward + backward gives a forward axis of 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementKeys {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub crouch: bool,
}

impl MovementKeys {
    /// Create a key state with nothing held.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forward axis: -1, 0 or 1.
    pub fn forward_axis(&self) -> f32 {
        (self.forward as i32 - self.backward as i32) as f32
    }

    /// Strafe axis: -1 (left), 0 or 1 (right).
    pub fn strafe_axis(&self) -> f32 {
        (self.right as i32 - self.left as i32) as f32
    }

    /// Check if any directional button is held.
    pub fn any_direction(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }

    /// Release everything.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_keys_default() {
        let keys = MovementKeys::new();
        assert!(!keys.any_direction());
        assert_eq!(keys.forward_axis(), 0.0);
        assert_eq!(keys.strafe_axis(), 0.0);
    }

    #[test]
    fn test_movement_axes() {
        let mut keys = MovementKeys::new();
        keys.forward = true;
        keys.left = true;
        assert_eq!(keys.forward_axis(), 1.0);
        assert_eq!(keys.strafe_axis(), -1.0);

        keys.backward = true;
        assert_eq!(keys.forward_axis(), 0.0);

        keys.reset();
        assert!(!keys.any_direction());
    }
}
