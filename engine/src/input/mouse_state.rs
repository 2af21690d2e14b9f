//! Look Delta Accumulator
//!
//! Raw look motion can arrive several times per frame (one event per device
//! report). The controller consumes it once per variable tick, so deltas are
//! summed here until consumed.

/// Sums raw look deltas between variable ticks.
///
/// # Example
///
/// ```rust,ignore
/// use wallrun_engine::input::LookAccumulator;
///
/// let mut look = LookAccumulator::new();
///
/// // Event loop: every raw motion report
/// look.accumulate(10.0, -5.0);
/// look.accumulate(3.0, 2.0);
///
/// // Variable tick: consume once
/// let (dx, dy) = look.consume();
/// // dx = 13.0, dy = -3.0
/// ```
#[derive(Debug, Clone, Default)]
pub struct LookAccumulator {
    delta_x: f32,
    delta_y: f32,
}

impl LookAccumulator {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one raw motion report.
    #[inline]
    pub fn accumulate(&mut self, dx: f32, dy: f32) {
        self.delta_x += dx;
        self.delta_y += dy;
    }

    /// Return the summed delta and reset it to zero.
    #[inline]
    pub fn consume(&mut self) -> (f32, f32) {
        let delta = (self.delta_x, self.delta_y);
        self.delta_x = 0.0;
        self.delta_y = 0.0;
        delta
    }

    /// Current sum without consuming it.
    #[inline]
    pub fn peek(&self) -> (f32, f32) {
        (self.delta_x, self.delta_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let look = LookAccumulator::new();
        assert_eq!(look.peek(), (0.0, 0.0));
    }

    #[test]
    fn test_accumulate() {
        let mut look = LookAccumulator::new();
        look.accumulate(10.0, 5.0);
        assert_eq!(look.peek(), (10.0, 5.0));

        look.accumulate(3.0, -2.0);
        assert_eq!(look.peek(), (13.0, 3.0));
    }

    #[test]
    fn test_consume() {
        let mut look = LookAccumulator::new();
        look.accumulate(10.0, 5.0);
        look.accumulate(3.0, -2.0);

        assert_eq!(look.consume(), (13.0, 3.0));

        // After consume, deltas should be zero
        assert_eq!(look.peek(), (0.0, 0.0));
        assert_eq!(look.consume(), (0.0, 0.0));
    }
}
