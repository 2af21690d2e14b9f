//! Deadline timers
//!
//! Delayed state changes ("stop being grounded 3 steps after the last floor
//! contact") are stored as absolute deadlines against a monotonic clock owned
//! by the caller. Every controller entry point polls its timers first, so a
//! deadline fires on the first tick at or after it, whichever cadence that
//! tick belongs to.

/// Clock reading handed to every controller entry point.
///
/// `now` is seconds on a monotonic clock (f64 so long sessions keep
/// sub-millisecond resolution). `dt` is the duration of the tick being run:
/// the fixed step for fixed ticks, the frame delta for variable ticks.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tick {
    pub now: f64,
    pub dt: f32,
}

impl Tick {
    /// Create a tick at clock time `now` lasting `dt` seconds.
    pub fn new(now: f64, dt: f32) -> Self {
        Self { now, dt }
    }
}

/// "Held true until N seconds of silence" primitive.
///
/// ```rust,ignore
/// // Every contact step:
/// timer.cancel();            // contact seen, abort the pending fire
/// timer.touch(now, 3.0 * dt); // re-arm
///
/// // Every tick:
/// if timer.poll(now) {
///     grounded = false;
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DebounceTimer {
    deadline: Option<f64>,
}

impl DebounceTimer {
    /// Create a timer with nothing scheduled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a fire at `now + delay` unless one is already pending.
    ///
    /// Returns `true` if a new fire was scheduled.
    pub fn touch(&mut self, now: f64, delay: f32) -> bool {
        if self.deadline.is_some() {
            return false;
        }
        self.deadline = Some(now + f64::from(delay));
        true
    }

    /// Abort the pending fire. Idempotent.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// True while a deadline is scheduled.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Scheduled fire time, if any.
    pub fn deadline(&self) -> Option<f64> {
        self.deadline
    }

    /// Report (once) whether the deadline has been reached.
    pub fn poll(&mut self, now: f64) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
