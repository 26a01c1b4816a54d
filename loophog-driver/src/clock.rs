use std::time::Instant;

/// Source of monotonic time for the burn loop.
///
/// The driver never reads the wall clock directly. Injecting the time
/// source keeps the busy-wait condition testable with a deterministic
/// clock instead of real elapsed time.
pub trait Clock {
    /// Current instant on a monotonic timeline.
    fn now(&self) -> Instant;
}

/// Clock backed by [`Instant::now`].
#[derive(Clone, Copy, Debug, Default)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}
