use crate::clock::Clock;
use log::trace;
use std::{hint::black_box, time::Duration};

/// Number of integer concatenations between elapsed time checks.
const BATCH: u32 = 100_000;

/// Busy-wait for `duration` while keeping the CPU genuinely occupied.
///
/// Each batch builds a string from [`BATCH`] ascending integers and the
/// elapsed time is re-checked once per batch. The accumulator is routed
/// through [`black_box`] so the optimizer cannot elide the work. The
/// call blocks the current thread for the whole phase and never yields
/// to the scheduler. Returns the number of completed batches; a zero or
/// already elapsed duration completes without a single one.
pub fn burn<C: Clock>(clock: &C, duration: Duration) -> u64 {
    let start = clock.now();
    let mut batches = 0u64;

    while clock.now().duration_since(start) < duration {
        let mut msg = String::new();
        for i in 0..BATCH {
            msg.push_str(&i.to_string());
        }
        black_box(&msg);
        batches += 1;
    }

    trace!("burned {} batches", batches);
    batches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::MonotonicClock;
    use std::{cell::Cell, time::Instant};

    /// Clock that advances a fixed step each time it is observed.
    struct SteppingClock {
        now: Cell<Instant>,
        step: Duration,
    }

    impl SteppingClock {
        fn new(step: Duration) -> SteppingClock {
            SteppingClock {
                now: Cell::new(Instant::now()),
                step,
            }
        }
    }

    impl Clock for SteppingClock {
        fn now(&self) -> Instant {
            let now = self.now.get();
            self.now.set(now + self.step);
            now
        }
    }

    #[test]
    fn zero_duration_completes_without_a_batch() {
        assert_eq!(burn(&MonotonicClock, Duration::ZERO), 0);
    }

    #[test]
    fn elapsed_time_is_checked_once_per_batch() {
        // The start observation and every loop check advance the clock
        // by 10ms each. The checks observe 10, 20 and 30ms (three
        // batches) before the 40ms observation stops the loop.
        let clock = SteppingClock::new(Duration::from_millis(10));
        assert_eq!(burn(&clock, Duration::from_millis(40)), 3);
    }

    #[test]
    fn occupies_at_least_the_requested_duration() {
        let start = Instant::now();
        let batches = burn(&MonotonicClock, Duration::from_millis(20));
        assert!(start.elapsed() >= Duration::from_millis(20));
        assert!(batches >= 1);
    }
}
