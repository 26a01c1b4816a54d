//! Burn-and-yield driver for the loophog fixture.
//!
//! Occupies the host's single-threaded cooperative scheduler for two
//! windows of a caller-defined duration, separated by exactly one
//! voluntary yield and followed by a short drain pause. The fixture is
//! spawned as a child process by harnesses that need a reproducible
//! "unresponsive event loop" workload to test against.

#![deny(missing_docs)]
#![deny(clippy::all)]

/// CPU-bound busy-wait.
pub mod burn;

/// Monotonic time source.
pub mod clock;

/// The burn, yield, burn, pause sequence.
pub mod driver;

/// Cooperative scheduling seam.
pub mod scheduler;

pub use burn::burn;
pub use clock::{Clock, MonotonicClock};
pub use driver::{run, DRAIN_PAUSE};
pub use scheduler::{Scheduler, TokioScheduler};
