use async_trait::async_trait;
use std::time::Duration;

/// Cooperative scheduling primitives used by the driver.
///
/// The driver suspends in exactly two places: once between the two burn
/// phases and once for the drain pause. Both go through this trait so
/// tests can substitute a recording implementation.
#[async_trait]
pub trait Scheduler {
    /// Hand control back to the scheduler for one turn. Work queued
    /// before the call runs before the returned future resolves.
    async fn yield_now(&self);

    /// Suspend the current task for `duration` on a timer.
    async fn sleep(&self, duration: Duration);
}

/// Scheduler backed by the ambient tokio runtime.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioScheduler;

#[async_trait]
impl Scheduler for TokioScheduler {
    async fn yield_now(&self) {
        tokio::task::yield_now().await;
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
