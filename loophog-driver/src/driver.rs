use crate::{burn::burn, clock::Clock, scheduler::Scheduler};
use log::debug;
use std::time::Duration;

/// Window granted to the parent process to notice that the busy period
/// is over before the fixture exits.
pub const DRAIN_PAUSE: Duration = Duration::from_millis(100);

/// Run the burn-and-yield sequence: two blocking burn phases of
/// `duration` each with one cooperative yield in between, then a final
/// [`DRAIN_PAUSE`] timer sleep.
///
/// Each step fully completes before the next one starts. The yield and
/// the drain pause are the only points where control returns to the
/// scheduler.
pub async fn run<C, S>(clock: &C, scheduler: &S, duration: Duration)
where
    C: Clock,
    S: Scheduler,
{
    debug!("burn phase 1");
    burn(clock, duration);

    debug!("yielding");
    scheduler.yield_now().await;

    debug!("burn phase 2");
    burn(clock, duration);

    debug!("drain pause");
    scheduler.sleep(DRAIN_PAUSE).await;
}
