//! Fixture that blocks a cooperative event loop on demand.

#![deny(clippy::all)]

use anyhow::Result;
use clap::Parser;
use humantime::format_duration;
use log::info;
use loophog_driver::{driver, MonotonicClock, TokioScheduler};
use std::{process::exit, time::Duration};

mod logger;

/// Block the process's only execution thread twice for the given
/// duration with one scheduler yield in between, pause for 100ms and
/// exit. Spawned by harnesses that monitor event loop responsiveness.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Opt {
    /// Duration of each burn phase in milliseconds
    duration: u64,
}

fn main() {
    logger::init();

    if let Err(e) = run() {
        eprintln!("{e:?}");
        exit(2);
    }
}

#[tokio::main(flavor = "current_thread")]
async fn run() -> Result<()> {
    let opt = Opt::parse();
    let duration = Duration::from_millis(opt.duration);

    info!(
        "blocking twice for {} with a {} drain pause",
        format_duration(duration),
        format_duration(driver::DRAIN_PAUSE)
    );
    driver::run(&MonotonicClock, &TokioScheduler, duration).await;
    info!("done");

    Ok(())
}
