use std::{io::Write, time::Instant};

/// Initialize the logger. Lines carry the elapsed time since process
/// start so a harness capturing stderr can correlate fixture output
/// with its own timing. Filtering comes from `RUST_LOG` and defaults
/// to `info`.
pub fn init() {
    let start = Instant::now();

    let mut builder = env_logger::Builder::new();
    builder.filter_level(log::LevelFilter::Info);
    builder.parse_default_env();

    builder.format(move |buf, record| {
        let elapsed = start.elapsed();
        let level = buf.default_styled_level(record.metadata().level());
        writeln!(
            buf,
            "{}.{:06}s: {:<5}: {}",
            elapsed.as_secs(),
            elapsed.subsec_micros(),
            level,
            record.args()
        )
    });

    builder.init()
}
