//! Diagnostics for the binary. Library code only emits `tracing` events;
//! nothing is printed unless a subscriber is installed here.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// `-v` → info, `-vv` → debug, `-vvv` → trace. `RUST_LOG` wins when set.
pub fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

pub fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{}={}",
            env!("CARGO_PKG_NAME").replace('-', "_"),
            level_for(verbose)
        ))
    });

    // a second init (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
