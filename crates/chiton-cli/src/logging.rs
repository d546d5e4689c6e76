//! Console logging for the `chiton` binary.
//!
//! The library crates log through the `log` facade; the subscriber installed
//! here forwards those records and prints them to stderr, keeping stdout for
//! results. `RUST_LOG` wins over the `-v` flags when set.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Later calls leave the first one in place.
pub fn init(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
    {
        log::debug!("keeping the existing log subscriber: {e}");
    }
}
