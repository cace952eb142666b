use std::io::stderr;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{fmt, Layer};

/// Maps a level name (`off`, `error` ... `trace`, any case) to a filter.
///
/// Unknown names yield `None`; the caller picks the fallback.
pub fn parse_level(level: &str) -> Option<LevelFilter> {
    level.trim().parse().ok()
}

/// Installs the global subscriber for the tracker's logs.
///
/// Output goes to stderr so it never mixes with exported data on stdout.
/// Fails if the host already installed a subscriber.
pub fn init(level: LevelFilter) -> Result<(), TryInitError> {
    let tracker_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(tracker_log)
        .try_init()
}
