use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the global `tracing` subscriber, writing to stderr.
///
/// `level` is any `EnvFilter` directive; an invalid one falls back to `warn`
/// so logging never stands in the way of the menu.
pub fn setup_logging(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn"));
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    // A second init (e.g. from tests) is not an error worth surfacing.
    let _ = tracing_subscriber::registry().with(filter).with(layer).try_init();
}
