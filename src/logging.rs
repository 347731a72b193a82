//! Tracing subscriber setup for the command-line front end

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install a compact stderr subscriber. `RUST_LOG` takes precedence over the
/// level chosen by `verbose`.
pub fn init_logger(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
