//! Tracing setup for the command-line tool.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when neither `RUST_LOG` nor `-v` says otherwise.
pub const DEFAULT_FILTER: &str = "info";

/// Filter string for a verbosity count, falling back to `configured`.
pub fn filter_for(verbosity: u8, configured: Option<&str>) -> String {
    match verbosity {
        0 => configured.unwrap_or(DEFAULT_FILTER).to_string(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Install the global subscriber. `RUST_LOG` always wins.
pub fn init_logging(verbosity: u8, configured: Option<&str>) {
    let filter = filter_for(verbosity, configured);
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&filter));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .init();
}
