//! Log setup for the command line tool.
//!
//! Logs go to standard error so standard output carries only the report.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an explicit filter, e.g. `vsan_capacity=trace`.
pub const LOG_ENV: &str = "VSAN_CAPACITY_LOG";

/// Installs the global subscriber. Calling it twice is harmless.
pub fn init(verbosity: u8) {
    let filter = build_filter(verbosity);
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn build_filter(verbosity: u8) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
        return filter;
    }
    EnvFilter::new(default_level(verbosity))
}

fn default_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
