//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// `log_level` is used as the filter when `RUST_LOG` is unset or invalid.
/// `log_format` selects `json` output; anything else gets human-readable text.
/// Logs go to stderr so they never mix with the prompts and messages on stdout.
pub fn init(log_level: &str, log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
