//! Observability
//!
//! Installs the global `tracing` subscriber. Library code only emits
//! events; the binary decides where they go.
//!
//! Filter precedence: `-v` flags, then `RUST_LOG`, then `logging.level`
//! from the config file. Output goes to stderr so command results on
//! stdout stay machine-readable.

use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

/// Filter directive for a CLI verbosity count, falling back to the config
pub fn filter_directive(config: &LogConfig, verbosity: u8) -> String {
    match verbosity {
        0 => config.level.clone(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

fn build_filter(config: &LogConfig, verbosity: u8) -> EnvFilter {
    if verbosity == 0 {
        if let Ok(from_env) = EnvFilter::try_from_default_env() {
            return from_env;
        }
    }
    EnvFilter::try_new(filter_directive(config, verbosity)).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber.
///
/// Returns false when a subscriber was already installed.
pub fn init_tracing(config: &LogConfig, verbosity: u8) -> bool {
    let filter = build_filter(config, verbosity);

    let installed = if config.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init()
    };

    installed.is_ok()
}
