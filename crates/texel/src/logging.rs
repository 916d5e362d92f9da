//! Logging initialization and configuration.
//!
//! Uses the `tracing` ecosystem. All log output goes to stderr; stdout
//! carries the report rows and nothing else.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the logging subsystem.
///
/// `verbose` enables DEBUG level (INFO otherwise); `json_format` switches
/// from pretty-printed to structured JSON output. The RUST_LOG environment
/// variable overrides the level either way.
pub fn init(verbose: bool, json_format: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if json_format {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(true),
            )
            .init();
    }
}

/// Initialize logging with settings from the config file, letting CLI flags
/// take precedence.
pub fn init_from_config(config: &texel_core::Config, verbose_override: bool, json_override: bool) {
    let verbose =
        verbose_override || config.logging.level == "debug" || config.logging.level == "trace";
    let json_format = json_override || config.logging.format == "json";
    init(verbose, json_format);
}
