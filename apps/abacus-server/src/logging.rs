//! Logging initialization: `EnvFilter` + console or JSON output.

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

/// Initialize the global subscriber.
///
/// `RUST_LOG` wins when set; otherwise the configured level applies, and the
/// `-v` count tightens it (`-v` info, `-vv` debug, `-vvv` trace).
pub fn init_logging(config: &LoggingConfig, verbosity: u8) {
    let directive = match verbosity {
        0 => config.level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    match config.format {
        LogFormat::Console => {
            tracing_subscriber::fmt().with_env_filter(filter).init();
        }
        LogFormat::Json => {
            tracing_subscriber::fmt()
                .json()
                .with_env_filter(filter)
                .init();
        }
    }
}
