//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! Verbosity flags map to a level filter; an explicit `RUST_LOG` environment
//! variable wins when no flag is given.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

pub struct LogConfig {
    pub level_filter: LevelFilter,
    /// Respect `RUST_LOG` instead of the level filter.
    pub use_env_filter: bool,
}

pub fn init_logging(config: &LogConfig) -> anyhow::Result<()> {
    let filter = if config.use_env_filter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.level_filter.to_string()))
    } else {
        EnvFilter::new(config.level_filter.to_string())
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .without_time()
        .try_init()
        .map_err(|error| anyhow::anyhow!("{error}"))
}
