//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;
use crate::errors::ConfigError;

static INIT: Once = Once::new();

const LOG_ENV_VAR: &str = "HYBRANK_LOG";

/// Initialize structured logging.
///
/// Reads the `HYBRANK_LOG` environment variable for per-crate log levels,
/// e.g. `HYBRANK_LOG=hybrank_retrieval=debug,hybrank_embeddings=info`.
/// Falls back to `info` if `HYBRANK_LOG` is not set or is invalid.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(crate::config::defaults::DEFAULT_LOG_LEVEL));
        install(filter);
    });
}

/// Initialize tracing with an explicit filter string, e.g. the configured
/// `observability.log_level`.
pub fn init_tracing_with_filter(filter: &str) {
    let filter = EnvFilter::new(filter);
    INIT.call_once(|| install(filter));
}

/// Initialize tracing from `[observability]`. `HYBRANK_LOG`, when set and
/// valid, still takes precedence over `log_level`.
pub fn init_tracing_from_config(config: &ObservabilityConfig) -> Result<(), ConfigError> {
    let filter = match EnvFilter::try_from_env(LOG_ENV_VAR) {
        Ok(filter) => filter,
        Err(_) => parse_filter(&config.log_level)?,
    };
    INIT.call_once(|| install(filter));
    Ok(())
}

/// Parse a filter directive string such as `info` or
/// `hybrank_retrieval=debug,warn`.
pub fn parse_filter(directives: &str) -> Result<EnvFilter, ConfigError> {
    EnvFilter::try_new(directives).map_err(|e| ConfigError::ValidationFailed {
        field: "observability.log_level".to_string(),
        message: e.to_string(),
    })
}

fn install(filter: EnvFilter) {
    // A subscriber installed by the host application wins.
    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter)
        .try_init();
}
