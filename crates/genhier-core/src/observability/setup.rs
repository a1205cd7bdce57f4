use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;
use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize the genhier tracing/logging system.
///
/// Reads the `GENHIER_LOG` environment variable for per-crate log levels,
/// e.g. `GENHIER_LOG=genhier_interval=debug,genhier_grouping=info`.
/// Falls back to `genhier=info` if it is not set or invalid.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    install(env_filter(), false);
}

/// Same filtering as [`init_tracing`], with one JSON object per event.
pub fn init_tracing_json() {
    install(env_filter(), true);
}

/// Initialize tracing at the level and output format named in the
/// observability config.
pub fn init_tracing_with_config(config: &ObservabilityConfig) {
    install(EnvFilter::new(&config.log_level), config.json);
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    install(EnvFilter::new(filter), false);
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("genhier=info"))
}

fn install(filter: EnvFilter, json: bool) {
    INIT.call_once(|| {
        let json_layer = json.then(|| {
            fmt::layer()
                .json()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
        });
        let text_layer = (!json).then(|| fmt::layer().with_target(true).with_line_number(true));
        // A subscriber installed by the host application wins.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(json_layer)
            .with(text_layer)
            .try_init();
    });
}
