//! Tracing initialization and subscriber setup.
//!
//! The core instruments itself with `tracing` spans and events; this module
//! wires them to a formatted subscriber. Level resolution order:
//!
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` from [`Config`]
//! 3. Default: `"info"`
//!
//! Initialization is idempotent: only the first call installs a subscriber,
//! later calls are silently ignored. Observability must never take the
//! application down.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::Config;

/// Installs the global tracing subscriber.
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer());

    let _ = subscriber.try_init();
}
