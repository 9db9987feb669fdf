//! Structured logging.
//!
//! # Design Decisions
//! - Uses the tracing crate for structured logging
//! - RUST_LOG wins when set; otherwise the configured level applies
//! - tower-http request traces stay below the default threshold so probe
//!   traffic does not flood the log

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::schema::ObservabilityConfig;

/// Initialize the tracing subscriber. Call once, at process start.
pub fn init(config: &ObservabilityConfig) {
    let default_filter = format!("info,ledger_proxy={},tower_http=warn", config.log_level);
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter)))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
