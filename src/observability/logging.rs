//! Structured logging.
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - `RUST_LOG` takes precedence over the configured level

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when neither `RUST_LOG` nor the config give a usable directive.
pub const DEFAULT_FILTER: &str = "blockpath=info,tower_http=info";

/// Resolve the filter directive for a configured log level.
///
/// A bare level such as `debug` is scoped to this crate and `tower_http`;
/// anything containing `=` or `,` is treated as a full directive.
pub fn filter_directive(log_level: &str) -> String {
    let level = log_level.trim();
    if level.is_empty() {
        DEFAULT_FILTER.to_string()
    } else if level.contains('=') || level.contains(',') {
        level.to_string()
    } else {
        format!("blockpath={level},tower_http={level}")
    }
}

/// Install the global tracing subscriber. Call once, from `main`.
pub fn init_logging(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter_directive(log_level)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
