//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the global tracing subscriber
//! - Derive the default filter from configuration
//! - Let the environment override the configured level
//!
//! # Design Decisions
//! - Uses the tracing crate for structured logging
//! - Pretty fmt output suits the CLI; hosts that want JSON install
//!   their own subscriber and skip this init

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::schema::ObservabilityConfig;

/// Install the global tracing subscriber for the binary.
///
/// The configured level seeds the default filter; a `RUST_LOG` value
/// wins when set. The global subscriber is process-wide, so this is
/// called once at startup and never from library code.
pub fn init(config: &ObservabilityConfig) {
    let default_filter = format!("view_router={}", config.log_level);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
