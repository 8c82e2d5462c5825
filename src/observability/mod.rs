//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Navigation and view-load events
//!     → logging.rs (structured tracing events)
//!     → stdout subscriber (fmt layer)
//!
//! Correlation:
//!     navigation_id (UUID v4) ties together the events of one navigation
//! ```
//!
//! # Design Decisions
//! - Structured fields over message interpolation
//! - Default level comes from config; a RUST_LOG-style env filter wins
//! - Events fire from the library, the subscriber is installed by the
//!   binary; embedding hosts bring their own subscriber

pub mod logging;
