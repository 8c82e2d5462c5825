//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize, BASE_URL env override)
//!     → validation.rs (semantic checks)
//!     → NavConfig (validated, immutable)
//!     → WebHistory and logging built from it at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; the route table never reloads
//! - All fields have defaults so a missing file still boots
//! - Validation separates syntactic (serde) from semantic checks
//! - Ambient environment reads happen here and nowhere else

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::HistoryConfig;
pub use schema::NavConfig;
pub use schema::ObservabilityConfig;
