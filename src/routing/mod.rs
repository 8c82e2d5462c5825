//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Navigation target (path, name, or full href)
//!     → history.rs (strip base path from browser-side locations)
//!     → matcher.rs (parse target, normalize path)
//!     → router.rs (table lookup)
//!     → Return: matched Route or NoMatch
//!
//! Table Compilation (at startup):
//!     Route[]
//!     → Validate (absolute paths, unique paths, unique names)
//!     → Freeze order + name index as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Table compiled at startup, immutable at runtime
//! - Exact path matching only (no patterns, no parameters)
//! - Deterministic: same location always resolves the same route
//! - First match wins over declaration order
//! - The deferred view load is the only async step, on first activation

pub mod history;
pub mod matcher;
pub mod router;
pub mod table;
