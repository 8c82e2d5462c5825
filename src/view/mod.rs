//! View abstraction and deferred loading.
//!
//! # Data Flow
//! ```text
//! Route declared with a ViewLoader (no work yet)
//!     → first navigation activates the route
//!     → loader.rs invokes the async factory
//!     → factory yields Arc<dyn View>
//!     → memoized; later visits reuse the loaded view
//! ```
//!
//! # Design Decisions
//! - Views are trait objects so hosts can plug in any renderable
//! - Loaded views are shared immutably via `Arc`, never reloaded on a
//!   revisit
//! - The deferred load is the only async suspension point in navigation

pub mod loader;

pub use loader::{LoadError, ViewLoader};

/// A renderable view produced by a deferred load.
pub trait View: Send + Sync {
    /// Human-readable title for the window or tab.
    fn title(&self) -> &str;

    /// Render the view to displayable text.
    fn render(&self) -> String;
}
