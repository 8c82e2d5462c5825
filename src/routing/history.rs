//! History-API style location handling.
//!
//! # Responsibilities
//! - Normalize the deployment base path once, at construction
//! - Join app-level paths under the base (address-bar form)
//! - Strip the base from browser-side locations before matching
//! - Track the current address-bar location for lock-free readers
//!
//! # Design Decisions
//! - Web history only: locations are real paths, never hash fragments
//! - The base comes in as an explicit value; this module never reads
//!   ambient process state
//! - `/console` and `/console/` configure the same base; `/` and the
//!   empty string both mean "mounted at the origin root"
//! - A location outside the base does not belong to this application

use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwapOption;

use crate::routing::matcher::{join_base, strip_base, Location};

/// History-API navigation state for one application instance.
pub struct WebHistory {
    base: String,
    current: ArcSwapOption<String>,
}

impl WebHistory {
    /// Create a history mounted under the given base path.
    pub fn new(base_path: &str) -> Self {
        Self {
            base: normalize_base(base_path),
            current: ArcSwapOption::empty(),
        }
    }

    /// The normalized base: empty for the origin root, otherwise an
    /// absolute prefix with no trailing slash.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Address-bar form of an app-level location: base joined, query and
    /// fragment preserved.
    pub fn full_path(&self, location: &Location) -> String {
        let mut full = join_base(&self.base, &location.path);
        if let Some(query) = &location.query {
            full.push('?');
            full.push_str(query);
        }
        if let Some(fragment) = &location.fragment {
            full.push('#');
            full.push_str(fragment);
        }
        full
    }

    /// Reduce a browser-side path to its app-level form, or `None` when
    /// it is not under the base.
    pub fn app_path(&self, browser_path: &str) -> Option<String> {
        strip_base(browser_path, &self.base)
    }

    /// Record a completed transition to `full_path`.
    pub fn transition(&self, full_path: &str) {
        self.current.store(Some(Arc::new(full_path.to_string())));
    }

    /// The current address-bar location, if any navigation has completed.
    pub fn location(&self) -> Option<Arc<String>> {
        self.current.load_full()
    }
}

impl fmt::Debug for WebHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebHistory")
            .field("base", &self.base)
            .finish_non_exhaustive()
    }
}

fn normalize_base(base: &str) -> String {
    let trimmed = base.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return String::new();
    }
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}
