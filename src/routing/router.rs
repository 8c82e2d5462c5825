//! Route lookup and navigation.
//!
//! # Responsibilities
//! - Store the compiled route table and the history it navigates
//! - Resolve locations to the first matching route, or explicit no-match
//! - Drive navigation: match, load the deferred view, publish the result
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - First-match-wins over declaration order
//! - O(n) path scan acceptable for typical route counts, O(1) by name
//! - Explicit NoMatch rather than a silent fallback; what to show for an
//!   unknown location is the hosting application's call
//! - Each navigation gets a UUID so its log events correlate

use std::sync::Arc;

use arc_swap::ArcSwapOption;
use thiserror::Error;
use url::Url;
use uuid::Uuid;

use crate::routing::history::WebHistory;
use crate::routing::matcher::Location;
use crate::routing::table::{Route, RouteTable, TableError};
use crate::view::loader::LoadError;
use crate::view::View;

/// Result of resolving a location against the route table.
#[derive(Debug)]
pub enum RouteLookup<'a> {
    /// A route's path equals the location's (base-stripped) path.
    Match {
        route: &'a Route,
        /// App-level location: base removed, query and fragment kept.
        location: Location,
    },
    /// The location is outside the base, or no route carries its path.
    NoMatch { location: String },
}

/// The record of a completed navigation.
pub struct CurrentRoute {
    pub name: String,
    /// App-level path, base excluded.
    pub path: String,
    /// Address-bar form: base joined, query and fragment included.
    pub full_path: String,
    pub view: Arc<dyn View>,
    pub navigation_id: Uuid,
}

impl std::fmt::Debug for CurrentRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CurrentRoute")
            .field("name", &self.name)
            .field("path", &self.path)
            .field("full_path", &self.full_path)
            .field("navigation_id", &self.navigation_id)
            .finish_non_exhaustive()
    }
}

/// Errors surfaced by navigation.
#[derive(Debug, Error)]
pub enum NavigationError {
    /// Navigation targets must be absolute app-level paths.
    #[error("navigation target {target:?} is not an absolute path")]
    BadTarget { target: String },

    /// No route matched; the host decides what an unknown location shows.
    #[error("no route matches {target:?}")]
    NoMatch { target: String },

    /// No route carries this name.
    #[error("unknown route name {name:?}")]
    UnknownName { name: String },

    /// The route matched but its deferred view failed to load.
    #[error("failed to load view for route {name:?}")]
    Load {
        name: String,
        #[source]
        source: LoadError,
    },

    /// A full href could not be parsed as a URL.
    #[error("href {href:?} is not a valid URL")]
    BadHref {
        href: String,
        #[source]
        source: url::ParseError,
    },
}

pub type NavigationResult<T> = Result<T, NavigationError>;

/// Client-side router: an immutable route table bound to a history.
pub struct Router {
    history: WebHistory,
    table: RouteTable,
    current: ArcSwapOption<CurrentRoute>,
}

impl Router {
    /// Compile `routes` against `history`. Fails when the table violates
    /// its uniqueness invariants; every violation is reported.
    pub fn new(history: WebHistory, routes: Vec<Route>) -> Result<Self, TableError> {
        let table = RouteTable::compile(routes)?;
        tracing::debug!(
            routes = table.len(),
            base = %history.base(),
            "Route table compiled"
        );
        Ok(Self {
            history,
            table,
            current: ArcSwapOption::empty(),
        })
    }

    pub fn history(&self) -> &WebHistory {
        &self.history
    }

    /// Routes in declaration order.
    pub fn routes(&self) -> &[Route] {
        self.table.routes()
    }

    /// Route carrying the given symbolic name, without navigating.
    pub fn route_named(&self, name: &str) -> Option<&Route> {
        self.table.find_name(name)
    }

    /// Resolve a browser-side location (base path included) without
    /// loading anything.
    pub fn resolve_location(&self, location: &str) -> RouteLookup<'_> {
        let Some(parsed) = Location::parse(location) else {
            return RouteLookup::NoMatch {
                location: location.to_string(),
            };
        };
        let Some(app_path) = self.history.app_path(&parsed.path) else {
            return RouteLookup::NoMatch {
                location: location.to_string(),
            };
        };
        match self.table.find_path(&app_path) {
            Some(route) => RouteLookup::Match {
                route,
                location: Location {
                    path: app_path,
                    query: parsed.query,
                    fragment: parsed.fragment,
                },
            },
            None => RouteLookup::NoMatch {
                location: location.to_string(),
            },
        }
    }

    /// Resolve an absolute href the way a browser hands it over.
    pub fn resolve_href(&self, href: &str) -> NavigationResult<RouteLookup<'_>> {
        let parsed = Url::parse(href).map_err(|source| NavigationError::BadHref {
            href: href.to_string(),
            source,
        })?;
        let mut location = parsed.path().to_string();
        if let Some(query) = parsed.query() {
            location.push('?');
            location.push_str(query);
        }
        if let Some(fragment) = parsed.fragment() {
            location.push('#');
            location.push_str(fragment);
        }
        Ok(self.resolve_location(&location))
    }

    /// Navigate to an app-level path target (base excluded), loading the
    /// route's view on first activation.
    pub async fn push(&self, target: &str) -> NavigationResult<Arc<CurrentRoute>> {
        let location = Location::parse(target).ok_or_else(|| NavigationError::BadTarget {
            target: target.to_string(),
        })?;
        let Some(route) = self.table.find_path(&location.path) else {
            tracing::warn!(target = %target, "No route matched");
            return Err(NavigationError::NoMatch {
                target: target.to_string(),
            });
        };
        self.activate(route, location).await
    }

    /// Navigate by symbolic route name.
    pub async fn push_named(&self, name: &str) -> NavigationResult<Arc<CurrentRoute>> {
        let Some(route) = self.table.find_name(name) else {
            tracing::warn!(name = %name, "Unknown route name");
            return Err(NavigationError::UnknownName {
                name: name.to_string(),
            });
        };
        let location = Location::from_path(route.path());
        self.activate(route, location).await
    }

    /// The most recent completed navigation, if any.
    pub fn current(&self) -> Option<Arc<CurrentRoute>> {
        self.current.load_full()
    }

    async fn activate(
        &self,
        route: &Route,
        location: Location,
    ) -> NavigationResult<Arc<CurrentRoute>> {
        let navigation_id = Uuid::new_v4();
        tracing::debug!(
            navigation_id = %navigation_id,
            path = %location.path,
            name = %route.name(),
            component = %route.loader().component(),
            "Navigating"
        );

        let view = route.loader().load().await.map_err(|source| {
            tracing::error!(
                navigation_id = %navigation_id,
                name = %route.name(),
                error = %source,
                "View load failed"
            );
            NavigationError::Load {
                name: route.name().to_string(),
                source,
            }
        })?;

        let full_path = self.history.full_path(&location);
        let current = Arc::new(CurrentRoute {
            name: route.name().to_string(),
            path: location.path,
            full_path: full_path.clone(),
            view,
            navigation_id,
        });
        self.history.transition(&full_path);
        self.current.store(Some(Arc::clone(&current)));

        tracing::info!(
            navigation_id = %navigation_id,
            name = %current.name,
            full_path = %current.full_path,
            "Navigation complete"
        );
        Ok(current)
    }
}

impl std::fmt::Debug for Router {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("history", &self.history)
            .field("routes", &self.table.len())
            .finish_non_exhaustive()
    }
}
