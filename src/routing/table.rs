//! Route declarations and table compilation.
//!
//! # Responsibilities
//! - Hold route declarations (path, name, deferred view loader)
//! - Normalize paths and freeze declaration order at startup
//! - Reject relative paths, paths carrying query or fragment
//!   characters, empty names, and duplicate paths/names, reporting
//!   every violation rather than the first
//!
//! # Design Decisions
//! - Declaration order is preserved; path lookup is first match in that
//!   order
//! - Paths are compared after normalization, so `/exam-app/` collides
//!   with `/exam-app`
//! - Name lookup goes through a side index, O(1)
//! - The table is immutable once compiled

use std::collections::{HashMap, HashSet};
use std::fmt;

use thiserror::Error;

use crate::routing::matcher::normalize_path;
use crate::view::loader::ViewLoader;

/// One navigable application state: a path, a symbolic name, and the
/// deferred loader for its view.
#[derive(Debug)]
pub struct Route {
    path: String,
    name: String,
    loader: ViewLoader,
}

impl Route {
    /// Declare a route. The path must be absolute and bare of query or
    /// fragment parts; it is normalized when the table is compiled.
    pub fn new(path: impl Into<String>, name: impl Into<String>, loader: ViewLoader) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            loader,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn loader(&self) -> &ViewLoader {
        &self.loader
    }
}

/// A single problem found while compiling a route table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableIssue {
    /// Route paths must start with `/`.
    #[error("route path {path:?} is not absolute")]
    RelativePath { path: String },

    /// Declared paths may not carry a hash fragment; parsed locations
    /// never do, so such a route could never match.
    #[error("route path {path:?} contains a hash fragment")]
    HashInPath { path: String },

    /// Declared paths may not carry a query string.
    #[error("route path {path:?} contains a query string")]
    QueryInPath { path: String },

    /// Every route needs a non-empty symbolic name.
    #[error("route at {path:?} has an empty name")]
    EmptyName { path: String },

    /// Two routes declare the same (normalized) path.
    #[error("duplicate route path {path:?}")]
    DuplicatePath { path: String },

    /// Two routes declare the same name.
    #[error("duplicate route name {name:?}")]
    DuplicateName { name: String },
}

/// Route table compilation failure. Carries every issue found so a bad
/// table can be fixed in one pass.
#[derive(Debug)]
pub struct TableError {
    issues: Vec<TableIssue>,
}

impl TableError {
    pub fn issues(&self) -> &[TableIssue] {
        &self.issues
    }
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid route table: ")?;
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", issue)?;
        }
        Ok(())
    }
}

impl std::error::Error for TableError {}

/// The compiled, immutable route table.
#[derive(Debug)]
pub struct RouteTable {
    routes: Vec<Route>,
    by_name: HashMap<String, usize>,
}

impl RouteTable {
    /// Compile declarations into a table, preserving their order.
    pub fn compile(declared: Vec<Route>) -> Result<Self, TableError> {
        let mut issues = Vec::new();
        let mut routes = Vec::with_capacity(declared.len());
        let mut by_name = HashMap::with_capacity(declared.len());
        let mut seen_paths = HashSet::new();

        for mut route in declared {
            if !route.path.starts_with('/') {
                issues.push(TableIssue::RelativePath {
                    path: route.path.clone(),
                });
            }
            if route.path.contains('#') {
                issues.push(TableIssue::HashInPath {
                    path: route.path.clone(),
                });
            }
            if route.path.contains('?') {
                issues.push(TableIssue::QueryInPath {
                    path: route.path.clone(),
                });
            }
            route.path = normalize_path(&route.path);

            if route.name.is_empty() {
                issues.push(TableIssue::EmptyName {
                    path: route.path.clone(),
                });
            }
            if !seen_paths.insert(route.path.clone()) {
                issues.push(TableIssue::DuplicatePath {
                    path: route.path.clone(),
                });
            }
            if by_name.contains_key(&route.name) {
                issues.push(TableIssue::DuplicateName {
                    name: route.name.clone(),
                });
            } else {
                by_name.insert(route.name.clone(), routes.len());
            }
            routes.push(route);
        }

        if issues.is_empty() {
            Ok(Self { routes, by_name })
        } else {
            Err(TableError { issues })
        }
    }

    /// Routes in declaration order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// First route whose path equals the given normalized app-level path.
    pub fn find_path(&self, path: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.path == path)
    }

    /// Route carrying the given symbolic name.
    pub fn find_name(&self, name: &str) -> Option<&Route> {
        self.by_name.get(name).map(|&index| &self.routes[index])
    }
}
