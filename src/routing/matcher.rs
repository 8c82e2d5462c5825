//! Location parsing and path matching.
//!
//! # Responsibilities
//! - Parse navigation targets into path / query / fragment
//! - Normalize paths so equivalent spellings compare equal
//! - Join and strip the deployment base path (segment-aligned)
//!
//! # Design Decisions
//! - Matching considers the path only; query and fragment are carried
//!   through untouched
//! - Trailing slashes collapse, so `/love-app/` and `/love-app` are the
//!   same path (the root stays `/`)
//! - Path comparison is case-sensitive
//! - No pattern syntax: the table holds literal paths, lookup is exact

use std::fmt;

/// A parsed navigation target.
///
/// `path` is absolute and normalized. `query` and `fragment` hold the
/// raw text after `?` and `#` when present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub query: Option<String>,
    pub fragment: Option<String>,
}

impl Location {
    /// Parse a target such as `/exam-app?tab=2#top`.
    ///
    /// Returns `None` when the path part does not start with `/`;
    /// relative targets are not supported.
    pub fn parse(target: &str) -> Option<Self> {
        let (rest, fragment) = match target.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment.to_string())),
            None => (target, None),
        };
        let (path, query) = match rest.split_once('?') {
            Some((path, query)) => (path, Some(query.to_string())),
            None => (rest, None),
        };
        if !path.starts_with('/') {
            return None;
        }
        Some(Self {
            path: normalize_path(path),
            query,
            fragment,
        })
    }

    /// Build a location for a bare path with no query or fragment.
    pub fn from_path(path: &str) -> Self {
        Self {
            path: normalize_path(path),
            query: None,
            fragment: None,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)?;
        if let Some(query) = &self.query {
            write!(f, "?{}", query)?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{}", fragment)?;
        }
        Ok(())
    }
}

/// Collapse trailing slashes and guarantee a leading one.
pub fn normalize_path(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/".to_string();
    }
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

/// Prepend the base to an app-level path.
///
/// An empty base means the application is mounted at the origin root.
/// The app root under a non-empty base is the base itself.
pub fn join_base(base: &str, path: &str) -> String {
    let path = normalize_path(path);
    if base.is_empty() {
        return path;
    }
    if path == "/" {
        base.to_string()
    } else {
        format!("{}{}", base, path)
    }
}

/// Reduce a browser-side path to its app-level form.
///
/// Returns `None` when the path does not live under the base. The cut
/// is segment-aligned: `/console2/x` is not under base `/console`.
pub fn strip_base(path: &str, base: &str) -> Option<String> {
    let path = normalize_path(path);
    if base.is_empty() {
        return Some(path);
    }
    let rest = path.strip_prefix(base)?;
    if rest.is_empty() {
        Some("/".to_string())
    } else if rest.starts_with('/') {
        Some(rest.to_string())
    } else {
        None
    }
}
