//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the base path shape (absolute, no query, no hash fragment)
//! - Check the configured log level against known levels
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: NavConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::fmt;

use crate::config::schema::NavConfig;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// `history.base_path` must be empty or begin with `/`.
    RelativeBasePath(String),
    /// Hash-based history is unsupported; the base may not carry `#`.
    HashInBasePath(String),
    /// The base path may not carry a query string.
    QueryInBasePath(String),
    /// The log level is not one tracing understands.
    UnknownLogLevel(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::RelativeBasePath(base) => {
                write!(f, "base path {:?} is not absolute", base)
            }
            ValidationError::HashInBasePath(base) => {
                write!(f, "base path {:?} contains a hash fragment", base)
            }
            ValidationError::QueryInBasePath(base) => {
                write!(f, "base path {:?} contains a query string", base)
            }
            ValidationError::UnknownLogLevel(level) => {
                write!(f, "unknown log level {:?}", level)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check a parsed configuration, collecting every violation.
pub fn validate_config(config: &NavConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let base = &config.history.base_path;
    if !base.is_empty() && !base.starts_with('/') {
        errors.push(ValidationError::RelativeBasePath(base.clone()));
    }
    if base.contains('#') {
        errors.push(ValidationError::HashInBasePath(base.clone()));
    }
    if base.contains('?') {
        errors.push(ValidationError::QueryInBasePath(base.clone()));
    }

    match config.observability.log_level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        other => errors.push(ValidationError::UnknownLogLevel(other.to_string())),
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&NavConfig::default()).is_ok());
    }

    #[test]
    fn test_empty_base_is_valid() {
        let mut config = NavConfig::default();
        config.history.base_path = String::new();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_relative_base_is_rejected() {
        let mut config = NavConfig::default();
        config.history.base_path = "console".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::RelativeBasePath("console".to_string())]
        );
    }

    #[test]
    fn test_all_errors_collected() {
        let mut config = NavConfig::default();
        config.history.base_path = "console#app?x=1".to_string();
        config.observability.log_level = "loud".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&ValidationError::UnknownLogLevel("loud".to_string())));
    }
}
