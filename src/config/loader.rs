//! Configuration loading from disk and environment.

use std::env;
use std::fs;
use std::path::Path;

use crate::config::schema::NavConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable overriding `history.base_path`, the channel the
/// deployment pipeline uses to announce where the app is mounted.
pub const BASE_URL_VAR: &str = "BASE_URL";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load and validate configuration.
///
/// Precedence: file values (when a path is given), then environment
/// overrides, then semantic validation. With no path, defaults plus the
/// environment still produce a usable config.
pub fn load_config(path: Option<&Path>) -> Result<NavConfig, ConfigError> {
    let mut config = match path {
        Some(path) => {
            let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
            toml::from_str(&content).map_err(ConfigError::Parse)?
        }
        None => NavConfig::default(),
    };

    apply_env_overrides(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Fold deployment-environment values into a parsed config. The
/// environment wins over the file.
pub(crate) fn apply_env_overrides(config: &mut NavConfig) {
    if let Ok(base) = env::var(BASE_URL_VAR) {
        if !base.is_empty() {
            tracing::debug!(base_path = %base, "BASE_URL override applied");
            config.history.base_path = base;
        }
    }
}
