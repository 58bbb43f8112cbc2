//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Global Config
//!
//! Located at (in order of precedence):
//! 1. `$SUPERENV_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/superenv/config.toml`
//! 3. `~/.config/superenv/config.toml`
//!
//! # Project Config
//!
//! Located at `<root>/.superenv.toml`.
//!
//! # Validation
//!
//! File names are validated after parsing: they must be a single path
//! component so the store and working file always live directly under the
//! project root.

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Global configuration (user scope).
///
/// # Example
///
/// ```toml
/// interactive = false
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Default interactive mode
    pub interactive: Option<bool>,
}

/// Project configuration.
///
/// # Example
///
/// ```toml
/// store_dir = ".envs"
/// env_file = ".env.local"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Store directory name under the project root
    pub store_dir: Option<String>,

    /// Working file name under the project root
    pub env_file: Option<String>,
}

impl ProjectConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a file name is empty, is `.`
    /// or `..`, or contains a path separator.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(store_dir) = &self.store_dir {
            validate_file_name("store_dir", store_dir)?;
        }
        if let Some(env_file) = &self.env_file {
            validate_file_name("env_file", env_file)?;
        }
        Ok(())
    }
}

fn validate_file_name(key: &str, value: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::InvalidValue(format!("{} cannot be empty", key)));
    }
    if value == "." || value == ".." {
        return Err(ConfigError::InvalidValue(format!(
            "{} cannot be '{}'",
            key, value
        )));
    }
    if value.contains('/') || value.contains('\\') {
        return Err(ConfigError::InvalidValue(format!(
            "{} must be a plain file name, got '{}'",
            key, value
        )));
    }
    if value.chars().any(|c| c.is_control()) {
        return Err(ConfigError::InvalidValue(format!(
            "{} cannot contain control characters",
            key
        )));
    }
    Ok(())
}
