//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! superenv has two configuration scopes:
//! - **Global**: User-level settings
//! - **Project**: Per-directory file and store names
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Global config file
//! 3. Project config file
//! 4. CLI flags (not handled here)
//!
//! # Global Config Locations
//!
//! Searched in order:
//! 1. `$SUPERENV_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/superenv/config.toml`
//! 3. `~/.config/superenv/config.toml`
//!
//! # Example
//!
//! ```no_run
//! use superenv::core::config::Config;
//! use std::path::Path;
//!
//! let result = Config::load(Path::new("/path/to/project")).unwrap();
//! let paths = result.config.paths(Path::new("/path/to/project"));
//! println!("Store: {}", paths.store_dir().display());
//! ```

pub mod schema;

pub use schema::{GlobalConfig, ProjectConfig};

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::core::paths::{SuperenvPaths, DEFAULT_ENV_FILE, DEFAULT_STORE_DIR, PROJECT_CONFIG_FILE};

/// Environment variable naming an explicit global config file.
pub const CONFIG_ENV_VAR: &str = "SUPERENV_CONFIG";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Warnings generated during config loading.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    pub message: String,
    pub path: PathBuf,
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    pub config: Config,
    pub warnings: Vec<ConfigWarning>,
}

/// Merged configuration from all sources.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub global: GlobalConfig,
    pub project: Option<ProjectConfig>,
    global_path: Option<PathBuf>,
    project_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration for the project rooted at `root`.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read, parsed
    /// or validated. Missing files are not an error.
    pub fn load(root: &Path) -> Result<ConfigLoadResult, ConfigError> {
        let mut warnings = Vec::new();
        let global_path = Self::find_global(&mut warnings);
        Self::load_from(global_path.as_deref(), root, warnings)
    }

    /// Load configuration from an explicit global file (if any) and the
    /// project rooted at `root`.
    pub fn load_from(
        global_path: Option<&Path>,
        root: &Path,
        warnings: Vec<ConfigWarning>,
    ) -> Result<ConfigLoadResult, ConfigError> {
        let global = match global_path {
            Some(path) => read_toml::<GlobalConfig>(path)?,
            None => GlobalConfig::default(),
        };

        let project_path = root.join(PROJECT_CONFIG_FILE);
        let (project, project_path) = if project_path.is_file() {
            let project = read_toml::<ProjectConfig>(&project_path)?;
            (Some(project), Some(project_path))
        } else {
            (None, None)
        };

        let config = Config {
            global,
            project,
            global_path: global_path.map(Path::to_path_buf),
            project_path,
        };
        config.validate()?;

        tracing::debug!(
            global = ?config.global_path,
            project = ?config.project_path,
            "loaded configuration"
        );
        Ok(ConfigLoadResult { config, warnings })
    }

    /// Locate the global config file, if any.
    ///
    /// An explicit `$SUPERENV_CONFIG` that points nowhere produces a warning
    /// and falls through to the standard locations.
    fn find_global(warnings: &mut Vec<ConfigWarning>) -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            let path = PathBuf::from(path);
            if path.is_file() {
                return Some(path);
            }
            warnings.push(ConfigWarning {
                message: format!("${} points to a missing file; ignoring it", CONFIG_ENV_VAR),
                path,
            });
        }

        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("superenv/config.toml");
            if path.is_file() {
                return Some(path);
            }
        }

        dirs::home_dir()
            .map(|home| home.join(".config/superenv/config.toml"))
            .filter(|path| path.is_file())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(project) = &self.project {
            project.validate()?;
        }
        if self.store_dir() == self.env_file() {
            return Err(ConfigError::InvalidValue(format!(
                "store_dir and env_file cannot both be '{}'",
                self.store_dir()
            )));
        }
        Ok(())
    }

    // =========================================================================
    // Accessor methods with precedence
    // =========================================================================

    /// Store directory name. Defaults to `.superenv`.
    pub fn store_dir(&self) -> &str {
        self.project
            .as_ref()
            .and_then(|p| p.store_dir.as_deref())
            .unwrap_or(DEFAULT_STORE_DIR)
    }

    /// Working file name. Defaults to `.env`.
    pub fn env_file(&self) -> &str {
        self.project
            .as_ref()
            .and_then(|p| p.env_file.as_deref())
            .unwrap_or(DEFAULT_ENV_FILE)
    }

    /// Whether prompts are allowed by default. Defaults to `true`.
    pub fn interactive(&self) -> bool {
        self.global.interactive.unwrap_or(true)
    }

    /// Build the path routing for the project at `root`.
    pub fn paths(&self, root: &Path) -> SuperenvPaths {
        SuperenvPaths::with_names(root.to_path_buf(), self.store_dir(), self.env_file())
    }
}

fn read_toml<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
