//! core::paths
//!
//! Centralized path routing for superenv storage locations.
//!
//! # Architecture
//!
//! Every on-disk location used by superenv is derived here from an explicit
//! project root. Nothing below the CLI layer reads the process working
//! directory, so the store can be exercised against any directory.
//!
//! **Hard rule:** No code outside this module may compute
//! `*.join(".superenv")` or snapshot file names by hand.
//!
//! # Storage Layout
//!
//! With the default configuration:
//! - `<root>/.superenv/` - Snapshot store
//! - `<root>/.superenv/.<name>.env` - One file per snapshot
//! - `<root>/.superenv/.lock` - Exclusive lock file
//! - `<root>/.env` - Working file
//! - `<root>/.gitignore` - Ignore file that must list the store
//! - `<root>/.superenv.toml` - Optional project configuration
//!
//! # Example
//!
//! ```
//! use superenv::core::paths::SuperenvPaths;
//! use superenv::core::types::EnvName;
//! use std::path::PathBuf;
//!
//! let paths = SuperenvPaths::new(PathBuf::from("/project"));
//! let name = EnvName::new("staging").unwrap();
//!
//! assert_eq!(paths.store_dir(), PathBuf::from("/project/.superenv"));
//! assert_eq!(
//!     paths.snapshot_path(&name),
//!     PathBuf::from("/project/.superenv/.staging.env")
//! );
//! ```

use std::path::{Path, PathBuf};

use crate::core::types::EnvName;

/// Default store directory name under the project root.
pub const DEFAULT_STORE_DIR: &str = ".superenv";

/// Default working file name under the project root.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Project configuration file name under the project root.
pub const PROJECT_CONFIG_FILE: &str = ".superenv.toml";

const GITIGNORE_FILE: &str = ".gitignore";
const LOCK_FILE: &str = ".lock";

/// Centralized path routing for superenv storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuperenvPaths {
    /// Project root every other path hangs off.
    root: PathBuf,
    /// Store directory name (single path component).
    store_dir_name: String,
    /// Working file name (single path component).
    env_file_name: String,
}

impl SuperenvPaths {
    /// Create paths for `root` using the default store and working file names.
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            store_dir_name: DEFAULT_STORE_DIR.to_string(),
            env_file_name: DEFAULT_ENV_FILE.to_string(),
        }
    }

    /// Create paths with custom store and working file names.
    ///
    /// Names are expected to be validated single path components (see
    /// [`crate::core::config`]).
    pub fn with_names(
        root: PathBuf,
        store_dir_name: impl Into<String>,
        env_file_name: impl Into<String>,
    ) -> Self {
        Self {
            root,
            store_dir_name: store_dir_name.into(),
            env_file_name: env_file_name.into(),
        }
    }

    /// The project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Name of the store directory, as written to `.gitignore`.
    pub fn store_dir_name(&self) -> &str {
        &self.store_dir_name
    }

    // =========================================================================
    // Store paths
    // =========================================================================

    /// The snapshot store directory.
    pub fn store_dir(&self) -> PathBuf {
        self.root.join(&self.store_dir_name)
    }

    /// The file holding snapshot `name`.
    pub fn snapshot_path(&self, name: &EnvName) -> PathBuf {
        self.store_dir().join(name.file_name())
    }

    /// The store lock file.
    pub fn lock_path(&self) -> PathBuf {
        self.store_dir().join(LOCK_FILE)
    }

    // =========================================================================
    // Project paths
    // =========================================================================

    /// The working `.env` file.
    pub fn working_file(&self) -> PathBuf {
        self.root.join(&self.env_file_name)
    }

    /// The project `.gitignore`.
    pub fn gitignore_path(&self) -> PathBuf {
        self.root.join(GITIGNORE_FILE)
    }

    /// The project configuration file.
    pub fn project_config_path(&self) -> PathBuf {
        self.root.join(PROJECT_CONFIG_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths() -> SuperenvPaths {
        SuperenvPaths::new(PathBuf::from("/project"))
    }

    #[test]
    fn store_layout() {
        let paths = paths();
        assert_eq!(paths.store_dir(), PathBuf::from("/project/.superenv"));
        assert_eq!(paths.lock_path(), PathBuf::from("/project/.superenv/.lock"));
        assert_eq!(paths.store_dir_name(), ".superenv");
    }

    #[test]
    fn snapshot_path_uses_file_name() {
        let name = EnvName::new("prod").unwrap();
        assert_eq!(
            paths().snapshot_path(&name),
            PathBuf::from("/project/.superenv/.prod.env")
        );
    }

    #[test]
    fn project_files() {
        let paths = paths();
        assert_eq!(paths.working_file(), PathBuf::from("/project/.env"));
        assert_eq!(paths.gitignore_path(), PathBuf::from("/project/.gitignore"));
        assert_eq!(
            paths.project_config_path(),
            PathBuf::from("/project/.superenv.toml")
        );
    }

    #[test]
    fn custom_names() {
        let paths = SuperenvPaths::with_names(PathBuf::from("/p"), ".envs", "local.env");
        assert_eq!(paths.store_dir(), PathBuf::from("/p/.envs"));
        assert_eq!(paths.working_file(), PathBuf::from("/p/local.env"));
        assert_eq!(paths.root(), Path::new("/p"));
    }

    #[test]
    fn lock_file_is_not_a_snapshot() {
        assert!(EnvName::from_file_name(LOCK_FILE).is_none());
    }
}
