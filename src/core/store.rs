//! core::store
//!
//! The snapshot store: a directory of named `.env` snapshots.
//!
//! # Operations
//!
//! - [`SnapshotStore::initialize`] - Create the store directory
//! - [`SnapshotStore::create`] - Add a snapshot with a placeholder body
//! - [`SnapshotStore::list`] - Lazily enumerate snapshot names
//! - [`SnapshotStore::read`] - Read a snapshot blob
//! - [`SnapshotStore::push`] - Copy the working file into a snapshot
//! - [`SnapshotStore::pull`] - Copy a snapshot into the working file
//!
//! # Push/pull protocol
//!
//! Both directions follow the same compare-and-write sequence under the
//! store lock:
//!
//! ```text
//! target missing      -> write            -> Created
//! target == source    -> no write         -> Unchanged
//! target != source    -> confirm? yes     -> write -> Overwritten
//!                                  no     -> no write -> Aborted
//! ```
//!
//! Blobs are compared byte for byte and written whole (temp file + rename).
//!
//! # Invariants
//!
//! - Every operation except `initialize` fails with
//!   [`StoreError::NotInitialized`] before touching the filesystem when the
//!   store directory is missing
//! - `create` never overwrites an existing snapshot
//! - A snapshot only changes through `push`, and only after confirmation
//!   when it already held different content
//! - Snapshot contents are never logged

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

#[cfg(unix)]
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

use crate::core::lock::{LockError, StoreLock};
use crate::core::paths::SuperenvPaths;
use crate::core::types::{EnvName, SNAPSHOT_PREFIX, SNAPSHOT_SUFFIX};
use crate::ui::prompts::{Confirm, PromptError};

/// Body written by [`SnapshotStore::create`].
pub const PLACEHOLDER: &str = "# superenv snapshot\n";

/// Suffix appended to a file name while it is being replaced.
const TEMP_SUFFIX: &str = ".superenv-tmp";

/// Errors from snapshot store operations.
///
/// Snapshot contents never appear in these messages.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store directory does not exist.
    #[error("superenv is not initialized: '{path}' does not exist (run `superenv init` first)")]
    NotInitialized { path: PathBuf },

    /// The working file does not exist.
    #[error("working file '{path}' does not exist")]
    WorkingFileMissing { path: PathBuf },

    /// The named snapshot does not exist.
    #[error("environment '{0}' does not exist (create it with `superenv create {0}`)")]
    SnapshotNotFound(EnvName),

    /// The store lock could not be taken.
    #[error(transparent)]
    Lock(#[from] LockError),

    /// The confirmation could not be obtained.
    #[error(transparent)]
    Prompt(#[from] PromptError),

    /// Filesystem failure.
    #[error("failed to {action} '{path}': {source}")]
    Io {
        action: &'static str,
        path: PathBuf,
        source: io::Error,
    },
}

impl StoreError {
    fn io(action: &'static str, path: &Path) -> impl FnOnce(io::Error) -> Self {
        let path = path.to_path_buf();
        move |source| StoreError::Io {
            action,
            path,
            source,
        }
    }
}

/// Result of [`SnapshotStore::initialize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitStatus {
    Created,
    AlreadyInitialized,
}

/// Result of [`SnapshotStore::create`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateStatus {
    Created,
    AlreadyExists,
}

/// Result of [`SnapshotStore::push`] and [`SnapshotStore::pull`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The target did not exist and was written.
    Created,
    /// Source and target were byte-identical; nothing was written.
    Unchanged,
    /// The target differed, the overwrite was confirmed and performed.
    Overwritten,
    /// The target differed and the overwrite was declined.
    Aborted,
}

/// A directory of named snapshots.
///
/// # Example
///
/// ```no_run
/// use superenv::core::paths::SuperenvPaths;
/// use superenv::core::store::{SnapshotStore, SyncOutcome};
/// use superenv::core::types::EnvName;
/// use std::path::PathBuf;
///
/// let store = SnapshotStore::new(SuperenvPaths::new(PathBuf::from("/project")));
/// store.initialize()?;
///
/// let staging = EnvName::new("staging")?;
/// store.create(&staging)?;
///
/// let always_yes = |_: &str| true;
/// assert_eq!(store.push(&staging, &always_yes)?, SyncOutcome::Overwritten);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    paths: SuperenvPaths,
}

impl SnapshotStore {
    pub fn new(paths: SuperenvPaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &SuperenvPaths {
        &self.paths
    }

    /// Whether the store directory exists.
    pub fn is_initialized(&self) -> bool {
        self.paths.store_dir().is_dir()
    }

    fn require_store(&self) -> Result<(), StoreError> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(StoreError::NotInitialized {
                path: self.paths.store_dir(),
            })
        }
    }

    /// Ensure the store directory exists.
    ///
    /// Calling this on an initialized store is not an error; it reports
    /// [`InitStatus::AlreadyInitialized`].
    pub fn initialize(&self) -> Result<InitStatus, StoreError> {
        let dir = self.paths.store_dir();
        if dir.is_dir() {
            debug!(path = %dir.display(), "store already initialized");
            return Ok(InitStatus::AlreadyInitialized);
        }

        fs::create_dir(&dir).map_err(StoreError::io("create store directory", &dir))?;
        debug!(path = %dir.display(), "created store directory");
        Ok(InitStatus::Created)
    }

    /// Create snapshot `name` holding [`PLACEHOLDER`].
    ///
    /// An existing snapshot is left untouched and reported as
    /// [`CreateStatus::AlreadyExists`].
    pub fn create(&self, name: &EnvName) -> Result<CreateStatus, StoreError> {
        self.require_store()?;
        let path = self.paths.snapshot_path(name);

        let mut options = OpenOptions::new();
        options.write(true).create_new(true);
        #[cfg(unix)]
        options.mode(0o600);

        let mut file = match options.open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                debug!(%name, "snapshot already exists");
                return Ok(CreateStatus::AlreadyExists);
            }
            Err(e) => return Err(StoreError::io("create snapshot", &path)(e)),
        };

        file.write_all(PLACEHOLDER.as_bytes())
            .map_err(StoreError::io("write snapshot", &path))?;
        debug!(%name, path = %path.display(), "created snapshot");
        Ok(CreateStatus::Created)
    }

    /// Enumerate snapshot names in directory order.
    ///
    /// The returned iterator scans lazily; call `list` again to rescan.
    pub fn list(&self) -> Result<SnapshotNames, StoreError> {
        self.require_store()?;
        let dir = self.paths.store_dir();
        let entries = fs::read_dir(&dir).map_err(StoreError::io("read store directory", &dir))?;
        Ok(SnapshotNames { dir, entries })
    }

    /// Read the blob of snapshot `name`.
    pub fn read(&self, name: &EnvName) -> Result<Vec<u8>, StoreError> {
        self.require_store()?;
        let path = self.paths.snapshot_path(name);
        read_optional(&path)?.ok_or_else(|| StoreError::SnapshotNotFound(name.clone()))
    }

    /// Copy the working file into snapshot `name`.
    ///
    /// # Errors
    ///
    /// - [`StoreError::WorkingFileMissing`] if there is no working file
    /// - [`StoreError::NotInitialized`] if the store directory is missing
    /// - [`StoreError::Lock`] if another process is syncing the store
    /// - [`StoreError::Prompt`] if a confirmation was needed but unavailable
    pub fn push(&self, name: &EnvName, confirm: &dyn Confirm) -> Result<SyncOutcome, StoreError> {
        let working_path = self.paths.working_file();
        let working = read_optional(&working_path)?
            .ok_or(StoreError::WorkingFileMissing { path: working_path })?;
        self.require_store()?;

        let _lock = StoreLock::acquire(&self.paths)?;
        let snapshot_path = self.paths.snapshot_path(name);
        let current = read_optional(&snapshot_path)?;

        let message = format!(
            "Environment '{}' differs from {}. Overwrite it?",
            name,
            display_name(&self.paths.working_file())
        );
        let outcome = sync_blob(
            &working,
            current,
            &snapshot_path,
            &self.paths.store_dir(),
            confirm,
            &message,
        )?;
        debug!(%name, ?outcome, "push finished");
        Ok(outcome)
    }

    /// Copy snapshot `name` into the working file.
    ///
    /// # Errors
    ///
    /// - [`StoreError::NotInitialized`] if the store directory is missing
    /// - [`StoreError::SnapshotNotFound`] if there is no such snapshot
    /// - [`StoreError::Lock`] if another process is syncing the store
    /// - [`StoreError::Prompt`] if a confirmation was needed but unavailable
    pub fn pull(&self, name: &EnvName, confirm: &dyn Confirm) -> Result<SyncOutcome, StoreError> {
        self.require_store()?;

        let _lock = StoreLock::acquire(&self.paths)?;
        let snapshot = read_optional(&self.paths.snapshot_path(name))?
            .ok_or_else(|| StoreError::SnapshotNotFound(name.clone()))?;
        let working_path = self.paths.working_file();
        let current = read_optional(&working_path)?;

        let message = format!(
            "{} differs from environment '{}'. Overwrite it?",
            display_name(&working_path),
            name
        );
        let outcome = sync_blob(
            &snapshot,
            current,
            &working_path,
            &self.paths.store_dir(),
            confirm,
            &message,
        )?;
        debug!(%name, ?outcome, "pull finished");
        Ok(outcome)
    }
}

/// Lazy iterator over the names in a snapshot store.
///
/// Entries that look like snapshots but do not carry a valid name (for
/// example `.a.b.env`) are skipped with a warning.
#[derive(Debug)]
pub struct SnapshotNames {
    dir: PathBuf,
    entries: fs::ReadDir,
}

impl Iterator for SnapshotNames {
    type Item = Result<EnvName, StoreError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.entries.next()? {
                Ok(entry) => entry,
                Err(e) => return Some(Err(StoreError::io("read store directory", &self.dir)(e))),
            };

            let file_name = entry.file_name();
            let Some(file_name) = file_name.to_str() else {
                continue;
            };
            if !(file_name.starts_with(SNAPSHOT_PREFIX) && file_name.ends_with(SNAPSHOT_SUFFIX)) {
                continue;
            }

            let is_file = match entry.file_type() {
                Ok(file_type) if file_type.is_symlink() => {
                    fs::metadata(entry.path()).map(|m| m.is_file()).unwrap_or(false)
                }
                Ok(file_type) => file_type.is_file(),
                Err(e) => return Some(Err(StoreError::io("inspect", &entry.path())(e))),
            };
            if !is_file {
                continue;
            }

            match EnvName::from_file_name(file_name) {
                Some(name) => return Some(Ok(name)),
                None => {
                    warn!(file = file_name, "skipping snapshot file with an invalid name");
                }
            }
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Read a file, mapping "not found" to `None`.
fn read_optional(path: &Path) -> Result<Option<Vec<u8>>, StoreError> {
    match fs::read(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(StoreError::io("read", path)(e)),
    }
}

fn sync_blob(
    source: &[u8],
    current: Option<Vec<u8>>,
    target: &Path,
    temp_dir: &Path,
    confirm: &dyn Confirm,
    message: &str,
) -> Result<SyncOutcome, StoreError> {
    match current {
        None => {
            write_atomic(target, source, temp_dir)?;
            Ok(SyncOutcome::Created)
        }
        Some(existing) if existing == source => Ok(SyncOutcome::Unchanged),
        Some(_) => {
            if confirm.confirm(message)? {
                write_atomic(target, source, temp_dir)?;
                Ok(SyncOutcome::Overwritten)
            } else {
                Ok(SyncOutcome::Aborted)
            }
        }
    }
}

/// Replace `path` with `contents` via a temp file and a rename.
///
/// The temp file lives in `temp_dir` (the gitignored store) so a crash never
/// leaves a stray copy in the project tree. A symlinked target is resolved
/// first so the link survives and the file it points at is replaced; that
/// temp file sits beside the resolved file to keep the rename on one
/// filesystem. An existing file keeps its permissions; a new file is
/// owner-only on Unix.
fn write_atomic(path: &Path, contents: &[u8], temp_dir: &Path) -> Result<(), StoreError> {
    let (target, temp_path) = replacement_paths(path, temp_dir)?;
    let existing_permissions = fs::metadata(&target).ok().map(|m| m.permissions());

    let result = write_temp(&temp_path, contents, existing_permissions).and_then(|()| {
        fs::rename(&temp_path, &target).map_err(StoreError::io("replace", &target))
    });

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

/// The file a write to `path` must replace, and the temp file to stage it in.
fn replacement_paths(path: &Path, temp_dir: &Path) -> Result<(PathBuf, PathBuf), StoreError> {
    let is_symlink = fs::symlink_metadata(path)
        .map(|m| m.file_type().is_symlink())
        .unwrap_or(false);

    let (target, staging_dir) = if is_symlink {
        let target = fs::canonicalize(path).map_err(StoreError::io("resolve symlink", path))?;
        let parent = target.parent().unwrap_or(temp_dir).to_path_buf();
        (target, parent)
    } else {
        (path.to_path_buf(), temp_dir.to_path_buf())
    };

    let mut temp_name = target.file_name().unwrap_or_default().to_os_string();
    temp_name.push(TEMP_SUFFIX);
    let temp_path = staging_dir.join(temp_name);
    Ok((target, temp_path))
}

fn write_temp(
    temp_path: &Path,
    contents: &[u8],
    permissions: Option<fs::Permissions>,
) -> Result<(), StoreError> {
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(temp_path)
        .map_err(StoreError::io("create temp file", temp_path))?;

    match permissions {
        Some(permissions) => file
            .set_permissions(permissions)
            .map_err(StoreError::io("set permissions on", temp_path))?,
        #[cfg(unix)]
        None => file
            .set_permissions(fs::Permissions::from_mode(0o600))
            .map_err(StoreError::io("set permissions on", temp_path))?,
        #[cfg(not(unix))]
        None => {}
    }

    file.write_all(contents)
        .map_err(StoreError::io("write", temp_path))?;
    file.sync_all().map_err(StoreError::io("sync", temp_path))
}
