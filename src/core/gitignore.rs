//! core::gitignore
//!
//! Keep the snapshot store out of version control.
//!
//! [`ensure_entry`] makes sure `.gitignore` lists an entry exactly once,
//! creating the file if needed and appending otherwise. Existing lines are
//! never rewritten.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors from `.gitignore` updates.
#[derive(Debug, Error)]
pub enum GitignoreError {
    #[error("failed to read '{path}': {source}")]
    ReadError { path: PathBuf, source: io::Error },

    #[error("failed to write '{path}': {source}")]
    WriteError { path: PathBuf, source: io::Error },
}

/// What [`ensure_entry`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitignoreStatus {
    /// The file did not exist and was created with the entry.
    Created,
    /// The entry was appended to an existing file.
    Appended,
    /// The entry was already listed.
    AlreadyPresent,
}

/// Ensure `entry` is listed in the ignore file at `path`.
///
/// A line counts as listing the entry when, trimmed, it is `entry`,
/// `entry/`, `/entry` or `/entry/`.
pub fn ensure_entry(path: &Path, entry: &str) -> Result<GitignoreStatus, GitignoreError> {
    let write_err = |source| GitignoreError::WriteError {
        path: path.to_path_buf(),
        source,
    };

    let contents = match fs::read_to_string(path) {
        Ok(contents) => Some(contents),
        Err(e) if e.kind() == io::ErrorKind::NotFound => None,
        Err(source) => {
            return Err(GitignoreError::ReadError {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let Some(contents) = contents else {
        fs::write(path, format!("{}\n", entry)).map_err(write_err)?;
        return Ok(GitignoreStatus::Created);
    };

    if contents.lines().any(|line| lists_entry(line, entry)) {
        return Ok(GitignoreStatus::AlreadyPresent);
    }

    let mut addition = String::new();
    if !contents.is_empty() && !contents.ends_with('\n') {
        addition.push('\n');
    }
    addition.push_str(entry);
    addition.push('\n');

    let mut file = OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(write_err)?;
    file.write_all(addition.as_bytes()).map_err(write_err)?;

    Ok(GitignoreStatus::Appended)
}

fn lists_entry(line: &str, entry: &str) -> bool {
    let line = line.trim();
    let line = line.strip_prefix('/').unwrap_or(line);
    let line = line.strip_suffix('/').unwrap_or(line);
    line == entry
}
