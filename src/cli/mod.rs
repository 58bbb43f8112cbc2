//! cli
//!
//! Command-line interface layer for superenv.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Resolve the project root, configuration and paths
//! - Delegate to [`crate::core::store::SnapshotStore`] and render outcomes
//!
//! The CLI layer is thin: it is the only place that reads the process
//! working directory or talks to the terminal.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use crate::ui::output::Verbosity;

/// Per-invocation settings derived from global flags.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Working directory override.
    pub cwd: Option<PathBuf>,
    /// Debug logging enabled.
    pub debug: bool,
    /// Quiet mode (minimal output).
    pub quiet: bool,
    /// Interactive mode forced on or off; `None` defers to configuration.
    pub interactive: Option<bool>,
}

impl Context {
    /// The project root: `--cwd` if given, else the process working directory.
    pub fn root(&self) -> Result<PathBuf> {
        match &self.cwd {
            Some(cwd) => Ok(cwd.clone()),
            None => std::env::current_dir().context("Failed to determine current directory"),
        }
    }

    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_quiet(self.quiet)
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run(cli: Cli) -> Result<()> {
    let ctx = Context {
        cwd: cli.cwd.clone(),
        debug: cli.debug,
        quiet: cli.quiet,
        interactive: cli.interactive(),
    };

    commands::dispatch(cli.command, &ctx)
}
