//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Validates command-specific arguments
//! 2. Opens the snapshot store for the project root
//! 3. Calls the store and formats the outcome
//!
//! Handlers return `anyhow::Result`; informational outcomes (already
//! exists, unchanged, aborted) are `Ok`, precondition failures are `Err`.

mod completion;
mod create;
mod greet;
mod init;
mod list;
mod pull;
mod push;
mod show;

// Re-export command functions for testing and direct invocation
pub use completion::completion;
pub use create::create;
pub use greet::greet;
pub use init::init;
pub use list::{list, list_names};
pub use pull::pull;
pub use push::push;
pub use show::show;

use anyhow::{Context as _, Result};

use crate::cli::args::Command;
use crate::cli::Context;
use crate::core::config::Config;
use crate::core::store::SnapshotStore;
use crate::core::types::EnvName;
use crate::ui::output;
use crate::ui::prompts::TerminalConfirm;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Greet { name } => greet::greet(&name),
        Command::Init => init::init(ctx),
        Command::List { json } => list::list(ctx, json),
        Command::Create { env_name } => create::create(ctx, &env_name),
        Command::Show { env_name } => show::show(ctx, &env_name),
        Command::Push { env_name, yes } => push::push(ctx, &env_name, yes),
        Command::Pull { env_name, yes } => pull::pull(ctx, &env_name, yes),
        Command::Completion { shell } => completion::completion(shell),
    }
}

/// Everything a store command needs for one invocation.
pub(crate) struct Session {
    pub store: SnapshotStore,
    pub interactive: bool,
}

impl Session {
    /// Resolve root, configuration and paths for `ctx`.
    pub fn open(ctx: &Context) -> Result<Self> {
        let root = ctx.root()?;
        let loaded = Config::load(&root).context("Failed to load configuration")?;
        for warning in &loaded.warnings {
            output::warn(
                format!("{} ({})", warning.message, warning.path.display()),
                ctx.verbosity(),
            );
        }

        let config = loaded.config;
        let interactive = ctx.interactive.unwrap_or_else(|| config.interactive());
        let store = SnapshotStore::new(config.paths(&root));
        tracing::debug!(
            root = %root.display(),
            store = %store.paths().store_dir().display(),
            interactive,
            "opened session"
        );

        Ok(Self { store, interactive })
    }

    pub fn confirm(&self, assume_yes: bool) -> TerminalConfirm {
        TerminalConfirm::new(self.interactive, assume_yes)
    }

    /// File name of the working file, for messages.
    pub fn working_file_name(&self) -> String {
        let path = self.store.paths().working_file();
        path.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string())
    }
}

/// Parse a user-supplied environment name.
pub(crate) fn parse_name(raw: &str) -> Result<EnvName> {
    EnvName::new(raw).context("Invalid environment name")
}
