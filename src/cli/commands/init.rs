//! init command - Create the snapshot store and ignore it in git

use crate::cli::commands::Session;
use crate::cli::Context;
use crate::core::gitignore::{self, GitignoreStatus};
use crate::core::store::InitStatus;
use crate::ui::output;
use anyhow::{Context as _, Result};

/// Create the store directory and make sure `.gitignore` lists it.
///
/// Both steps are idempotent; running `init` twice only reports that
/// everything is already in place.
pub fn init(ctx: &Context) -> Result<()> {
    let session = Session::open(ctx)?;
    let paths = session.store.paths();
    let verbosity = ctx.verbosity();
    let store_name = paths.store_dir_name();

    match session
        .store
        .initialize()
        .context("Failed to create snapshot store")?
    {
        InitStatus::Created => output::success(
            format!(
                "{} folder created successfully at {}",
                store_name,
                paths.store_dir().display()
            ),
            verbosity,
        ),
        InitStatus::AlreadyInitialized => output::note(
            format!(
                "{} folder already exists at {}",
                store_name,
                paths.store_dir().display()
            ),
            verbosity,
        ),
    }

    match gitignore::ensure_entry(&paths.gitignore_path(), store_name)
        .context("Failed to update .gitignore")?
    {
        GitignoreStatus::Created => output::success(
            format!(".gitignore created and {} added to it", store_name),
            verbosity,
        ),
        GitignoreStatus::Appended => {
            output::success(format!("{} added to .gitignore", store_name), verbosity)
        }
        GitignoreStatus::AlreadyPresent => output::note(
            format!("{} is already listed in .gitignore", store_name),
            verbosity,
        ),
    }

    Ok(())
}
