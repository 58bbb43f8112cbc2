//! create command - Create an empty environment snapshot

use crate::cli::commands::{parse_name, Session};
use crate::cli::Context;
use crate::core::store::CreateStatus;
use crate::ui::output;
use anyhow::{Context as _, Result};

/// Create environment `env_name` with a placeholder body.
///
/// An existing environment is reported, never overwritten.
pub fn create(ctx: &Context, env_name: &str) -> Result<()> {
    let name = parse_name(env_name)?;
    let session = Session::open(ctx)?;

    match session
        .store
        .create(&name)
        .with_context(|| format!("Failed to create environment '{}'", name))?
    {
        CreateStatus::Created => output::success(
            format!(
                "Created environment '{}' at {}",
                name,
                session.store.paths().snapshot_path(&name).display()
            ),
            ctx.verbosity(),
        ),
        CreateStatus::AlreadyExists => output::note(
            format!("Environment '{}' already exists", name),
            ctx.verbosity(),
        ),
    }

    Ok(())
}
