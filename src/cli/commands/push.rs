//! push command - Save the working .env into an environment

use crate::cli::commands::{parse_name, Session};
use crate::cli::Context;
use crate::core::store::SyncOutcome;
use crate::ui::output;
use anyhow::{Context as _, Result};

/// Copy the working file into environment `env_name`.
///
/// A differing snapshot is overwritten only after confirmation, or
/// immediately with `yes`. Declining is not an error.
pub fn push(ctx: &Context, env_name: &str, yes: bool) -> Result<()> {
    let name = parse_name(env_name)?;
    let session = Session::open(ctx)?;
    let working = session.working_file_name();
    let verbosity = ctx.verbosity();

    let outcome = session
        .store
        .push(&name, &session.confirm(yes))
        .with_context(|| format!("Failed to push {} to environment '{}'", working, name))?;

    match outcome {
        SyncOutcome::Created => output::success(
            format!("Pushed {} to new environment '{}'", working, name),
            verbosity,
        ),
        SyncOutcome::Unchanged => output::note(
            format!("Environment '{}' is already up to date with {}", name, working),
            verbosity,
        ),
        SyncOutcome::Overwritten => output::success(
            format!("Overwrote environment '{}' with {}", name, working),
            verbosity,
        ),
        SyncOutcome::Aborted => output::note(
            format!("Push aborted; environment '{}' left unchanged", name),
            verbosity,
        ),
    }

    Ok(())
}
