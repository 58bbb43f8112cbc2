//! pull command - Restore an environment into the working .env

use crate::cli::commands::{parse_name, Session};
use crate::cli::Context;
use crate::core::store::SyncOutcome;
use crate::ui::output;
use anyhow::{Context as _, Result};

/// Copy environment `env_name` into the working file.
pub fn pull(ctx: &Context, env_name: &str, yes: bool) -> Result<()> {
    let name = parse_name(env_name)?;
    let session = Session::open(ctx)?;
    let working = session.working_file_name();
    let verbosity = ctx.verbosity();

    let outcome = session
        .store
        .pull(&name, &session.confirm(yes))
        .with_context(|| format!("Failed to pull environment '{}' into {}", name, working))?;

    match outcome {
        SyncOutcome::Created => output::success(
            format!("Wrote environment '{}' to new {}", name, working),
            verbosity,
        ),
        SyncOutcome::Unchanged => output::note(
            format!("{} already matches environment '{}'", working, name),
            verbosity,
        ),
        SyncOutcome::Overwritten => output::success(
            format!("Overwrote {} with environment '{}'", working, name),
            verbosity,
        ),
        SyncOutcome::Aborted => output::note(
            format!("Pull aborted; {} left unchanged", working),
            verbosity,
        ),
    }

    Ok(())
}
