//! list command - List stored environments

use crate::cli::commands::Session;
use crate::cli::Context;
use crate::core::store::SnapshotStore;
use crate::core::types::EnvName;
use crate::ui::output;
use anyhow::{Context as _, Result};

/// Print every environment name, sorted.
pub fn list(ctx: &Context, json: bool) -> Result<()> {
    let session = Session::open(ctx)?;
    let names = list_names(&session.store)?;

    if json {
        output::data(serde_json::to_string(&names).context("Failed to serialize names")?);
        return Ok(());
    }

    if names.is_empty() {
        output::note(
            "No environments yet. Create one with `superenv create <name>`.",
            ctx.verbosity(),
        );
        return Ok(());
    }

    output::data(output::format_list(&names, ""));
    Ok(())
}

/// Collect the store's names in sorted order.
pub fn list_names(store: &SnapshotStore) -> Result<Vec<EnvName>> {
    let mut names = store
        .list()
        .context("Failed to list environments")?
        .collect::<Result<Vec<_>, _>>()
        .context("Failed to list environments")?;
    names.sort();
    Ok(names)
}
