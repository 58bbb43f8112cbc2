//! show command - Print a stored environment

use std::io::Write;

use crate::cli::commands::{parse_name, Session};
use crate::cli::Context;
use anyhow::{Context as _, Result};

/// Write the raw contents of environment `env_name` to stdout.
pub fn show(ctx: &Context, env_name: &str) -> Result<()> {
    let name = parse_name(env_name)?;
    let session = Session::open(ctx)?;

    let contents = session
        .store
        .read(&name)
        .with_context(|| format!("Failed to read environment '{}'", name))?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(&contents)
        .and_then(|()| stdout.flush())
        .context("Failed to write to stdout")?;
    Ok(())
}
