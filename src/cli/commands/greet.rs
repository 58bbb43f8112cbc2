//! greet command - Say hello

use crate::ui::output;
use anyhow::Result;

/// Greet `name`. The greeting is the command's output, so `--quiet` keeps it.
pub fn greet(name: &str) -> Result<()> {
    output::data(format!("Hello, {}!", name));
    Ok(())
}
