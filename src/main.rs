//! Entry point.
//!
//! ```text
//! Cli::parse_args() --> Logging --> cli::run --> Command Dispatch
//!   Greet | Init | List | Create | Show | Push | Pull | Completion
//! ```
//!
//! Any error ends the process with exit status 1.

use std::process::ExitCode;

use superenv::cli::{self, Cli};
use superenv::logging::init_logging;
use superenv::ui::output;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    if let Err(e) = init_logging(cli.debug) {
        output::error(format!("{e:#}"));
        return ExitCode::FAILURE;
    }

    match cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}
