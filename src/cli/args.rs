//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--cwd <path>`: Run as if in that directory
//! - `--debug`: Enable debug logging
//! - `--interactive` / `--no-interactive`: Control prompts
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use std::path::PathBuf;

/// superenv - keep named .env snapshots next to your project
#[derive(Parser, Debug)]
#[command(name = "superenv")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as if superenv was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output; implies --no-interactive
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Always allow prompts, even when stdin is not a terminal
    #[arg(
        long = "interactive",
        global = true,
        conflicts_with = "no_interactive"
    )]
    pub interactive_flag: bool,

    /// Never prompt; confirmations fail unless --yes is given
    #[arg(long, global = true)]
    pub no_interactive: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// Interactive mode requested on the command line.
    ///
    /// Returns:
    /// - `Some(true)` if `--interactive` was given
    /// - `Some(false)` if `--no-interactive` or `--quiet` was given, or stdin
    ///   is not a terminal
    /// - `None` to defer to configuration
    pub fn interactive(&self) -> Option<bool> {
        if self.interactive_flag {
            Some(true)
        } else if self.no_interactive || self.quiet || !std::io::stdin().is_terminal() {
            Some(false)
        } else {
            None
        }
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Greet someone by name
    Greet {
        /// Name to greet
        name: String,
    },

    /// Create the snapshot store and ignore it in git
    #[command(
        name = "init",
        long_about = "Create the snapshot store in the current directory.\n\n\
            Creates the .superenv directory that holds your environment snapshots \
            and makes sure .gitignore lists it, so snapshots never get committed. \
            Running init again is harmless.",
        after_help = "\
GETTING STARTED:
    1. cd into your project
    2. superenv init
    3. superenv create staging
    4. superenv push staging      # copy .env into the snapshot"
    )]
    Init,

    /// List stored environments
    #[command(name = "list", visible_alias = "ls")]
    List {
        /// Print names as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Create an empty environment snapshot
    #[command(
        name = "create",
        long_about = "Create a new environment snapshot.\n\n\
            The snapshot starts with a placeholder comment. An existing snapshot \
            with the same name is never overwritten.\n\n\
            Names may contain letters, digits, '-' and '_'."
    )]
    Create {
        /// Name of the environment
        env_name: String,
    },

    /// Print a stored environment
    #[command(name = "show")]
    Show {
        /// Name of the environment
        env_name: String,
    },

    /// Save the working .env into an environment
    #[command(
        name = "push",
        long_about = "Copy the working .env file into an environment snapshot.\n\n\
            A missing snapshot is created. An identical snapshot is left alone. \
            A snapshot with different content is only overwritten after you \
            confirm, or when --yes is given.",
        after_help = "\
WORKFLOW EXAMPLES:
    # Save local changes to staging, asking before overwriting
    superenv push staging

    # Overwrite without asking (scripts, CI)
    superenv push staging --yes"
    )]
    Push {
        /// Name of the environment
        env_name: String,

        /// Overwrite a differing snapshot without asking
        #[arg(short, long)]
        yes: bool,
    },

    /// Restore an environment into the working .env
    #[command(
        name = "pull",
        long_about = "Copy an environment snapshot into the working .env file.\n\n\
            A missing .env is created. An identical .env is left alone. A .env \
            with different content is only overwritten after you confirm, or \
            when --yes is given."
    )]
    Pull {
        /// Name of the environment
        env_name: String,

        /// Overwrite a differing .env without asking
        #[arg(short, long)]
        yes: bool,
    },

    /// Generate shell completion scripts
    #[command(name = "completion")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}
