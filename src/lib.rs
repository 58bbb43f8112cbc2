//! superenv - named `.env` snapshots kept next to your project
//!
//! superenv maintains a hidden `.superenv/` directory of environment
//! snapshots and synchronizes them with the working `.env` file. Pushing
//! over a snapshot with different content requires explicit confirmation.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface layer (parses args, renders outcomes)
//! - [`core`] - Names, paths, configuration, and the snapshot store
//! - [`ui`] - Console output and the confirmation capability
//! - [`logging`] - `tracing` subscriber setup
//!
//! # Correctness Invariants
//!
//! 1. A snapshot name always maps to exactly one file, `.<name>.env`
//! 2. Existing snapshots are never overwritten without confirmation
//! 3. Only `init` creates the store; everything else fails untouched without it
//! 4. Writes replace whole files atomically

pub mod cli;
pub mod core;
pub mod logging;
pub mod ui;
