//! ui
//!
//! User interaction utilities.
//!
//! # Modules
//!
//! - [`prompts`] - Confirmation capability and terminal prompts
//! - [`output`] - Output formatting and display
//!
//! # Design
//!
//! All console output and prompts go through this module so that quiet
//! and non-interactive modes are handled in one place.

pub mod output;
pub mod prompts;
