//! core
//!
//! Core domain types and the snapshot store.
//!
//! # Modules
//!
//! - [`types`] - Strong types: EnvName
//! - [`paths`] - Centralized path routing for superenv storage
//! - [`config`] - Configuration schema and loading
//! - [`store`] - The snapshot store and push/pull protocol
//! - [`lock`] - Exclusive store lock
//! - [`gitignore`] - `.gitignore` maintenance
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid names from reaching the filesystem
//! - Every path is derived from an explicit project root
//! - Nothing here prints or prompts; decisions come in through `ui::prompts::Confirm`

pub mod config;
pub mod gitignore;
pub mod lock;
pub mod paths;
pub mod store;
pub mod types;
