//! logging
//!
//! Diagnostic logging using the `tracing` ecosystem.
//!
//! ```text
//! init_logging(debug)
//!        |
//!        v
//!    registry
//!        |
//!        v
//!   stderr fmt layer
//!   EnvFilter: $SUPERENV_LOG, else "superenv=debug" (--debug) or "warn"
//! ```
//!
//! User-facing messages do not go through here; see [`crate::ui::output`].

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Environment variable holding an `EnvFilter` directive string.
pub const LOG_ENV_VAR: &str = "SUPERENV_LOG";

/// Filter directives used when `$SUPERENV_LOG` is unset.
pub fn default_directives(debug: bool) -> &'static str {
    if debug {
        "superenv=debug"
    } else {
        "warn"
    }
}

/// Install the global subscriber.
///
/// # Errors
///
/// Fails if `$SUPERENV_LOG` is not a valid filter or a subscriber is
/// already installed.
pub fn init_logging(debug: bool) -> Result<()> {
    let filter = match std::env::var(LOG_ENV_VAR) {
        Ok(directives) => EnvFilter::try_new(&directives)
            .with_context(|| format!("invalid ${}: '{}'", LOG_ENV_VAR, directives))?,
        Err(_) => EnvFilter::new(default_directives(debug)),
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(debug)
        .with_level(true)
        .without_time()
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(stderr_layer)
        .try_init()
        .context("failed to initialize logging")?;

    Ok(())
}
