//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`EnvName`] - Validated snapshot name
//!
//! # Validation
//!
//! These types enforce validity at construction time. Invalid values
//! cannot be represented, preventing entire classes of bugs.
//!
//! # Examples
//!
//! ```
//! use superenv::core::types::EnvName;
//!
//! let name = EnvName::new("staging").unwrap();
//! assert_eq!(name.file_name(), ".staging.env");
//!
//! // Dots would make the on-disk name ambiguous
//! assert!(EnvName::new("a.b").is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Prefix of every snapshot file name.
pub const SNAPSHOT_PREFIX: &str = ".";

/// Suffix of every snapshot file name.
pub const SNAPSHOT_SUFFIX: &str = ".env";

/// Longest accepted snapshot name.
pub const MAX_NAME_LEN: usize = 64;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid environment name '{name}': {reason}")]
    InvalidEnvName { name: String, reason: String },
}

/// A validated snapshot name.
///
/// Names map one-to-one onto file names of the form `.<name>.env`, so the
/// character set is restricted to what can be recovered from a file name
/// unambiguously:
/// - Cannot be empty
/// - At most [`MAX_NAME_LEN`] characters
/// - Only ASCII letters, digits, `-` and `_`
///
/// # Example
///
/// ```
/// use superenv::core::types::EnvName;
///
/// assert!(EnvName::new("prod").is_ok());
/// assert!(EnvName::new("feature_x-2").is_ok());
///
/// assert!(EnvName::new("").is_err());
/// assert!(EnvName::new("../etc").is_err());
/// assert!(EnvName::new("has space").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EnvName(String);

impl EnvName {
    /// Create a new validated snapshot name.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidEnvName` if the name contains anything
    /// other than ASCII alphanumerics, `-` or `_`, or is empty or too long.
    pub fn new(name: impl Into<String>) -> Result<Self, TypeError> {
        let name = name.into();
        Self::validate(&name)?;
        Ok(Self(name))
    }

    fn validate(name: &str) -> Result<(), TypeError> {
        let invalid = |reason: String| TypeError::InvalidEnvName {
            name: name.to_string(),
            reason,
        };

        if name.is_empty() {
            return Err(invalid("name cannot be empty".into()));
        }

        if name.len() > MAX_NAME_LEN {
            return Err(invalid(format!(
                "name cannot be longer than {} characters",
                MAX_NAME_LEN
            )));
        }

        if let Some(c) = name
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
        {
            let shown = if c.is_control() {
                "control characters".to_string()
            } else {
                format!("'{}'", c)
            };
            return Err(invalid(format!(
                "name cannot contain {} (allowed: letters, digits, '-', '_')",
                shown
            )));
        }

        Ok(())
    }

    /// Recover a name from a snapshot file name such as `.staging.env`.
    ///
    /// Only the fixed leading dot and trailing `.env` are stripped. Returns
    /// `None` when the file name does not follow the pattern or the remainder
    /// is not a valid name.
    ///
    /// ```
    /// use superenv::core::types::EnvName;
    ///
    /// assert_eq!(EnvName::from_file_name(".dev.env").unwrap().as_str(), "dev");
    /// assert!(EnvName::from_file_name(".a.b.env").is_none());
    /// assert!(EnvName::from_file_name("dev.env").is_none());
    /// ```
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let stem = file_name
            .strip_prefix(SNAPSHOT_PREFIX)?
            .strip_suffix(SNAPSHOT_SUFFIX)?;
        Self::new(stem).ok()
    }

    /// The on-disk file name for this snapshot (`.<name>.env`).
    pub fn file_name(&self) -> String {
        format!("{}{}{}", SNAPSHOT_PREFIX, self.0, SNAPSHOT_SUFFIX)
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for EnvName {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<EnvName> for String {
    fn from(name: EnvName) -> Self {
        name.0
    }
}

impl AsRef<str> for EnvName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EnvName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for EnvName {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
