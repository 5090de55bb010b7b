//! core::config::schema
//!
//! Configuration schema types.
//!
//! The same schema is used for the global file and the repo file; the repo
//! file wins key by key.
//!
//! # Validation
//!
//! Values are validated after parsing (e.g. `git_program` must name
//! something).

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// What to do when the working-tree dirty check cannot run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirtyCheck {
    /// Fail provider construction.
    #[default]
    Strict,
    /// Report the tree as untracked and clean, and keep going.
    Lenient,
}

impl DirtyCheck {
    /// Name as written in config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            DirtyCheck::Strict => "strict",
            DirtyCheck::Lenient => "lenient",
        }
    }
}

impl std::fmt::Display for DirtyCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contents of a gitstamp config file.
///
/// # Example
///
/// ```toml
/// dirty_check = "lenient"
/// git_program = "/usr/local/bin/git"
/// verbose = true
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct StampConfig {
    /// Dirty check failure policy
    pub dirty_check: Option<DirtyCheck>,

    /// Program used for `git status --porcelain`
    pub git_program: Option<String>,

    /// Show debug output without `--debug`
    pub verbose: Option<bool>,
}

impl StampConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(program) = &self.git_program {
            if program.trim().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "git_program cannot be empty".to_string(),
                ));
            }
            if program.trim() != program {
                return Err(ConfigError::InvalidValue(format!(
                    "git_program has surrounding whitespace: '{}'",
                    program
                )));
            }
        }

        Ok(())
    }
}
