//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! gitstamp has two configuration scopes:
//! - **Global**: User-level settings
//! - **Repo**: Per-project overrides, checked in next to the sources
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Global config file
//! 3. Repo config file
//! 4. CLI flags (not handled here)
//!
//! # Global Config Locations
//!
//! Searched in order:
//! 1. `$GITSTAMP_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/gitstamp/config.toml`
//! 3. `~/.gitstamp/config.toml`
//!
//! # Repo Config Location
//!
//! `.gitstamp.toml` in the working directory.
//!
//! # Example
//!
//! ```no_run
//! use gitstamp::core::config::Config;
//! use std::path::Path;
//!
//! let config = Config::load(Some(Path::new("/path/to/project"))).unwrap();
//! println!("dirty check: {}", config.dirty_check());
//! println!("git: {}", config.git_program());
//! ```

pub mod schema;

pub use schema::{DirtyCheck, StampConfig};

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of the repo-scoped config.
pub const REPO_CONFIG_FILE: &str = ".gitstamp.toml";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("home directory not found")]
    NoHomeDir,
}

/// Merged configuration from all sources.
///
/// Accessors apply precedence rules: repo config overrides global config,
/// which overrides built-in defaults.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: StampConfig,
    /// Repository configuration (if present)
    pub repo: Option<StampConfig>,
    /// Path to the global config file (if loaded)
    global_path: Option<PathBuf>,
    /// Path to the repo config file (if loaded)
    repo_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// If `dir` is provided, also loads `.gitstamp.toml` from it.
    ///
    /// # Errors
    ///
    /// Returns an error if config files exist but cannot be parsed.
    /// Missing config files are not an error (defaults are used).
    pub fn load(dir: Option<&Path>) -> Result<Config, ConfigError> {
        let (global, global_path) = Self::load_global()?;

        let (repo, repo_path) = match dir {
            Some(dir) => Self::load_repo(dir)?,
            None => (None, None),
        };

        global.validate()?;
        if let Some(ref r) = repo {
            r.validate()?;
        }

        Ok(Config {
            global,
            repo,
            global_path,
            repo_path,
        })
    }

    /// Load global configuration from standard locations.
    fn load_global() -> Result<(StampConfig, Option<PathBuf>), ConfigError> {
        // 1. Check $GITSTAMP_CONFIG
        if let Ok(path) = std::env::var("GITSTAMP_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                let config = Self::read_config(&path)?;
                return Ok((config, Some(path)));
            }
        }

        // 2. Check $XDG_CONFIG_HOME/gitstamp/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("gitstamp/config.toml");
            if path.exists() {
                let config = Self::read_config(&path)?;
                return Ok((config, Some(path)));
            }
        }

        // 3. Check ~/.gitstamp/config.toml
        if let Ok(path) = Self::global_config_path() {
            if path.exists() {
                let config = Self::read_config(&path)?;
                return Ok((config, Some(path)));
            }
        }

        Ok((StampConfig::default(), None))
    }

    /// Load `.gitstamp.toml` from `dir` if it exists.
    fn load_repo(dir: &Path) -> Result<(Option<StampConfig>, Option<PathBuf>), ConfigError> {
        let path = dir.join(REPO_CONFIG_FILE);
        if !path.exists() {
            return Ok((None, None));
        }

        let config = Self::read_config(&path)?;
        Ok((Some(config), Some(path)))
    }

    /// Read and parse a config file.
    fn read_config(path: &Path) -> Result<StampConfig, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Get the canonical path for global config.
    ///
    /// Returns `~/.gitstamp/config.toml`.
    pub fn global_config_path() -> Result<PathBuf, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".gitstamp/config.toml"))
    }

    // =========================================================================
    // Accessor methods with precedence
    // =========================================================================

    /// Dirty check failure policy.
    ///
    /// Defaults to [`DirtyCheck::Strict`] if not configured.
    pub fn dirty_check(&self) -> DirtyCheck {
        self.repo
            .as_ref()
            .and_then(|r| r.dirty_check)
            .or(self.global.dirty_check)
            .unwrap_or_default()
    }

    /// Program used for the porcelain status call.
    ///
    /// Defaults to `git` if not configured.
    pub fn git_program(&self) -> &str {
        self.repo
            .as_ref()
            .and_then(|r| r.git_program.as_deref())
            .or(self.global.git_program.as_deref())
            .unwrap_or("git")
    }

    /// Whether debug output is on by default.
    ///
    /// Defaults to `false` if not configured.
    pub fn verbose(&self) -> bool {
        self.repo
            .as_ref()
            .and_then(|r| r.verbose)
            .or(self.global.verbose)
            .unwrap_or(false)
    }

    /// Get the path to the loaded global config file.
    pub fn global_config_loaded_from(&self) -> Option<&Path> {
        self.global_path.as_deref()
    }

    /// Get the path to the loaded repo config file.
    pub fn repo_config_loaded_from(&self) -> Option<&Path> {
        self.repo_path.as_deref()
    }
}
