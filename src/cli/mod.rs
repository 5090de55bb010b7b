//! cli
//!
//! Command-line interface layer for gitstamp.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Load configuration and build the provider
//! - Delegate to command handlers
//!
//! The CLI layer is thin. Everything it prints comes from
//! [`crate::provider::GitStatusProvider`].

pub mod args;
pub mod commands;

pub use args::{Cli, Command, Shell};

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context as _, Result};

use crate::core::config::{Config, DirtyCheck};
use crate::git::GitCli;
use crate::provider::{GitRepoSource, GitStatusProvider};
use crate::ui::output::{ConsoleLog, Verbosity};

/// Execution context for commands.
///
/// Contains global settings derived from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Working directory override.
    pub cwd: Option<PathBuf>,
    /// Debug logging enabled.
    pub debug: bool,
    /// Quiet mode (minimal output).
    pub quiet: bool,
    /// Force the lenient dirty check.
    pub lenient: bool,
}

impl Context {
    /// The directory commands operate on.
    pub fn work_dir(&self) -> Result<PathBuf> {
        match &self.cwd {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir().context("Failed to determine current directory"),
        }
    }

    /// Load configuration for the working directory.
    pub fn config(&self) -> Result<Config> {
        let dir = self.work_dir()?;
        Config::load(Some(&dir)).context("Failed to load configuration")
    }

    /// Verbosity after applying the `verbose` config key.
    pub fn verbosity(&self, config: &Config) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug).promote(config.verbose())
    }

    /// Build the provider for the working directory.
    pub fn provider(&self, config: &Config) -> Result<GitStatusProvider> {
        let dir = self.work_dir()?;
        let log = Arc::new(ConsoleLog::new(self.verbosity(config)));

        let dirty_check = if self.lenient {
            DirtyCheck::Lenient
        } else {
            config.dirty_check()
        };

        GitStatusProvider::builder(&dir)
            .dirty_check(dirty_check)
            .log(log)
            .build(&GitRepoSource, &GitCli::new(config.git_program()))
            .with_context(|| format!("Failed to read git state in {}", dir.display()))
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let ctx = Context {
        cwd: cli.cwd.clone(),
        debug: cli.debug,
        quiet: cli.quiet,
        lenient: cli.lenient,
    };

    init_tracing(ctx.debug);

    commands::dispatch(cli.command, &ctx)
}

/// Install the stderr tracing subscriber.
///
/// `GITSTAMP_LOG` takes an `EnvFilter` directive; otherwise `--debug`
/// selects `debug` and everything else `warn`.
fn init_tracing(debug: bool) {
    use tracing_subscriber::EnvFilter;

    let default = if debug { "gitstamp=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("GITSTAMP_LOG").unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
