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
//! - `--quiet` / `-q`: Minimal output
//! - `--lenient`: Do not fail when `git status` cannot run

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// gitstamp - Cached git metadata for build-time stamping
#[derive(Parser, Debug)]
#[command(name = "gitstamp")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as if gitstamp was started in this directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Treat a failing `git status` as an untracked, clean tree
    #[arg(long, global = true)]
    pub lenient: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print a single git property
    #[command(
        name = "query",
        long_about = "Print a single git property.\n\n\
            Valid keys are branch, commit, isoTimestamp, unixTimestamp and latestTag. \
            Missing values print as an empty line; timestamps fall back to the current \
            time when HEAD has no author date.",
        after_help = "\
EXAMPLES:
    gitstamp query branch
    gitstamp query unixTimestamp
    gitstamp --cwd ../other query latestTag"
    )]
    Query {
        /// Property name
        key: String,
    },

    /// Show whether the directory is tracked and the tree is dirty
    Status,

    /// Show every property
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print cargo:rustc-env lines for use from build.rs
    #[command(
        name = "cargo-env",
        after_help = "\
EXAMPLES:
    # From build.rs, run this and forward its stdout to cargo
    gitstamp cargo-env
    gitstamp cargo-env --prefix BUILD_GIT"
    )]
    CargoEnv {
        /// Prefix for the environment variable names
        #[arg(long, default_value = "GIT")]
        prefix: String,
    },

    /// Show the effective configuration and where it came from
    Config,

    /// Generate shell completion scripts
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

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["gitstamp", "query", "branch", "--debug", "--lenient"])
            .unwrap();
        assert!(cli.debug);
        assert!(cli.lenient);
        assert!(matches!(cli.command, Command::Query { ref key } if key == "branch"));
    }

    #[test]
    fn cargo_env_default_prefix() {
        let cli = Cli::try_parse_from(["gitstamp", "cargo-env"]).unwrap();
        assert!(matches!(cli.command, Command::CargoEnv { ref prefix } if prefix == "GIT"));
    }

    #[test]
    fn subcommand_required() {
        assert!(Cli::try_parse_from(["gitstamp"]).is_err());
    }
}
