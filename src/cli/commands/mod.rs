//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Builds what it needs from the [`Context`] (config, provider)
//! 2. Reads values from the provider
//! 3. Formats and displays output
//!
//! Handlers never touch `git2` or spawn `git` themselves.

mod cargo_env;
mod completion;
mod config_cmd;
mod query;
mod show;
mod status;

// Re-export command functions for testing and direct invocation
pub use cargo_env::{cargo_env, cargo_env_lines};
pub use completion::completion;
pub use config_cmd::config;
pub use query::query;
pub use show::show;
pub use status::status;

use super::{Command, Context};
use anyhow::Result;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Query { key } => query::query(ctx, &key),
        Command::Status => status::status(ctx),
        Command::Show { json } => show::show(ctx, json),
        Command::CargoEnv { prefix } => cargo_env::cargo_env(ctx, &prefix),
        Command::Config => config_cmd::config(ctx),
        Command::Completion { shell } => completion::completion(shell),
    }
}
