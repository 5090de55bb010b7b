//! config command - Show the effective configuration

use std::path::Path;

use crate::cli::Context;
use anyhow::Result;

/// Print effective config values and the files they were loaded from.
pub fn config(ctx: &Context) -> Result<()> {
    let config = ctx.config()?;

    println!("dirty_check = {}", config.dirty_check());
    println!("git_program = {}", config.git_program());
    println!("verbose = {}", config.verbose());

    if !ctx.quiet {
        println!();
        println!(
            "global config: {}",
            describe_source(config.global_config_loaded_from())
        );
        println!(
            "repo config: {}",
            describe_source(config.repo_config_loaded_from())
        );
    }

    Ok(())
}

fn describe_source(path: Option<&Path>) -> String {
    path.map(|p| p.display().to_string())
        .unwrap_or_else(|| "(none)".to_string())
}
