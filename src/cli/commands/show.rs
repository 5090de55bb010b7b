//! show command - Show every git property

use crate::cli::Context;
use crate::provider::{GitQuery, GitStamp};
use crate::ui::output::format_flag;
use anyhow::{Context as _, Result};
use serde::Serialize;

/// Everything the provider knows, for `--json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ShowOutput {
    tracked: bool,
    dirty: bool,
    #[serde(flatten)]
    stamp: GitStamp,
}

/// Print all properties, either as aligned `key: value` lines or JSON.
pub fn show(ctx: &Context, json: bool) -> Result<()> {
    let config = ctx.config()?;
    let provider = ctx.provider(&config)?;

    if json {
        let out = ShowOutput {
            tracked: provider.is_tracked(),
            dirty: provider.is_dirty(),
            stamp: provider.stamp(),
        };
        let text = serde_json::to_string_pretty(&out).context("Failed to serialize output")?;
        println!("{}", text);
        return Ok(());
    }

    println!("{:<14} {}", "tracked:", format_flag(provider.is_tracked()));
    println!("{:<14} {}", "dirty:", format_flag(provider.is_dirty()));
    for key in GitQuery::ALL {
        println!("{:<14} {}", format!("{}:", key), provider.query(key));
    }

    Ok(())
}
