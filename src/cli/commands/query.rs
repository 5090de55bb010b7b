//! query command - Print a single git property

use crate::cli::Context;
use anyhow::Result;

/// Print the value for `key`.
///
/// Empty values still print a (blank) line so callers reading stdout always
/// get exactly one line.
pub fn query(ctx: &Context, key: &str) -> Result<()> {
    let config = ctx.config()?;
    let provider = ctx.provider(&config)?;
    let value = provider.query_key(key)?;
    println!("{}", value);
    Ok(())
}
