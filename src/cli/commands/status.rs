//! status command - Show tracked/dirty state of the working directory

use crate::cli::Context;
use crate::ui::output::{self, format_flag};
use anyhow::Result;

/// Print whether the directory is tracked and whether the tree is dirty.
pub fn status(ctx: &Context) -> Result<()> {
    let config = ctx.config()?;
    let verbosity = ctx.verbosity(&config);
    let provider = ctx.provider(&config)?;

    output::print(
        format!("tracked: {}", format_flag(provider.is_tracked())),
        verbosity,
    );
    output::print(
        format!("dirty: {}", format_flag(provider.is_dirty())),
        verbosity,
    );

    Ok(())
}
