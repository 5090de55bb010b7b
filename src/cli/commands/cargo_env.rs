//! cargo-env command - Emit cargo:rustc-env lines for build scripts

use crate::cli::Context;
use crate::provider::{GitQuery, GitStatusProvider};
use anyhow::{bail, Result};

/// Environment variable suffix for a query key.
fn env_suffix(key: GitQuery) -> &'static str {
    match key {
        GitQuery::Branch => "BRANCH",
        GitQuery::Commit => "COMMIT",
        GitQuery::IsoTimestamp => "ISO_TIMESTAMP",
        GitQuery::UnixTimestamp => "UNIX_TIMESTAMP",
        GitQuery::LatestTag => "LATEST_TAG",
    }
}

/// Build the `cargo:rustc-env=...` lines for `provider`.
///
/// Emits one line per query key plus `<PREFIX>_DIRTY` and
/// `<PREFIX>_TRACKED` as `true`/`false`.
pub fn cargo_env_lines(provider: &GitStatusProvider, prefix: &str) -> Vec<String> {
    let mut lines: Vec<String> = GitQuery::ALL
        .into_iter()
        .map(|key| {
            format!(
                "cargo:rustc-env={}_{}={}",
                prefix,
                env_suffix(key),
                provider.query(key)
            )
        })
        .collect();

    lines.push(format!(
        "cargo:rustc-env={}_DIRTY={}",
        prefix,
        provider.is_dirty()
    ));
    lines.push(format!(
        "cargo:rustc-env={}_TRACKED={}",
        prefix,
        provider.is_tracked()
    ));
    lines
}

/// Print the rustc-env lines.
pub fn cargo_env(ctx: &Context, prefix: &str) -> Result<()> {
    if prefix.is_empty()
        || !prefix
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
    {
        bail!(
            "Invalid prefix '{}': use uppercase letters, digits and underscores",
            prefix
        );
    }

    let config = ctx.config()?;
    let provider = ctx.provider(&config)?;
    for line in cargo_env_lines(&provider, prefix) {
        println!("{}", line);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::{GitError, RepoInfo};
    use crate::provider::{RepoInfoSource, StatusProbe};
    use std::path::Path;

    struct Fixed;

    impl RepoInfoSource for Fixed {
        fn repo_info(&self, _dir: &Path) -> Result<RepoInfo, GitError> {
            Ok(RepoInfo {
                branch: Some("main".to_string()),
                sha: Some("abc123".to_string()),
                author_date: Some("2021-01-01T00:00:00Z".to_string()),
                last_tag: None,
            })
        }
    }

    impl StatusProbe for Fixed {
        fn porcelain_status(&self, _dir: &Path) -> Result<String, GitError> {
            Ok("?? new.txt".to_string())
        }
    }

    #[test]
    fn lines_cover_every_key() {
        let dir = tempfile::TempDir::new().unwrap();
        let provider = GitStatusProvider::builder(dir.path())
            .build(&Fixed, &Fixed)
            .unwrap();

        let lines = cargo_env_lines(&provider, "GIT");

        assert_eq!(
            lines,
            vec![
                "cargo:rustc-env=GIT_BRANCH=main",
                "cargo:rustc-env=GIT_COMMIT=abc123",
                "cargo:rustc-env=GIT_ISO_TIMESTAMP=2021-01-01T00:00:00Z",
                "cargo:rustc-env=GIT_UNIX_TIMESTAMP=1609459200",
                "cargo:rustc-env=GIT_LATEST_TAG=",
                "cargo:rustc-env=GIT_DIRTY=true",
                "cargo:rustc-env=GIT_TRACKED=false",
            ]
        );
    }

    #[test]
    fn invalid_prefix_rejected() {
        let ctx = Context::default();
        assert!(cargo_env(&ctx, "git-").is_err());
        assert!(cargo_env(&ctx, "").is_err());
    }
}
