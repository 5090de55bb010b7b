//! provider::source
//!
//! The two external inputs a provider reads at construction.

use std::path::Path;

use tracing::debug;

use crate::git::{Git, GitCli, GitError, RepoInfo};

/// Where repository metadata comes from.
pub trait RepoInfoSource {
    /// Read the metadata snapshot for the repository containing `dir`.
    fn repo_info(&self, dir: &Path) -> Result<RepoInfo, GitError>;
}

/// Where the working-tree status comes from.
pub trait StatusProbe {
    /// Porcelain status output for `dir`; empty means clean.
    fn porcelain_status(&self, dir: &Path) -> Result<String, GitError>;
}

/// Reads metadata through [`Git`].
///
/// A directory outside any repository yields an empty [`RepoInfo`] rather
/// than an error.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitRepoSource;

impl RepoInfoSource for GitRepoSource {
    fn repo_info(&self, dir: &Path) -> Result<RepoInfo, GitError> {
        let git = match Git::open(dir) {
            Ok(git) => git,
            Err(GitError::NotARepo { .. }) | Err(GitError::BareRepo) => {
                debug!(dir = %dir.display(), "no repository, metadata is empty");
                return Ok(RepoInfo::default());
            }
            Err(e) => return Err(e),
        };

        let info = git.repo_info()?;
        debug!(
            branch = ?info.branch,
            sha = ?info.sha,
            last_tag = ?info.last_tag,
            "read repository metadata"
        );
        Ok(info)
    }
}

impl StatusProbe for GitCli {
    fn porcelain_status(&self, dir: &Path) -> Result<String, GitError> {
        GitCli::porcelain_status(self, dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn non_repository_yields_empty_info() {
        let dir = TempDir::new().unwrap();
        let info = GitRepoSource.repo_info(dir.path()).unwrap();
        assert!(info.is_empty());
    }
}
