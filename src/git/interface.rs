//! git::interface
//!
//! Git interface implementation using git2.
//!
//! # Error Handling
//!
//! Git errors are categorized into typed variants:
//! - [`GitError::NotARepo`]: Not inside a Git repository
//! - [`GitError::BareRepo`]: Repository has no working directory
//! - [`GitError::GitNotInstalled`]: The `git` binary could not be spawned
//! - [`GitError::CommandFailed`]: The `git` binary exited unsuccessfully
//!
//! Absent data (unborn HEAD, detached HEAD, no tags) is never an error here;
//! it is reported as `None`.

use std::path::{Path, PathBuf};

use chrono::{DateTime, FixedOffset, Offset, SecondsFormat, Utc};
use thiserror::Error;

/// Errors from Git operations.
#[derive(Debug, Error)]
pub enum GitError {
    /// Not inside a Git repository.
    #[error("not a git repository: {path}")]
    NotARepo {
        /// The path that was searched
        path: PathBuf,
    },

    /// Repository is bare (no working directory).
    #[error("bare repository not supported")]
    BareRepo,

    /// The git executable could not be found.
    #[error("git executable not found: {program}")]
    GitNotInstalled {
        /// The program that was looked up
        program: String,
    },

    /// The git executable ran but reported failure.
    #[error("git {} failed: {stderr}", args.join(" "))]
    CommandFailed {
        /// Arguments passed to git
        args: Vec<String>,
        /// Captured standard error, trimmed
        stderr: String,
    },

    /// I/O error while spawning or talking to a process.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal git2 error.
    #[error("git error: {message}")]
    Internal {
        /// The error message
        message: String,
    },
}

impl GitError {
    /// Create a GitError from a git2::Error with context.
    fn from_git2(err: git2::Error, context: &str) -> Self {
        GitError::Internal {
            message: format!("{}: {}", context, err.message()),
        }
    }
}

/// Snapshot of repository metadata.
///
/// Every field may be absent: a fresh repository has no commits, a detached
/// HEAD has no branch, and most repositories have no tags at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepoInfo {
    /// Current branch name
    pub branch: Option<String>,
    /// Full HEAD commit sha
    pub sha: Option<String>,
    /// HEAD author date, RFC 3339
    pub author_date: Option<String>,
    /// Nearest reachable tag
    pub last_tag: Option<String>,
}

impl RepoInfo {
    /// True when no field is populated.
    pub fn is_empty(&self) -> bool {
        self.branch.is_none()
            && self.sha.is_none()
            && self.author_date.is_none()
            && self.last_tag.is_none()
    }
}

/// The Git interface.
///
/// Read-only view over a discovered repository. All metadata reads used by
/// the provider flow through here.
pub struct Git {
    /// The underlying git2 repository
    repo: git2::Repository,
}

impl std::fmt::Debug for Git {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Git")
            .field("path", &self.repo.path())
            .finish()
    }
}

impl Git {
    /// Open a repository at the given path.
    ///
    /// Uses `git2::Repository::discover` to find the repository root,
    /// so `path` can be any directory within the repository.
    ///
    /// # Errors
    ///
    /// - [`GitError::NotARepo`] if no repository is found
    /// - [`GitError::BareRepo`] if the repository has no working directory
    pub fn open(path: &Path) -> Result<Self, GitError> {
        let repo = git2::Repository::discover(path).map_err(|_| GitError::NotARepo {
            path: path.to_path_buf(),
        })?;

        if repo.is_bare() {
            return Err(GitError::BareRepo);
        }

        Ok(Self { repo })
    }

    /// Resolve HEAD, treating an unborn branch as absent.
    fn head(&self) -> Result<Option<git2::Reference<'_>>, GitError> {
        match self.repo.head() {
            Ok(head) => Ok(Some(head)),
            Err(e)
                if e.code() == git2::ErrorCode::UnbornBranch
                    || e.code() == git2::ErrorCode::NotFound =>
            {
                Ok(None)
            }
            Err(e) => Err(GitError::from_git2(e, "HEAD")),
        }
    }

    /// Get the current branch name, if on a branch.
    ///
    /// Returns `None` if HEAD is detached or unborn.
    pub fn current_branch(&self) -> Result<Option<String>, GitError> {
        let Some(head) = self.head()? else {
            return Ok(None);
        };

        if head.is_branch() {
            return Ok(head.shorthand().map(str::to_string));
        }

        Ok(None)
    }

    /// Get the HEAD commit sha.
    ///
    /// Returns `None` if HEAD is unborn (new repository).
    pub fn head_oid(&self) -> Result<Option<String>, GitError> {
        let Some(head) = self.head()? else {
            return Ok(None);
        };

        let commit = head
            .peel_to_commit()
            .map_err(|e| GitError::from_git2(e, "HEAD"))?;

        Ok(Some(commit.id().to_string()))
    }

    /// Get the author date of the HEAD commit in the author's own offset.
    pub fn head_author_date(&self) -> Result<Option<DateTime<FixedOffset>>, GitError> {
        let Some(head) = self.head()? else {
            return Ok(None);
        };

        let commit = head
            .peel_to_commit()
            .map_err(|e| GitError::from_git2(e, "HEAD"))?;

        let when = commit.author().when();
        let offset = FixedOffset::east_opt(when.offset_minutes() * 60)
            .unwrap_or_else(|| Utc.fix());
        Ok(DateTime::from_timestamp(when.seconds(), 0).map(|utc| utc.with_timezone(&offset)))
    }

    /// Get the nearest tag reachable from HEAD.
    ///
    /// Considers lightweight and annotated tags, like
    /// `git describe --tags --abbrev=0`. Returns `None` when HEAD is unborn
    /// or no tag is reachable.
    pub fn latest_tag(&self) -> Result<Option<String>, GitError> {
        if self.head()?.is_none() {
            return Ok(None);
        }

        let tags = self
            .repo
            .tag_names(None)
            .map_err(|e| GitError::from_git2(e, "tag list"))?;
        if tags.is_empty() {
            return Ok(None);
        }

        let mut opts = git2::DescribeOptions::new();
        opts.describe_tags();

        // libgit2 reports "nothing to describe" with the generic code
        let describe = match self.repo.describe(&opts) {
            Ok(d) => d,
            Err(e)
                if e.code() == git2::ErrorCode::NotFound
                    || e.class() == git2::ErrorClass::Describe =>
            {
                return Ok(None)
            }
            Err(e) => return Err(GitError::from_git2(e, "describe")),
        };

        let mut format = git2::DescribeFormatOptions::new();
        format.abbreviated_size(0);

        let tag = describe
            .format(Some(&format))
            .map_err(|e| GitError::from_git2(e, "describe"))?;

        Ok(Some(tag))
    }

    /// Read the full metadata snapshot.
    pub fn repo_info(&self) -> Result<RepoInfo, GitError> {
        Ok(RepoInfo {
            branch: self.current_branch()?,
            sha: self.head_oid()?,
            author_date: self
                .head_author_date()?
                .map(|d| d.to_rfc3339_opts(SecondsFormat::Secs, true)),
            last_tag: self.latest_tag()?,
        })
    }
}
