//! provider
//!
//! Cached access to git metadata for build-time stamping.
//!
//! # Lifecycle
//!
//! A [`GitStatusProvider`] is built once per run. Construction does all the
//! I/O: it checks for `.git`, runs the porcelain dirty check, reads the
//! metadata snapshot and fixes the fallback timestamp. After that, every
//! [`GitStatusProvider::query`] is answered from the snapshot and memoized;
//! the repository is assumed not to change for the life of the provider.
//!
//! # Example
//!
//! ```no_run
//! use gitstamp::provider::{GitQuery, GitStatusProvider};
//! use std::path::Path;
//!
//! let provider = GitStatusProvider::builder(Path::new(".")).build_default()?;
//! println!("{} @ {}", provider.query(GitQuery::Branch), provider.query(GitQuery::Commit));
//! # Ok::<(), gitstamp::provider::ProviderError>(())
//! ```

mod query;
mod source;

pub use query::{GitQuery, GitStamp, GitValue};
pub use source::{GitRepoSource, RepoInfoSource, StatusProbe};

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, SecondsFormat, Utc};
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::config::DirtyCheck;
use crate::git::{GitCli, GitError, RepoInfo};
use crate::ui::output::{ConsoleLog, Log};
use query::GitProps;

/// Errors from building or querying a provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The porcelain dirty check failed under [`DirtyCheck::Strict`].
    #[error("failed to check working tree status")]
    Status(#[source] GitError),

    /// Repository metadata could not be read.
    #[error("failed to read repository metadata")]
    RepoInfo(#[source] GitError),

    /// A query key outside the fixed set.
    #[error("not implemented: {key}")]
    NotImplemented {
        /// The key that was asked for
        key: String,
    },
}

/// Builder for [`GitStatusProvider`].
pub struct ProviderBuilder {
    cwd: PathBuf,
    dirty_check: DirtyCheck,
    log: Arc<dyn Log>,
    now: Option<DateTime<Utc>>,
}

impl ProviderBuilder {
    /// Policy for a failing dirty check.
    pub fn dirty_check(mut self, policy: DirtyCheck) -> Self {
        self.dirty_check = policy;
        self
    }

    /// Sink for the per-key "query once" lines.
    pub fn log(mut self, log: Arc<dyn Log>) -> Self {
        self.log = log;
        self
    }

    /// Pin the instant used when the repository has no author date.
    pub fn now(mut self, now: DateTime<Utc>) -> Self {
        self.now = Some(now);
        self
    }

    /// Build with the git2 metadata source and the `git` binary.
    pub fn build_default(self) -> Result<GitStatusProvider, ProviderError> {
        self.build(&GitRepoSource, &GitCli::default())
    }

    /// Build against explicit sources.
    ///
    /// # Errors
    ///
    /// - [`ProviderError::Status`] if the dirty check fails and the policy
    ///   is [`DirtyCheck::Strict`]
    /// - [`ProviderError::RepoInfo`] if the metadata source fails
    pub fn build(
        self,
        source: &dyn RepoInfoSource,
        probe: &dyn StatusProbe,
    ) -> Result<GitStatusProvider, ProviderError> {
        let now = self.now.unwrap_or_else(Utc::now);

        let mut tracked = self.cwd.join(".git").exists();

        let dirty = match probe.porcelain_status(&self.cwd) {
            Ok(output) => !output.trim().is_empty(),
            Err(e) => match self.dirty_check {
                DirtyCheck::Strict => return Err(ProviderError::Status(e)),
                DirtyCheck::Lenient => {
                    warn!(error = %e, "dirty check failed, treating tree as untracked");
                    self.log
                        .warn(&format!("git status failed, assuming untracked: {}", e));
                    tracked = false;
                    false
                }
            },
        };

        let repo_info = source
            .repo_info(&self.cwd)
            .map_err(ProviderError::RepoInfo)?;

        let unix_timestamp = match repo_info.author_date.as_deref() {
            Some(date) => match DateTime::parse_from_rfc3339(date) {
                Ok(parsed) => parsed.timestamp(),
                Err(e) => {
                    warn!(author_date = date, error = %e, "unparseable author date, using current time");
                    now.timestamp()
                }
            },
            None => now.timestamp(),
        };

        debug!(
            cwd = %self.cwd.display(),
            tracked,
            dirty,
            unix_timestamp,
            "git status provider ready"
        );

        Ok(GitStatusProvider {
            tracked,
            dirty,
            repo_info,
            unix_timestamp,
            now,
            log: self.log,
            props: Mutex::new(GitProps::default()),
        })
    }
}

/// Lazily memoized view of one repository's metadata.
///
/// `Send + Sync`: the cache sits behind a mutex, everything else is fixed at
/// construction.
pub struct GitStatusProvider {
    tracked: bool,
    dirty: bool,
    repo_info: RepoInfo,
    unix_timestamp: i64,
    /// Construction instant, used for every "no author date" fallback.
    now: DateTime<Utc>,
    log: Arc<dyn Log>,
    props: Mutex<GitProps>,
}

impl std::fmt::Debug for GitStatusProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitStatusProvider")
            .field("tracked", &self.tracked)
            .field("dirty", &self.dirty)
            .field("repo_info", &self.repo_info)
            .field("unix_timestamp", &self.unix_timestamp)
            .finish()
    }
}

impl GitStatusProvider {
    /// Start building a provider for `cwd`.
    pub fn builder(cwd: &Path) -> ProviderBuilder {
        ProviderBuilder {
            cwd: cwd.to_path_buf(),
            dirty_check: DirtyCheck::default(),
            log: Arc::new(ConsoleLog::default()),
            now: None,
        }
    }

    /// Whether a `.git` entry exists directly under the working directory.
    pub fn is_tracked(&self) -> bool {
        self.tracked
    }

    /// Whether `git status --porcelain` reported any change.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// The metadata snapshot read at construction.
    pub fn repo_info(&self) -> &RepoInfo {
        &self.repo_info
    }

    /// Resolve `key`, computing it on first use.
    ///
    /// The first resolution of a key is logged; later calls are plain cache
    /// reads. `isoTimestamp` and `unixTimestamp` are filled together.
    pub fn query(&self, key: GitQuery) -> GitValue {
        if let Some(value) = self.cached(key) {
            return value;
        }

        // Log without holding the cache lock
        self.log
            .debug(&format!("Query once: Git repository for '{}'", key));
        debug!(key = %key, "resolving git property");

        let mut props = self.props.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(value) = props.get(key) {
            return value;
        }

        let info = &self.repo_info;
        match key {
            GitQuery::Branch => {
                let branch = info.branch.clone().unwrap_or_default();
                props.branch = Some(branch.clone());
                GitValue::Text(branch)
            }
            GitQuery::Commit => {
                let commit = info.sha.clone().unwrap_or_default();
                props.commit = Some(commit.clone());
                GitValue::Text(commit)
            }
            GitQuery::IsoTimestamp | GitQuery::UnixTimestamp => {
                let iso = info
                    .author_date
                    .clone()
                    .unwrap_or_else(|| self.now.to_rfc3339_opts(SecondsFormat::Millis, true));
                props.iso_timestamp = Some(iso.clone());
                props.unix_timestamp = Some(self.unix_timestamp);

                if key == GitQuery::IsoTimestamp {
                    GitValue::Text(iso)
                } else {
                    GitValue::Timestamp(self.unix_timestamp)
                }
            }
            GitQuery::LatestTag => {
                let tag = info.last_tag.clone().unwrap_or_default();
                props.latest_tag = Some(tag.clone());
                GitValue::Text(tag)
            }
        }
    }

    fn cached(&self, key: GitQuery) -> Option<GitValue> {
        self.props
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
    }

    /// Resolve a key given by name.
    ///
    /// # Errors
    ///
    /// [`ProviderError::NotImplemented`] for names outside the fixed set.
    pub fn query_key(&self, key: &str) -> Result<GitValue, ProviderError> {
        Ok(self.query(key.parse()?))
    }

    /// Current branch, or `""`.
    pub fn branch(&self) -> String {
        self.query(GitQuery::Branch).to_string()
    }

    /// HEAD commit sha, or `""`.
    pub fn commit(&self) -> String {
        self.query(GitQuery::Commit).to_string()
    }

    /// Author date, or the construction instant, as ISO-8601.
    pub fn iso_timestamp(&self) -> String {
        self.query(GitQuery::IsoTimestamp).to_string()
    }

    /// Author date, or the construction instant, in unix seconds.
    pub fn unix_timestamp(&self) -> i64 {
        self.query(GitQuery::UnixTimestamp)
            .as_timestamp()
            .unwrap_or(self.unix_timestamp)
    }

    /// Nearest tag, or `""`.
    pub fn latest_tag(&self) -> String {
        self.query(GitQuery::LatestTag).to_string()
    }

    /// Resolve all five properties.
    pub fn stamp(&self) -> GitStamp {
        GitStamp {
            branch: self.branch(),
            commit: self.commit(),
            iso_timestamp: self.iso_timestamp(),
            unix_timestamp: self.unix_timestamp(),
            latest_tag: self.latest_tag(),
        }
    }
}
