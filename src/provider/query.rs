//! provider::query
//!
//! Query keys, resolved values, and the per-key cache.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::ProviderError;

/// The fixed set of properties a provider can answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GitQuery {
    Branch,
    Commit,
    IsoTimestamp,
    UnixTimestamp,
    LatestTag,
}

impl GitQuery {
    /// Every key, in display order.
    pub const ALL: [GitQuery; 5] = [
        GitQuery::Branch,
        GitQuery::Commit,
        GitQuery::IsoTimestamp,
        GitQuery::UnixTimestamp,
        GitQuery::LatestTag,
    ];

    /// Key name as accepted by [`GitQuery::from_str`].
    pub fn as_str(&self) -> &'static str {
        match self {
            GitQuery::Branch => "branch",
            GitQuery::Commit => "commit",
            GitQuery::IsoTimestamp => "isoTimestamp",
            GitQuery::UnixTimestamp => "unixTimestamp",
            GitQuery::LatestTag => "latestTag",
        }
    }
}

impl fmt::Display for GitQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GitQuery {
    type Err = ProviderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GitQuery::ALL
            .into_iter()
            .find(|q| q.as_str() == s)
            .ok_or_else(|| ProviderError::NotImplemented { key: s.to_string() })
    }
}

/// A resolved property value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum GitValue {
    Text(String),
    Timestamp(i64),
}

impl GitValue {
    /// The text, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            GitValue::Text(s) => Some(s),
            GitValue::Timestamp(_) => None,
        }
    }

    /// The seconds, if this is a timestamp value.
    pub fn as_timestamp(&self) -> Option<i64> {
        match self {
            GitValue::Timestamp(t) => Some(*t),
            GitValue::Text(_) => None,
        }
    }
}

impl fmt::Display for GitValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GitValue::Text(s) => f.write_str(s),
            GitValue::Timestamp(t) => write!(f, "{}", t),
        }
    }
}

/// Memoized property slots. A slot moves from `None` to `Some` once and
/// never back.
#[derive(Debug, Clone, Default)]
pub(crate) struct GitProps {
    pub(crate) branch: Option<String>,
    pub(crate) commit: Option<String>,
    pub(crate) iso_timestamp: Option<String>,
    pub(crate) unix_timestamp: Option<i64>,
    pub(crate) latest_tag: Option<String>,
}

impl GitProps {
    /// Cached value for `key`, if resolved.
    pub(crate) fn get(&self, key: GitQuery) -> Option<GitValue> {
        match key {
            GitQuery::Branch => self.branch.clone().map(GitValue::Text),
            GitQuery::Commit => self.commit.clone().map(GitValue::Text),
            GitQuery::IsoTimestamp => self.iso_timestamp.clone().map(GitValue::Text),
            GitQuery::UnixTimestamp => self.unix_timestamp.map(GitValue::Timestamp),
            GitQuery::LatestTag => self.latest_tag.clone().map(GitValue::Text),
        }
    }
}

/// All five properties at once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GitStamp {
    pub branch: String,
    pub commit: String,
    pub iso_timestamp: String,
    pub unix_timestamp: i64,
    pub latest_tag: String,
}
