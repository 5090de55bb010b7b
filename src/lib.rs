//! gitstamp - Cached git metadata for build-time stamping
//!
//! gitstamp answers the handful of questions a build needs to ask about the
//! repository it is building from: which branch, which commit, when it was
//! authored, the nearest tag, and whether the working tree is dirty. Answers
//! are read once per run and memoized.
//!
//! # Architecture
//!
//! - [`provider`] - `GitStatusProvider`: construction-time I/O, memoized queries
//! - [`git`] - Single interface for all Git access (git2 + the `git` binary)
//! - [`core`] - Configuration schema and loading
//! - [`cli`] - Command-line interface layer
//! - [`ui`] - Output and verbosity
//!
//! # Example
//!
//! ```no_run
//! use gitstamp::provider::{GitQuery, GitStatusProvider};
//! use std::path::Path;
//!
//! let provider = GitStatusProvider::builder(Path::new(".")).build_default()?;
//! if provider.is_dirty() {
//!     println!("{}-dirty", provider.query(GitQuery::Commit));
//! }
//! # Ok::<(), gitstamp::provider::ProviderError>(())
//! ```

pub mod cli;
pub mod core;
pub mod git;
pub mod provider;
pub mod ui;
