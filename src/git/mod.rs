//! git
//!
//! Single interface for all Git access.
//!
//! # Architecture
//!
//! This module is the **only doorway** to Git. Repository metadata is read
//! through [`Git`] (backed by `git2`); the working-tree dirty check goes
//! through [`GitCli`], which shells out to the `git` binary. No other module
//! should import `git2` or spawn `git` directly.
//!
//! # Responsibilities
//!
//! - Repository discovery and opening
//! - HEAD inspection (branch, commit, author date)
//! - Nearest-tag lookup
//! - Porcelain status of the working tree
//!
//! # Example
//!
//! ```ignore
//! use gitstamp::git::{Git, GitCli};
//! use std::path::Path;
//!
//! let git = Git::open(Path::new("."))?;
//! let info = git.repo_info()?;
//! println!("on {:?} at {:?}", info.branch, info.sha);
//!
//! let dirty = !GitCli::default().porcelain_status(Path::new("."))?.is_empty();
//! ```

mod interface;
mod status;

pub use interface::{Git, GitError, RepoInfo};
pub use status::GitCli;
