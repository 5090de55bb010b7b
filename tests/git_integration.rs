//! Integration tests for the Git interface.
//!
//! These tests use real git repositories created via tempfile to verify
//! that metadata reads match what the git binary reports.

use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

use gitstamp::git::{Git, GitCli, GitError};

/// Test fixture that creates a real git repository.
struct TestRepo {
    dir: TempDir,
}

impl TestRepo {
    /// Create an empty repository on `main` with no commits.
    fn empty() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");

        run_git(dir.path(), &["init", "-b", "main"]);
        run_git(dir.path(), &["config", "user.email", "test@example.com"]);
        run_git(dir.path(), &["config", "user.name", "Test User"]);
        run_git(dir.path(), &["config", "commit.gpgsign", "false"]);
        run_git(dir.path(), &["config", "tag.gpgsign", "false"]);

        Self { dir }
    }

    /// Create a repository with an initial commit.
    fn new() -> Self {
        let repo = Self::empty();
        repo.commit_file("README.md", "# Test Repo\n", "Initial commit");
        repo
    }

    /// Get the path to the repository.
    fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Open a Git interface to this repository.
    fn git(&self) -> Git {
        Git::open(self.path()).expect("failed to open test repo")
    }

    /// Create a file and commit it.
    fn commit_file(&self, path: &str, content: &str, message: &str) {
        std::fs::write(self.path().join(path), content).unwrap();
        run_git(self.path(), &["add", path]);
        run_git(self.path(), &["commit", "-m", message]);
    }

    /// Commit a file with a fixed author date.
    fn commit_at(&self, path: &str, author_date: &str) {
        std::fs::write(self.path().join(path), author_date).unwrap();
        run_git(self.path(), &["add", path]);
        let output = Command::new("git")
            .args(["commit", "-m", "dated commit"])
            .env("GIT_AUTHOR_DATE", author_date)
            .current_dir(self.path())
            .output()
            .expect("git commit failed");
        assert!(
            output.status.success(),
            "git commit failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }

    /// Get HEAD OID using git directly.
    fn head_oid_raw(&self) -> String {
        let output = Command::new("git")
            .args(["rev-parse", "HEAD"])
            .current_dir(self.path())
            .output()
            .expect("git rev-parse failed");
        String::from_utf8(output.stdout).unwrap().trim().to_string()
    }
}

/// Run a git command in the given directory.
fn run_git(dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("git command failed");

    if !output.status.success() {
        panic!(
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
    }
}

// =============================================================================
// Repository Opening Tests
// =============================================================================

#[test]
fn open_valid_repository() {
    let repo = TestRepo::new();
    assert!(Git::open(repo.path()).is_ok());
}

#[test]
fn open_from_subdirectory() {
    let repo = TestRepo::new();
    let subdir = repo.path().join("subdir");
    std::fs::create_dir(&subdir).unwrap();

    assert!(Git::open(&subdir).is_ok());
}

#[test]
fn open_non_repository_fails() {
    let dir = TempDir::new().unwrap();
    let git = Git::open(dir.path());
    assert!(matches!(git, Err(GitError::NotARepo { .. })));
}

// =============================================================================
// HEAD Tests
// =============================================================================

#[test]
fn branch_and_sha_match_git() {
    let repo = TestRepo::new();
    let git = repo.git();

    assert_eq!(git.current_branch().unwrap().as_deref(), Some("main"));
    assert_eq!(git.head_oid().unwrap(), Some(repo.head_oid_raw()));
}

#[test]
fn detached_head_has_no_branch() {
    let repo = TestRepo::new();
    let sha = repo.head_oid_raw();
    run_git(repo.path(), &["checkout", "--detach", "HEAD"]);

    let git = repo.git();
    assert_eq!(git.current_branch().unwrap(), None);
    assert_eq!(git.head_oid().unwrap(), Some(sha));
}

#[test]
fn unborn_head_reports_nothing() {
    let repo = TestRepo::empty();
    let info = repo.git().repo_info().unwrap();

    assert!(info.is_empty());
}

#[test]
fn author_date_in_utc() {
    let repo = TestRepo::new();
    repo.commit_at("dated.txt", "2021-01-01T00:00:00 +0000");

    let info = repo.git().repo_info().unwrap();
    assert_eq!(info.author_date.as_deref(), Some("2021-01-01T00:00:00Z"));
}

#[test]
fn author_date_keeps_offset() {
    let repo = TestRepo::new();
    repo.commit_at("dated.txt", "2021-01-01T02:00:00 +0200");

    let date = repo.git().head_author_date().unwrap().unwrap();
    assert_eq!(date.timestamp(), 1609459200);
    assert_eq!(date.to_rfc3339(), "2021-01-01T02:00:00+02:00");
}

// =============================================================================
// Tag Tests
// =============================================================================

#[test]
fn no_tags_means_no_latest_tag() {
    let repo = TestRepo::new();
    assert_eq!(repo.git().latest_tag().unwrap(), None);
}

#[test]
fn repo_info_without_tags() {
    let repo = TestRepo::new();
    repo.commit_file("second.txt", "second", "Second commit");

    let info = repo.git().repo_info().unwrap();
    assert_eq!(info.branch.as_deref(), Some("main"));
    assert_eq!(info.sha, Some(repo.head_oid_raw()));
    assert!(info.author_date.is_some());
    assert_eq!(info.last_tag, None);
}

#[test]
fn tag_off_history_is_not_latest() {
    let repo = TestRepo::new();
    run_git(repo.path(), &["checkout", "-b", "side"]);
    repo.commit_file("side.txt", "side", "Side commit");
    run_git(repo.path(), &["tag", "v9.9.9"]);
    run_git(repo.path(), &["checkout", "main"]);

    assert_eq!(repo.git().latest_tag().unwrap(), None);
}

#[test]
fn lightweight_tag_on_ancestor() {
    let repo = TestRepo::new();
    run_git(repo.path(), &["tag", "v0.1.0"]);
    repo.commit_file("later.txt", "later", "Later commit");

    assert_eq!(repo.git().latest_tag().unwrap().as_deref(), Some("v0.1.0"));
}

#[test]
fn nearest_annotated_tag_wins() {
    let repo = TestRepo::new();
    run_git(repo.path(), &["tag", "v0.1.0"]);
    repo.commit_file("later.txt", "later", "Later commit");
    run_git(repo.path(), &["tag", "-a", "v0.2.0", "-m", "release 0.2.0"]);

    assert_eq!(repo.git().latest_tag().unwrap().as_deref(), Some("v0.2.0"));
}

// =============================================================================
// Porcelain Status Tests
// =============================================================================

#[test]
fn porcelain_clean_tree_is_empty() {
    let repo = TestRepo::new();
    let out = GitCli::default().porcelain_status(repo.path()).unwrap();
    assert!(out.is_empty());
}

#[test]
fn porcelain_reports_modification() {
    let repo = TestRepo::new();
    std::fs::write(repo.path().join("README.md"), "changed\n").unwrap();

    let out = GitCli::default().porcelain_status(repo.path()).unwrap();
    assert!(out.contains("README.md"));
}

#[test]
fn porcelain_outside_repository_fails() {
    let dir = TempDir::new().unwrap();
    let result = GitCli::default().porcelain_status(dir.path());
    assert!(matches!(result, Err(GitError::CommandFailed { .. })));
}
