//! git::status
//!
//! Working-tree status via the `git` executable.
//!
//! Porcelain output comes from the real binary, so it honours the user's
//! git configuration (excludes files, `status.showUntrackedFiles`).

use std::path::Path;
use std::process::Command;

use tracing::{trace, warn};

use super::GitError;

/// Runs the `git` binary synchronously.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: String,
}

impl GitCli {
    /// Use the given program name or path instead of `git`.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// The program this client spawns.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Run `git status --porcelain` in `dir` and return trimmed stdout.
    ///
    /// An empty string means the working tree is clean.
    ///
    /// # Errors
    ///
    /// - [`GitError::GitNotInstalled`] if the program cannot be found
    /// - [`GitError::CommandFailed`] if git exits non-zero (e.g. `dir` is
    ///   not inside a repository)
    pub fn porcelain_status(&self, dir: &Path) -> Result<String, GitError> {
        self.run(dir, &["status", "--porcelain"])
    }

    fn run(&self, dir: &Path, args: &[&str]) -> Result<String, GitError> {
        trace!(
            cmd = %format!("{} {}", self.program, args.join(" ")),
            dir = %dir.display(),
            "running git command"
        );

        let output = Command::new(&self.program)
            .args(args)
            .current_dir(dir)
            .output()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    warn!(program = %self.program, "git not found in PATH");
                    GitError::GitNotInstalled {
                        program: self.program.clone(),
                    }
                } else {
                    GitError::Io(e)
                }
            })?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
        } else {
            Err(GitError::CommandFailed {
                args: args.iter().map(|s| s.to_string()).collect(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new("git")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_program_is_git() {
        assert_eq!(GitCli::default().program(), "git");
    }

    #[test]
    fn missing_program_reports_not_installed() {
        let dir = TempDir::new().unwrap();
        let cli = GitCli::new("gitstamp-no-such-git-binary");

        let result = cli.porcelain_status(dir.path());
        assert!(matches!(result, Err(GitError::GitNotInstalled { .. })));
    }
}
