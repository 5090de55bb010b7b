//! Architecture enforcement tests.
//!
//! The `git` module is the only doorway to Git. These tests walk `src/` and
//! fail if any other module reaches for `git2` or spawns a process itself.

use std::fs;
use std::path::{Path, PathBuf};

/// Collect every `.rs` file under `dir`.
fn rust_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).expect("failed to read src directory") {
        let path = entry.expect("bad dir entry").path();
        if path.is_dir() {
            files.extend(rust_files(&path));
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            files.push(path);
        }
    }
    files
}

fn src_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("src")
}

/// Files whose non-comment lines contain `needle`, excluding `allowed`.
fn offenders(needle: &str, allowed: &Path) -> Vec<String> {
    rust_files(&src_dir())
        .into_iter()
        .filter(|path| !path.starts_with(allowed))
        .filter(|path| {
            let content = fs::read_to_string(path).expect("failed to read source file");
            content
                .lines()
                .map(str::trim_start)
                .filter(|line| !line.starts_with("//"))
                .any(|line| line.contains(needle))
        })
        .map(|path| path.display().to_string())
        .collect()
}

#[test]
fn only_git_module_uses_git2() {
    let found = offenders("git2::", &src_dir().join("git"));
    assert!(
        found.is_empty(),
        "git2 used outside src/git: {:?}",
        found
    );
}

#[test]
fn only_git_module_spawns_processes() {
    let found = offenders("process::Command", &src_dir().join("git"));
    assert!(
        found.is_empty(),
        "process spawned outside src/git: {:?}",
        found
    );
}

#[test]
fn lint_sees_source_files() {
    // Guard against the walk silently finding nothing
    let files = rust_files(&src_dir());
    assert!(files.iter().any(|p| p.ends_with("provider/mod.rs")));
    assert!(files.iter().any(|p| p.ends_with("git/status.rs")));
}
