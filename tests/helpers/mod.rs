#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Run git in `dir`, panicking when it fails
pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run git");
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Helper to create a test git repository at `<tempdir>/project` on branch `main`
pub fn create_test_repo() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let repo_path = temp_dir.path().join("project");
    fs::create_dir(&repo_path).expect("Failed to create repo directory");

    git(&repo_path, &["init"]);
    git(&repo_path, &["symbolic-ref", "HEAD", "refs/heads/main"]);
    git(&repo_path, &["config", "user.name", "Test User"]);
    git(&repo_path, &["config", "user.email", "test@example.com"]);
    git(&repo_path, &["config", "commit.gpgsign", "false"]);

    (temp_dir, repo_path)
}

/// Helper to create a commit
pub fn create_commit(repo_path: &Path, file: &str, content: &str, message: &str) {
    fs::write(repo_path.join(file), content).expect("Failed to write file");
    git(repo_path, &["add", file]);
    git(repo_path, &["commit", "-m", message]);
}

/// Helper to write and stage a file without committing
pub fn stage_file(repo_path: &Path, file: &str, content: &str) {
    fs::write(repo_path.join(file), content).expect("Failed to write file");
    git(repo_path, &["add", file]);
}

/// Create a bare `origin` next to the repo and push `main` to it with tracking
pub fn add_upstream(temp_dir: &TempDir, repo_path: &Path) -> PathBuf {
    let remote_path = temp_dir.path().join("remote.git");
    git(
        temp_dir.path(),
        &["init", "--bare", remote_path.to_str().unwrap()],
    );
    git(
        repo_path,
        &["remote", "add", "origin", remote_path.to_str().unwrap()],
    );
    git(repo_path, &["push", "-u", "origin", "main"]);
    remote_path
}

/// Short hash of HEAD
pub fn head_short_hash(repo_path: &Path) -> String {
    git(repo_path, &["rev-parse", "--short", "HEAD"])
}

/// `<name>_changes_<YYYYMMDD>_<HHMMSS>.md`
pub fn is_report_file_name(file_name: &str, repo_name: &str) -> bool {
    let Some(stamp) = file_name
        .strip_prefix(&format!("{}_changes_", repo_name))
        .and_then(|rest| rest.strip_suffix(".md"))
    else {
        return false;
    };

    let bytes = stamp.as_bytes();
    bytes.len() == 15
        && bytes[8] == b'_'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 8 || b.is_ascii_digit())
}

/// Markdown files directly inside `dir`
pub fn markdown_files(dir: &Path) -> Vec<PathBuf> {
    fs::read_dir(dir)
        .expect("Failed to read directory")
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "md"))
        .collect()
}
