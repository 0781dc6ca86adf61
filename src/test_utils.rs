//! Test utilities shared across modules.
//!
//! Provides a throwaway git repository scaffold backed by a temp directory.
//! Tests that need a real repository call [`TestRepo::init`] and bail out
//! silently when the git binary is not installed, so the suite still passes
//! on minimal CI images.

use std::fs;
use std::path::Path;
use std::process::Command;

use crate::git::Git;

pub struct TestRepo {
    dir: tempfile::TempDir,
}

impl TestRepo {
    /// Create a fresh repository in a temp directory, or `None` when git is
    /// unavailable. Sets a local identity so commits work without global
    /// configuration.
    pub fn init() -> Option<Self> {
        let git_present = Command::new("git")
            .arg("--version")
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false);
        if !git_present {
            eprintln!("git binary not found, skipping");
            return None;
        }

        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let repo = Self { dir };
        repo.run_git(&["init"]);
        repo.run_git(&["config", "user.email", "test@example.com"]);
        repo.run_git(&["config", "user.name", "Test"]);
        repo.run_git(&["config", "commit.gpgsign", "false"]);
        Some(repo)
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn git(&self) -> Git {
        Git::open(self.path()).expect("freshly initialized repo should open")
    }

    pub fn write_file(&self, name: &str, content: &str) {
        fs::write(self.path().join(name), content).expect("failed to write test file");
    }

    pub fn remove_file(&self, name: &str) {
        fs::remove_file(self.path().join(name)).expect("failed to remove test file");
    }

    /// Run a git command in the repo for test setup, returning stdout.
    /// Panics on failure so broken arrangements surface immediately.
    pub fn run_git(&self, args: &[&str]) -> String {
        let output = Command::new("git")
            .args(args)
            .current_dir(self.path())
            .output()
            .expect("failed to run git");
        assert!(
            output.status.success(),
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    /// Stage everything and commit, for tests that need history.
    pub fn commit_all(&self, message: &str) {
        self.run_git(&["add", "-A"]);
        self.run_git(&["commit", "-m", message]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_creates_working_repo() {
        let Some(repo) = TestRepo::init() else {
            return;
        };
        repo.write_file("a.txt", "a\n");
        repo.commit_all("Update files");
        let out = repo.run_git(&["log", "--oneline"]);
        assert!(out.contains("Update files"));
    }
}
