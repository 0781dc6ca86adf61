//! Repository gateway.
//!
//! A thin, explicitly constructed wrapper around the `git` binary, scoped to
//! one working directory. Every workflow step talks to the repository through
//! an injected [`Git`] instance; there is no ambient global handle.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{AutogitError, Result};

/// Field separator used in `git log` pretty formats (ASCII unit separator).
const LOG_FIELD_SEP: char = '\x1f';

/// Parsed `git status --porcelain` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEntry {
    /// 2-letter XY code, or "??" for untracked.
    pub code: String,
    /// Path of the changed file (rename targets use the new path).
    pub path: String,
}

/// One entry of `git log`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// Full commit hash.
    pub hash: String,
    /// Author date, strict ISO 8601 (`%aI`).
    pub date: String,
    /// Subject line.
    pub message: String,
    /// Author name.
    pub author: String,
}

/// Gateway for executing git commands in a fixed working directory.
#[derive(Debug, Clone)]
pub struct Git {
    workdir: PathBuf,
}

impl Git {
    /// Open a gateway on `workdir`, verifying it is inside a git repository.
    pub fn open(workdir: impl Into<PathBuf>) -> Result<Self> {
        let git = Self {
            workdir: workdir.into(),
        };
        let check = Command::new("git")
            .args(["rev-parse", "--git-dir"])
            .current_dir(&git.workdir)
            .output();
        match check {
            Ok(out) if out.status.success() => Ok(git),
            _ => Err(AutogitError::NotARepo(git.workdir)),
        }
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Run a git command and capture stdout; non-zero exit becomes a
    /// [`AutogitError::Git`] carrying the trimmed stderr text.
    fn run(&self, args: &[&str]) -> Result<String> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            let message = if stderr.trim().is_empty() {
                stdout.trim().to_string()
            } else {
                stderr.trim().to_string()
            };
            return Err(AutogitError::Git(message));
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }

    /// Working-tree status entries, including untracked files.
    pub fn status(&self) -> Result<Vec<StatusEntry>> {
        let out = self.run(&["status", "--porcelain"])?;
        Ok(parse_porcelain(&out))
    }

    /// Unstaged diff text for a single path (empty when there is none).
    pub fn diff(&self, path: &str) -> Result<String> {
        self.run(&["diff", "--", path])
    }

    /// Staged (index) diff text for a single path (empty when there is none).
    pub fn diff_cached(&self, path: &str) -> Result<String> {
        self.run(&["diff", "--cached", "--", path])
    }

    /// Stage the given paths.
    pub fn add(&self, paths: &[String]) -> Result<()> {
        let mut args = vec!["add", "--"];
        args.extend(paths.iter().map(String::as_str));
        self.run(&args)?;
        Ok(())
    }

    /// Commit the currently staged tree.
    pub fn commit(&self, message: &str) -> Result<()> {
        self.run(&["commit", "-m", message])?;
        Ok(())
    }

    /// Push `branch` to `remote`.
    pub fn push(&self, remote: &str, branch: &str) -> Result<()> {
        self.run(&["push", remote, branch])?;
        Ok(())
    }

    /// Names of the configured remotes.
    pub fn remotes(&self) -> Result<Vec<String>> {
        let out = self.run(&["remote"])?;
        Ok(out.lines().map(str::to_string).collect())
    }

    /// Remote branch refs as listed by `git branch -r` (e.g. "origin/main").
    pub fn remote_branches(&self) -> Result<Vec<String>> {
        let out = self.run(&["branch", "-r"])?;
        Ok(parse_remote_branches(&out))
    }

    /// Fetch URL of a remote.
    pub fn remote_url(&self, remote: &str) -> Result<String> {
        let out = self.run(&["remote", "get-url", remote])?;
        Ok(out.trim().to_string())
    }

    /// Name of the currently checked-out branch.
    pub fn current_branch(&self) -> Result<String> {
        let out = self.run(&["rev-parse", "--abbrev-ref", "HEAD"])?;
        Ok(out.trim().to_string())
    }

    /// Commit log, newest first. `limit` of `None` returns the full history.
    pub fn log(&self, limit: Option<usize>) -> Result<Vec<LogEntry>> {
        let format = format!(
            "--pretty=format:%H{sep}%aI{sep}%s{sep}%an",
            sep = LOG_FIELD_SEP
        );
        let count = limit.map(|n| format!("--max-count={}", n));
        let mut args = vec!["log", format.as_str()];
        if let Some(count) = &count {
            args.push(count.as_str());
        }
        let out = self.run(&args)?;
        Ok(parse_log(&out))
    }

    /// The single most recent log entry, if any commit exists.
    pub fn latest_commit(&self) -> Result<Option<LogEntry>> {
        Ok(self.log(Some(1))?.into_iter().next())
    }
}

/// Parse `git status --porcelain` output.
///
/// Each line is `XY path`; rename lines carry `old -> new` and resolve to the
/// new path.
fn parse_porcelain(out: &str) -> Vec<StatusEntry> {
    out.lines()
        .filter(|line| line.len() > 3)
        .map(|line| {
            let (code, rest) = line.split_at(2);
            let path = rest.trim_start();
            let path = match path.split_once(" -> ") {
                Some((_, new)) => new,
                None => path,
            };
            StatusEntry {
                code: code.to_string(),
                path: path.to_string(),
            }
        })
        .collect()
}

/// Parse `git branch -r` output into plain ref names, dropping the
/// `origin/HEAD -> origin/main` alias line.
fn parse_remote_branches(out: &str) -> Vec<String> {
    out.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.contains(" -> "))
        .map(str::to_string)
        .collect()
}

fn parse_log(out: &str) -> Vec<LogEntry> {
    out.lines()
        .filter_map(|line| {
            let mut fields = line.split(LOG_FIELD_SEP);
            Some(LogEntry {
                hash: fields.next()?.to_string(),
                date: fields.next()?.to_string(),
                message: fields.next()?.to_string(),
                author: fields.next()?.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestRepo;

    #[test]
    fn test_parse_porcelain_untracked_and_modified() {
        let out = "?? new.txt\n M lib.rs\nM  staged.rs\n";
        let entries = parse_porcelain(out);
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].code, "??");
        assert_eq!(entries[0].path, "new.txt");
        assert_eq!(entries[1].code, " M");
        assert_eq!(entries[1].path, "lib.rs");
        assert_eq!(entries[2].code, "M ");
        assert_eq!(entries[2].path, "staged.rs");
    }

    #[test]
    fn test_parse_porcelain_rename_uses_new_path() {
        let entries = parse_porcelain("R  old.rs -> new.rs\n");
        assert_eq!(entries[0].path, "new.rs");
    }

    #[test]
    fn test_parse_porcelain_empty() {
        assert!(parse_porcelain("").is_empty());
    }

    #[test]
    fn test_parse_remote_branches_skips_head_alias() {
        let out = "  origin/HEAD -> origin/main\n  origin/main\n  origin/dev\n";
        let branches = parse_remote_branches(out);
        assert_eq!(branches, vec!["origin/main", "origin/dev"]);
    }

    #[test]
    fn test_parse_log_fields() {
        let line = format!(
            "abc1234567{sep}2024-05-01T10:00:00+02:00{sep}Fix bugs{sep}Louis",
            sep = LOG_FIELD_SEP
        );
        let entries = parse_log(&line);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].hash, "abc1234567");
        assert_eq!(entries[0].message, "Fix bugs");
        assert_eq!(entries[0].author, "Louis");
    }

    #[test]
    fn test_open_rejects_non_repo() {
        let dir = tempfile::tempdir().unwrap();
        let result = Git::open(dir.path());
        assert!(matches!(result, Err(AutogitError::NotARepo(_))));
    }

    #[test]
    fn test_status_add_commit_log_roundtrip() {
        let Some(repo) = TestRepo::init() else {
            return;
        };
        let git = repo.git();

        repo.write_file("hello.txt", "hello\n");
        let status = git.status().unwrap();
        assert_eq!(status.len(), 1);
        assert_eq!(status[0].code, "??");
        assert_eq!(status[0].path, "hello.txt");

        git.add(&["hello.txt".to_string()]).unwrap();
        git.commit("Update files").unwrap();

        assert!(git.status().unwrap().is_empty());

        let log = git.log(None).unwrap();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].message, "Update files");
        assert!(log[0].hash.len() >= 7);

        let latest = git.latest_commit().unwrap().unwrap();
        assert_eq!(latest.hash, log[0].hash);
    }

    #[test]
    fn test_fresh_repo_has_no_remotes_or_remote_branches() {
        let Some(repo) = TestRepo::init() else {
            return;
        };
        let git = repo.git();
        assert!(git.remotes().unwrap().is_empty());
        assert!(git.remote_branches().unwrap().is_empty());
    }

    #[test]
    fn test_diff_is_empty_for_unknown_path() {
        let Some(repo) = TestRepo::init() else {
            return;
        };
        repo.write_file("a.txt", "a\n");
        repo.commit_all("Update files");
        let git = repo.git();
        assert_eq!(git.diff("missing.txt").unwrap(), "");
        assert_eq!(git.diff_cached("missing.txt").unwrap(), "");
    }
}
