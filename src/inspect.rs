//! Working-tree inspection and per-file diff statistics.

use std::path::Path;
use std::thread;

use crate::error::Result;
use crate::git::{Git, StatusEntry};

/// Read-only snapshot of the working tree, produced fresh each run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WorkingTreeStatus {
    pub untracked: Vec<String>,
    pub modified: Vec<String>,
}

/// Insertion/deletion counts for one file, cumulative across the unstaged
/// and staged diffs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDiffStat {
    pub path: String,
    pub insertions: usize,
    pub deletions: usize,
}

/// Query repository status and partition entries into untracked and modified
/// sets, preserving status order.
pub fn inspect(git: &Git) -> Result<WorkingTreeStatus> {
    Ok(partition(&git.status()?))
}

fn partition(entries: &[StatusEntry]) -> WorkingTreeStatus {
    let mut status = WorkingTreeStatus::default();
    for entry in entries {
        if entry.code == "??" {
            status.untracked.push(entry.path.clone());
        } else if entry.code.contains('M') {
            status.modified.push(entry.path.clone());
        }
    }
    status
}

/// Untracked paths that still exist on disk. A file can be renamed or
/// deleted between the status query and display, so both the displayed
/// group and the staging candidates go through this filter.
pub fn existing_untracked(status: &WorkingTreeStatus, root: &Path) -> Vec<String> {
    status
        .untracked
        .iter()
        .filter(|p| root.join(p).exists())
        .cloned()
        .collect()
}

/// Candidate paths for staging: modified files first, then untracked files
/// that still exist on disk.
pub fn candidates(status: &WorkingTreeStatus, root: &Path) -> Vec<String> {
    let mut paths = status.modified.clone();
    paths.extend(existing_untracked(status, root));
    paths
}

/// Compute insertion/deletion counts for one path by scanning its unstaged
/// and staged diff text. A path with no diff on one side contributes zero
/// from that side; zero on both sides is a valid result, not an error.
pub fn diff_stats(git: &Git, path: &str) -> Result<FileDiffStat> {
    let (mut insertions, mut deletions) = count_stats(&git.diff(path)?);
    let (staged_ins, staged_del) = count_stats(&git.diff_cached(path)?);
    insertions += staged_ins;
    deletions += staged_del;
    Ok(FileDiffStat {
        path: path.to_string(),
        insertions,
        deletions,
    })
}

/// Compute stats for a batch of paths concurrently, one worker per path.
/// Results come back in input order regardless of completion order.
pub fn diff_stats_batch(git: &Git, paths: &[String]) -> Result<Vec<FileDiffStat>> {
    thread::scope(|scope| {
        let handles: Vec<_> = paths
            .iter()
            .map(|path| scope.spawn(move || diff_stats(git, path)))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("diff stat worker panicked"))
            .collect()
    })
}

/// Count insertion and deletion lines in unified diff text.
///
/// Insertions are lines starting with a single `+` excluding the `+++` file
/// header; deletions symmetrically with `-` and `---`.
fn count_stats(diff: &str) -> (usize, usize) {
    let mut insertions = 0;
    let mut deletions = 0;
    for line in diff.lines() {
        if line.starts_with('+') && !line.starts_with("+++") {
            insertions += 1;
        } else if line.starts_with('-') && !line.starts_with("---") {
            deletions += 1;
        }
    }
    (insertions, deletions)
}
