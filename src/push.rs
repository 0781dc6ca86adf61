//! Push step: remote check, branch prompt, validation, push, report.
//!
//! Modeled as a short state machine: RemotesChecked, BranchPrompted,
//! BranchValidated, Pushing, then Succeeded or Failed. Zero remotes and an
//! unknown branch are terminal short-circuits, not failures; only the push
//! itself can fail visibly.

use crate::error::{AutogitError, Result};
use crate::git::Git;
use crate::output::{print_push_report, print_warning};
use crate::progress::PushProgress;
use crate::prompt;

/// Length of the reported short commit hash.
const SHORT_SHA_LEN: usize = 7;

/// Terminal outcome of the push step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushOutcome {
    /// No remotes configured; nothing was attempted.
    NoRemote,
    /// Requested branch not found among remote refs; no push was issued.
    BranchNotFound(String),
    /// Push succeeded.
    Pushed {
        branch: String,
        short_sha: String,
        message: String,
    },
    /// Push was attempted and failed.
    Failed(String),
}

/// Whether `requested` matches any remote ref.
///
/// Substring matching kept from the observed behavior of the tool this
/// replaces: requesting "ain" matches "origin/main". An exact comparison
/// against the short name after stripping the remote prefix would be
/// stricter, but would change behavior.
pub fn branch_on_remote(requested: &str, remote_refs: &[String]) -> bool {
    remote_refs.iter().any(|r| r.contains(requested))
}

/// Run the push step for the just-committed change.
///
/// `default_branch` seeds the branch prompt; `remote` names the push target.
pub fn run(
    git: &Git,
    commit_message: &str,
    remote: &str,
    default_branch: &str,
    plain_progress: bool,
) -> Result<PushOutcome> {
    let remotes = git.remotes()?;
    if remotes.is_empty() {
        print_warning("No remote repository found.");
        return Ok(PushOutcome::NoRemote);
    }

    let branch = prompt::input("Enter the branch name to push to:", default_branch);

    let remote_refs = git.remote_branches()?;
    if !branch_on_remote(&branch, &remote_refs) {
        print_warning(&format!("Branch \"{}\" does not exist on remote.", branch));
        return Ok(PushOutcome::BranchNotFound(branch));
    }

    let mut progress = PushProgress::start(&branch, plain_progress);
    match git.push(remote, &branch) {
        Ok(()) => {
            progress.finish_success();
            let short_sha: String = match git.latest_commit()? {
                Some(entry) => entry.hash.chars().take(SHORT_SHA_LEN).collect(),
                None => return Err(AutogitError::Git("no commits found after push".to_string())),
            };
            print_push_report(&branch, &short_sha, commit_message);
            Ok(PushOutcome::Pushed {
                branch,
                short_sha,
                message: commit_message.to_string(),
            })
        }
        Err(err) => {
            let message = err.to_string();
            progress.finish_error(&message);
            Ok(PushOutcome::Failed(message))
        }
    }
}
