//! The end-to-end workflow orchestrator.
//!
//! One invocation runs ignore reconciliation, working-tree inspection,
//! staging, commit, and push, in that order. Informational short-circuits
//! (nothing to stage, no remote, unknown branch) let the run continue or end
//! early without being treated as failures; real errors propagate to the
//! caller and are reported once at the CLI boundary.

use crate::commit;
use crate::config::Config;
use crate::error::Result;
use crate::git::Git;
use crate::ignore;
use crate::inspect;
use crate::output::print_file_group;
use crate::push;
use crate::staging;

/// Run-shaping flags, collapsed from what used to be parallel entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkflowOptions {
    /// Print per-file `[+N -M]` stats after staging.
    pub show_diff_stats: bool,
    /// Print a plain progress line instead of the spinner.
    pub plain_progress: bool,
}

impl WorkflowOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            show_diff_stats: config.show_diff_stats,
            plain_progress: false,
        }
    }
}

/// Execute the full workflow once against `git`.
pub fn run(git: &Git, config: &Config, options: &WorkflowOptions) -> Result<()> {
    let canonical = ignore::canonical_with_extras(&config.extra_ignore_rules);
    ignore::reconcile(git.workdir(), &canonical)?;

    let status = inspect::inspect(git)?;
    let untracked = inspect::existing_untracked(&status, git.workdir());
    print_file_group("Untracked files", &untracked);
    print_file_group("Modified files", &status.modified);

    let candidates = inspect::candidates(&status, git.workdir());
    let _staged = staging::plan(git, &candidates, options.show_diff_stats)?;

    let message = commit::run(git)?;
    push::run(
        git,
        message.as_str(),
        &config.remote,
        &config.default_branch,
        options.plain_progress,
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_follow_config() {
        let config = Config {
            show_diff_stats: false,
            ..Config::default()
        };
        let options = WorkflowOptions::from_config(&config);
        assert!(!options.show_diff_stats);
        assert!(!options.plain_progress);
    }
}
