//! Commit step with a fixed menu of commit messages.
//!
//! Messages are a closed enumeration rather than free text, which keeps
//! malformed or empty commit messages impossible by construction.

use std::fmt;

use crate::error::Result;
use crate::git::Git;
use crate::output::print_success;
use crate::prompt;

/// The five canonical commit message templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitMessage {
    UpdateFiles,
    RefactorCode,
    FixBugs,
    EnhancePerformance,
    AddNewFeature,
}

impl CommitMessage {
    pub const ALL: [CommitMessage; 5] = [
        CommitMessage::UpdateFiles,
        CommitMessage::RefactorCode,
        CommitMessage::FixBugs,
        CommitMessage::EnhancePerformance,
        CommitMessage::AddNewFeature,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CommitMessage::UpdateFiles => "Update files",
            CommitMessage::RefactorCode => "Refactor code",
            CommitMessage::FixBugs => "Fix bugs",
            CommitMessage::EnhancePerformance => "Enhance performance",
            CommitMessage::AddNewFeature => "Add new feature",
        }
    }
}

impl fmt::Display for CommitMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Let the user pick a message and commit the currently staged tree.
/// Returns the chosen message for the final report.
pub fn run(git: &Git) -> Result<CommitMessage> {
    let options: Vec<&str> = CommitMessage::ALL.iter().map(|m| m.as_str()).collect();
    let index = prompt::select("Select a commit message:", &options, 0);
    let message = CommitMessage::ALL[index];

    git.commit(message.as_str())?;
    print_success(&format!("Committed with message: \"{}\"", message));
    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_lists_the_five_templates() {
        let phrases: Vec<&str> = CommitMessage::ALL.iter().map(|m| m.as_str()).collect();
        assert_eq!(
            phrases,
            vec![
                "Update files",
                "Refactor code",
                "Fix bugs",
                "Enhance performance",
                "Add new feature",
            ]
        );
    }

    #[test]
    fn test_display_matches_as_str() {
        assert_eq!(CommitMessage::FixBugs.to_string(), "Fix bugs");
    }
}
