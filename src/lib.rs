pub mod commands;
pub mod commit;
pub mod completion;
pub mod config;
pub mod error;
pub mod git;
pub mod history;
pub mod ignore;
pub mod inspect;
pub mod output;
pub mod pr;
pub mod progress;
pub mod prompt;
pub mod push;
pub mod staging;
pub mod workflow;

#[cfg(test)]
pub mod test_utils;

pub use commit::CommitMessage;
pub use config::Config;
pub use error::{AutogitError, Result};
pub use git::Git;
pub use push::PushOutcome;
pub use workflow::WorkflowOptions;
