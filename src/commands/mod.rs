//! CLI command handlers for autogit.
//!
//! - [`run`] - the full interactive workflow (default invocation)
//! - [`history`] - export the commit log to JSON and exit
//! - [`pr`] - open a pull request for the current feature branch

mod history;
mod pr;
mod run;

pub use history::history_command;
pub use pr::pr_command;
pub use run::run_command;

use std::env;

use crate::error::Result;
use crate::git::Git;

/// Open the repository gateway on the current working directory.
fn open_repo() -> Result<Git> {
    Git::open(env::current_dir()?)
}
