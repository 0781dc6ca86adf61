//! Pull request command.

use crate::config;
use crate::error::{AutogitError, Result};
use crate::output::{print_success, print_warning};
use crate::pr::{self, PrOutcome};

pub fn pr_command(base: Option<String>, title: Option<String>, body: Option<String>) -> Result<()> {
    let git = super::open_repo()?;
    let config = config::load(git.workdir())?;

    match pr::run(&git, &config, base, title, body)? {
        PrOutcome::Created(url) => {
            print_success(&format!("Pull Request created: {}", url));
            Ok(())
        }
        PrOutcome::Skipped(reason) => {
            print_warning(&format!("Skipped: {}", reason));
            Ok(())
        }
        PrOutcome::Failed(message) => Err(AutogitError::Api(message)),
    }
}
