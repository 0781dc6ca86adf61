//! Default command: the full interactive workflow.

use crate::config;
use crate::error::Result;
use crate::output::print_header;
use crate::workflow::{self, WorkflowOptions};

pub fn run_command(no_stats: bool, plain: bool) -> Result<()> {
    let git = super::open_repo()?;
    let config = config::load(git.workdir())?;

    let mut options = WorkflowOptions::from_config(&config);
    if no_stats {
        options.show_diff_stats = false;
    }
    if plain {
        options.plain_progress = true;
    }

    print_header();
    workflow::run(&git, &config, &options)
}
