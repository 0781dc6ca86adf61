//! History export command. Never touches the working tree.

use crate::error::Result;
use crate::history;
use crate::output::{print_success, GRAY, RESET};

pub fn history_command() -> Result<()> {
    let git = super::open_repo()?;
    let path = history::export(&git)?;
    print_success(&format!(
        "Git history saved to {GRAY}{}{RESET}",
        path.display()
    ));
    Ok(())
}
