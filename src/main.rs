//! autogit CLI entry point.
//!
//! Parses command-line arguments and dispatches to the appropriate command
//! handler. Any error that escapes a command is reported here, once, and the
//! process exits non-zero.

use autogit::commands::{history_command, pr_command, run_command};
use autogit::completion::{print_completion_script, ShellType};
use autogit::output::print_error;
use clap::{CommandFactory, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "autogit")]
#[command(
    version,
    about = "Interactive git workflow: ignore rules, staging, commit, push",
    after_help = "EXAMPLES:
    # Run the full workflow (reconcile .gitignore, stage, commit, push)
    autogit

    # Export the commit log to git_history.json without touching the tree
    autogit history

    # Open a pull request for the current feature branch
    autogit pr --base main --title \"Pull Request from feature-x\""
)]
struct Cli {
    /// Skip the per-file diff stats shown after staging
    #[arg(long, global = true)]
    no_stats: bool,

    /// Print a plain progress line instead of the spinner
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Export the full commit log to git_history.json and exit
    History,

    /// Open a pull request for the current branch via the GitHub API
    Pr {
        /// Base branch the PR targets (defaults to the configured branch)
        #[arg(long)]
        base: Option<String>,

        /// PR title (defaults to "Pull Request from <branch>")
        #[arg(long)]
        title: Option<String>,

        /// PR description body
        #[arg(long)]
        body: Option<String>,
    },

    /// Print a shell completion script (bash, zsh, fish)
    Completion {
        /// Shell to generate the script for
        shell: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        None => run_command(cli.no_stats, cli.plain),
        Some(Commands::History) => history_command(),
        Some(Commands::Pr { base, title, body }) => pr_command(base, title, body),
        Some(Commands::Completion { shell }) => shell.parse::<ShellType>().map(|shell| {
            print_completion_script(shell, &mut Cli::command());
        }),
    };

    if let Err(e) = result {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_invocation_has_no_subcommand() {
        let cli = Cli::try_parse_from(["autogit"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.no_stats);
        assert!(!cli.plain);
    }

    #[test]
    fn test_history_subcommand_recognized() {
        let cli = Cli::try_parse_from(["autogit", "history"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::History)));
    }

    #[test]
    fn test_pr_subcommand_with_flags() {
        let cli =
            Cli::try_parse_from(["autogit", "pr", "--base", "develop", "--title", "My PR"]).unwrap();
        let Some(Commands::Pr { base, title, body }) = cli.command else {
            panic!("Expected Pr command");
        };
        assert_eq!(base.as_deref(), Some("develop"));
        assert_eq!(title.as_deref(), Some("My PR"));
        assert!(body.is_none());
    }

    #[test]
    fn test_global_flags_parse() {
        let cli = Cli::try_parse_from(["autogit", "--no-stats", "--plain"]).unwrap();
        assert!(cli.no_stats);
        assert!(cli.plain);
    }

    #[test]
    fn test_completion_subcommand_takes_shell() {
        let cli = Cli::try_parse_from(["autogit", "completion", "zsh"]).unwrap();
        let Some(Commands::Completion { shell }) = cli.command else {
            panic!("Expected Completion command");
        };
        assert_eq!(shell, "zsh");
    }

    #[test]
    fn test_cli_debug_assert() {
        Cli::command().debug_assert();
    }
}
