//! Shell completion script generation for autogit.

use std::io;
use std::str::FromStr;

use clap_complete::{generate, Shell};

use crate::error::{AutogitError, Result};

pub const SUPPORTED_SHELLS: &[&str] = &["bash", "zsh", "fish"];

/// Supported shell types for completion scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellType {
    Bash,
    Zsh,
    Fish,
}

impl ShellType {
    pub fn to_clap_shell(self) -> Shell {
        match self {
            ShellType::Bash => Shell::Bash,
            ShellType::Zsh => Shell::Zsh,
            ShellType::Fish => Shell::Fish,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ShellType::Bash => "bash",
            ShellType::Zsh => "zsh",
            ShellType::Fish => "fish",
        }
    }
}

impl std::fmt::Display for ShellType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ShellType {
    type Err = AutogitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "bash" => Ok(ShellType::Bash),
            "zsh" => Ok(ShellType::Zsh),
            "fish" => Ok(ShellType::Fish),
            other => Err(AutogitError::Config(format!(
                "Unsupported shell \"{}\" (supported: {})",
                other,
                SUPPORTED_SHELLS.join(", ")
            ))),
        }
    }
}

/// Print the completion script for `shell` to stdout.
pub fn print_completion_script(shell: ShellType, cmd: &mut clap::Command) {
    generate(shell.to_clap_shell(), cmd, "autogit", &mut io::stdout());
}
