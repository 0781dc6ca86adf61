//! Optional TOML configuration.
//!
//! A `.autogit.toml` at the repository root wins over the global file at
//! `~/.config/autogit/config.toml`. Both are optional; missing fields fall
//! back to defaults, and CLI flags override whatever was loaded.
//!
//! ```toml
//! remote = "origin"
//! default_branch = "main"
//! extra_ignore_rules = ["target/"]
//! show_diff_stats = true
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AutogitError, Result};

/// Project-level config file name, looked up at the repository root.
pub const CONFIG_FILE: &str = ".autogit.toml";

/// The base config directory name under the platform config dir.
const CONFIG_DIR_NAME: &str = "autogit";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Remote to push to.
    #[serde(default = "default_remote")]
    pub remote: String,

    /// Default answer for the branch prompt.
    #[serde(default = "default_branch")]
    pub default_branch: String,

    /// Rules offered in addition to the built-in ignore list.
    #[serde(default)]
    pub extra_ignore_rules: Vec<String>,

    /// Whether staged files get a per-file `[+N -M]` stat line.
    #[serde(default = "default_true")]
    pub show_diff_stats: bool,
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_branch() -> String {
    "main".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            remote: default_remote(),
            default_branch: default_branch(),
            extra_ignore_rules: Vec::new(),
            show_diff_stats: true,
        }
    }
}

/// Path of the global config file, when a platform config dir exists.
pub fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join("config.toml"))
}

/// Load configuration for a repository: project file first, then the global
/// file, then defaults.
pub fn load(repo_root: &Path) -> Result<Config> {
    let project = repo_root.join(CONFIG_FILE);
    if project.exists() {
        return parse_file(&project);
    }
    if let Some(global) = global_config_path() {
        if global.exists() {
            return parse_file(&global);
        }
    }
    Ok(Config::default())
}

fn parse_file(path: &Path) -> Result<Config> {
    let text = fs::read_to_string(path)?;
    toml::from_str(&text).map_err(|e| AutogitError::Config(format!("{}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.remote, "origin");
        assert_eq!(config.default_branch, "main");
        assert!(config.extra_ignore_rules.is_empty());
        assert!(config.show_diff_stats);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = toml::from_str("default_branch = \"develop\"").unwrap();
        assert_eq!(config.default_branch, "develop");
        assert_eq!(config.remote, "origin");
        assert!(config.show_diff_stats);
    }

    #[test]
    fn test_load_prefers_project_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE),
            "remote = \"upstream\"\nextra_ignore_rules = [\"target/\"]\n",
        )
        .unwrap();

        let config = load(dir.path()).unwrap();
        assert_eq!(config.remote, "upstream");
        assert_eq!(config.extra_ignore_rules, vec!["target/"]);
    }

    #[test]
    fn test_load_without_files_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        // No project file; a user-global file may exist on the machine the
        // tests run on, so only check the project-file-absent path loosely.
        let config = load(dir.path()).unwrap();
        assert!(!config.remote.is_empty());
    }

    #[test]
    fn test_malformed_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "remote = [not toml").unwrap();
        let result = load(dir.path());
        assert!(matches!(result, Err(AutogitError::Config(_))));
    }
}
