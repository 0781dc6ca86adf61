use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AutogitError {
    #[error("Not a git repository: {0}")]
    NotARepo(PathBuf),

    #[error("Git error: {0}")]
    Git(String),

    #[error("GitHub API error: {0}")]
    Api(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid date in git log: {0}")]
    Date(#[from] chrono::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, AutogitError>;
