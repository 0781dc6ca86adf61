//! Pull request creation via the GitHub REST API.
//!
//! Posts to `/repos/{owner}/{repo}/pulls` with a bearer token taken from
//! `GITHUB_TOKEN`. Owner and repository are derived from the remote URL;
//! head is the current branch. Opening a PR from the default branch itself
//! is refused.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::Result;
use crate::git::Git;

const GITHUB_API_URL: &str = "https://api.github.com";
const TIMEOUT_SECS: u64 = 30;

/// Terminal outcome of the pull request step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrOutcome {
    /// PR created; carries its URL.
    Created(String),
    /// Prerequisites not met; carries the reason. Not a failure.
    Skipped(String),
    /// API call failed; carries the response error message.
    Failed(String),
}

/// Everything needed for the API call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequestParams {
    pub owner: String,
    pub repo: String,
    pub head: String,
    pub base: String,
    pub title: String,
    pub body: String,
}

#[derive(Serialize)]
struct PullRequestBody<'a> {
    title: &'a str,
    head: &'a str,
    base: &'a str,
    body: &'a str,
}

#[derive(Deserialize)]
struct PullRequestResponse {
    html_url: String,
}

#[derive(Deserialize)]
struct ApiErrorResponse {
    message: String,
}

/// Extract `(owner, repo)` from a GitHub remote URL.
///
/// Handles both `git@github.com:owner/repo.git` and
/// `https://github.com/owner/repo[.git]`.
pub fn parse_owner_repo(url: &str) -> Option<(String, String)> {
    let tail = url
        .strip_prefix("git@github.com:")
        .or_else(|| url.strip_prefix("https://github.com/"))
        .or_else(|| url.strip_prefix("http://github.com/"))?;
    let tail = tail.strip_suffix(".git").unwrap_or(tail);
    let tail = tail.trim_end_matches('/');
    let (owner, repo) = tail.split_once('/')?;
    if owner.is_empty() || repo.is_empty() || repo.contains('/') {
        return None;
    }
    Some((owner.to_string(), repo.to_string()))
}

/// Resolution of PR parameters: ready to post, or a reason to skip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamsResolution {
    Ready(PullRequestParams),
    Skip(String),
}

/// Resolve PR parameters from repository state, config, and overrides.
pub fn resolve_params(
    git: &Git,
    config: &Config,
    base: Option<String>,
    title: Option<String>,
    body: Option<String>,
) -> Result<ParamsResolution> {
    let head = git.current_branch()?;
    if head == "main" || head == "master" {
        return Ok(ParamsResolution::Skip(format!(
            "Cannot create a PR from the {} branch",
            head
        )));
    }

    let url = git.remote_url(&config.remote)?;
    let Some((owner, repo)) = parse_owner_repo(&url) else {
        return Ok(ParamsResolution::Skip(format!(
            "Remote \"{}\" is not a GitHub URL: {}",
            config.remote, url
        )));
    };

    let base = base.unwrap_or_else(|| config.default_branch.clone());
    let title = title.unwrap_or_else(|| format!("Pull Request from {}", head));
    let body = body.unwrap_or_default();

    Ok(ParamsResolution::Ready(PullRequestParams {
        owner,
        repo,
        head,
        base,
        title,
        body,
    }))
}

/// POST the pull request. Non-2xx responses become [`PrOutcome::Failed`]
/// carrying the API's error message.
pub fn create_pull_request(params: &PullRequestParams, token: &str) -> Result<PrOutcome> {
    let client = Client::builder()
        .timeout(Duration::from_secs(TIMEOUT_SECS))
        .user_agent(concat!("autogit/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let url = format!(
        "{}/repos/{}/{}/pulls",
        GITHUB_API_URL, params.owner, params.repo
    );
    let response = client
        .post(&url)
        .bearer_auth(token)
        .header("Accept", "application/vnd.github+json")
        .json(&PullRequestBody {
            title: &params.title,
            head: &params.head,
            base: &params.base,
            body: &params.body,
        })
        .send()?;

    let status = response.status();
    if status.is_success() {
        let pr: PullRequestResponse = response.json()?;
        return Ok(PrOutcome::Created(pr.html_url));
    }

    let message = response
        .json::<ApiErrorResponse>()
        .map(|e| e.message)
        .unwrap_or_else(|_| status.to_string());
    Ok(PrOutcome::Failed(format!("{} ({})", message, status)))
}

/// Run the pull request step end to end.
pub fn run(
    git: &Git,
    config: &Config,
    base: Option<String>,
    title: Option<String>,
    body: Option<String>,
) -> Result<PrOutcome> {
    let params = match resolve_params(git, config, base, title, body)? {
        ParamsResolution::Ready(params) => params,
        ParamsResolution::Skip(reason) => return Ok(PrOutcome::Skipped(reason)),
    };

    let Ok(token) = std::env::var("GITHUB_TOKEN") else {
        return Ok(PrOutcome::Skipped(
            "GITHUB_TOKEN is not set. Export a token with repo access first".to_string(),
        ));
    };

    create_pull_request(&params, &token)
}
