use std::sync::Arc;
use std::sync::LazyLock;
use std::sync::atomic::{AtomicBool, Ordering};

use regex::Regex;
use tokio::process::Command;
use tracing::{debug, error, warn};

use super::error::GhError;
use super::models::{ListedPr, PullRequest, SearchedPr};
use crate::cache::PrCache;

pub const AUTH_WARNING: &str = "Warning: GitHub CLI not authenticated. PR counts will be unavailable.\n\
     Run 'gh auth login' to enable PR count features.";

static REPO_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https://github\.com/([^/]+)/([^/]+)").expect("valid regex")
});

/// `owner/repo` from a GitHub repository URL.
pub fn owner_repo(url: &str) -> Result<String, GhError> {
    REPO_URL
        .captures(url)
        .map(|caps| format!("{}/{}", &caps[1], &caps[2]))
        .ok_or_else(|| GhError::InvalidRepoUrl(url.to_string()))
}

/// Parse `gh search prs --json number,title,url,repository` output.
pub fn parse_search_results(json: &str) -> Result<Vec<PullRequest>, GhError> {
    let rows: Vec<SearchedPr> = serde_json::from_str(json)?;
    Ok(rows.into_iter().map(PullRequest::from).collect())
}

/// Parse `gh pr list --json number,title,url` output for `repo_url`.
pub fn parse_pr_list(json: &str, repo_url: &str) -> Result<Vec<PullRequest>, GhError> {
    let rows: Vec<ListedPr> = serde_json::from_str(json)?;
    Ok(rows
        .into_iter()
        .map(|pr| pr.into_pull_request(repo_url))
        .collect())
}

/// Pull request data through the GitHub CLI.
///
/// Clones share the authentication flags, so the missing-auth warning is
/// handed out once per client no matter which clone hit the problem.
#[derive(Debug, Clone)]
pub struct GhClient {
    program: String,
    search_limit: u32,
    unauthenticated: Arc<AtomicBool>,
    has_warned: Arc<AtomicBool>,
}

impl GhClient {
    pub fn new(program: &str, search_limit: u32) -> Self {
        Self {
            program: program.to_string(),
            search_limit,
            unauthenticated: Arc::new(AtomicBool::new(false)),
            has_warned: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Record that `gh` reported no authentication.
    pub fn mark_unauthenticated(&self) {
        self.unauthenticated.store(true, Ordering::SeqCst);
    }

    /// The missing-auth warning, the first time it is asked for after
    /// authentication was found missing.
    pub fn take_auth_warning(&self) -> Option<&'static str> {
        if !self.unauthenticated.load(Ordering::SeqCst) {
            return None;
        }
        (!self.has_warned.swap(true, Ordering::SeqCst)).then_some(AUTH_WARNING)
    }

    async fn run(&self, args: &[&str]) -> Result<String, GhError> {
        debug!(program = %self.program, args = ?args, "Running gh");
        let output = Command::new(&self.program).args(args).output().await?;
        if !output.status.success() {
            return Err(GhError::Command {
                program: self.program.clone(),
                args: args.join(" "),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    async fn ensure_authenticated(&self) -> Result<(), GhError> {
        match self.run(&["auth", "status"]).await {
            Ok(_) => Ok(()),
            Err(GhError::Io(e)) => Err(GhError::Io(e)),
            Err(_) => {
                self.mark_unauthenticated();
                Err(GhError::NotAuthenticated)
            }
        }
    }

    async fn current_user(&self) -> Result<String, GhError> {
        let login = self.run(&["api", "user", "--jq", ".login"]).await?;
        Ok(login.trim().to_string())
    }

    /// All open pull requests authored by the current user.
    pub async fn fetch_user_prs(&self) -> Result<Vec<PullRequest>, GhError> {
        self.ensure_authenticated().await?;
        let user = self.current_user().await?;
        let limit = self.search_limit.to_string();
        let json = self
            .run(&[
                "search",
                "prs",
                "--author",
                &user,
                "--state",
                "open",
                "--json",
                "number,title,url,repository",
                "--limit",
                &limit,
            ])
            .await?;
        let prs = parse_search_results(&json)?;
        debug!(count = prs.len(), "Fetched user PRs");
        Ok(prs)
    }

    /// Open pull requests by the current user in one repository.
    pub async fn fetch_repo_prs(&self, repo_url: &str) -> Result<Vec<PullRequest>, GhError> {
        let repo = owner_repo(repo_url)?;
        self.ensure_authenticated().await?;
        let user = self.current_user().await?;
        let json = self
            .run(&[
                "pr",
                "list",
                "--repo",
                &repo,
                "--author",
                &user,
                "--json",
                "number,title,url",
            ])
            .await?;
        let prs = parse_pr_list(&json, repo_url)?;
        debug!(repo = %repo, count = prs.len(), "Fetched repo PRs");
        Ok(prs)
    }

    /// Load the user-wide cache. Any failure yields a loaded, empty cache.
    pub async fn load_pr_cache(&self) -> PrCache {
        match self.fetch_user_prs().await {
            Ok(prs) => PrCache::loaded(prs),
            Err(GhError::NotAuthenticated) => {
                warn!("gh is not authenticated, PR features disabled");
                PrCache::loaded(Vec::new())
            }
            Err(e) => {
                error!(error = %e, "Failed to load PR cache");
                PrCache::loaded(Vec::new())
            }
        }
    }
}
