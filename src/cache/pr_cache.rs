use std::collections::HashMap;

use crate::github::models::PullRequest;

/// Normalized lookup key for a GitHub repository URL.
///
/// Owner and repository names on GitHub are case-insensitive, and a local
/// remote may spell them differently from the API.
pub fn repo_key(url: &str) -> String {
    url.trim_end_matches('/').to_ascii_lowercase()
}

/// Every open pull request authored by the current user, grouped by
/// repository URL. Filled at most once per run.
#[derive(Debug, Clone, Default)]
pub struct PrCache {
    loaded: bool,
    all: Vec<PullRequest>,
    by_repo: HashMap<String, Vec<PullRequest>>,
}

impl PrCache {
    /// A cache that has not been filled yet.
    pub fn pending() -> Self {
        Self::default()
    }

    /// A loaded cache. An empty list means "available, nothing open".
    pub fn loaded(prs: Vec<PullRequest>) -> Self {
        let mut by_repo: HashMap<String, Vec<PullRequest>> = HashMap::new();
        for pr in &prs {
            by_repo
                .entry(repo_key(&pr.repo_url))
                .or_default()
                .push(pr.clone());
        }
        Self {
            loaded: true,
            all: prs,
            by_repo,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn all(&self) -> &[PullRequest] {
        &self.all
    }

    pub fn for_repo(&self, url: &str) -> &[PullRequest] {
        self.by_repo
            .get(&repo_key(url))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Open PR count for a repository; 0 while the cache is not loaded.
    pub fn count_for(&self, url: &str) -> usize {
        self.for_repo(url).len()
    }
}
