use std::collections::HashMap;

use crate::cache::{PrCache, repo_key};
use crate::github::models::PullRequest;
use crate::repo::models::{FilteredRepo, RepoId, Repository};
use crate::search::mnemonic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Match repository paths and GitHub URLs.
    Local,
    /// Match titles of the user's open pull requests.
    PullRequests,
}

impl SearchMode {
    pub fn toggled(self) -> Self {
        match self {
            SearchMode::Local => SearchMode::PullRequests,
            SearchMode::PullRequests => SearchMode::Local,
        }
    }
}

/// Substring or mnemonic match of an already lowercased haystack.
fn text_matches(haystack: &str, query: &str) -> bool {
    haystack.contains(query) || mnemonic::matches(haystack, query)
}

/// Produce the displayed repository list for one search pass.
///
/// Every returned entry is a fresh copy of the canonical record with its
/// open PR count taken from `cache`.
pub fn filter_repos(
    repos: &[Repository],
    cache: &PrCache,
    query: &str,
    mode: SearchMode,
) -> Vec<FilteredRepo> {
    match mode {
        SearchMode::Local => filter_local(repos, cache, query),
        SearchMode::PullRequests => filter_by_prs(repos, cache, query),
    }
}

fn annotate(id: usize, repo: &Repository, cache: &PrCache) -> FilteredRepo {
    let mut copy = repo.clone();
    copy.open_pr_count = copy.github.url().map_or(0, |url| cache.count_for(url));
    FilteredRepo {
        id: RepoId(id),
        repo: copy,
        matching_prs: Vec::new(),
    }
}

fn filter_local(repos: &[Repository], cache: &PrCache, query: &str) -> Vec<FilteredRepo> {
    let query = query.to_lowercase();

    repos
        .iter()
        .enumerate()
        .filter(|(_, repo)| {
            if query.is_empty() {
                return true;
            }
            let dir = repo.directory.to_string_lossy().to_lowercase();
            if text_matches(&dir, &query) {
                return true;
            }
            repo.github
                .url()
                .is_some_and(|url| text_matches(&url.to_lowercase(), &query))
        })
        .map(|(id, repo)| annotate(id, repo, cache))
        .collect()
}

fn filter_by_prs(repos: &[Repository], cache: &PrCache, query: &str) -> Vec<FilteredRepo> {
    if !cache.is_loaded() {
        return Vec::new();
    }

    if query.is_empty() {
        return repos
            .iter()
            .enumerate()
            .filter(|(_, repo)| repo.github.is_github())
            .map(|(id, repo)| annotate(id, repo, cache))
            .collect();
    }

    let query = query.to_lowercase();
    let mut matching: HashMap<String, Vec<PullRequest>> = HashMap::new();
    for pr in cache.all() {
        if text_matches(&pr.title.to_lowercase(), &query) {
            matching
                .entry(repo_key(&pr.repo_url))
                .or_default()
                .push(pr.clone());
        }
    }

    repos
        .iter()
        .enumerate()
        .filter_map(|(id, repo)| {
            let url = repo.github.url()?;
            let prs = matching.get(&repo_key(url))?;
            let mut entry = annotate(id, repo, cache);
            entry.matching_prs = prs.clone();
            Some(entry)
        })
        .collect()
}
