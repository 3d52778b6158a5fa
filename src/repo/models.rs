use std::fmt;
use std::path::PathBuf;

use crate::github::models::PullRequest;

/// Index of a repository in the list produced at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RepoId(pub usize);

/// What an `origin` remote says about GitHub.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GithubLink {
    /// Canonical `https://github.com/<owner>/<repo>` (or a verbatim origin
    /// that mentions github.com but has an unusual shape).
    Github(String),
    NoRemote,
    NonGithub,
}

impl GithubLink {
    pub fn url(&self) -> Option<&str> {
        match self {
            GithubLink::Github(url) => Some(url),
            GithubLink::NoRemote | GithubLink::NonGithub => None,
        }
    }

    pub fn is_github(&self) -> bool {
        matches!(self, GithubLink::Github(_))
    }
}

impl fmt::Display for GithubLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GithubLink::Github(url) => f.write_str(url),
            GithubLink::NoRemote => f.write_str("N/A"),
            GithubLink::NonGithub => f.write_str("Non-GitHub"),
        }
    }
}

/// A local working copy found at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub directory: PathBuf,
    pub origin: Option<String>,
    pub github: GithubLink,
    pub open_pr_count: usize,
}

impl Repository {
    pub fn new(directory: PathBuf, origin: Option<String>) -> Self {
        let github = crate::repo::remote::github_link(origin.as_deref());
        Self {
            directory,
            origin,
            github,
            open_pr_count: 0,
        }
    }
}

/// A repository as shown by one filter pass: a private copy of the record
/// plus the pull requests that made it match (PR mode only).
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredRepo {
    pub id: RepoId,
    pub repo: Repository,
    pub matching_prs: Vec<PullRequest>,
}
