use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    pub url: String,
    /// `https://github.com/<owner>/<repo>` of the repository the PR targets.
    pub repo_url: String,
}

/// One row of `gh search prs --json number,title,url,repository`.
#[derive(Debug, Deserialize)]
pub struct SearchedPr {
    pub number: u64,
    pub title: String,
    pub url: String,
    pub repository: SearchedRepository,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchedRepository {
    pub name_with_owner: String,
}

/// One row of `gh pr list --json number,title,url`.
#[derive(Debug, Deserialize)]
pub struct ListedPr {
    pub number: u64,
    pub title: String,
    pub url: String,
}

impl From<SearchedPr> for PullRequest {
    fn from(pr: SearchedPr) -> Self {
        Self {
            number: pr.number,
            title: pr.title,
            url: pr.url,
            repo_url: format!("https://github.com/{}", pr.repository.name_with_owner),
        }
    }
}

impl ListedPr {
    pub fn into_pull_request(self, repo_url: &str) -> PullRequest {
        PullRequest {
            number: self.number,
            title: self.title,
            url: self.url,
            repo_url: repo_url.to_string(),
        }
    }
}
