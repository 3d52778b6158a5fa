use std::path::PathBuf;

use qgh::cache::PrCache;
use qgh::github::models::PullRequest;
use qgh::repo::models::{GithubLink, RepoId, Repository};
use qgh::search::{SearchMode, filter_repos};

fn make_repo(dir: &str, github: Option<&str>) -> Repository {
    Repository {
        directory: PathBuf::from(dir),
        origin: github.map(|url| format!("{url}.git")),
        github: match github {
            Some(url) => GithubLink::Github(url.into()),
            None => GithubLink::NoRemote,
        },
        open_pr_count: 0,
    }
}

fn make_pr(repo_url: &str, number: u64, title: &str) -> PullRequest {
    PullRequest {
        number,
        title: title.into(),
        url: format!("{repo_url}/pull/{number}"),
        repo_url: repo_url.into(),
    }
}

fn repos() -> Vec<Repository> {
    vec![
        make_repo("/ws/operations-istio-cni-helm", Some("https://github.com/acme/istio-cni")),
        make_repo("/ws/web-frontend", Some("https://github.com/acme/web")),
        make_repo("/ws/scratch", None),
        make_repo("/ws/billing-service", Some("https://github.com/acme/billing")),
    ]
}

fn cache() -> PrCache {
    PrCache::loaded(vec![
        make_pr("https://github.com/acme/web", 1, "Fix login redirect"),
        make_pr("https://github.com/acme/web", 2, "Add dark mode"),
        make_pr("https://github.com/acme/web", 3, "Bump deps"),
        make_pr("https://github.com/acme/billing", 7, "Refund flow"),
        make_pr("https://github.com/acme/not-cloned", 9, "Fix login typo"),
    ])
}

fn dirs(result: &[qgh::repo::FilteredRepo]) -> Vec<String> {
    result
        .iter()
        .map(|e| e.repo.directory.display().to_string())
        .collect()
}

// --- Local mode ---

#[test]
fn test_local_empty_query_returns_all_with_counts() {
    let result = filter_repos(&repos(), &cache(), "", SearchMode::Local);
    assert_eq!(result.len(), 4);
    let counts: Vec<usize> = result.iter().map(|e| e.repo.open_pr_count).collect();
    assert_eq!(counts, vec![0, 3, 0, 1]);
}

#[test]
fn test_local_empty_query_without_cache_has_zero_counts() {
    let result = filter_repos(&repos(), &PrCache::pending(), "", SearchMode::Local);
    assert_eq!(result.len(), 4);
    assert!(result.iter().all(|e| e.repo.open_pr_count == 0));
}

#[test]
fn test_local_substring_on_directory() {
    let result = filter_repos(&repos(), &cache(), "FRONT", SearchMode::Local);
    assert_eq!(dirs(&result), vec!["/ws/web-frontend"]);
}

#[test]
fn test_local_substring_on_github_url() {
    let result = filter_repos(&repos(), &cache(), "acme/billing", SearchMode::Local);
    assert_eq!(dirs(&result), vec!["/ws/billing-service"]);
}

#[test]
fn test_local_mnemonic_on_directory() {
    let result = filter_repos(&repos(), &cache(), "oich", SearchMode::Local);
    assert_eq!(dirs(&result), vec!["/ws/operations-istio-cni-helm"]);
}

#[test]
fn test_local_no_match() {
    let result = filter_repos(&repos(), &cache(), "zzz", SearchMode::Local);
    assert!(result.is_empty());
}

#[test]
fn test_local_results_keep_ids_and_no_matching_prs() {
    let result = filter_repos(&repos(), &cache(), "billing", SearchMode::Local);
    assert_eq!(result[0].id, RepoId(3));
    assert!(result[0].matching_prs.is_empty());
}

#[test]
fn test_filter_does_not_touch_canonical_records() {
    let all = repos();
    let _ = filter_repos(&all, &cache(), "", SearchMode::Local);
    assert!(all.iter().all(|r| r.open_pr_count == 0));
}

// --- PR mode ---

#[test]
fn test_pr_mode_single_match_carries_total_count() {
    let result = filter_repos(&repos(), &cache(), "dark", SearchMode::PullRequests);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].repo.directory, PathBuf::from("/ws/web-frontend"));
    assert_eq!(result[0].repo.open_pr_count, 3);
    assert_eq!(result[0].matching_prs.len(), 1);
    assert_eq!(result[0].matching_prs[0].number, 2);
}

#[test]
fn test_pr_mode_ignores_prs_of_repos_not_present_locally() {
    let result = filter_repos(&repos(), &cache(), "login", SearchMode::PullRequests);
    assert_eq!(dirs(&result), vec!["/ws/web-frontend"]);
    assert_eq!(result[0].matching_prs.len(), 1);
}

#[test]
fn test_pr_mode_mnemonic_on_titles() {
    let cache = PrCache::loaded(vec![
        make_pr("https://github.com/acme/web", 1, "fix-login_redirect"),
        make_pr("https://github.com/acme/billing", 7, "Refund flow"),
    ]);
    let result = filter_repos(&repos(), &cache, "flr", SearchMode::PullRequests);
    assert_eq!(dirs(&result), vec!["/ws/web-frontend"]);
}

#[test]
fn test_pr_mode_spaces_do_not_split_title_words() {
    // "Fix login redirect" is the single word "Fixloginredirect"
    let result = filter_repos(&repos(), &cache(), "flr", SearchMode::PullRequests);
    assert!(result.is_empty());
}

#[test]
fn test_pr_mode_does_not_match_paths() {
    let result = filter_repos(&repos(), &cache(), "frontend", SearchMode::PullRequests);
    assert!(result.is_empty());
}

#[test]
fn test_pr_mode_empty_query_lists_github_repos_only() {
    let result = filter_repos(&repos(), &cache(), "", SearchMode::PullRequests);
    assert_eq!(result.len(), 3);
    assert!(result.iter().all(|e| e.repo.github.is_github()));
    assert!(result.iter().all(|e| e.matching_prs.is_empty()));
}

#[test]
fn test_pr_mode_without_cache_is_empty() {
    let pending = PrCache::pending();
    assert!(filter_repos(&repos(), &pending, "", SearchMode::PullRequests).is_empty());
    assert!(filter_repos(&repos(), &pending, "dark", SearchMode::PullRequests).is_empty());
}

#[test]
fn test_pr_mode_matches_repo_urls_case_insensitively() {
    let local = vec![make_repo("/ws/web", Some("https://github.com/ACME/Web"))];
    let result = filter_repos(&local, &cache(), "dark", SearchMode::PullRequests);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].repo.open_pr_count, 3);
}

// --- Cache ---

#[test]
fn test_cache_loaded_but_empty_differs_from_pending() {
    assert!(!PrCache::pending().is_loaded());
    let empty = PrCache::loaded(vec![]);
    assert!(empty.is_loaded());
    assert_eq!(empty.count_for("https://github.com/acme/web"), 0);
}

#[test]
fn test_cache_groups_by_repo() {
    let cache = cache();
    assert_eq!(cache.all().len(), 5);
    assert_eq!(cache.for_repo("https://github.com/acme/web").len(), 3);
    assert_eq!(cache.count_for("https://github.com/acme/web/"), 3);
    assert_eq!(cache.count_for("https://github.com/acme/unknown"), 0);
}
