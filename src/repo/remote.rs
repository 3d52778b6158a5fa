use std::path::Path;
use std::process::Command;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::repo::models::GithubLink;

static SSH_REMOTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:ssh://)?git@github\.com[:/](.+)/(.+?)(?:\.git)?$").expect("valid regex")
});

static HTTPS_REMOTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https://github\.com/(.+)/(.+?)(?:\.git)?$").expect("valid regex")
});

/// URL of the `origin` remote of the repository at `dir`, if any.
pub fn origin_url(dir: &Path) -> Option<String> {
    let output = Command::new("git")
        .arg("-C")
        .arg(dir)
        .args(["remote", "get-url", "origin"])
        .output()
        .ok()?;

    if !output.status.success() {
        debug!(dir = %dir.display(), "No origin remote");
        return None;
    }

    let url = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!url.is_empty()).then_some(url)
}

/// Classify an origin URL and canonicalize GitHub remotes to
/// `https://github.com/<owner>/<repo>`.
pub fn github_link(origin: Option<&str>) -> GithubLink {
    let Some(origin) = origin.filter(|o| !o.is_empty()) else {
        return GithubLink::NoRemote;
    };

    for re in [&*SSH_REMOTE, &*HTTPS_REMOTE] {
        if let Some(caps) = re.captures(origin) {
            return GithubLink::Github(format!("https://github.com/{}/{}", &caps[1], &caps[2]));
        }
    }

    if origin.contains("github.com") {
        return GithubLink::Github(origin.to_string());
    }

    GithubLink::NonGithub
}

/// Whether `dir` is the top of a git working copy. `.git` may be a file for
/// worktrees and submodules.
pub fn is_git_repository(dir: &Path) -> bool {
    dir.join(".git").exists()
}
