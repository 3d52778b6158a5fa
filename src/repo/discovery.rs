use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::repo::models::Repository;
use crate::repo::remote::{is_git_repository, origin_url};

/// Directory names a `.gitignore` asks us to skip.
#[derive(Debug, Default)]
pub struct IgnoreRules {
    globs: GlobSet,
    /// Patterns `globset` rejects, compared verbatim.
    literals: Vec<String>,
}

impl IgnoreRules {
    pub fn parse(content: &str) -> Self {
        let mut literals = Vec::new();
        let mut builder = GlobSetBuilder::new();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let pattern = line.strip_suffix('/').unwrap_or(line);
            match Glob::new(pattern) {
                Ok(glob) => {
                    builder.add(glob);
                }
                Err(e) => {
                    debug!(pattern = pattern, error = %e, "Matching gitignore pattern literally");
                    literals.push(pattern.to_string());
                }
            }
        }

        let globs = builder.build().unwrap_or_else(|e| {
            warn!(error = %e, "Failed to compile gitignore patterns");
            GlobSet::empty()
        });
        Self { globs, literals }
    }

    /// Rules from `<dir>/.gitignore`, or none if it cannot be read.
    pub fn load(dir: &Path) -> Self {
        fs::read_to_string(dir.join(".gitignore"))
            .map(|content| Self::parse(&content))
            .unwrap_or_default()
    }

    pub fn skips(&self, name: &str) -> bool {
        self.globs.is_match(name) || self.literals.iter().any(|l| l == name)
    }
}

/// Find every working copy below `root` (the root itself excluded).
///
/// Subdirectories are visited in lexical order without following symlinks.
/// A directory holding a `.git` directory is a repository; the walk keeps
/// going into the repository's other subdirectories. With
/// `respect_gitignore`, a subdirectory is skipped when its name matches the
/// `.gitignore` of its parent.
pub fn find_repository_dirs(root: &Path, respect_gitignore: bool) -> Vec<PathBuf> {
    let mut rules: HashMap<PathBuf, IgnoreRules> = HashMap::new();
    let mut walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            if entry.depth() == 0 {
                return true;
            }
            if !entry.file_type().is_dir() {
                return false;
            }
            if !respect_gitignore || entry.file_name() == ".git" {
                return true;
            }
            let Some(parent) = entry.path().parent() else {
                return true;
            };
            let name = entry.file_name().to_string_lossy();
            let skipped = rules
                .entry(parent.to_path_buf())
                .or_insert_with(|| IgnoreRules::load(parent))
                .skips(&name);
            if skipped {
                debug!(dir = %entry.path().display(), "Skipped by .gitignore");
            }
            !skipped
        });

    let mut found = Vec::new();
    loop {
        let entry = match walker.next() {
            None => break,
            Some(Ok(entry)) => entry,
            Some(Err(e)) => {
                debug!(error = %e, "Skipping unreadable directory");
                continue;
            }
        };
        if entry.file_name() != ".git" {
            continue;
        }
        walker.skip_current_dir();
        if entry.depth() > 1
            && let Some(repo) = entry.path().parent()
        {
            found.push(repo.to_path_buf());
        }
    }

    debug!(root = %root.display(), count = found.len(), "Repository walk finished");
    found
}

/// Discover repositories below `root` and resolve their remotes.
pub fn discover(root: &Path, respect_gitignore: bool) -> Vec<Repository> {
    find_repository_dirs(root, respect_gitignore)
        .into_iter()
        .map(|dir| {
            let origin = origin_url(&dir);
            Repository::new(dir, origin)
        })
        .collect()
}

/// The repository at `dir` itself, when it is one.
pub fn current_repository(dir: &Path) -> Option<Repository> {
    is_git_repository(dir).then(|| Repository::new(dir.to_path_buf(), origin_url(dir)))
}

/// Where to search: the working directory when it is a repository, else the
/// first existing directory among `env_workspace` and `config_workspace`,
/// else the working directory.
pub fn search_root(
    cwd: &Path,
    env_workspace: Option<&Path>,
    config_workspace: Option<&Path>,
) -> PathBuf {
    if is_git_repository(cwd) {
        return cwd.to_path_buf();
    }

    [env_workspace, config_workspace]
        .into_iter()
        .flatten()
        .find(|dir| !dir.as_os_str().is_empty() && dir.is_dir())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| cwd.to_path_buf())
}
