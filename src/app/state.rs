use std::path::PathBuf;

use crate::app::scroll::{self, DETAIL_CHROME, LIST_CHROME, ScrollState};
use crate::cache::PrCache;
use crate::github::models::PullRequest;
use crate::repo::models::{FilteredRepo, RepoId, Repository};
use crate::search::{SearchMode, filter_repos};
use crate::util::paths::minimal_paths;

/// How the detail view was reached; decides what Esc does there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailOrigin {
    /// The working directory is itself the only repository.
    Initial,
    /// Picked from the list.
    Selected,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailPrs {
    Loading,
    Loaded(Vec<PullRequest>),
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct DetailState {
    pub repo_id: RepoId,
    pub repo: Repository,
    pub origin: DetailOrigin,
    pub prs: DetailPrs,
    pub scroll: ScrollState,
}

impl DetailState {
    /// Row 0 is the repository URL, followed by one row per pull request.
    pub fn row_count(&self) -> usize {
        match &self.prs {
            DetailPrs::Loaded(prs) => 1 + prs.len(),
            DetailPrs::Loading | DetailPrs::Failed(_) => 1,
        }
    }
}

#[derive(Debug, Clone)]
pub enum View {
    List,
    Detail(DetailState),
}

#[derive(Debug, Clone)]
pub struct AppState {
    // Data
    pub repos: Vec<Repository>,
    pub pr_cache: PrCache,
    pub pr_cache_requested: bool,
    pub base_dir: PathBuf,

    // Search results
    pub mode: SearchMode,
    pub search_query: String,
    pub filtered: Vec<FilteredRepo>,
    pub min_paths: Vec<String>,

    // Navigation
    pub view: View,
    pub list_scroll: ScrollState,
    pub terminal_height: u16,

    pub should_quit: bool,
}

impl AppState {
    /// State for the repository list.
    pub fn new(
        repos: Vec<Repository>,
        base_dir: PathBuf,
        mode: SearchMode,
        search_query: String,
        terminal_height: u16,
    ) -> Self {
        let mut state = Self {
            repos,
            pr_cache: PrCache::pending(),
            pr_cache_requested: false,
            base_dir,
            mode,
            search_query,
            filtered: Vec::new(),
            min_paths: Vec::new(),
            view: View::List,
            list_scroll: ScrollState::default(),
            terminal_height,
            should_quit: false,
        };
        state.apply_filter();
        state
    }

    /// State that opens straight into the detail view of a single
    /// repository (the working directory itself).
    pub fn for_single_repo(
        repo: Repository,
        base_dir: PathBuf,
        mode: SearchMode,
        terminal_height: u16,
    ) -> Self {
        let mut state = Self::new(vec![repo.clone()], base_dir, mode, String::new(), terminal_height);
        let prs = if repo.github.is_github() {
            DetailPrs::Loading
        } else {
            DetailPrs::Failed("not a GitHub repository".to_string())
        };
        state.view = View::Detail(DetailState {
            repo_id: RepoId(0),
            repo,
            origin: DetailOrigin::Initial,
            prs,
            scroll: ScrollState::default(),
        });
        state
    }

    /// Re-run the filter pipeline and restart the list window at the top.
    pub fn apply_filter(&mut self) {
        self.filtered = filter_repos(&self.repos, &self.pr_cache, &self.search_query, self.mode);
        let dirs: Vec<&std::path::Path> = self
            .filtered
            .iter()
            .map(|entry| entry.repo.directory.as_path())
            .collect();
        self.min_paths = minimal_paths(&dirs, &self.base_dir);
        self.list_scroll = ScrollState {
            cursor: self.list_scroll.clamp(self.filtered.len()).cursor,
            offset: 0,
        };
    }

    pub fn list_capacity(&self) -> usize {
        scroll::capacity(self.terminal_height, LIST_CHROME)
    }

    pub fn detail_capacity(&self) -> usize {
        scroll::capacity(self.terminal_height, DETAIL_CHROME)
    }

    /// The list entry under the cursor, if the list is not empty.
    pub fn highlighted(&self) -> Option<&FilteredRepo> {
        self.filtered.get(self.list_scroll.cursor)
    }

    pub fn detail(&self) -> Option<&DetailState> {
        match &self.view {
            View::Detail(detail) => Some(detail),
            View::List => None,
        }
    }
}
