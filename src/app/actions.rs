use std::path::PathBuf;

use crate::cache::PrCache;
use crate::github::models::PullRequest;
use crate::repo::models::RepoId;

#[derive(Debug)]
pub enum Action {
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    Select,
    Back,
    TogglePrMode,
    ChangeDirectory,
    SearchInput(char),
    SearchBackspace,
    Resize(u16),
    PrCacheLoaded(PrCache),
    RepoPrsLoaded {
        repo: RepoId,
        result: Result<Vec<PullRequest>, String>,
    },
    Quit,
}

#[derive(Debug, PartialEq, Eq)]
pub enum SideEffect {
    LoadPrCache,
    FetchRepoPrs { repo: RepoId, url: String },
    OpenUrl(String),
    ChangeDirectory(PathBuf),
}
