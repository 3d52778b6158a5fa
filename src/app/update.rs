use crate::app::actions::{Action, SideEffect};
use crate::app::scroll::ScrollState;
use crate::app::state::{AppState, DetailOrigin, DetailPrs, DetailState, View};
use crate::search::SearchMode;

/// Effects to run once when the program starts.
pub fn init(mut state: AppState) -> (AppState, Vec<SideEffect>) {
    let effects = match &state.view {
        View::Detail(detail) if detail.origin == DetailOrigin::Initial => {
            match (&detail.prs, detail.repo.github.url()) {
                (DetailPrs::Loading, Some(url)) => vec![SideEffect::FetchRepoPrs {
                    repo: detail.repo_id,
                    url: url.to_string(),
                }],
                _ => vec![],
            }
        }
        _ => request_pr_cache(&mut state),
    };
    (state, effects)
}

/// Apply one event to the state, returning the next state and the side
/// effects the event loop must carry out.
pub fn update(mut state: AppState, action: Action) -> (AppState, Vec<SideEffect>) {
    let effects = match action {
        Action::Quit => {
            state.should_quit = true;
            vec![]
        }
        Action::Resize(height) => {
            state.terminal_height = height;
            state.list_scroll = state.list_scroll.reveal(state.list_capacity());
            let capacity = state.detail_capacity();
            if let View::Detail(detail) = &mut state.view {
                detail.scroll = detail.scroll.reveal(capacity);
            }
            vec![]
        }
        Action::PrCacheLoaded(cache) => {
            state.pr_cache = cache;
            state.apply_filter();
            vec![]
        }
        Action::RepoPrsLoaded { repo, result } => {
            if let View::Detail(detail) = &mut state.view
                && detail.repo_id == repo
            {
                detail.prs = match result {
                    Ok(prs) => DetailPrs::Loaded(prs),
                    Err(msg) => DetailPrs::Failed(msg),
                };
                detail.scroll = detail.scroll.clamp(detail.row_count());
            }
            vec![]
        }
        Action::TogglePrMode => {
            state.mode = state.mode.toggled();
            state.search_query.clear();
            state.view = View::List;
            state.apply_filter();
            if state.mode == SearchMode::PullRequests {
                request_pr_cache(&mut state)
            } else {
                vec![]
            }
        }
        Action::ChangeDirectory => {
            let directory = match &state.view {
                View::List => state.highlighted().map(|entry| entry.repo.directory.clone()),
                View::Detail(detail) => Some(detail.repo.directory.clone()),
            };
            match directory {
                Some(directory) => {
                    state.should_quit = true;
                    vec![SideEffect::ChangeDirectory(directory)]
                }
                None => vec![],
            }
        }
        action if matches!(state.view, View::List) => update_list(&mut state, action),
        action => update_detail(&mut state, action),
    };
    (state, effects)
}

fn request_pr_cache(state: &mut AppState) -> Vec<SideEffect> {
    if state.pr_cache.is_loaded() || state.pr_cache_requested {
        return vec![];
    }
    state.pr_cache_requested = true;
    vec![SideEffect::LoadPrCache]
}

fn update_list(state: &mut AppState, action: Action) -> Vec<SideEffect> {
    let len = state.filtered.len();
    let capacity = state.list_capacity();

    match action {
        Action::MoveUp => state.list_scroll = state.list_scroll.up(capacity),
        Action::MoveDown => state.list_scroll = state.list_scroll.down(len, capacity),
        Action::PageUp => state.list_scroll = state.list_scroll.page_up(capacity),
        Action::PageDown => state.list_scroll = state.list_scroll.page_down(len, capacity),
        Action::Select => return open_detail(state),
        Action::Back => {
            // Clear the search first, then leave PR mode, then quit.
            if !state.search_query.is_empty() {
                state.search_query.clear();
                state.apply_filter();
            } else if state.mode == SearchMode::PullRequests {
                state.mode = SearchMode::Local;
                state.apply_filter();
            } else {
                state.should_quit = true;
            }
        }
        Action::SearchInput(ch) => {
            state.search_query.push(ch);
            state.apply_filter();
        }
        Action::SearchBackspace => {
            if state.search_query.pop().is_some() {
                state.apply_filter();
            }
        }
        _ => {}
    }
    vec![]
}

fn open_detail(state: &mut AppState) -> Vec<SideEffect> {
    let Some(entry) = state.highlighted().cloned() else {
        return vec![];
    };

    let mut effects = vec![];
    let prs = if state.pr_cache.is_loaded() {
        let prs = entry
            .repo
            .github
            .url()
            .map(|url| state.pr_cache.for_repo(url).to_vec())
            .unwrap_or_default();
        DetailPrs::Loaded(prs)
    } else if let Some(url) = entry.repo.github.url() {
        effects.push(SideEffect::FetchRepoPrs {
            repo: entry.id,
            url: url.to_string(),
        });
        DetailPrs::Loading
    } else {
        DetailPrs::Failed("not a GitHub repository".to_string())
    };

    state.view = View::Detail(DetailState {
        repo_id: entry.id,
        repo: entry.repo,
        origin: DetailOrigin::Selected,
        prs,
        scroll: ScrollState::default(),
    });
    effects
}

fn update_detail(state: &mut AppState, action: Action) -> Vec<SideEffect> {
    let capacity = state.detail_capacity();

    if let Action::Back = action {
        let origin = state.detail().map(|detail| detail.origin);
        match origin {
            Some(DetailOrigin::Initial) if state.mode == SearchMode::PullRequests => {
                state.mode = SearchMode::Local;
                state.apply_filter();
            }
            Some(DetailOrigin::Initial) => state.should_quit = true,
            _ => state.view = View::List,
        }
        return vec![];
    }

    let View::Detail(detail) = &mut state.view else {
        return vec![];
    };
    let len = detail.row_count();

    match action {
        Action::MoveUp => detail.scroll = detail.scroll.up(capacity),
        Action::MoveDown => detail.scroll = detail.scroll.down(len, capacity),
        Action::PageUp => detail.scroll = detail.scroll.page_up(capacity),
        Action::PageDown => detail.scroll = detail.scroll.page_down(len, capacity),
        Action::Select => {
            let url = match (detail.scroll.cursor, &detail.prs) {
                (0, _) => detail.repo.github.url().map(str::to_string),
                (row, DetailPrs::Loaded(prs)) => prs.get(row - 1).map(|pr| pr.url.clone()),
                _ => None,
            };
            return url.map(SideEffect::OpenUrl).into_iter().collect();
        }
        _ => {}
    }
    vec![]
}
