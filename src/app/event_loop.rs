use std::io;
use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::{Semaphore, mpsc};
use tracing::{debug, error, info};

use crate::app::actions::{Action, SideEffect};
use crate::app::state::{AppState, View};
use crate::app::update::{init, update};
use crate::app::view;
use crate::github::GhClient;
use crate::util::{browser, handoff};

const MAX_CONCURRENT_FETCHES: usize = 4;

pub async fn run(state: AppState, client: GhClient) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_loop(&mut terminal, state, client).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: AppState,
    client: GhClient,
) -> Result<()> {
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
    let semaphore = Arc::new(Semaphore::new(MAX_CONCURRENT_FETCHES));

    let (mut state, effects) = init(state);
    if let Ok(size) = terminal.size() {
        state = update(state, Action::Resize(size.height)).0;
    }
    for effect in effects {
        run_side_effect(effect, &client, &action_tx, &semaphore)?;
    }

    let mut event_stream = crossterm::event::EventStream::new();

    loop {
        terminal.draw(|f| view::render(f, &state))?;

        if state.should_quit {
            break;
        }

        let action = tokio::select! {
            maybe_event = event_stream.next() => match maybe_event {
                Some(Ok(event)) => map_event_to_action(&event, &state),
                Some(Err(e)) => {
                    error!(error = %e, "Terminal event error");
                    None
                }
                None => break,
            },
            Some(action) = action_rx.recv() => Some(action),
        };

        let Some(action) = action else {
            continue;
        };

        let (next, effects) = update(state, action);
        state = next;
        for effect in effects {
            run_side_effect(effect, &client, &action_tx, &semaphore)?;
        }
    }

    Ok(())
}

/// Translate a terminal event into an action for the current view.
pub fn map_event_to_action(event: &Event, state: &AppState) -> Option<Action> {
    let key = match event {
        Event::Resize(_, height) => return Some(Action::Resize(*height)),
        Event::Key(key) if key.kind == KeyEventKind::Press => key,
        _ => return None,
    };
    let KeyEvent {
        code, modifiers, ..
    } = key;

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('d') => Some(Action::ChangeDirectory),
            KeyCode::Char('p') => Some(Action::TogglePrMode),
            _ => None,
        };
    }

    match code {
        KeyCode::Up => Some(Action::MoveUp),
        KeyCode::Down => Some(Action::MoveDown),
        KeyCode::PageUp => Some(Action::PageUp),
        KeyCode::PageDown => Some(Action::PageDown),
        KeyCode::Enter => Some(Action::Select),
        KeyCode::Esc => Some(Action::Back),
        // Typing only edits the search box in the list view
        KeyCode::Backspace if matches!(state.view, View::List) => Some(Action::SearchBackspace),
        KeyCode::Char(c)
            if matches!(state.view, View::List) && !modifiers.contains(KeyModifiers::ALT) =>
        {
            Some(Action::SearchInput(*c))
        }
        _ => None,
    }
}

fn run_side_effect(
    effect: SideEffect,
    client: &GhClient,
    action_tx: &mpsc::UnboundedSender<Action>,
    semaphore: &Arc<Semaphore>,
) -> Result<()> {
    match effect {
        SideEffect::LoadPrCache => {
            let client = client.clone();
            let tx = action_tx.clone();
            let sem = semaphore.clone();

            tokio::spawn(async move {
                let _permit = sem.acquire().await;
                debug!("Loading PR cache");
                let cache = client.load_pr_cache().await;
                let _ = tx.send(Action::PrCacheLoaded(cache));
            });
        }
        SideEffect::FetchRepoPrs { repo, url } => {
            let client = client.clone();
            let tx = action_tx.clone();
            let sem = semaphore.clone();

            tokio::spawn(async move {
                let _permit = sem.acquire().await;
                debug!(url = %url, "Fetching repository PRs");
                let result = client.fetch_repo_prs(&url).await.map_err(|e| {
                    error!(url = %url, error = %e, "Failed to fetch repository PRs");
                    e.to_string()
                });
                let _ = tx.send(Action::RepoPrsLoaded { repo, result });
            });
        }
        SideEffect::OpenUrl(url) => {
            tokio::task::spawn_blocking(move || {
                if let Err(e) = browser::open_url(&url) {
                    error!(error = %e, "Failed to open URL");
                }
            });
        }
        SideEffect::ChangeDirectory(dir) => {
            info!(dir = %dir.display(), "Changing directory");
            handoff::write_handoff(Path::new(handoff::HANDOFF_PATH), &dir)?;
        }
    }
    Ok(())
}
