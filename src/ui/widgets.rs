use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

use crate::app::scroll::Window;
use crate::app::state::{AppState, DetailPrs, DetailState};
use crate::github::models::PullRequest;
use crate::repo::models::FilteredRepo;
use crate::search::SearchMode;
use crate::ui::theme;

const MAX_PR_TITLE: usize = 40;

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let head: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{head}...")
}

/// Title without a leading `[owner/repo] ` tag.
fn bare_title(title: &str) -> &str {
    title.split_once("] ").map_or(title, |(_, rest)| rest)
}

/// Suffix of a PR-mode row: the single matching title, or the match count.
pub fn match_summary(prs: &[PullRequest]) -> Option<String> {
    match prs {
        [] => None,
        [only] => Some(format!(" → {}", truncate(bare_title(&only.title), MAX_PR_TITLE))),
        many => Some(format!(" → {} PRs", many.len())),
    }
}

fn render_indicator(f: &mut Frame, area: Rect, shown: bool, text: &str) {
    if shown {
        f.render_widget(Paragraph::new(Span::styled(text, theme::DIM)), area);
    }
}

fn render_footer(f: &mut Frame, area: Rect, hints: &str) {
    f.render_widget(Paragraph::new(Span::styled(hints, theme::DIM)), area);
}

pub fn render_list_view(f: &mut Frame, state: &AppState) {
    // Must add up to LIST_CHROME fixed rows around the list.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    let pr_mode = state.mode == SearchMode::PullRequests;

    let header = if pr_mode {
        "Git Repository Explorer - PR Mode"
    } else {
        "Git Repository Explorer"
    };
    f.render_widget(Paragraph::new(Span::styled(header, theme::HEADER)), chunks[0]);

    let label = if pr_mode { "PR Search: " } else { "Search: " };
    let search = Paragraph::new(format!("{label}{}", state.search_query)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::SEARCH_BORDER),
    );
    f.render_widget(search, chunks[2]);

    if state.filtered.is_empty() {
        let msg = if pr_mode && !state.pr_cache.is_loaded() {
            "Loading PR cache..."
        } else {
            "No repositories found matching your search."
        };
        f.render_widget(Paragraph::new(msg).style(theme::DIM), chunks[5]);
    } else {
        let window = state
            .list_scroll
            .window(state.filtered.len(), state.list_capacity());
        render_indicator(f, chunks[4], window.more_above, "↑ (more above)");
        render_repo_rows(f, chunks[5], state, window);
        render_indicator(f, chunks[6], window.more_below, "↓ (more below)");
    }

    let hints = if pr_mode {
        "↑/↓ navigate | PgUp/PgDn page | Enter details | Ctrl+D cd | Ctrl+P local mode | Esc clear/exit PR mode | Ctrl+C quit"
    } else {
        "↑/↓ navigate | PgUp/PgDn page | Enter details | Ctrl+D cd | Ctrl+P PR mode | Esc clear/quit | Ctrl+C quit"
    };
    render_footer(f, chunks[8], hints);
}

fn repo_line(
    entry: &FilteredRepo,
    path: &str,
    width: usize,
    pr_mode: bool,
    selected: bool,
) -> Line<'static> {
    let pick = |style: Style| if selected { theme::HIGHLIGHT } else { style };

    let mut spans = vec![Span::styled(
        format!("{path:<width$}"),
        pick(Style::default()),
    )];

    if entry.repo.github.is_github() {
        spans.push(Span::styled("  ✓", pick(theme::GITHUB_CHECK)));
    }
    if entry.repo.open_pr_count > 0 {
        spans.push(Span::styled(
            format!(" [{}]", entry.repo.open_pr_count),
            pick(theme::PR_COUNT),
        ));
    }
    if pr_mode && let Some(info) = match_summary(&entry.matching_prs) {
        spans.push(Span::styled(info, pick(theme::PR_MATCH)));
    }

    Line::from(spans)
}

fn render_repo_rows(f: &mut Frame, area: Rect, state: &AppState, window: Window) {
    let width = state
        .min_paths
        .iter()
        .map(|p| p.chars().count())
        .max()
        .unwrap_or(0);
    let pr_mode = state.mode == SearchMode::PullRequests;

    let items: Vec<ListItem> = (window.start..window.end)
        .filter_map(|i| {
            let entry = state.filtered.get(i)?;
            let path = state.min_paths.get(i).map(String::as_str).unwrap_or_default();
            let selected = i == state.list_scroll.cursor;
            Some(ListItem::new(repo_line(entry, path, width, pr_mode, selected)))
        })
        .collect();

    f.render_widget(List::new(items), area);
}

pub fn render_detail_view(f: &mut Frame, state: &AppState, detail: &DetailState) {
    // Must add up to DETAIL_CHROME fixed rows around the list.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    f.render_widget(
        Paragraph::new(Span::styled("Repository Details", theme::HEADER)),
        chunks[0],
    );

    let name = Line::from(vec![
        Span::styled("Name: ", theme::LABEL),
        Span::raw(detail.repo.directory.display().to_string()),
    ]);
    f.render_widget(Paragraph::new(name), chunks[2]);

    let summary = match &detail.prs {
        DetailPrs::Loading => Line::from(Span::styled("Loading PRs...", theme::LOADING)),
        DetailPrs::Failed(msg) => Line::from(Span::styled(format!("Error: {msg}"), theme::ERROR)),
        DetailPrs::Loaded(prs) if prs.is_empty() => Line::from("No open PRs by current user"),
        DetailPrs::Loaded(prs) => Line::from(vec![
            Span::styled("Pull Requests: ", theme::LABEL),
            Span::raw(format!("{} open", prs.len())),
        ]),
    };
    f.render_widget(Paragraph::new(summary), chunks[3]);

    let window = detail
        .scroll
        .window(detail.row_count(), state.detail_capacity());
    render_indicator(f, chunks[5], window.more_above, "↑ (more above)");

    let items: Vec<ListItem> = (window.start..window.end)
        .filter_map(|row| {
            let style = if row == detail.scroll.cursor {
                theme::HIGHLIGHT
            } else {
                Style::default()
            };
            let line = match (row, &detail.prs) {
                (0, _) => Line::from(vec![
                    Span::styled("URL: ", theme::LABEL),
                    Span::styled(detail.repo.github.to_string(), style),
                ]),
                (row, DetailPrs::Loaded(prs)) => {
                    let pr = prs.get(row - 1)?;
                    Line::from(Span::styled(format!("#{}: {}", pr.number, pr.title), style))
                }
                _ => return None,
            };
            Some(ListItem::new(line))
        })
        .collect();
    f.render_widget(List::new(items), chunks[6]);

    render_indicator(f, chunks[7], window.more_below, "↓ (more below)");

    let hints = if state.mode == SearchMode::PullRequests {
        "↑/↓ navigate | PgUp/PgDn page | Enter open | Ctrl+D cd | Ctrl+P local mode | Esc back/exit PR mode | Ctrl+C quit"
    } else {
        "↑/↓ navigate | PgUp/PgDn page | Enter open | Ctrl+D cd | Ctrl+P PR mode | Esc back | Ctrl+C quit"
    };
    render_footer(f, chunks[9], hints);
}
