use ratatui::style::{Color, Modifier, Style};

pub const HEADER: Style = Style::new()
    .fg(Color::Indexed(205))
    .add_modifier(Modifier::BOLD);

pub const HIGHLIGHT: Style = Style::new().fg(Color::Indexed(230)).bg(Color::Indexed(62));

pub const SEARCH_BORDER: Style = Style::new().fg(Color::Indexed(62));

pub const LABEL: Style = Style::new()
    .fg(Color::Indexed(14))
    .add_modifier(Modifier::BOLD);

pub const GITHUB_CHECK: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

pub const PR_COUNT: Style = Style::new().fg(Color::Cyan);

pub const PR_MATCH: Style = Style::new()
    .fg(Color::DarkGray)
    .add_modifier(Modifier::ITALIC);

pub const LOADING: Style = Style::new().fg(Color::Indexed(11));

pub const ERROR: Style = Style::new().fg(Color::Indexed(9));

pub const DIM: Style = Style::new().fg(Color::DarkGray);
