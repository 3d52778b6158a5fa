use ratatui::Frame;

use crate::app::state::{AppState, View};
use crate::ui::widgets;

pub fn render(f: &mut Frame, state: &AppState) {
    match &state.view {
        View::List => widgets::render_list_view(f, state),
        View::Detail(detail) => widgets::render_detail_view(f, state, detail),
    }
}
