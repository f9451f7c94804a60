//! Screen layout rendering.
//!
//! Pure layout logic: title bar, search input, results pane and status bar,
//! top to bottom.

use crate::state::{AppState, FocusPane};
use crate::view::constants::{SEARCH_INPUT_HEIGHT, STATUS_BAR_HEIGHT, TITLE_BAR_HEIGHT};
use crate::view::search_input::SearchInput;
use crate::view::styles::ResultStyles;
use crate::view::user_list::render_results;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Application name shown in the title bar.
pub const TITLE_TEXT: &str = "ghscout: GitHub user search";

/// Split `area` into (title, search, results, status) rows.
pub fn split_screen(area: Rect) -> [Rect; 4] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TITLE_BAR_HEIGHT),
            Constraint::Length(SEARCH_INPUT_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(area);

    [chunks[0], chunks[1], chunks[2], chunks[3]]
}

/// Render the whole screen. `tick` drives the busy spinner.
pub fn render_layout(frame: &mut Frame, state: &AppState, styles: &ResultStyles, tick: usize) {
    let [title_area, search_area, results_area, status_area] = split_screen(frame.area());

    frame.render_widget(
        Paragraph::new(Line::styled(TITLE_TEXT, styles.heading)),
        title_area,
    );

    let search = SearchInput::new(state.search.input(), styles)
        .focused(state.focus == FocusPane::Search)
        .loading(state.search.is_loading(), tick);
    frame.render_widget(search, search_area);

    render_results(frame, results_area, state, styles);

    render_status_bar(frame, status_area, state, styles);
}

/// Build context-sensitive keyboard hints for the focused pane.
pub fn build_keyboard_hints(focus: FocusPane, loading: bool) -> &'static str {
    match (focus, loading) {
        (FocusPane::Search, false) => "Enter: search | Tab: results | ?: help | Ctrl+C: quit",
        (FocusPane::Search, true) => "Searching... | Tab: results | ?: help | Ctrl+C: quit",
        (FocusPane::Results, _) => {
            "j/k: move | Enter: expand/open | o: open | r: refresh | /: search | ?: help | q: quit"
        }
    }
}

/// Render the status bar: the last status message when there is one,
/// otherwise key hints.
fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, styles: &ResultStyles) {
    let line = match &state.status_message {
        Some(message) => Line::from(Span::raw(message.clone())),
        None => Line::styled(
            build_keyboard_hints(state.focus, state.search.is_loading()),
            styles.muted,
        ),
    };
    frame.render_widget(Paragraph::new(line), area);
}

// ===== Tests =====

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
