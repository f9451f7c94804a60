//! Results pane: search outcome, user rows and the expanded repository list.

use crate::state::{AppState, FocusPane, LoadState, ResultRow, USER_NOT_FOUND_TEXT};
use crate::view::repository_list::{repository_lines, LINES_PER_REPOSITORY};
use crate::view::styles::ResultStyles;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Shown before the first search.
pub const SEARCH_HINT_TEXT: &str = "Type a username and press Enter to search.";

/// Shown while the first search is in flight.
pub const SEARCHING_TEXT: &str = "Searching...";

/// Marker of a collapsed user row.
pub const COLLAPSED_MARKER: &str = "▸";

/// Marker of the expanded user row.
pub const EXPANDED_MARKER: &str = "▾";

/// Rendered pane content plus the line span of the row under the cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultLines {
    /// Lines of the pane, top to bottom.
    pub lines: Vec<Line<'static>>,
    /// First and last line index of the cursor row.
    pub cursor: Option<(usize, usize)>,
}

/// Build the results pane content for `state`.
pub fn build_result_lines(state: &AppState, styles: &ResultStyles) -> ResultLines {
    let search = &state.search;
    let mut lines = Vec::new();

    // A failed search keeps its error above the not-found line
    if let Some(message) = search.load_state().error_message() {
        lines.push(Line::styled(message.to_string(), styles.error));
    }

    let placeholder = match search.load_state() {
        LoadState::Idle if search.results().is_empty() => Some(SEARCH_HINT_TEXT),
        LoadState::Loading if search.results().is_empty() => Some(SEARCHING_TEXT),
        _ if search.shows_not_found() => Some(USER_NOT_FOUND_TEXT),
        _ => None,
    };
    if let Some(text) = placeholder {
        lines.push(Line::styled(text, styles.muted));
        return ResultLines { lines, cursor: None };
    }

    if let Some(query) = search.results_query() {
        lines.push(Line::styled(
            format!("Showing users for \"{}\"", query),
            styles.heading,
        ));
        lines.push(Line::default());
    }

    let selected = state.selected();
    let mut cursor = None;

    for (index, user) in search.results().iter().enumerate() {
        let expanded = search.expansion().is_expanded(user.id);
        let is_cursor = selected == Some(ResultRow::User(index));
        if is_cursor {
            cursor = Some((lines.len(), lines.len()));
        }

        let marker = if expanded {
            EXPANDED_MARKER
        } else {
            COLLAPSED_MARKER
        };
        let row = Line::from(vec![
            Span::styled(format!("{} ", marker), styles.marker),
            Span::styled(user.login.clone(), styles.login),
        ]);
        lines.push(if is_cursor {
            row.patch_style(styles.selected)
        } else {
            row
        });

        if !expanded {
            continue;
        }
        if let Some(list) = search.repository_list() {
            let selected_repo = match selected {
                Some(ResultRow::Repository(repo)) => Some(repo),
                _ => None,
            };
            if let Some(repo) = selected_repo {
                let first = lines.len() + repo * LINES_PER_REPOSITORY;
                cursor = Some((first, first + LINES_PER_REPOSITORY - 1));
            }
            lines.extend(repository_lines(list, selected_repo, styles));
        }
    }

    ResultLines { lines, cursor }
}

/// Scroll offset that keeps the cursor row fully inside `height` lines.
pub fn scroll_offset(cursor: Option<(usize, usize)>, height: usize) -> usize {
    match cursor {
        Some((_, last)) if height > 0 && last >= height => last + 1 - height,
        _ => 0,
    }
}

/// Render the results pane into `area`.
pub fn render_results(frame: &mut Frame, area: Rect, state: &AppState, styles: &ResultStyles) {
    let ResultLines { lines, cursor } = build_result_lines(state, styles);

    let border_style = if state.focus == FocusPane::Results {
        styles.focused_border
    } else {
        styles.unfocused_border
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Results ");

    let inner_height = block.inner(area).height as usize;
    let offset = scroll_offset(cursor, inner_height);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((u16::try_from(offset).unwrap_or(u16::MAX), 0));
    frame.render_widget(paragraph, area);
}
