//! Search input widget for rendering the query box.

use crate::state::QueryInput;
use crate::view::constants::SPINNER_FRAMES;
use crate::view::styles::ResultStyles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Title shown when no search is running.
pub const SEARCH_TITLE: &str = " Search GitHub users ";

/// Search input widget.
///
/// Shows the query with a block cursor while focused. While a search is in
/// flight the title carries a spinner, and Enter is ignored.
pub struct SearchInput<'a> {
    input: &'a QueryInput,
    styles: &'a ResultStyles,
    focused: bool,
    loading: bool,
    tick: usize,
}

impl<'a> SearchInput<'a> {
    /// Unfocused, idle widget for `input`.
    pub fn new(input: &'a QueryInput, styles: &'a ResultStyles) -> Self {
        Self {
            input,
            styles,
            focused: false,
            loading: false,
            tick: 0,
        }
    }

    /// Draw the block cursor and the focused border.
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Show the busy spinner at animation step `tick`.
    pub fn loading(mut self, loading: bool, tick: usize) -> Self {
        self.loading = loading;
        self.tick = tick;
        self
    }

    fn title(&self) -> Line<'static> {
        if self.loading {
            let frame = SPINNER_FRAMES[self.tick % SPINNER_FRAMES.len()];
            Line::from(vec![
                Span::raw(" Searching "),
                Span::styled(frame, self.styles.spinner),
                Span::raw(" "),
            ])
        } else {
            Line::from(SEARCH_TITLE)
        }
    }

    fn query_line(&self, width: usize) -> Line<'static> {
        let text = self.input.text();
        if !self.focused {
            return Line::from(text.to_string());
        }

        // Split the visible part of the query into before/under/after the cursor
        let cursor = self.input.cursor();
        let start = scroll_start(text, cursor, width);
        let before: String = text.chars().skip(start).take(cursor - start).collect();
        let under: String = text
            .chars()
            .nth(cursor)
            .map(String::from)
            .unwrap_or_else(|| " ".to_string());
        let after: String = text.chars().skip(cursor + 1).collect();

        Line::from(vec![
            Span::raw(before),
            Span::styled(
                under,
                Style::default()
                    .bg(Color::White)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(after),
        ])
    }
}

/// First character to draw so that the cursor cell fits in `width` columns.
///
/// Widths are display columns, so wide characters scroll out two at a time.
fn scroll_start(text: &str, cursor: usize, width: usize) -> usize {
    let prefix: String = text.chars().take(cursor).collect();
    let cursor_width = text
        .chars()
        .nth(cursor)
        .and_then(UnicodeWidthChar::width)
        .unwrap_or(1)
        .max(1);

    let mut used = prefix.width() + cursor_width;
    let mut start = 0;
    for ch in prefix.chars() {
        if used <= width {
            break;
        }
        used -= ch.width().unwrap_or(0);
        start += 1;
    }
    start
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.styles.focused_border
        } else {
            self.styles.unfocused_border
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(self.title());
        let width = block.inner(area).width as usize;

        Paragraph::new(self.query_line(width))
            .block(block)
            .render(area, buf);
    }
}
