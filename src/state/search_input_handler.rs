//! Search input handling (pure state transitions).
//!
//! Edits the query text of the search box. The cursor counts characters, not
//! bytes, so multi-byte input never splits a code point.
//! All functions are pure - no side effects, testable without TUI.

/// Editable query text with a character cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryInput {
    text: String,
    cursor: usize,
}

impl QueryInput {
    /// Create an input holding `text` with the cursor at the end.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    /// Query text as typed.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in characters, `0..=char_count`.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Byte offset of the character at `char_index` (or end of text).
    fn byte_offset(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(offset, _)| offset)
            .unwrap_or(self.text.len())
    }
}

/// Insert the character at cursor position and advance cursor.
pub fn handle_char_input(mut input: QueryInput, ch: char) -> QueryInput {
    let offset = input.byte_offset(input.cursor);
    input.text.insert(offset, ch);
    input.cursor += 1;
    input
}

/// Delete character before cursor if cursor > 0.
pub fn handle_backspace(mut input: QueryInput) -> QueryInput {
    if input.cursor > 0 {
        let offset = input.byte_offset(input.cursor - 1);
        input.text.remove(offset);
        input.cursor -= 1;
    }
    input
}

/// Delete character under cursor. No-op at end of text.
pub fn handle_delete(mut input: QueryInput) -> QueryInput {
    if input.cursor < input.char_count() {
        let offset = input.byte_offset(input.cursor);
        input.text.remove(offset);
    }
    input
}

/// Move cursor left by one position.
/// Saturates at 0 (does not wrap).
pub fn handle_cursor_left(mut input: QueryInput) -> QueryInput {
    input.cursor = input.cursor.saturating_sub(1);
    input
}

/// Move cursor right by one position.
/// Saturates at query length (does not wrap).
pub fn handle_cursor_right(mut input: QueryInput) -> QueryInput {
    input.cursor = (input.cursor + 1).min(input.char_count());
    input
}

/// Move cursor to the start of the query.
pub fn handle_cursor_home(mut input: QueryInput) -> QueryInput {
    input.cursor = 0;
    input
}

/// Move cursor past the last character.
pub fn handle_cursor_end(mut input: QueryInput) -> QueryInput {
    input.cursor = input.char_count();
    input
}

/// Clear the whole query.
pub fn clear_input(_input: QueryInput) -> QueryInput {
    QueryInput::default()
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_input_handler_tests.rs"]
mod tests;
