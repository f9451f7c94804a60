//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm::event::KeyEvent to KeyAction is handled by KeyBindings.
/// Text entry in the search input bypasses this table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Row cursor
    /// Move the row cursor down. Default: j/↓
    SelectNext,
    /// Move the row cursor up. Default: k/↑
    SelectPrev,
    /// Jump to the first row. Default: g/Home
    SelectFirst,
    /// Jump to the last row. Default: G/End
    SelectLast,

    // Rows
    /// Expand or collapse the user under the cursor, or open the repository
    /// under the cursor. Default: Enter/Space
    Activate,
    /// Open the repository under the cursor in the browser. Default: o
    OpenRepository,

    // Focus
    /// Move focus to the search input. Default: / or i or Tab
    FocusSearch,

    // Fetching
    /// Re-run the fetch the cursor belongs to. Default: r
    Refresh,

    // Application
    /// Toggle the help overlay. Default: ?
    Help,
    /// Exit the application. Default: q
    Quit,
}
