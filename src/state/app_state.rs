//! Application state and transitions.
//!
//! AppState is the root state type containing all UI state. Transitions are
//! pure; network and browser work is requested through returned effects.

use crate::model::{FetchOutcome, RepoSummary, UserSummary};
use crate::state::{RepositoryListView, UserSearchState};

// ===== FocusPane =====

/// Which pane receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPane {
    /// Keys edit the query.
    #[default]
    Search,
    /// Keys go through the key binding table.
    Results,
}

// ===== ResultRow =====

/// One selectable line of the results pane.
///
/// Indices point into the user results and into the mounted repository list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultRow {
    /// A user row, by index into the search results.
    User(usize),
    /// A repository of the expanded user, by index into its list.
    Repository(usize),
}

// ===== AppState =====

/// Application state. Pure data, no side effects.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Query, results, expansion and the mounted repository list.
    pub search: UserSearchState,

    /// Which pane currently has keyboard focus.
    pub focus: FocusPane,

    /// Index into [`AppState::visible_rows`].
    selected_row: usize,

    /// Whether the help overlay is currently visible.
    pub help_visible: bool,

    /// Vertical scroll offset of the help overlay.
    pub help_scroll: u16,

    /// Last message for the status bar (browser launch result and similar).
    pub status_message: Option<String>,
}

impl AppState {
    /// Fresh state around `search`, focused on the search box.
    pub fn new(search: UserSearchState) -> Self {
        Self {
            search,
            ..Self::default()
        }
    }

    // ===== Rows =====

    /// Selectable rows in display order: each user, followed by the
    /// repositories of the expanded user once they have loaded.
    pub fn visible_rows(&self) -> Vec<ResultRow> {
        let expanded = self.search.expansion().selected();
        let repo_count = self.loaded_repositories().len();
        let mut rows = Vec::with_capacity(self.search.results().len() + repo_count);

        for (index, user) in self.search.results().iter().enumerate() {
            rows.push(ResultRow::User(index));
            if expanded == Some(user.id) {
                rows.extend((0..repo_count).map(ResultRow::Repository));
            }
        }
        rows
    }

    fn loaded_repositories(&self) -> &[RepoSummary] {
        match self.search.repository_list().map(|list| list.view()) {
            Some(RepositoryListView::Rows(repos)) => repos,
            _ => &[],
        }
    }

    /// Cursor index into [`AppState::visible_rows`].
    pub fn selected_row(&self) -> usize {
        self.selected_row
    }

    /// Row under the cursor, if there are any rows.
    pub fn selected(&self) -> Option<ResultRow> {
        self.visible_rows().get(self.selected_row).copied()
    }

    /// User under the cursor; `None` on a repository row.
    pub fn selected_user(&self) -> Option<&UserSummary> {
        match self.selected()? {
            ResultRow::User(index) => self.search.results().get(index),
            ResultRow::Repository(_) => None,
        }
    }

    /// Repository under the cursor; `None` on a user row.
    pub fn selected_repository(&self) -> Option<&RepoSummary> {
        match self.selected()? {
            ResultRow::Repository(index) => self.loaded_repositories().get(index),
            ResultRow::User(_) => None,
        }
    }

    /// True when the cursor is on the expanded user or one of its repositories.
    pub fn cursor_in_expanded_list(&self) -> bool {
        match self.selected() {
            Some(ResultRow::Repository(_)) => true,
            Some(ResultRow::User(index)) => self
                .search
                .results()
                .get(index)
                .is_some_and(|user| self.search.expansion().is_expanded(user.id)),
            None => false,
        }
    }

    // ===== Selection =====

    /// Move the cursor down one row, stopping at the last.
    pub fn select_next(&mut self) {
        let len = self.visible_rows().len();
        if len > 0 {
            self.selected_row = (self.selected_row + 1).min(len - 1);
        }
    }

    /// Move the cursor up one row, stopping at the first.
    pub fn select_prev(&mut self) {
        self.selected_row = self.selected_row.saturating_sub(1);
    }

    /// Jump to the first row.
    pub fn select_first(&mut self) {
        self.selected_row = 0;
    }

    /// Jump to the last row.
    pub fn select_last(&mut self) {
        self.selected_row = self.visible_rows().len().saturating_sub(1);
    }

    /// Move the cursor onto `row`, or clamp it when `row` no longer exists.
    pub fn select_row(&mut self, row: ResultRow) {
        match self.visible_rows().iter().position(|r| *r == row) {
            Some(position) => self.selected_row = position,
            None => self.clamp_selection(),
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_rows().len();
        self.selected_row = self.selected_row.min(len.saturating_sub(1));
    }

    // ===== Outcomes =====

    /// Commit a fetch outcome, keeping the cursor on the same row.
    ///
    /// A committed search moves the cursor back to the first row. Returns
    /// `true` when the outcome was applied.
    pub fn apply_outcome(&mut self, outcome: FetchOutcome) -> bool {
        let is_search = matches!(outcome, FetchOutcome::Users { .. });
        let anchor = self.selected();

        let applied = self.search.apply_outcome(outcome);
        if !applied {
            return false;
        }

        match (is_search, anchor) {
            (true, _) | (false, None) => self.select_first(),
            (false, Some(row)) => self.select_row(row),
        }
        true
    }

    // ===== Focus =====

    /// Give keyboard focus to the search box.
    pub fn focus_search(&mut self) {
        self.focus = FocusPane::Search;
    }

    /// Give keyboard focus to the results pane.
    pub fn focus_results(&mut self) {
        self.focus = FocusPane::Results;
        self.clamp_selection();
    }

    /// Show or hide the help overlay, scrolled to the top.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
        self.help_scroll = 0;
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
