//! Key action handler for the results pane and search submission.
//!
//! Pure functions that transform AppState and report the side effect the
//! shell must perform, if any.

use crate::model::{FetchRequest, KeyAction};
use crate::state::{AppState, ResultRow};
use tracing::debug;

/// Side effect requested by a state transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue a fetch; its outcome is fed back through `AppState::apply_outcome`.
    Fetch(FetchRequest),
    /// Launch the system browser on a URL.
    OpenInBrowser(String),
}

/// Submit the query from the search input.
///
/// The submit action is disabled while a search is Loading. A committed
/// submit hands focus to the results pane.
pub fn submit_query(mut state: AppState) -> (AppState, Option<Effect>) {
    let effect = submit(&mut state);
    (state, effect)
}

fn submit(state: &mut AppState) -> Option<Effect> {
    if state.search.is_loading() {
        debug!("Submit ignored while search is loading");
        return None;
    }

    let effect = state.search.submit_search().map(Effect::Fetch);
    state.focus_results();
    effect
}

/// Handle a bound key action while the results pane has focus.
///
/// `Quit` is left to the caller.
pub fn handle_results_action(
    mut state: AppState,
    action: KeyAction,
) -> (AppState, Option<Effect>) {
    let effect = match action {
        KeyAction::SelectNext => {
            state.select_next();
            None
        }
        KeyAction::SelectPrev => {
            state.select_prev();
            None
        }
        KeyAction::SelectFirst => {
            state.select_first();
            None
        }
        KeyAction::SelectLast => {
            state.select_last();
            None
        }
        KeyAction::Activate => activate(&mut state),
        KeyAction::OpenRepository => open_selected(&state),
        KeyAction::FocusSearch => {
            state.focus_search();
            None
        }
        KeyAction::Refresh => refresh(&mut state),
        KeyAction::Help => {
            state.toggle_help();
            None
        }
        KeyAction::Quit => None,
    };
    (state, effect)
}

fn activate(state: &mut AppState) -> Option<Effect> {
    match state.selected()? {
        ResultRow::User(index) => {
            let id = state.search.results().get(index)?.id;
            let request = state.search.toggle_expansion(id);
            state.select_row(ResultRow::User(index));
            request.map(Effect::Fetch)
        }
        ResultRow::Repository(_) => open_selected(state),
    }
}

fn open_selected(state: &AppState) -> Option<Effect> {
    state
        .selected_repository()
        .map(|repo| Effect::OpenInBrowser(repo.html_url.clone()))
}

/// Re-run the fetch the cursor belongs to.
///
/// Inside an expanded user the repository list is re-fetched; anywhere else
/// the current query is submitted again.
fn refresh(state: &mut AppState) -> Option<Effect> {
    if state.cursor_in_expanded_list() {
        return state.search.refresh_repositories().map(Effect::Fetch);
    }
    submit(state)
}

// ===== Tests =====

#[cfg(test)]
#[path = "results_handler_tests.rs"]
mod tests;
