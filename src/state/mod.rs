//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without TUI.

pub mod app_state;
pub mod expansion;
pub mod load_state;
pub mod repository_list;
pub mod results_handler;
pub mod search_input_handler;
pub mod user_search;

// Re-export for convenience
pub use app_state::{AppState, FocusPane, ResultRow};
pub use expansion::Expansion;
pub use load_state::LoadState;
pub use repository_list::{
    RepositoryListState, RepositoryListView, LOADING_REPOSITORIES_TEXT, NO_REPOSITORIES_TEXT,
};
pub use results_handler::{handle_results_action, submit_query, Effect};
pub use search_input_handler::QueryInput;
pub use user_search::{UserSearchState, USER_NOT_FOUND_TEXT};
