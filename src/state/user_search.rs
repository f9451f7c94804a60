//! User search state machine.
//!
//! Owns the query, the result set, the single expanded row and the repository
//! list mounted beneath it. Transitions are pure: they return the
//! [`FetchRequest`] to issue instead of performing I/O, and outcomes are
//! committed only when their ticket is still the latest one issued.

use crate::model::{
    Endpoint, FetchError, FetchOutcome, FetchRequest, RepoSummary, RepoTicket, RequestId,
    RequestSequence, SearchTicket, UserId, UserSummary,
};
use crate::state::search_input_handler::QueryInput;
use crate::state::{Expansion, LoadState, RepositoryListState};
use tracing::{debug, info};

/// Shown once a search has completed and left the result set empty.
pub const USER_NOT_FOUND_TEXT: &str = "User not found.";

/// Search box, results and expansion.
#[derive(Debug, Clone, Default)]
pub struct UserSearchState {
    input: QueryInput,
    load: LoadState,
    results: Vec<UserSummary>,
    /// Query the committed results (or failure) belong to.
    results_query: Option<String>,
    expansion: Expansion,
    repositories: Option<RepositoryListState>,
    /// Search request whose outcome may still be committed.
    pending: Option<RequestId>,
    requests: RequestSequence,
}

impl UserSearchState {
    /// Empty query, Idle, no results.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `query` already typed (not yet submitted).
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            input: QueryInput::new(query),
            ..Self::default()
        }
    }

    // ===== Query =====

    /// Current query text.
    pub fn query(&self) -> &str {
        self.input.text()
    }

    /// Query text plus cursor, for rendering.
    pub fn input(&self) -> &QueryInput {
        &self.input
    }

    /// Apply a pure edit to the query input.
    pub fn edit_input(&mut self, edit: impl FnOnce(QueryInput) -> QueryInput) {
        let input = std::mem::take(&mut self.input);
        self.input = edit(input);
    }

    // ===== Search =====

    /// Submit the current query.
    ///
    /// An empty or whitespace-only query clears the results, withdraws any
    /// in-flight search and returns `None`. Anything else enters Loading and
    /// returns the request to issue. Not blocked while already Loading; the
    /// newer request supersedes the older one.
    pub fn submit_search(&mut self) -> Option<FetchRequest> {
        let query = self.input.text().to_string();

        if query.trim().is_empty() {
            debug!("Empty query submitted, clearing results");
            self.results.clear();
            self.results_query = None;
            self.load = LoadState::Idle;
            self.pending = None;
            self.collapse();
            return None;
        }

        let request = self.requests.next_id();
        self.pending = Some(request);
        self.load = LoadState::Loading;
        info!(query = %query, request = request.get(), "Searching users");

        Some(FetchRequest::SearchUsers(SearchTicket { request, query }))
    }

    /// Commit a search outcome if `ticket` is the latest search issued.
    ///
    /// Returns `true` when applied. Any committed outcome replaces the result
    /// set wholesale and collapses the expanded row.
    pub fn apply_search_outcome(
        &mut self,
        ticket: &SearchTicket,
        result: Result<Vec<UserSummary>, FetchError>,
    ) -> bool {
        if self.pending != Some(ticket.request) {
            debug!(
                query = %ticket.query,
                request = ticket.request.get(),
                "Discarding stale search response"
            );
            return false;
        }

        self.pending = None;
        self.results_query = Some(ticket.query.clone());
        self.collapse();

        match result {
            Ok(users) => {
                info!(query = %ticket.query, count = users.len(), "Search completed");
                self.results = users;
                self.load = LoadState::Success;
            }
            Err(err) => {
                self.results.clear();
                self.load = LoadState::Failure(err.user_message(Endpoint::SearchUsers));
            }
        }
        true
    }

    // ===== Expansion =====

    /// Toggle expansion of `id`.
    ///
    /// Expanding a user present in the results returns the repository fetch
    /// for its login. A list that is already mounted is rebound to the new
    /// login, dropping the previous user's repositories; otherwise a fresh
    /// list is mounted. Collapsing unmounts the list.
    pub fn toggle_expansion(&mut self, id: UserId) -> Option<FetchRequest> {
        self.expansion = self.expansion.toggle(id);

        let login = self
            .expansion
            .selected()
            .and_then(|selected| self.user(selected))
            .map(|user| user.login.clone());

        let Some(login) = login else {
            self.repositories = None;
            return None;
        };

        match self.repositories.as_mut() {
            Some(list) => list.set_username(login, &mut self.requests),
            None => {
                let (list, request) = RepositoryListState::mount(login, &mut self.requests);
                self.repositories = Some(list);
                Some(request)
            }
        }
    }

    fn collapse(&mut self) {
        self.expansion = Expansion::None;
        self.repositories = None;
    }

    // ===== Repositories =====

    /// Forward a repository outcome to the mounted list.
    ///
    /// Outcomes for a list that has since been unmounted are discarded.
    pub fn apply_repositories_outcome(
        &mut self,
        ticket: &RepoTicket,
        result: Result<Vec<RepoSummary>, FetchError>,
    ) -> bool {
        match self.repositories.as_mut() {
            Some(list) => list.apply_outcome(ticket, result),
            None => {
                debug!(
                    username = %ticket.username,
                    "Discarding repository response for collapsed user"
                );
                false
            }
        }
    }

    /// Re-fetch the mounted repository list, if any.
    pub fn refresh_repositories(&mut self) -> Option<FetchRequest> {
        let list = self.repositories.as_mut()?;
        Some(list.refresh(&mut self.requests))
    }

    /// Route any outcome to the matching commit step.
    pub fn apply_outcome(&mut self, outcome: FetchOutcome) -> bool {
        match outcome {
            FetchOutcome::Users { ticket, result } => self.apply_search_outcome(&ticket, result),
            FetchOutcome::Repositories { ticket, result } => {
                self.apply_repositories_outcome(&ticket, result)
            }
        }
    }

    // ===== Accessors =====

    /// Status of the latest search.
    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    /// True while a search is in flight.
    pub fn is_loading(&self) -> bool {
        self.load.is_loading()
    }

    /// Committed users in API order.
    pub fn results(&self) -> &[UserSummary] {
        &self.results
    }

    /// Query the committed results belong to.
    pub fn results_query(&self) -> Option<&str> {
        self.results_query.as_deref()
    }

    /// Which row is expanded.
    pub fn expansion(&self) -> Expansion {
        self.expansion
    }

    /// Repository list of the expanded user, if one is mounted.
    pub fn repository_list(&self) -> Option<&RepositoryListState> {
        self.repositories.as_ref()
    }

    /// Result entry with `id`.
    pub fn user(&self, id: UserId) -> Option<&UserSummary> {
        self.results.iter().find(|user| user.id == id)
    }

    /// True once a search has completed (matched nobody, or failed) and the
    /// result set is empty.
    ///
    /// Never true before the first search or after an empty submit, so "never
    /// searched" and "searched, zero results" render differently.
    pub fn shows_not_found(&self) -> bool {
        self.load.has_completed() && self.results.is_empty()
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "user_search_tests.rs"]
mod tests;
