//! Repository list bound to one username.
//!
//! Self-contained: mounting issues the first fetch, changing the username
//! issues a new one. The parent only ever supplies a username and forwards
//! outcomes; commits are keyed so a response for a previous username (or a
//! superseded request) is dropped.

use crate::model::{
    Endpoint, FetchError, FetchRequest, RepoSummary, RepoTicket, RequestId, RequestSequence,
};
use crate::state::LoadState;
use tracing::debug;

/// Shown while a repository fetch is in flight.
pub const LOADING_REPOSITORIES_TEXT: &str = "Loading repositories...";

/// Shown after a successful fetch with zero repositories.
pub const NO_REPOSITORIES_TEXT: &str = "No repositories found.";

/// What a repository list displays, in render priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryListView<'a> {
    /// A fetch is in flight.
    Loading,
    /// The latest fetch failed with this message.
    Failure(&'a str),
    /// Loaded, but the user has no public repositories.
    Empty,
    /// Loaded repositories in API order.
    Rows(&'a [RepoSummary]),
}

/// State of one mounted repository list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryListState {
    username: String,
    load: LoadState,
    repos: Vec<RepoSummary>,
    /// Request whose outcome may still be committed.
    pending: Option<RequestId>,
}

impl RepositoryListState {
    /// Mount a list for `username` and return the fetch it needs.
    pub fn mount(
        username: impl Into<String>,
        requests: &mut RequestSequence,
    ) -> (Self, FetchRequest) {
        let mut list = Self {
            username: username.into(),
            load: LoadState::Idle,
            repos: Vec::new(),
            pending: None,
        };
        let request = list.begin_fetch(requests);
        (list, request)
    }

    /// Rebind to `username`. Returns the new fetch, or `None` when unchanged.
    ///
    /// Repositories of the previous username are dropped immediately.
    pub fn set_username(
        &mut self,
        username: impl Into<String>,
        requests: &mut RequestSequence,
    ) -> Option<FetchRequest> {
        let username = username.into();
        if username == self.username {
            return None;
        }
        self.username = username;
        self.repos.clear();
        Some(self.begin_fetch(requests))
    }

    /// Re-fetch the current username.
    pub fn refresh(&mut self, requests: &mut RequestSequence) -> FetchRequest {
        self.begin_fetch(requests)
    }

    fn begin_fetch(&mut self, requests: &mut RequestSequence) -> FetchRequest {
        let request = requests.next_id();
        self.pending = Some(request);
        self.load = LoadState::Loading;
        debug!(username = %self.username, request = request.get(), "Fetching repositories");
        FetchRequest::UserRepositories(RepoTicket {
            request,
            username: self.username.clone(),
        })
    }

    /// Commit a fetch outcome if its ticket is still current.
    ///
    /// Returns `true` when the outcome was applied, `false` when it was stale.
    pub fn apply_outcome(
        &mut self,
        ticket: &RepoTicket,
        result: Result<Vec<RepoSummary>, FetchError>,
    ) -> bool {
        if !self.is_current(ticket) {
            debug!(
                username = %ticket.username,
                request = ticket.request.get(),
                "Discarding stale repository response"
            );
            return false;
        }

        self.pending = None;
        match result {
            Ok(repos) => {
                debug!(username = %self.username, count = repos.len(), "Repositories loaded");
                self.repos = repos;
                self.load = LoadState::Success;
            }
            Err(err) => {
                self.repos.clear();
                self.load = LoadState::Failure(err.user_message(Endpoint::UserRepositories));
            }
        }
        true
    }

    /// True when `ticket` matches the in-flight request for the live username.
    pub fn is_current(&self, ticket: &RepoTicket) -> bool {
        self.pending == Some(ticket.request) && ticket.username == self.username
    }

    /// Login the list is bound to.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Status of the latest fetch.
    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    /// Committed repositories; empty until the first success.
    pub fn repos(&self) -> &[RepoSummary] {
        &self.repos
    }

    /// Resolve what to display: Loading, then Failure, then Empty, then Rows.
    pub fn view(&self) -> RepositoryListView<'_> {
        match &self.load {
            LoadState::Loading => RepositoryListView::Loading,
            LoadState::Failure(message) => RepositoryListView::Failure(message),
            LoadState::Idle | LoadState::Success if self.repos.is_empty() => {
                RepositoryListView::Empty
            }
            LoadState::Idle | LoadState::Success => RepositoryListView::Rows(&self.repos),
        }
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "repository_list_tests.rs"]
mod tests;
