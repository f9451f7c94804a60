//! Fetch requests and outcomes exchanged between the state machine and the
//! network layer.
//!
//! Every request carries a ticket: the key it was issued for. Outcomes echo
//! the ticket back so the state machine can discard responses whose key is
//! no longer current.

use super::error::FetchError;
use super::repository::RepoSummary;
use super::user::UserSummary;

/// Process-unique id of one issued fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(u64);

impl RequestId {
    /// Raw sequence number.
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Monotonic source of [`RequestId`]s.
///
/// One sequence is shared by the search and every repository list mounted
/// beneath it, so a remounted list never reuses an id still in flight.
#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    last: u64,
}

impl RequestSequence {
    /// Empty sequence; the first id issued is 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next id, strictly greater than every earlier one.
    pub fn next_id(&mut self) -> RequestId {
        self.last += 1;
        RequestId(self.last)
    }
}

/// Key of a user search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    /// Id of this search request.
    pub request: RequestId,
    /// Query text exactly as submitted.
    pub query: String,
}

/// Key of a repository listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoTicket {
    /// Id of this listing request.
    pub request: RequestId,
    /// Login whose repositories were requested.
    pub username: String,
}

/// A network call requested by the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    /// `GET /search/users` for the ticket's query.
    SearchUsers(SearchTicket),
    /// `GET /users/{username}/repos` for the ticket's username.
    UserRepositories(RepoTicket),
}

impl FetchRequest {
    /// Id of the underlying ticket.
    pub fn request_id(&self) -> RequestId {
        match self {
            FetchRequest::SearchUsers(ticket) => ticket.request,
            FetchRequest::UserRepositories(ticket) => ticket.request,
        }
    }
}

/// Resolution of a [`FetchRequest`], tagged with the originating ticket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// A user search finished.
    Users {
        /// Ticket of the originating request.
        ticket: SearchTicket,
        /// Matched users in API order, or the failure.
        result: Result<Vec<UserSummary>, FetchError>,
    },
    /// A repository listing finished.
    Repositories {
        /// Ticket of the originating request.
        ticket: RepoTicket,
        /// Repositories in API order, or the failure.
        result: Result<Vec<RepoSummary>, FetchError>,
    },
}
