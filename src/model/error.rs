//! Error types for fetch operations.
//!
//! Network calls can fail in three distinct ways. They are modelled as a tagged
//! enum so that each kind maps deterministically to the message shown inline
//! by the component that issued the request.
//!
//! # Error Taxonomy
//!
//! - [`FetchError::Network`] - transport failures (DNS, refused connection, TLS, I/O)
//! - [`FetchError::HttpStatus`] - the server answered with a non-2xx status
//! - [`FetchError::Decode`] - the body was not the JSON shape we expected
//!
//! # Recovery Strategy
//!
//! No fetch error is fatal. Each one is contained in the component that
//! issued the request, rendered as a single line of text, and recovered by the
//! user re-triggering the action (re-submit the query, refresh the list).

use thiserror::Error;

/// Message used when an error carries no text of its own.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";

/// The two GitHub endpoints the application talks to.
///
/// Determines the user-visible message of an HTTP status failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// `GET /search/users`
    SearchUsers,
    /// `GET /users/{username}/repos`
    UserRepositories,
}

impl Endpoint {
    /// Message shown when this endpoint answers with a non-2xx status.
    pub fn status_failure_message(self) -> &'static str {
        match self {
            Endpoint::SearchUsers => "Failed to fetch users",
            Endpoint::UserRepositories => "Failed to fetch repositories",
        }
    }
}

/// A failed fetch.
///
/// Variants carry plain strings rather than the underlying `reqwest` error so
/// outcomes stay `Clone + Eq` and can cross the channel back to the event loop.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request never produced a response.
    ///
    /// **When this occurs**: connection refused, DNS failure, TLS handshake
    /// failure, body read interrupted.
    #[error("{0}")]
    Network(String),

    /// The server answered with a status outside `200..=299`.
    ///
    /// Includes rate limiting (403/429), which is surfaced like any other status.
    #[error("HTTP status {status}")]
    HttpStatus {
        /// Numeric status code.
        status: u16,
    },

    /// The body did not decode into the expected shape.
    #[error("{0}")]
    Decode(String),
}

impl FetchError {
    /// User-visible message for this error when raised by `endpoint`.
    ///
    /// Status failures use the endpoint's fixed message. Transport and decode
    /// failures use their own text, or [`UNKNOWN_ERROR_MESSAGE`] when blank.
    pub fn user_message(&self, endpoint: Endpoint) -> String {
        match self {
            FetchError::HttpStatus { .. } => endpoint.status_failure_message().to_string(),
            FetchError::Network(message) | FetchError::Decode(message) => {
                if message.trim().is_empty() {
                    UNKNOWN_ERROR_MESSAGE.to_string()
                } else {
                    message.clone()
                }
            }
        }
    }
}
