//! Domain model types (pure).
//!
//! All types in this module are plain data decoded at the API boundary.

pub mod error;
pub mod fetch;
pub mod key_action;
pub mod repository;
pub mod user;

// Re-export for convenience
pub use error::{Endpoint, FetchError, UNKNOWN_ERROR_MESSAGE};
pub use fetch::{
    FetchOutcome, FetchRequest, RepoTicket, RequestId, RequestSequence, SearchTicket,
};
pub use key_action::KeyAction;
pub use repository::{RepoId, RepoSummary, DESCRIPTION_PLACEHOLDER};
pub use user::{SearchUsersResponse, UserId, UserSummary};
