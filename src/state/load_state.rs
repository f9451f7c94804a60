//! Per-fetch loading status.

/// Status of one fetch concern.
///
/// Cycles Idle → Loading → (Success | Failure). A new fetch always passes
/// through Loading, which also clears any previous failure message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    /// Nothing requested yet (or the request was withdrawn).
    #[default]
    Idle,
    /// A request is in flight.
    Loading,
    /// The latest request completed and its data was committed.
    Success,
    /// The latest request failed; carries the user-visible message.
    Failure(String),
}

impl LoadState {
    /// True while a request is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    /// Failure message, if the latest request failed.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            LoadState::Failure(message) => Some(message),
            _ => None,
        }
    }

    /// True once a request has resolved (successfully or not).
    pub fn has_completed(&self) -> bool {
        matches!(self, LoadState::Success | LoadState::Failure(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle() {
        assert_eq!(LoadState::default(), LoadState::Idle);
    }

    #[test]
    fn only_loading_reports_loading() {
        assert!(LoadState::Loading.is_loading());
        assert!(!LoadState::Idle.is_loading());
        assert!(!LoadState::Success.is_loading());
        assert!(!LoadState::Failure("x".into()).is_loading());
    }

    #[test]
    fn error_message_only_for_failure() {
        assert_eq!(
            LoadState::Failure("Failed to fetch users".into()).error_message(),
            Some("Failed to fetch users")
        );
        assert_eq!(LoadState::Success.error_message(), None);
    }

    #[test]
    fn completed_covers_success_and_failure() {
        assert!(LoadState::Success.has_completed());
        assert!(LoadState::Failure(String::new()).has_completed());
        assert!(!LoadState::Idle.has_completed());
        assert!(!LoadState::Loading.has_completed());
    }
}
