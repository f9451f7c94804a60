//! GitHub user search types.

use serde::Deserialize;

/// GitHub numeric user id. Unique within one search result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// Wrap a raw id as returned by the API.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw numeric id.
    pub fn get(self) -> u64 {
        self.0
    }
}

/// A single matched user from `/search/users`.
///
/// Only the fields the UI consumes are decoded; everything else in the
/// response item is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserSummary {
    /// Numeric id, used as the expansion key.
    pub id: UserId,
    /// Login name; also the path segment of the repository listing.
    pub login: String,
}

impl UserSummary {
    /// Build a summary from a raw id and login.
    pub fn new(id: u64, login: impl Into<String>) -> Self {
        Self {
            id: UserId::new(id),
            login: login.into(),
        }
    }
}

/// Response envelope of `/search/users`.
///
/// `items` may be absent or `null`; both decode to an empty result set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchUsersResponse {
    #[serde(default)]
    items: Option<Vec<UserSummary>>,
}

impl SearchUsersResponse {
    /// Matched users in API response order.
    pub fn into_items(self) -> Vec<UserSummary> {
        self.items.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_items_in_response_order() {
        let body = r#"{"total_count":2,"items":[
            {"id":2,"login":"second","avatar_url":"x"},
            {"id":1,"login":"first"}
        ]}"#;
        let response: SearchUsersResponse = serde_json::from_str(body).unwrap();
        let items = response.into_items();

        assert_eq!(
            items,
            vec![UserSummary::new(2, "second"), UserSummary::new(1, "first")]
        );
    }

    #[test]
    fn missing_items_decodes_to_empty() {
        let response: SearchUsersResponse = serde_json::from_str(r#"{"total_count":0}"#).unwrap();
        assert!(response.into_items().is_empty());
    }

    #[test]
    fn null_items_decodes_to_empty() {
        let response: SearchUsersResponse = serde_json::from_str(r#"{"items":null}"#).unwrap();
        assert!(response.into_items().is_empty());
    }

    #[test]
    fn user_id_is_transparent_integer() {
        let user: UserSummary = serde_json::from_str(r#"{"id":583231,"login":"octocat"}"#).unwrap();
        assert_eq!(user.id.get(), 583231);
        assert_eq!(user.login, "octocat");
    }
}
