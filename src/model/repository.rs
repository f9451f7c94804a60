//! Repository listing types for `/users/{username}/repos`.

use serde::Deserialize;

/// Shown in place of a missing or empty repository description.
pub const DESCRIPTION_PLACEHOLDER: &str = "-";

/// GitHub numeric repository id. Unique within one user's listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct RepoId(u64);

impl RepoId {
    /// Wrap a raw id as returned by the API.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw numeric id.
    pub fn get(self) -> u64 {
        self.0
    }
}

/// One public repository as listed for a user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RepoSummary {
    /// Numeric id.
    pub id: RepoId,
    /// Repository name without the owner prefix.
    pub name: String,
    /// Free-text description; `None` when GitHub sends null.
    pub description: Option<String>,
    /// Star count.
    pub stargazers_count: u64,
    /// Web page of the repository, opened by the browser action.
    pub html_url: String,
}

impl RepoSummary {
    /// Description text, or [`DESCRIPTION_PLACEHOLDER`] when null or empty.
    pub fn description_or_placeholder(&self) -> &str {
        match self.description.as_deref() {
            Some(text) if !text.is_empty() => text,
            _ => DESCRIPTION_PLACEHOLDER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(description: Option<&str>) -> RepoSummary {
        RepoSummary {
            id: RepoId::new(10),
            name: "Hello-World".to_string(),
            description: description.map(str::to_string),
            stargazers_count: 42,
            html_url: "https://github.com/octocat/Hello-World".to_string(),
        }
    }

    #[test]
    fn decodes_array_ignoring_unknown_fields() {
        let body = r#"[{"id":10,"name":"Hello-World","full_name":"octocat/Hello-World",
            "description":null,"stargazers_count":42,
            "html_url":"https://github.com/octocat/Hello-World","fork":false}]"#;
        let repos: Vec<RepoSummary> = serde_json::from_str(body).unwrap();

        assert_eq!(repos, vec![repo(None)]);
    }

    #[test]
    fn null_description_uses_placeholder() {
        assert_eq!(repo(None).description_or_placeholder(), "-");
    }

    #[test]
    fn empty_description_uses_placeholder() {
        assert_eq!(repo(Some("")).description_or_placeholder(), "-");
    }

    #[test]
    fn present_description_is_shown_verbatim() {
        assert_eq!(
            repo(Some("My first repository")).description_or_placeholder(),
            "My first repository"
        );
    }

    #[test]
    fn negative_star_count_is_rejected() {
        let body = r#"{"id":1,"name":"x","description":null,"stargazers_count":-1,"html_url":"u"}"#;
        assert!(serde_json::from_str::<RepoSummary>(body).is_err());
    }
}
