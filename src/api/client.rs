//! GitHub REST client.
//!
//! Builds the two read-only requests the application issues and maps every
//! failure onto [`FetchError`]. The credential, when configured, is attached
//! to the user search only; without one the search goes out unauthenticated
//! and is subject to GitHub's stricter anonymous rate limit.

use crate::config::Credential;
use crate::model::{FetchError, RepoSummary, SearchUsersResponse, UserSummary};
use reqwest::header::{HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{Client, Request, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, warn};

/// Media type requested from the search endpoint.
pub const GITHUB_V3_MEDIA_TYPE: &str = "application/vnd.github.v3+json";

const USER_AGENT: &str = concat!("ghscout/", env!("CARGO_PKG_VERSION"));

/// Errors constructing a [`GithubClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// The configured API root is not an absolute http(s) URL.
    #[error("Invalid API base URL {url:?}: {reason}")]
    InvalidBaseUrl {
        /// URL as configured.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The credential cannot be sent as a header value.
    #[error("GitHub token contains characters not allowed in an HTTP header")]
    InvalidCredential,

    /// reqwest rejected the client configuration.
    #[error("Failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else {
            FetchError::Network(err.to_string())
        }
    }
}

/// Client for the GitHub endpoints used by the search UI.
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: Client,
    base_url: Url,
    /// `Authorization` value for the search request.
    auth: Option<HeaderValue>,
    search_per_page: u8,
}

impl GithubClient {
    /// Create a client rooted at `base_url`.
    ///
    /// `credential` of `None` is valid and yields unauthenticated searches.
    pub fn new(
        base_url: &str,
        credential: Option<&Credential>,
        search_per_page: u8,
    ) -> Result<Self, ClientError> {
        let base_url = parse_base_url(base_url)?;

        let auth = credential
            .map(|credential| {
                let mut value = HeaderValue::from_str(&format!("token {}", credential.expose()))
                    .map_err(|_| ClientError::InvalidCredential)?;
                value.set_sensitive(true);
                Ok::<_, ClientError>(value)
            })
            .transpose()?;

        if auth.is_none() {
            debug!("No GitHub token configured, searching unauthenticated");
        }

        let http = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            http,
            base_url,
            auth,
            search_per_page,
        })
    }

    /// API root every endpoint is joined onto.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `GET /search/users?q={query}&per_page={n}` with the version Accept
    /// header and, when configured, the token.
    pub fn search_users_request(&self, query: &str) -> Result<Request, FetchError> {
        let mut url = self.endpoint(&["search", "users"]);
        url.query_pairs_mut()
            .append_pair("q", query)
            .append_pair("per_page", &self.search_per_page.to_string());

        let mut builder = self
            .http
            .get(url)
            .header(ACCEPT, HeaderValue::from_static(GITHUB_V3_MEDIA_TYPE));
        if let Some(auth) = &self.auth {
            builder = builder.header(AUTHORIZATION, auth.clone());
        }
        Ok(builder.build()?)
    }

    /// `GET /users/{username}/repos`, no extra headers.
    pub fn user_repositories_request(&self, username: &str) -> Result<Request, FetchError> {
        let url = self.endpoint(&["users", username, "repos"]);
        Ok(self.http.get(url).build()?)
    }

    /// Search users, returning matches in response order.
    pub async fn search_users(&self, query: &str) -> Result<Vec<UserSummary>, FetchError> {
        let request = self.search_users_request(query)?;
        let response: SearchUsersResponse = self.get_json(request).await?;
        Ok(response.into_items())
    }

    /// List a user's public repositories in API order.
    pub async fn user_repositories(&self, username: &str) -> Result<Vec<RepoSummary>, FetchError> {
        let request = self.user_repositories_request(username)?;
        self.get_json(request).await
    }

    async fn get_json<T: DeserializeOwned>(&self, request: Request) -> Result<T, FetchError> {
        let url = request.url().clone();
        let response = self.http.execute(request).await?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "GitHub request failed");
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|err| FetchError::Decode(err.to_string()))
    }

    /// Base URL with `segments` appended, each percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // parse_base_url rejects URLs that cannot carry a path
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ClientError> {
    let invalid = |reason: &str| ClientError::InvalidBaseUrl {
        url: raw.to_string(),
        reason: reason.to_string(),
    };

    let url = Url::parse(raw).map_err(|err| invalid(&err.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("scheme must be http or https"));
    }
    if url.cannot_be_a_base() {
        return Err(invalid("URL cannot carry a path"));
    }
    Ok(url)
}

// ===== Tests =====

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
