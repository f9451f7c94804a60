//! GitHub API access (impure shell).
//!
//! `client` speaks HTTP; `fetcher` runs it off the UI thread.

pub mod client;
pub mod fetcher;

pub use client::{ClientError, GithubClient, GITHUB_V3_MEDIA_TYPE};
pub use fetcher::{run_request, Fetcher, HttpFetcher};
