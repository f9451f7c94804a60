//! Acceptance tests for searching users
//!
//! Drives the app through key presses and scripted fetch outcomes, then checks
//! both state and rendered output.

use crate::model::{FetchError, FetchRequest, RepoId, RepoSummary, UserSummary};
use crate::state::{FocusPane, LoadState};
use crate::test_harness::AcceptanceTestHarness;
use crossterm::event::KeyCode;

// ===== Scenario: search, expand, browse =====

#[test]
fn octocat_search_expands_into_repositories() {
    // GIVEN: A fresh app
    let mut harness = AcceptanceTestHarness::new();

    // WHEN: User searches "octocat" and the API returns one user
    harness.search("octocat");
    assert_eq!(harness.search_ticket(0).query, "octocat");
    assert!(harness.complete_search(0, Ok(vec![UserSummary::new(1, "octocat")])));

    // THEN: One row "octocat" is shown
    let output = harness.render_to_string();
    assert!(output.contains("Showing users for \"octocat\""), "{}", output);
    assert!(output.contains("▸ octocat"), "{}", output);
    assert_eq!(harness.state().search.results().len(), 1);

    // WHEN: User selects it
    harness.send_key(KeyCode::Enter);

    // THEN: Repositories are requested for "octocat"
    assert_eq!(harness.repo_ticket(0).username, "octocat");
    let output = harness.render_to_string();
    assert!(output.contains("Loading repositories..."), "{}", output);

    // WHEN: The repository response arrives
    let repo = RepoSummary {
        id: RepoId::new(10),
        name: "Hello-World".to_string(),
        description: None,
        stargazers_count: 42,
        html_url: "https://github.com/octocat/Hello-World".to_string(),
    };
    assert!(harness.complete_repositories(0, Ok(vec![repo])));

    // THEN: Name, placeholder description and star count are shown
    let output = harness.render_to_string();
    assert!(output.contains("▾ octocat"), "{}", output);
    assert!(output.contains("Hello-World  ★ 42"), "{}", output);
    assert!(output.contains("      -"), "{}", output);
}

// ===== Scenario: empty search =====

#[test]
fn empty_search_makes_no_request_and_no_not_found() {
    let mut harness = AcceptanceTestHarness::new();

    harness.send_key(KeyCode::Enter);

    assert!(harness.dispatched().is_empty());
    assert!(harness.state().search.results().is_empty());
    let output = harness.render_to_string();
    assert!(!output.contains("User not found."), "{}", output);
    assert!(
        output.contains("Type a username and press Enter to search."),
        "{}",
        output
    );
}

#[test]
fn whitespace_search_behaves_like_empty_search() {
    let mut harness = AcceptanceTestHarness::new();

    harness.search("   ");

    assert!(harness.dispatched().is_empty());
    assert_eq!(*harness.state().search.load_state(), LoadState::Idle);
    assert!(!harness.render_to_string().contains("User not found."));
}

#[test]
fn blank_search_after_results_clears_them() {
    let mut harness = AcceptanceTestHarness::new();
    harness.search("octocat");
    harness.complete_search(0, Ok(vec![UserSummary::new(1, "octocat")]));

    harness.send_key(KeyCode::Char('/'));
    harness.send_key_with_mods(KeyCode::Char('u'), crossterm::event::KeyModifiers::CONTROL);
    harness.send_key(KeyCode::Enter);

    assert!(harness.state().search.results().is_empty());
    assert_eq!(harness.dispatched().len(), 1);
    assert!(!harness.render_to_string().contains("octocat"));
}

// ===== Scenario: zero results and failures =====

#[test]
fn zero_results_show_user_not_found() {
    let mut harness = AcceptanceTestHarness::new();
    harness.search("no-such-user-xyz");

    harness.complete_search(0, Ok(vec![]));

    assert!(harness.render_to_string().contains("User not found."));
}

#[test]
fn rate_limited_search_shows_fixed_message() {
    let mut harness = AcceptanceTestHarness::new();
    harness.search("octo");

    harness.complete_search(0, Err(FetchError::HttpStatus { status: 403 }));

    let output = harness.render_to_string();
    assert!(output.contains("Failed to fetch users"), "{}", output);
    assert!(output.contains("User not found."), "{}", output);
}

#[test]
fn server_error_shows_message_and_user_not_found() {
    let mut harness = AcceptanceTestHarness::new();
    harness.search("octo");

    assert!(harness.complete_search(0, Err(FetchError::HttpStatus { status: 500 })));

    let output = harness.render_to_string();
    assert!(output.contains("Failed to fetch users"), "{}", output);
    assert!(output.contains("User not found."), "{}", output);
    assert!(harness.state().search.results().is_empty());
}

#[test]
fn network_failure_shows_its_text_and_resubmit_recovers() {
    let mut harness = AcceptanceTestHarness::new();
    harness.search("octo");
    harness.complete_search(
        0,
        Err(FetchError::Network("connection refused".to_string())),
    );
    assert!(harness.render_to_string().contains("connection refused"));

    // 'r' from the results pane submits the same query again
    harness.send_key(KeyCode::Char('r'));
    assert_eq!(harness.search_ticket(1).query, "octo");
    harness.complete_search(1, Ok(vec![UserSummary::new(2, "octodog")]));

    let output = harness.render_to_string();
    assert!(!output.contains("connection refused"), "{}", output);
    assert!(output.contains("octodog"), "{}", output);
}

// ===== Loading =====

#[test]
fn loading_search_shows_spinner_and_blocks_resubmit() {
    let mut harness = AcceptanceTestHarness::new();
    harness.search("octo");
    assert_eq!(harness.state().focus, FocusPane::Results);

    let output = harness.render_to_string();
    assert!(output.contains("Searching"), "{}", output);

    harness.send_key(KeyCode::Char('/'));
    harness.send_key(KeyCode::Enter);

    assert_eq!(harness.dispatched().len(), 1);
}

#[test]
fn new_search_replaces_results_and_collapses_expansion() {
    let mut harness = AcceptanceTestHarness::new();
    harness.search("octo");
    harness.complete_search(0, Ok(vec![UserSummary::new(1, "octocat")]));
    harness.send_key(KeyCode::Enter);
    assert!(harness.state().search.repository_list().is_some());

    harness.send_key(KeyCode::Char('/'));
    harness.send_key_with_mods(KeyCode::Char('u'), crossterm::event::KeyModifiers::CONTROL);
    harness.search("torvalds");
    harness.complete_search(1, Ok(vec![UserSummary::new(1024025, "torvalds")]));

    let state = harness.state();
    assert_eq!(state.search.results_query(), Some("torvalds"));
    assert_eq!(state.search.results()[0].login, "torvalds");
    assert!(state.search.repository_list().is_none());
    assert!(matches!(
        harness.dispatched().last(),
        Some(FetchRequest::SearchUsers(ticket)) if ticket.query == "torvalds"
    ));
}
