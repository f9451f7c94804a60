//! Acceptance tests for the per-user repository list

use crate::model::{FetchError, RepoId, RepoSummary, UserSummary};
use crate::state::{LoadState, ResultRow};
use crate::test_harness::AcceptanceTestHarness;
use crossterm::event::KeyCode;

// ===== Test Helpers =====

fn repo(id: u64, name: &str, owner: &str) -> RepoSummary {
    RepoSummary {
        id: RepoId::new(id),
        name: name.to_string(),
        description: Some(format!("{} by {}", name, owner)),
        stargazers_count: id,
        html_url: format!("https://github.com/{}/{}", owner, name),
    }
}

/// Harness with users "a" and "b" listed and the cursor on "a".
fn two_users() -> AcceptanceTestHarness {
    let mut harness = AcceptanceTestHarness::new();
    harness.search("a");
    harness.complete_search(0, Ok(vec![UserSummary::new(1, "a"), UserSummary::new(2, "b")]));
    harness
}

// ===== Scenario: username changes while a fetch is pending =====

#[test]
fn late_response_for_previous_user_is_discarded() {
    // GIVEN: "a" expanded with its repositories still loading
    let mut harness = two_users();
    harness.send_key(KeyCode::Enter);

    // WHEN: User switches to "b" before "a" resolves
    harness.send_key(KeyCode::Char('j'));
    harness.send_key(KeyCode::Enter);
    assert_eq!(harness.repo_ticket(1).username, "b");

    assert!(harness.complete_repositories(1, Ok(vec![repo(20, "b-repo", "b")])));
    // AND: "a"'s response arrives late
    assert!(!harness.complete_repositories(0, Ok(vec![repo(10, "a-repo", "a")])));

    // THEN: The list reflects "b", not "a"
    let list = harness.state().search.repository_list().unwrap();
    assert_eq!(list.username(), "b");
    assert_eq!(list.repos()[0].name, "b-repo");
    let output = harness.render_to_string();
    assert!(output.contains("b-repo"), "{}", output);
    assert!(!output.contains("a-repo"), "{}", output);
}

#[test]
fn late_response_before_current_one_does_not_flash() {
    let mut harness = two_users();
    harness.send_key(KeyCode::Enter);
    harness.send_key(KeyCode::Char('j'));
    harness.send_key(KeyCode::Enter);

    assert!(!harness.complete_repositories(0, Ok(vec![repo(10, "a-repo", "a")])));

    let list = harness.state().search.repository_list().unwrap();
    assert_eq!(*list.load_state(), LoadState::Loading);
    assert!(!harness.render_to_string().contains("a-repo"));
}

// ===== Expansion =====

#[test]
fn at_most_one_user_is_expanded() {
    let mut harness = two_users();
    harness.send_key(KeyCode::Enter);
    harness.send_key(KeyCode::Char('j'));

    harness.send_key(KeyCode::Enter);

    let output = harness.render_to_string();
    assert!(output.contains("▸ a"), "{}", output);
    assert!(output.contains("▾ b"), "{}", output);
}

#[test]
fn collapsing_and_reexpanding_fetches_again() {
    let mut harness = two_users();
    harness.send_key(KeyCode::Enter);
    harness.complete_repositories(0, Ok(vec![repo(10, "a-repo", "a")]));

    harness.send_key(KeyCode::Enter);
    assert!(harness.state().search.repository_list().is_none());
    harness.send_key(KeyCode::Enter);

    assert_eq!(harness.repo_ticket(1).username, "a");
    assert!(harness.render_to_string().contains("Loading repositories..."));
}

#[test]
fn user_without_repositories_shows_empty_text() {
    let mut harness = two_users();
    harness.send_key(KeyCode::Enter);

    harness.complete_repositories(0, Ok(vec![]));

    assert!(harness.render_to_string().contains("No repositories found."));
}

// ===== Failure and refresh =====

#[test]
fn repository_failure_then_refresh_recovers() {
    let mut harness = two_users();
    harness.send_key(KeyCode::Enter);
    harness.complete_repositories(0, Err(FetchError::HttpStatus { status: 500 }));
    assert!(harness
        .render_to_string()
        .contains("Failed to fetch repositories"));

    // Cursor sits on the expanded user, so 'r' refreshes its repositories
    harness.send_key(KeyCode::Char('r'));
    assert_eq!(harness.repo_ticket(1).username, "a");
    harness.complete_repositories(1, Ok(vec![repo(10, "a-repo", "a")]));

    let output = harness.render_to_string();
    assert!(!output.contains("Failed to fetch repositories"), "{}", output);
    assert!(output.contains("a-repo"), "{}", output);
}

#[test]
fn cursor_walks_into_repository_rows() {
    let mut harness = two_users();
    harness.send_key(KeyCode::Enter);
    harness.complete_repositories(
        0,
        Ok(vec![repo(10, "first", "a"), repo(11, "second", "a")]),
    );

    harness.send_key(KeyCode::Char('j'));
    harness.send_key(KeyCode::Char('j'));
    assert_eq!(harness.state().selected(), Some(ResultRow::Repository(1)));

    harness.send_key(KeyCode::Char('j'));
    assert_eq!(harness.state().selected(), Some(ResultRow::User(1)));

    harness.send_key(KeyCode::Char('g'));
    assert_eq!(harness.state().selected(), Some(ResultRow::User(0)));
}

#[test]
fn q_from_results_quits() {
    let mut harness = two_users();

    assert!(harness.send_key(KeyCode::Char('q')));
    assert!(!harness.is_running());
}
