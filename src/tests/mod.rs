//! Internal test modules - whitebox tests with crate access
//!
//! Harness-based acceptance tests drive the whole app through key presses
//! and scripted fetch outcomes, with no terminal or network.

mod acceptance_repositories;
mod acceptance_search;
