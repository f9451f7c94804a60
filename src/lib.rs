//! ghscout
//!
//! TUI application for searching GitHub users and browsing their public
//! repositories.
//!
//! Follows a Pure Core / Impure Shell architecture: `model` and `state` are
//! pure and tested without a terminal or network; `api` and `view` perform
//! the I/O.

pub mod api;
pub mod config;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
