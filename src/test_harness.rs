//! Acceptance Test Harness for TUI testing
//!
//! Provides a high-level API for acceptance testing user stories by wrapping
//! TuiApp<TestBackend, ScriptedFetcher> with convenient methods for simulating
//! user interactions and completing fetches on demand.

use crate::api::Fetcher;
use crate::model::{
    FetchError, FetchOutcome, FetchRequest, RepoSummary, RepoTicket, SearchTicket, UserSummary,
};
use crate::state::AppState;
use crate::view::TuiApp;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

/// Convert a ratatui buffer to a string representation for snapshot testing.
///
/// Captures the visual output character by character, preserving layout.
/// Empty lines are removed and trailing spaces trimmed to keep snapshots clean.
pub(crate) fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            let cell = &buffer[(x, y)];
            line.push_str(cell.symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// [`Fetcher`] that records requests and only completes them when told to.
#[derive(Debug, Default)]
pub struct ScriptedFetcher {
    dispatched: Vec<FetchRequest>,
    completed: Vec<FetchOutcome>,
}

impl ScriptedFetcher {
    /// Every request dispatched so far, oldest first.
    pub fn dispatched(&self) -> &[FetchRequest] {
        &self.dispatched
    }

    /// Queue `outcome` for the next drain.
    pub fn complete(&mut self, outcome: FetchOutcome) {
        self.completed.push(outcome);
    }
}

impl Fetcher for ScriptedFetcher {
    fn dispatch(&mut self, request: FetchRequest) {
        self.dispatched.push(request);
    }

    fn drain(&mut self) -> Vec<FetchOutcome> {
        std::mem::take(&mut self.completed)
    }
}

/// Test harness for acceptance testing
///
/// Wraps TuiApp<TestBackend, ScriptedFetcher> to provide a clean API for
/// simulating user interactions in acceptance tests.
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend, ScriptedFetcher>,
    running: bool,
}

impl AcceptanceTestHarness {
    /// Fresh app with default terminal size (80x24)
    pub fn new() -> Self {
        Self::with_size(80, 24)
    }

    /// Fresh app with custom terminal size
    pub fn with_size(width: u16, height: u16) -> Self {
        let terminal =
            Terminal::new(TestBackend::new(width, height)).expect("TestBackend never fails");
        let app = TuiApp::new_for_test(terminal, AppState::default(), ScriptedFetcher::default());
        Self { app, running: true }
    }

    /// Send a single key press event
    ///
    /// Returns true if app quit as a result of this key
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C)
    ///
    /// Returns true if app quit as a result of this key
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true; // Already quit
        }

        let quit = self.app.handle_key_test(KeyEvent::new(key, mods));
        if quit {
            self.running = false;
        }
        quit
    }

    /// Type text (sends individual character key events)
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            if self.send_key(KeyCode::Char(ch)) {
                break; // Quit encountered
            }
        }
    }

    /// Type `query` into the search box and press Enter.
    pub fn search(&mut self, query: &str) {
        self.type_text(query);
        self.send_key(KeyCode::Enter);
    }

    /// Access app state for assertions
    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }

    /// Check if app is still running
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Requests the app has dispatched so far, oldest first.
    pub fn dispatched(&mut self) -> Vec<FetchRequest> {
        self.app.fetcher_mut().dispatched().to_vec()
    }

    /// Ticket of the `nth` user search dispatched (0-based).
    pub fn search_ticket(&mut self, nth: usize) -> SearchTicket {
        self.dispatched()
            .into_iter()
            .filter_map(|request| match request {
                FetchRequest::SearchUsers(ticket) => Some(ticket),
                FetchRequest::UserRepositories(_) => None,
            })
            .nth(nth)
            .unwrap_or_else(|| panic!("No search request #{}", nth))
    }

    /// Ticket of the `nth` repository fetch dispatched (0-based).
    pub fn repo_ticket(&mut self, nth: usize) -> RepoTicket {
        self.dispatched()
            .into_iter()
            .filter_map(|request| match request {
                FetchRequest::UserRepositories(ticket) => Some(ticket),
                FetchRequest::SearchUsers(_) => None,
            })
            .nth(nth)
            .unwrap_or_else(|| panic!("No repository request #{}", nth))
    }

    /// Complete the `nth` user search and run one loop iteration.
    ///
    /// Returns true if the outcome was applied.
    pub fn complete_search(
        &mut self,
        nth: usize,
        result: Result<Vec<UserSummary>, FetchError>,
    ) -> bool {
        let ticket = self.search_ticket(nth);
        self.deliver(FetchOutcome::Users { ticket, result })
    }

    /// Complete the `nth` repository fetch and run one loop iteration.
    ///
    /// Returns true if the outcome was applied.
    pub fn complete_repositories(
        &mut self,
        nth: usize,
        result: Result<Vec<RepoSummary>, FetchError>,
    ) -> bool {
        let ticket = self.repo_ticket(nth);
        self.deliver(FetchOutcome::Repositories { ticket, result })
    }

    /// Hand `outcome` to the fetcher and drain it into the app.
    pub fn deliver(&mut self, outcome: FetchOutcome) -> bool {
        self.app.fetcher_mut().complete(outcome);
        self.app.apply_fetched_test()
    }

    /// Render the current frame to a string
    pub fn render_to_string(&mut self) -> String {
        self.app
            .render_test()
            .expect("Rendering should succeed in test harness");

        buffer_to_string(self.app.terminal().backend().buffer())
    }
}
