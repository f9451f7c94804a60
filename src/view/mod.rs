//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod help;
mod layout;
mod repository_list;
mod search_input;
mod styles;
mod user_list;

pub use help::render_help_overlay;
pub use layout::{build_keyboard_hints, render_layout, TITLE_TEXT};
pub use search_input::SearchInput;
pub use styles::{ColorConfig, ResultStyles};

use crate::api::{ClientError, Fetcher, GithubClient, HttpFetcher};
use crate::config::keybindings::KeyBindings;
use crate::config::ResolvedConfig;
use crate::model::KeyAction;
use crate::state::{
    handle_results_action, search_input_handler, submit_query, AppState, Effect, FocusPane,
    UserSearchState,
};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// HTTP client could not be built from the configuration
    #[error("GitHub client error: {0}")]
    Client(#[from] ClientError),

    /// Background fetch runtime failed to start
    #[error("Failed to start fetch runtime: {0}")]
    Runtime(#[source] io::Error),
}

/// Opens a URL outside the terminal.
pub type BrowserLauncher = fn(&str) -> io::Result<()>;

/// Main TUI application
///
/// Generic over backend and fetcher to support testing with TestBackend
/// and scripted fetch outcomes.
pub struct TuiApp<B, F>
where
    B: ratatui::backend::Backend,
    F: Fetcher,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    fetcher: F,
    styles: ResultStyles,
    browser: BrowserLauncher,
    /// Spinner frame counter, advanced while a search is in flight
    tick: usize,
}

impl<F: Fetcher> TuiApp<CrosstermBackend<Stdout>, F> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen. If setup fails
    /// after raw mode is on, the terminal is restored before returning.
    pub fn new(app_state: AppState, fetcher: F, styles: ResultStyles) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let terminal = restore_on_error(enter_alternate_screen, restore_terminal)?;

        Ok(Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            fetcher,
            styles,
            browser: launch_browser,
            tick: 0,
        })
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C)
    pub fn run(&mut self) -> Result<(), TuiError> {
        // Poll interval; also the spinner frame rate
        const TICK_INTERVAL: Duration = Duration::from_millis(100);

        self.draw()?;

        loop {
            let mut dirty = false;

            if event::poll(TICK_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                        dirty = true;
                    }
                    Event::Resize(width, height) => {
                        debug!("Handling resize to {}x{}", width, height);
                        dirty = true;
                    }
                    _ => {}
                }
            }

            if self.apply_fetched() {
                dirty = true;
            }

            if self.app_state.search.is_loading() {
                self.tick = self.tick.wrapping_add(1);
                dirty = true;
            }

            if dirty {
                self.draw()?;
            }
        }
    }
}

impl<B, F> TuiApp<B, F>
where
    B: ratatui::backend::Backend,
    F: Fetcher,
{
    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Ctrl+C always quits, even while typing
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        // Status messages last until the next key press
        self.app_state.status_message = None;

        if self.app_state.help_visible {
            self.handle_help_key(key);
            return false;
        }

        match self.app_state.focus {
            FocusPane::Search => {
                self.handle_search_key(key);
                false
            }
            FocusPane::Results => self.handle_results_key(key),
        }
    }

    /// Keys while the help overlay is shown: close or scroll, nothing else.
    fn handle_help_key(&mut self, key: KeyEvent) {
        let max_scroll = u16::try_from(help::help_line_count().saturating_sub(1)).unwrap_or(0);
        match key.code {
            KeyCode::Esc | KeyCode::Char('?') => self.app_state.toggle_help(),
            KeyCode::Char('j') | KeyCode::Down => {
                self.app_state.help_scroll = (self.app_state.help_scroll + 1).min(max_scroll);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.app_state.help_scroll = self.app_state.help_scroll.saturating_sub(1);
            }
            _ => {}
        }
    }

    /// Keys while the search input has focus. Printable characters edit the
    /// query; key bindings do not apply here.
    fn handle_search_key(&mut self, key: KeyEvent) {
        use search_input_handler as edit;

        let control = key.modifiers.contains(KeyModifiers::CONTROL);
        let search = &mut self.app_state.search;
        match key.code {
            KeyCode::Char('u') if control => search.edit_input(edit::clear_input),
            KeyCode::Char(ch) if !control && !key.modifiers.contains(KeyModifiers::ALT) => {
                search.edit_input(|input| edit::handle_char_input(input, ch));
            }
            KeyCode::Backspace => search.edit_input(edit::handle_backspace),
            KeyCode::Delete => search.edit_input(edit::handle_delete),
            KeyCode::Left => search.edit_input(edit::handle_cursor_left),
            KeyCode::Right => search.edit_input(edit::handle_cursor_right),
            KeyCode::Home => search.edit_input(edit::handle_cursor_home),
            KeyCode::End => search.edit_input(edit::handle_cursor_end),
            KeyCode::Enter => self.submit_current_query(),
            KeyCode::Tab | KeyCode::Down | KeyCode::Esc => self.app_state.focus_results(),
            _ => {}
        }
    }

    /// Keys while the results pane has focus, dispatched through bindings.
    ///
    /// Returns true if app should quit
    fn handle_results_key(&mut self, key: KeyEvent) -> bool {
        let action = match self.key_bindings.get(key) {
            Some(action) => action,
            None => return false,
        };

        if action == KeyAction::Quit {
            return true;
        }

        let (state, effect) = handle_results_action(std::mem::take(&mut self.app_state), action);
        self.app_state = state;
        self.apply_effect(effect);
        false
    }

    /// Perform the side effect a state transition asked for.
    fn apply_effect(&mut self, effect: Option<Effect>) {
        match effect {
            Some(Effect::Fetch(request)) => self.fetcher.dispatch(request),
            Some(Effect::OpenInBrowser(url)) => match (self.browser)(&url) {
                Ok(()) => {
                    info!(url = %url, "Opened repository in browser");
                    self.app_state.status_message = Some(format!("Opened {}", url));
                }
                Err(err) => {
                    warn!(url = %url, error = %err, "Failed to open browser");
                    self.app_state.status_message =
                        Some(format!("Could not open {}: {}", url, err));
                }
            },
            None => {}
        }
    }

    /// Feed finished fetches into the state machine.
    ///
    /// Returns true if any outcome changed what is displayed.
    fn apply_fetched(&mut self) -> bool {
        let mut changed = false;
        for outcome in self.fetcher.drain() {
            if self.app_state.apply_outcome(outcome) {
                changed = true;
            } else {
                debug!("Discarded stale fetch outcome");
            }
        }
        changed
    }

    /// Submit whatever the search input holds.
    fn submit_current_query(&mut self) {
        let (state, effect) = submit_query(std::mem::take(&mut self.app_state));
        self.app_state = state;
        self.apply_effect(effect);
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        let state = &self.app_state;
        let styles = &self.styles;
        let tick = self.tick;
        self.terminal.draw(|frame| {
            render_layout(frame, state, styles, tick);
            if state.help_visible {
                render_help_overlay(frame, state.help_scroll);
            }
        })?;
        Ok(())
    }
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing within the crate.
//
// DO NOT use these in production code.

#[cfg(test)]
#[allow(dead_code)] // Not all helpers used by every test module
impl<B, F> TuiApp<B, F>
where
    B: ratatui::backend::Backend,
    F: Fetcher,
{
    /// Create TuiApp for testing without terminal initialization.
    ///
    /// Opening a browser always succeeds and does nothing.
    pub(crate) fn new_for_test(terminal: Terminal<B>, app_state: AppState, fetcher: F) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            fetcher,
            styles: ResultStyles::with_color_config(ColorConfig::from_env_and_args(true)),
            browser: |_| Ok(()),
            tick: 0,
        }
    }

    pub(crate) fn with_browser(mut self, browser: BrowserLauncher) -> Self {
        self.browser = browser;
        self
    }

    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    pub(crate) fn fetcher_mut(&mut self) -> &mut F {
        &mut self.fetcher
    }

    /// Handle a single keyboard event. Returns true if app should quit.
    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    /// Drain the fetcher into the state, as one loop iteration does.
    pub(crate) fn apply_fetched_test(&mut self) -> bool {
        self.apply_fetched()
    }

    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Open `url` in the system browser without waiting for it.
fn launch_browser(url: &str) -> io::Result<()> {
    open::that_detached(url)
}

/// Initialize and run the TUI application
///
/// Builds the GitHub client from `config`, sets up the terminal, submits
/// `initial_query` if one was given, runs the event loop, and always restores
/// the terminal on the way out.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_config(
    config: &ResolvedConfig,
    initial_query: Option<String>,
    no_color: bool,
) -> Result<(), TuiError> {
    let client = GithubClient::new(
        &config.api_base_url,
        config.credential.as_ref(),
        config.search_per_page,
    )?;
    let fetcher = HttpFetcher::new(client).map_err(TuiError::Runtime)?;

    let search = initial_query
        .map(UserSearchState::with_query)
        .unwrap_or_default();
    let has_initial_query = !search.query().trim().is_empty();
    let styles = ResultStyles::with_color_config(ColorConfig::from_env_and_args(no_color));

    let mut app = TuiApp::new(AppState::new(search), fetcher, styles)?;
    if has_initial_query {
        app.submit_current_query();
    }

    // Run the app and ensure cleanup happens even on error
    let result = app.run();

    restore_terminal()?;

    result
}

/// Switch stdout to the alternate screen and wrap it in a terminal.
fn enter_alternate_screen() -> Result<Terminal<CrosstermBackend<Stdout>>, TuiError> {
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Run `setup`, calling `restore` if it fails.
///
/// The setup error is returned even when restoring fails too.
fn restore_on_error<T>(
    setup: impl FnOnce() -> Result<T, TuiError>,
    restore: impl FnOnce() -> Result<(), TuiError>,
) -> Result<T, TuiError> {
    setup().inspect_err(|_| {
        if let Err(err) = restore() {
            warn!(error = %err, "Failed to restore terminal after setup error");
        }
    })
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "tui_app_tests.rs"]
mod tests;
