//! TUI rendering and terminal management (impure shell)
//!
//! Everything that touches the terminal lives here. Key events are
//! translated into pure state transitions; the [`FetchRequest`] values
//! those transitions return are dispatched to the fetch worker, whose
//! outcomes are folded back in on the timer tick.

pub mod help;
pub mod layout;
pub mod list;
pub mod search_bar;
pub mod status;
mod styles;

pub use layout::{list_viewport_rows, render_app};
pub use list::ResultList;
pub use search_bar::SearchBar;
pub use styles::{AppStyles, ColorConfig};

use crate::config::KeyBindings;
use crate::fetch::{FetchHandle, FetchRequest};
use crate::model::KeyAction;
use crate::state::{handle_scroll_action, search_input_handler, AppState};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

impl From<TuiError> for crate::model::AppError {
    fn from(err: TuiError) -> Self {
        match err {
            TuiError::Io(io) => crate::model::AppError::Terminal(io),
        }
    }
}

/// Interval between fetch-channel polls when no input arrives.
const TICK_INTERVAL: Duration = Duration::from_millis(250);

// ===== Key dispatch =====

/// What the shell must do after a key event. Sum type: at most one effect
/// per event.
#[derive(Debug, PartialEq, Eq)]
pub enum InputEffect {
    /// Nothing beyond a redraw.
    None,
    /// Exit the application.
    Quit,
    /// Dispatch a search request to the fetch worker.
    Fetch(FetchRequest),
}

/// Handle a single keyboard event against the pure state.
///
/// Character input is routed to the search field before binding dispatch
/// (and ignored while an error disables the input); everything else goes
/// through the key bindings.
pub fn handle_key_event(
    state: &mut AppState,
    bindings: &KeyBindings,
    key: KeyEvent,
    viewport_rows: usize,
) -> InputEffect {
    // Ctrl+C should always quit, even if not in bindings.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return InputEffect::Quit;
    }

    // The help overlay captures keys: scrolling and quitting work, text
    // editing does not.
    if state.help_visible {
        return match bindings.get(key) {
            Some(KeyAction::Quit) => InputEffect::Quit,
            Some(KeyAction::Help) | Some(KeyAction::ClearSearch) => {
                state.help_visible = false;
                InputEffect::None
            }
            Some(action) => match handle_scroll_action(state, action, viewport_rows) {
                Some(request) => InputEffect::Fetch(request),
                None => InputEffect::None,
            },
            None => InputEffect::None,
        };
    }

    // Text editing, before binding dispatch.
    if state.input_enabled() {
        match key.code {
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let before = state.search.char_count();
                state.search = search_input_handler::handle_char_input(state.search.clone(), ch);
                // Input at the length cap edits nothing and must not
                // re-dispatch.
                if state.search.char_count() != before {
                    if let Some(request) = state.fetch_after_edit() {
                        return InputEffect::Fetch(request);
                    }
                }
                return InputEffect::None;
            }
            KeyCode::Backspace => {
                let before = state.search.text().to_string();
                state.search = search_input_handler::handle_backspace(state.search.clone());
                // Backspace with the cursor at the start edits nothing and
                // must not re-dispatch.
                if state.search.text() != before {
                    if let Some(request) = state.fetch_after_edit() {
                        return InputEffect::Fetch(request);
                    }
                }
                return InputEffect::None;
            }
            KeyCode::Left => {
                state.search = search_input_handler::handle_cursor_left(state.search.clone());
                return InputEffect::None;
            }
            KeyCode::Right => {
                state.search = search_input_handler::handle_cursor_right(state.search.clone());
                return InputEffect::None;
            }
            _ => {} // Fall through to key binding dispatch
        }
    }

    match bindings.get(key) {
        Some(KeyAction::Quit) => InputEffect::Quit,
        Some(KeyAction::Help) => {
            state.help_visible = !state.help_visible;
            InputEffect::None
        }
        Some(KeyAction::ClearSearch) => {
            state.clear();
            InputEffect::None
        }
        Some(action) => match handle_scroll_action(state, action, viewport_rows) {
            Some(request) => InputEffect::Fetch(request),
            None => InputEffect::None,
        },
        None => InputEffect::None,
    }
}

/// Handle a mouse event. Only the wheel does anything: it scrolls the
/// list, which can trigger the next-page fetch exactly like keyboard
/// scrolling.
pub fn handle_mouse_event(
    state: &mut AppState,
    mouse: MouseEvent,
    viewport_rows: usize,
) -> Option<FetchRequest> {
    let action = match mouse.kind {
        MouseEventKind::ScrollDown => KeyAction::ScrollDown,
        MouseEventKind::ScrollUp => KeyAction::ScrollUp,
        _ => return None,
    };
    handle_scroll_action(state, action, viewport_rows)
}

// ===== TuiApp =====

/// Main TUI application: terminal, state, and the fetch worker handle.
pub struct TuiApp {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    app_state: AppState,
    key_bindings: KeyBindings,
    fetch: FetchHandle,
    styles: AppStyles,
}

impl TuiApp {
    /// Create and initialize a new TUI application.
    ///
    /// Sets up terminal in raw mode with alternate screen and mouse
    /// capture enabled.
    pub fn new(app_state: AppState, fetch: FetchHandle, styles: AppStyles) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(crossterm::event::EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            fetch,
            styles,
        })
    }

    /// Run the main event loop.
    ///
    /// Returns when the user quits. Event-driven: redraws on input
    /// events, and on timer ticks that delivered fetch outcomes; an idle
    /// app consumes no CPU beyond the poll timeout.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            if event::poll(TICK_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) if key.kind != KeyEventKind::Release => {
                        let rows = self.viewport_rows();
                        match handle_key_event(&mut self.app_state, &self.key_bindings, key, rows) {
                            InputEffect::Quit => return Ok(()),
                            InputEffect::Fetch(request) => self.fetch.dispatch(request),
                            InputEffect::None => {}
                        }
                        self.draw()?;
                    }
                    Event::Mouse(mouse) => {
                        let rows = self.viewport_rows();
                        if let Some(request) =
                            handle_mouse_event(&mut self.app_state, mouse, rows)
                        {
                            self.fetch.dispatch(request);
                        }
                        self.draw()?;
                    }
                    Event::Resize(width, height) => {
                        debug!(width, height, "terminal resized");
                        self.draw()?;
                    }
                    _ => {}
                }
            } else {
                // Timer tick: fold in completed fetches.
                let outcomes = self.fetch.poll();
                if !outcomes.is_empty() {
                    for outcome in outcomes {
                        self.app_state.apply_outcome(outcome);
                    }
                    self.draw()?;
                }
            }
        }
    }

    fn viewport_rows(&self) -> usize {
        let height = self
            .terminal
            .size()
            .map(|size| size.height)
            .unwrap_or(24);
        list_viewport_rows(height)
    }

    fn draw(&mut self) -> Result<(), TuiError> {
        let state = &self.app_state;
        let styles = &self.styles;
        self.terminal
            .draw(|frame| render_app(frame, state, styles))?;
        Ok(())
    }
}

/// Initialize and run the TUI application.
///
/// This is the main entry point for the TUI. It handles terminal setup,
/// runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this
/// function.
pub fn run(app_state: AppState, fetch: FetchHandle, styles: AppStyles) -> Result<(), TuiError> {
    let mut app = TuiApp::new(app_state, fetch, styles)?;

    let result = app.run();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state.
///
/// Disables raw mode and mouse capture, and leaves alternate screen.
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
