//! Frame layout and top-level rendering.
//!
//! One vertical stack: search bar (3 rows), result list (rest), status
//! line (1 row). `render_app` is the single entry point the event loop
//! and the render tests share.

use crate::state::AppState;
use crate::view::{help, list::ResultList, search_bar::SearchBar, status, AppStyles};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

/// Rows used by the search bar (content plus borders).
pub const SEARCH_BAR_ROWS: u16 = 3;
/// Rows used by the status line.
pub const STATUS_ROWS: u16 = 1;
/// Border rows of the result list block.
const LIST_BORDER_ROWS: u16 = 2;

/// The three regions of the screen.
#[derive(Debug, Clone, Copy)]
pub struct AppLayout {
    /// Search input area at the top.
    pub search: Rect,
    /// Scrollable result list.
    pub list: Rect,
    /// Status line at the bottom.
    pub status: Rect,
}

/// Split a frame area into the app's regions.
pub fn compute(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(SEARCH_BAR_ROWS),
            Constraint::Min(0),
            Constraint::Length(STATUS_ROWS),
        ])
        .split(area);

    AppLayout {
        search: chunks[0],
        list: chunks[1],
        status: chunks[2],
    }
}

/// Number of result rows visible for a terminal of `total_height` rows.
///
/// The scroll handler needs this before a frame exists, so it is computed
/// from the raw terminal height rather than a `Rect`.
pub fn list_viewport_rows(total_height: u16) -> usize {
    total_height
        .saturating_sub(SEARCH_BAR_ROWS + STATUS_ROWS + LIST_BORDER_ROWS)
        .max(1) as usize
}

/// Render the whole application into a frame.
pub fn render_app(frame: &mut Frame, state: &AppState, styles: &AppStyles) {
    let layout = compute(frame.area());

    frame.render_widget(SearchBar::new(&state.search, state, styles), layout.search);
    frame.render_widget(ResultList::new(&state.results, styles), layout.list);
    status::render_status(frame, layout.status, state, styles);

    if state.help_visible {
        help::render_help_overlay(frame);
    }
}
