//! Bottom status line.

use crate::state::AppState;
use crate::view::AppStyles;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the status line: fetch state on the left, key hints on the
/// right (as far as the width allows).
pub fn render_status(frame: &mut Frame, area: Rect, state: &AppState, styles: &AppStyles) {
    let results = &state.results;

    let left = if results.loading {
        Span::styled(format!("fetching page {}...", results.page + 1), styles.loading)
    } else if results.error.is_some() {
        Span::styled("request failed", styles.error)
    } else if results.page > 0 {
        Span::raw(format!(
            "{} of {} results · page {}",
            results.repos.len(),
            results.total_count,
            results.page
        ))
    } else {
        Span::raw("ready")
    };

    let hints = Span::styled("  F1 help · Esc clear · Ctrl-q quit", styles.hint);

    frame.render_widget(Paragraph::new(Line::from(vec![left, hints])), area);
}
