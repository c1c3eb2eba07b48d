//! List scrolling action handler.
//!
//! Pure functions that transform [`AppState`] in response to scroll
//! actions. This is also where infinite scrolling lives: a scroll action
//! that lands at the bottom of the list asks the results state whether to
//! dispatch the next page, and the returned [`FetchRequest`] (if any) is
//! performed by the impure shell.

use crate::fetch::FetchRequest;
use crate::model::KeyAction;
use crate::state::AppState;

/// Handle a scroll keyboard action.
///
/// `viewport_rows` is the number of result rows visible, used for page
/// scrolling and for deciding what "bottom" means.
///
/// Returns the continuation fetch to dispatch, if the action reached the
/// bottom while more results exist and none are being loaded.
pub fn handle_scroll_action(
    state: &mut AppState,
    action: KeyAction,
    viewport_rows: usize,
) -> Option<FetchRequest> {
    let results = &mut state.results;
    let max = results.max_offset(viewport_rows);
    let scroll = &mut results.scroll;

    match action {
        KeyAction::ScrollUp => scroll.scroll_up(1),
        KeyAction::ScrollDown => scroll.scroll_down(1, max),
        KeyAction::PageUp => scroll.scroll_up(viewport_rows),
        KeyAction::PageDown => scroll.scroll_down(viewport_rows, max),
        KeyAction::ScrollToTop => scroll.to_top(),
        KeyAction::ScrollToBottom => scroll.to_bottom(max),
        // Non-scroll actions are no-ops here.
        _ => return None,
    }

    // Scrolling up can never trigger a fetch, even if the list is shorter
    // than the viewport and every offset counts as "bottom".
    let moved_toward_bottom = matches!(
        action,
        KeyAction::ScrollDown | KeyAction::PageDown | KeyAction::ScrollToBottom
    );

    if moved_toward_bottom && results.scroll.at_bottom(max) && !results.is_empty() {
        results.begin_next_page()
    } else {
        None
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "scroll_handler_tests.rs"]
mod tests;
