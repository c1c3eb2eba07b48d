//! Application state and transitions.
//!
//! `AppState` is the root state type containing all UI state. It is the
//! Rust rendition of the store slice driving the result list: a list of
//! repositories, a loading flag, an optional error, the current page, and
//! a has-more flag. All transitions are pure functions of the state and an
//! input; side effects are described by the [`FetchRequest`] values they
//! return and performed elsewhere.

use crate::fetch::{FetchOutcome, FetchRequest};
use crate::model::Repo;
use crate::state::SearchInput;
use tracing::debug;

// ===== AppState =====

/// Root application state. Pure data, no side effects.
///
/// # State machine
///
/// - Every keystroke edits [`AppState::search`] immediately.
/// - An edit whose text qualifies returns a page-1 [`FetchRequest`] from
///   [`AppState::fetch_after_edit`]; a new query resets the result list.
/// - A scroll action landing at the bottom of the list may return a
///   continuation request (see [`crate::state::handle_scroll_action`]).
/// - Fetch completions are folded in by [`AppState::apply_outcome`].
/// - While an error is present, character input is disabled
///   ([`AppState::input_enabled`]); Esc resets the whole view-model.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The search field the user is editing.
    pub search: SearchInput,
    /// The result list and its fetch status.
    pub results: ResultsState,
    /// Whether the help overlay is visible.
    pub help_visible: bool,
}

impl AppState {
    /// Fresh state with an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// State pre-filled with an initial query (e.g. from the CLI).
    /// The caller still goes through [`AppState::fetch_after_edit`] to
    /// dispatch the initial search.
    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            search: SearchInput::with_text(query),
            ..Self::default()
        }
    }

    /// Whether the search field accepts character input.
    /// False while an error is displayed.
    pub fn input_enabled(&self) -> bool {
        self.results.error.is_none()
    }

    /// Decide whether the last edit dispatches a search.
    ///
    /// Returns `Some` page-1 request iff the text qualifies; every
    /// qualifying edit re-dispatches (there is no debounce timer). When
    /// the query differs from the one the current results belong to, the
    /// list is reset.
    pub fn fetch_after_edit(&mut self) -> Option<FetchRequest> {
        if !self.search.qualifies() {
            return None;
        }
        let query = self.search.text().to_string();
        if query != self.results.query {
            self.results.reset_for_query(query.clone());
        }
        self.results.loading = true;
        Some(FetchRequest::first_page(query))
    }

    /// Fold a fetch completion into the state.
    pub fn apply_outcome(&mut self, outcome: FetchOutcome) {
        self.results.apply_outcome(outcome);
    }

    /// Reset everything: query, results, error. Bound to Esc.
    pub fn clear(&mut self) {
        self.search = SearchInput::new();
        self.results = ResultsState::default();
    }
}

// ===== ResultsState =====

/// The result list view-model.
///
/// # Invariants
///
/// - `repos` is append-only within one search session (one `query`); it is
///   replaced wholesale when a page-1 response arrives and cleared when the
///   query changes.
/// - `page` is the number of the last applied page; successful
///   continuations increment it by exactly one.
/// - `has_more` is false once the upstream source signals exhaustion
///   (an empty page, or everything retrievable already fetched).
/// - `scroll.offset` never exceeds the last valid row offset.
#[derive(Debug, Clone, Default)]
pub struct ResultsState {
    /// Query the current results belong to. Empty before the first search.
    pub query: String,
    /// Loaded repositories, in API order across pages.
    pub repos: Vec<Repo>,
    /// Total hits reported by the API for `query`.
    pub total_count: u64,
    /// Last applied page number; 0 before the first page arrives.
    pub page: u32,
    /// Whether a fetch is in flight.
    pub loading: bool,
    /// Whether more results can be fetched for `query`.
    pub has_more: bool,
    /// Display message of the last failure, if any.
    pub error: Option<String>,
    /// List scroll position.
    pub scroll: ScrollState,
}

impl ResultsState {
    /// Start a new search session: drop results belonging to the old
    /// query.
    pub fn reset_for_query(&mut self, query: String) {
        debug!(%query, "starting new search session");
        *self = Self {
            query,
            ..Self::default()
        };
    }

    /// Decide whether hitting the bottom of the list dispatches the next
    /// page. Sets `loading` when it does.
    pub fn begin_next_page(&mut self) -> Option<FetchRequest> {
        if !self.has_more || self.loading {
            return None;
        }
        self.loading = true;
        Some(FetchRequest {
            query: self.query.clone(),
            page: self.page + 1,
        })
    }

    /// Fold a fetch completion into the list.
    ///
    /// Completions are matched against the current session by query: a
    /// response to a query the user has since typed past is dropped, so a
    /// slow page-1 response can never clobber a newer query's results.
    /// Within a session, a page-1 response replaces the list (a
    /// re-dispatched identical query) and page `n + 1` appends; anything
    /// else is a duplicate and is dropped.
    pub fn apply_outcome(&mut self, outcome: FetchOutcome) {
        if outcome.request().query != self.query {
            debug!(
                stale = %outcome.request().query,
                current = %self.query,
                "dropping stale fetch outcome"
            );
            return;
        }

        match outcome {
            FetchOutcome::Loaded { request, page } => {
                let arrived = page.items.len();
                let total_retrievable = page.retrievable();

                if request.page == 1 {
                    self.repos = page.items;
                    self.page = 1;
                    self.scroll = ScrollState::default();
                } else if request.page == self.page + 1 {
                    self.repos.extend(page.items);
                    self.page = request.page;
                } else {
                    debug!(page = request.page, "dropping out-of-sequence page");
                    return;
                }
                self.total_count = page.total_count;
                // An empty page means the source is exhausted no matter
                // what total_count claims.
                self.has_more = arrived > 0 && (self.repos.len() as u64) < total_retrievable;
                self.loading = false;
                self.error = None;
            }
            FetchOutcome::Failed { message, .. } => {
                self.loading = false;
                self.error = Some(message);
            }
        }
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.repos.is_empty()
    }

    /// Last valid scroll offset for a viewport of `viewport_rows` rows.
    pub fn max_offset(&self, viewport_rows: usize) -> usize {
        self.repos.len().saturating_sub(viewport_rows)
    }
}

// ===== ScrollState =====

/// Scroll state for the result list. One row per repository; the offset
/// is the index of the first visible row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    /// Index of the first visible row.
    pub offset: usize,
}

impl ScrollState {
    /// Scroll up by `amount` rows, saturating at 0.
    pub fn scroll_up(&mut self, amount: usize) {
        self.offset = self.offset.saturating_sub(amount);
    }

    /// Scroll down by `amount` rows, clamped to `max`.
    pub fn scroll_down(&mut self, amount: usize, max: usize) {
        self.offset = (self.offset + amount).min(max);
    }

    /// Jump to the first row.
    pub fn to_top(&mut self) {
        self.offset = 0;
    }

    /// Jump to the last valid offset.
    pub fn to_bottom(&mut self, max: usize) {
        self.offset = max;
    }

    /// Whether the view is at (or past) the last valid offset.
    pub fn at_bottom(&self, max: usize) -> bool {
        self.offset >= max
    }

    /// Re-clamp after the list shrinks.
    pub fn clamp(&mut self, max: usize) {
        self.offset = self.offset.min(max);
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
