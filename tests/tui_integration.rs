//! Full-frame rendering tests on a test backend.
//!
//! No real terminal: frames render into ratatui's `TestBackend` and the
//! assertions read the character buffer.

use ratatui::backend::TestBackend;
use ratatui::Terminal;
use reposcout::fetch::{FetchOutcome, FetchRequest};
use reposcout::model::{Repo, RepoOwner, SearchPage};
use reposcout::state::AppState;
use reposcout::view::{render_app, AppStyles};

fn render_to_string(state: &AppState) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let styles = AppStyles::default();
    terminal
        .draw(|frame| render_app(frame, state, &styles))
        .unwrap();
    let buffer = terminal.backend().buffer().clone();
    let mut rendered = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            rendered.push_str(buffer[(x, y)].symbol());
        }
        rendered.push('\n');
    }
    rendered
}

fn repo(id: u64) -> Repo {
    Repo {
        id,
        full_name: format!("owner/repo{id}"),
        owner: RepoOwner {
            login: "owner".to_string(),
        },
        description: Some("does useful things".to_string()),
        stargazers_count: 1234,
        language: Some("Rust".to_string()),
        html_url: format!("https://github.com/owner/repo{id}"),
        updated_at: None,
    }
}

fn loaded_state(count: u64, total: u64) -> AppState {
    let mut state = AppState::with_query("rust");
    state.fetch_after_edit();
    state.apply_outcome(FetchOutcome::Loaded {
        request: FetchRequest::first_page("rust"),
        page: SearchPage {
            total_count: total,
            incomplete_results: false,
            items: (0..count).map(repo).collect(),
        },
    });
    state
}

#[test]
fn initial_frame_shows_search_bar_and_placeholder() {
    let state = AppState::new();
    let rendered = render_to_string(&state);
    assert!(rendered.contains("Search repositories"));
    assert!(rendered.contains("Start typing to search repositories."));
    assert!(rendered.contains("ready"));
}

#[test]
fn results_render_with_counts_in_titles() {
    let state = loaded_state(5, 5);
    let rendered = render_to_string(&state);
    assert!(rendered.contains("Results 5 of 5"));
    assert!(rendered.contains("owner/repo0"));
    assert!(rendered.contains("owner/repo4"));
    assert!(rendered.contains("5 of 5 results · page 1"));
}

// The loading row renders exactly while a fetch is in flight.
#[test]
fn loading_indicator_tracks_loading_flag() {
    let mut state = AppState::with_query("rust");
    state.fetch_after_edit();
    assert!(state.results.loading);
    assert!(render_to_string(&state).contains("Loading..."));

    state.apply_outcome(FetchOutcome::Loaded {
        request: FetchRequest::first_page("rust"),
        page: SearchPage {
            total_count: 1,
            incomplete_results: false,
            items: vec![repo(0)],
        },
    });
    assert!(!state.results.loading);
    assert!(!render_to_string(&state).contains("Loading..."));
}

// An error renders the banner and the disabled search title.
#[test]
fn error_frame_shows_banner_and_disabled_input() {
    let mut state = AppState::with_query("rust");
    state.fetch_after_edit();
    state.apply_outcome(FetchOutcome::Failed {
        request: FetchRequest::first_page("rust"),
        message: "Rate limited by the search API (retry after None seconds)".to_string(),
    });

    let rendered = render_to_string(&state);
    assert!(rendered.contains("Error: Rate limited"));
    assert!(rendered.contains("Search (disabled)"));
    assert!(rendered.contains("request failed"));
}

#[test]
fn below_threshold_hint_appears_in_search_bar() {
    let state = AppState::with_query("ru");
    let rendered = render_to_string(&state);
    assert!(rendered.contains("type at least 3 characters"));
}

#[test]
fn more_results_marker_appears_when_idle_with_more() {
    let state = loaded_state(30, 100);
    assert!(render_to_string(&state).contains("scroll for more"));
}

#[test]
fn help_overlay_renders_over_results() {
    let mut state = loaded_state(5, 5);
    state.help_visible = true;
    let rendered = render_to_string(&state);
    assert!(rendered.contains("Keyboard Shortcuts"));
}

#[test]
fn tiny_terminal_does_not_panic() {
    let state = loaded_state(30, 100);
    let styles = AppStyles::default();
    for (width, height) in [(1u16, 1u16), (10, 3), (20, 6), (5, 40)] {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| render_app(frame, &state, &styles))
            .unwrap();
    }
}
