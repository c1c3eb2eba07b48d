//! Search input widget.
//!
//! Renders the query text with a cursor. While the user has typed fewer
//! characters than the search threshold, the block's bottom edge carries
//! the "type at least N characters" hint; while an error is displayed the
//! whole bar renders dimmed to show input is disabled.

use crate::state::{AppState, SearchInput, QUERY_MIN_CHARS};
use crate::view::AppStyles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search bar widget.
pub struct SearchBar<'a> {
    input: &'a SearchInput,
    disabled: bool,
    styles: &'a AppStyles,
}

impl<'a> SearchBar<'a> {
    /// Create the widget from the current state.
    pub fn new(input: &'a SearchInput, state: &'a AppState, styles: &'a AppStyles) -> Self {
        Self {
            input,
            disabled: !state.input_enabled(),
            styles,
        }
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Split text into before/cursor/after for cursor rendering.
        let text = self.input.text();
        let cursor = self.input.cursor();
        let before: String = text.chars().take(cursor).collect();
        let mut rest = text.chars().skip(cursor);
        let cursor_char = rest.next().map(|c| c.to_string()).unwrap_or_else(|| " ".to_string());
        let after: String = rest.collect();

        let cursor_style = if self.disabled {
            Style::default()
        } else {
            Style::default()
                .bg(Color::White)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD)
        };

        let spans = if text.is_empty() && self.disabled {
            vec![Span::styled("input disabled", self.styles.hint)]
        } else {
            vec![
                Span::raw(before),
                Span::styled(cursor_char, cursor_style),
                Span::raw(after),
            ]
        };

        let title = if self.disabled {
            " Search (disabled) "
        } else {
            " Search repositories "
        };

        let mut block = Block::default().borders(Borders::ALL).title(title);
        if self.input.shows_hint() {
            block = block.title_bottom(Line::from(Span::styled(
                format!(" type at least {QUERY_MIN_CHARS} characters to search "),
                self.styles.hint,
            )));
        }
        if self.disabled {
            block = block.style(Style::default().add_modifier(Modifier::DIM));
        }

        Paragraph::new(Line::from(spans)).block(block).render(area, buf);
    }
}
