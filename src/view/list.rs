//! Result list widget.
//!
//! One row per repository: name, star count, language, truncated
//! description, and the last update date when the row has room. The list
//! also owns the three transient displays: the error banner, the
//! "Loading..." row, and the more-results-below marker.

use crate::model::Repo;
use crate::state::ResultsState;
use crate::view::AppStyles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

/// Result list widget.
pub struct ResultList<'a> {
    results: &'a ResultsState,
    styles: &'a AppStyles,
}

impl<'a> ResultList<'a> {
    /// Create the widget from the results state.
    pub fn new(results: &'a ResultsState, styles: &'a AppStyles) -> Self {
        Self { results, styles }
    }

    fn title(&self) -> String {
        if self.results.query.is_empty() || self.results.page == 0 {
            " Results ".to_string()
        } else {
            format!(
                " Results {} of {} ",
                self.results.repos.len(),
                self.results.total_count
            )
        }
    }

    fn repo_line(&self, repo: &Repo, width: usize) -> Line<'static> {
        let mut spans: Vec<Span<'static>> = Vec::new();
        spans.push(Span::styled(repo.full_name.clone(), self.styles.repo_name));
        spans.push(Span::styled(
            format!(" ★{}", repo.stargazers_count),
            self.styles.stars,
        ));
        if let Some(language) = &repo.language {
            spans.push(Span::styled(format!(" [{language}]"), self.styles.language));
        }
        if let Some(updated) = &repo.updated_at {
            spans.push(Span::styled(
                format!(" {}", updated.format("%Y-%m-%d")),
                self.styles.updated,
            ));
        }
        if let Some(description) = &repo.description {
            spans.push(Span::styled(
                format!(" — {description}"),
                self.styles.description,
            ));
        }

        truncate_line(spans, width)
    }
}

impl Widget for ResultList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let results = self.results;

        let mut block = Block::default().borders(Borders::ALL).title(self.title());
        if !results.loading && results.has_more && !results.is_empty() {
            block = block.title_bottom(Line::from(Span::styled(
                " ↓ scroll for more ",
                self.styles.hint,
            )));
        }

        let inner = block.inner(area);
        block.render(area, buf);

        let width = inner.width as usize;
        let viewport = inner.height as usize;
        let mut lines: Vec<Line> = Vec::with_capacity(viewport);

        if let Some(error) = &results.error {
            lines.push(Line::from(Span::styled(
                format!("Error: {error}"),
                self.styles.error,
            )));
            lines.push(Line::from(Span::styled(
                "Press Esc to clear and start over.",
                self.styles.hint,
            )));
        }

        let visible = results
            .repos
            .iter()
            .skip(results.scroll.offset)
            .take(viewport.saturating_sub(lines.len()));
        for repo in visible {
            lines.push(self.repo_line(repo, width));
        }

        if results.loading && lines.len() < viewport {
            lines.push(Line::from(Span::styled("Loading...", self.styles.loading)));
        }

        if lines.is_empty() {
            let placeholder = if results.query.is_empty() {
                "Start typing to search repositories."
            } else if results.page > 0 {
                "No repositories found."
            } else {
                ""
            };
            lines.push(Line::from(Span::styled(placeholder, self.styles.hint)));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}

/// Truncate a line of spans to `width` display columns, appending an
/// ellipsis when anything was cut.
fn truncate_line(spans: Vec<Span<'static>>, width: usize) -> Line<'static> {
    if width == 0 {
        return Line::from("");
    }

    let mut used = 0usize;
    let mut out: Vec<Span<'static>> = Vec::with_capacity(spans.len());

    for span in spans {
        let mut kept = String::new();
        for ch in span.content.chars() {
            let ch_width = ch.width().unwrap_or(0);
            if used + ch_width > width.saturating_sub(1) {
                // Reserve the last column for the ellipsis.
                out.push(Span::styled(kept, span.style));
                out.push(Span::raw("…"));
                return Line::from(out);
            }
            used += ch_width;
            kept.push(ch);
        }
        out.push(Span::styled(kept, span.style));
    }

    Line::from(out)
}
