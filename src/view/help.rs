//! Help overlay widget displaying keyboard shortcuts.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const POPUP_WIDTH: u16 = 46;
const POPUP_HEIGHT: u16 = 14;

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame) {
    let popup_area = centered_rect(POPUP_WIDTH, POPUP_HEIGHT, frame.area());

    frame.render_widget(Clear, popup_area);

    let key_style = Style::default().fg(Color::Cyan);
    let row = |key: &'static str, what: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<14}"), key_style),
            Span::raw(what),
        ])
    };

    let content = vec![
        Line::from(Span::styled("Searching", Style::default().add_modifier(Modifier::BOLD))),
        row("type", "edit the query (3+ chars searches)"),
        row("Esc", "clear query and results"),
        Line::from(""),
        Line::from(Span::styled("Scrolling", Style::default().add_modifier(Modifier::BOLD))),
        row("↑/↓", "one row"),
        row("PgUp/PgDn", "one page (also Ctrl-u/Ctrl-d)"),
        row("Home/End", "first / last loaded row"),
        Line::from(""),
        Line::from(Span::styled("Application", Style::default().add_modifier(Modifier::BOLD))),
        row("F1", "toggle this help"),
        row("Ctrl-q", "quit (also Ctrl-c)"),
    ];

    let help = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .alignment(Alignment::Left);

    frame.render_widget(help, popup_area);
}

/// Center a fixed-size rect inside `area`, shrinking if needed.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}
