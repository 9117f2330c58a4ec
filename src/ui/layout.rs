//! Layout components (content area and status bar)

use crate::app::App;
use crate::platform::{PASTE_SHORTCUT, SUBMIT_SHORTCUT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split off the bottom line for the status bar, returning (content, status)
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(" {} ", view_hints(app)),
        Style::default().fg(Color::Gray),
    )];

    if let Some(msg) = &app.status_message {
        let color = if app.form.has_errors() {
            Color::Red
        } else {
            Color::Green
        };
        spans.push(Span::raw("| "));
        spans.push(Span::styled(msg, Style::default().fg(color)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Keyboard hints for the focused row
fn view_hints(app: &App) -> String {
    if app.has_errors() {
        "Enter/Esc:dismiss".to_string()
    } else if app.form.is_action_row_active() {
        format!("←/→:button  Enter:press  Tab:next  {SUBMIT_SHORTCUT}:submit  ^R:reset")
    } else {
        format!("Tab:next  {PASTE_SHORTCUT}:paste  {SUBMIT_SHORTCUT}:submit  ^R:reset")
    }
}
