//! Field rendering utilities for forms

use crate::state::{FieldKind, ValidationError};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by one field: bordered input plus the inline error line
pub const FIELD_HEIGHT: u16 = 4;

/// Draw a single-line input with its label, placeholder and inline error
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: FieldKind,
    value: &str,
    error: Option<&ValidationError>,
    is_active: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let rule = field.rule();
    let border_color = match (error.is_some(), is_active) {
        (true, _) => Color::Red,
        (false, true) => Color::Cyan,
        (false, false) => Color::DarkGray,
    };

    let mut spans = Vec::with_capacity(3);
    if value.is_empty() {
        let hint = match (rule.placeholder, is_active) {
            (Some(placeholder), _) => placeholder,
            (None, false) => "(empty)",
            (None, true) => "",
        };
        spans.push(Span::styled(
            hint,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ));
    } else {
        let style = if is_active {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(value, style));
    }
    if is_active {
        spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
    }

    // Length counter for capped fields
    let title = match rule.max_len {
        Some(max) => format!(" {} ({}/{max}) ", rule.label, value.chars().count()),
        None => format!(" {} ", rule.label),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), chunks[0]);

    if let Some(err) = error {
        let text = Paragraph::new(Span::styled(
            format!(" {}", err.message()),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(text, chunks[1]);
    }
}
