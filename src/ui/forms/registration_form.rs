//! Registration form rendering

use super::field_renderer::{draw_field, FIELD_HEIGHT};
use crate::app::App;
use crate::state::{FieldKind, Form, FormButton};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the form with the action panel on the right
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Form area
            Constraint::Length(20), // Action panel
        ])
        .split(area);

    draw_form(frame, main_chunks[0], app);
    draw_action_panel(frame, main_chunks[1], app);
}

/// Draw the four fields
fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let mut constraints: Vec<Constraint> = FieldKind::ALL
        .iter()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .collect();
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(area);

    let form = &app.form;
    let border_color = if form.is_action_row_active() {
        Color::DarkGray
    } else {
        Color::Cyan
    };

    let block = Block::default()
        .title(" Registration ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(block, area);

    for field in FieldKind::ALL {
        draw_field(
            frame,
            chunks[field.index()],
            field,
            form.record().get(field),
            form.error(field),
            form.active_field() == field.index(),
        );
    }

    if let Some(path) = &app.last_export {
        let saved = Paragraph::new(Line::from(vec![
            Span::styled(" Last export: ", Style::default().fg(Color::DarkGray)),
            Span::styled(path.display().to_string(), Style::default().fg(Color::Green)),
        ]));
        frame.render_widget(saved, chunks[FieldKind::ALL.len()]);
    }
}

/// Draw the Submit / Reset panel
fn draw_action_panel(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.form.is_action_row_active();
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let button_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Submit (primary)
            Constraint::Length(BUTTON_HEIGHT), // Reset
            Constraint::Min(0),
        ])
        .split(inner_area);

    for (i, button) in FormButton::ALL.iter().enumerate() {
        let accent = match button {
            FormButton::Submit => Color::Green,
            FormButton::Reset => Color::Gray,
        };
        render_action_button(
            frame,
            button_chunks[i],
            button.label(),
            is_focused && app.form.selected_button == *button,
            accent,
        );
    }
}
