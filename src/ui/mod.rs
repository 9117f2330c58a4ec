//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    forms::draw_registration_form(frame, main_area, app);
    layout::draw_status_bar(frame, status_area, app);

    // Overlays: toast first so a modal error stays on top
    if let Some(toast) = app.toasts.current() {
        components::render_toast(frame, toast);
    }
    if let Some(error) = app.current_error() {
        components::render_error_dialog(frame, error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FormConfig;
    use crate::state::{FieldKind, Form};
    use crate::submission::{Notifier, XlsxExporter};
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App) -> String {
        render_sized(app, 100, 30)
    }

    fn render_sized(app: &App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app() -> App {
        App::with_exporter(FormConfig::default(), Box::new(XlsxExporter::new(".")))
    }

    #[test]
    fn test_draws_labels_and_buttons() {
        let screen = render(&app());
        for label in ["Username", "Password (0/9)", "Phone (0/13)", "Passport ID", "Submit", "Reset"] {
            assert!(screen.contains(label), "missing {label}");
        }
        assert!(screen.contains("Enter 9-digit password"));
    }

    #[test]
    fn test_draws_inline_error() {
        let mut app = app();
        app.form.set_active_field(FieldKind::Password.index());
        app.form.input_char('1');
        let screen = render(&app);
        assert!(screen.contains("Parol 9 ta raqamdan"));
    }

    #[test]
    fn test_draws_toast() {
        let mut app = app();
        app.toasts.success("Congratulations!", "Done");
        assert!(render(&app).contains("Congratulations!"));
    }

    #[test]
    fn test_toast_fits_short_terminal() {
        let mut app = app();
        app.toasts.success("Congratulations!", "Barcha malumotlarni to'g'ri kiritdingiz");
        for height in 1..=6 {
            let screen = render_sized(&app, 80, height);
            assert_eq!(screen.lines().count(), height as usize);
        }
        assert!(render_sized(&app, 80, 5).contains("Congratulations!"));
    }

    #[test]
    fn test_error_dialog_fits_tiny_terminal() {
        let mut app = app();
        app.push_error("Export failed: disk full");
        render_sized(&app, 20, 3);
    }

    #[test]
    fn test_draws_error_dialog() {
        let mut app = app();
        app.push_error("Export failed: disk full");
        let screen = render(&app);
        assert!(screen.contains("Export failed: disk full"));
        assert!(screen.contains("to dismiss"));
    }
}
