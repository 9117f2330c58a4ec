//! Application state and core logic

use crate::config::FormConfig;
use crate::state::{Form, FormButton, FormState};
use crate::submission::{self, Exporter, Submission, ToastNotifier, XlsxExporter};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::VecDeque;
use std::path::PathBuf;

/// Main application struct
pub struct App {
    /// Form being edited
    pub form: FormState,
    /// Success notices shown over the form
    pub toasts: ToastNotifier,
    /// Spreadsheet writer for accepted submissions
    exporter: Box<dyn Exporter>,
    config: FormConfig,
    /// Errors waiting to be shown in the modal dialog
    errors: VecDeque<String>,
    /// One-line feedback in the status bar
    pub status_message: Option<String>,
    /// Path of the most recent export
    pub last_export: Option<PathBuf>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App that exports to the configured directory
    pub fn new(config: FormConfig) -> Self {
        let exporter = XlsxExporter::new(config.export_dir());
        tracing::info!("Exports go to {}", exporter.dir().display());
        Self::with_exporter(config, Box::new(exporter))
    }

    pub fn with_exporter(config: FormConfig, exporter: Box<dyn Exporter>) -> Self {
        Self {
            form: FormState::new(),
            toasts: ToastNotifier::new(config.notification_duration()),
            exporter,
            config,
            errors: VecDeque::new(),
            status_message: None,
            last_export: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn quit(&mut self) {
        self.quit = true;
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.errors.push_back(message.into());
    }

    /// Error shown in the dialog, if any
    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }

    /// Per-frame housekeeping
    pub fn tick(&mut self) {
        self.toasts.tick();
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.dismiss_error();
            }
            return Ok(());
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let on_action_row = self.form.is_action_row_active();

        match key.code {
            // Keyboard shortcuts (work from anywhere)
            KeyCode::Char('s') if ctrl => self.submit().await,
            KeyCode::Char('r') if ctrl => self.reset(),
            KeyCode::Char('v') if key.modifiers.contains(crate::platform::SHORTCUT_MODIFIER) => {
                self.paste_from_clipboard()
            }
            KeyCode::Esc => self.toasts.dismiss(),
            KeyCode::Tab | KeyCode::Down => self.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.form.prev_field(),
            // Action row navigation
            KeyCode::Left | KeyCode::Right | KeyCode::Char('h') | KeyCode::Char('l')
                if on_action_row =>
            {
                self.form.next_button()
            }
            KeyCode::Enter if on_action_row => match self.form.selected_button {
                FormButton::Submit => self.submit().await,
                FormButton::Reset => self.reset(),
            },
            // Enter on a field moves on, like Tab
            KeyCode::Enter => self.form.next_field(),
            // Form field input (only when not on action row)
            KeyCode::Char(c) if !ctrl => {
                self.status_message = None;
                self.form.input_char(c);
            }
            KeyCode::Backspace => self.form.backspace(),
            _ => {}
        }
        Ok(())
    }

    /// Handle a bracketed paste from the terminal
    pub fn paste(&mut self, text: &str) {
        self.form.paste(text);
    }

    fn paste_from_clipboard(&mut self) {
        match read_clipboard() {
            Ok(text) => self.paste(&text),
            Err(err) => {
                tracing::warn!("Clipboard read failed: {err}");
                self.push_error(format!("Clipboard unavailable: {err}"));
            }
        }
    }

    /// Validate the form and, when valid, notify and export
    pub async fn submit(&mut self) {
        let record = self.form.record().clone();
        let result = submission::submit(
            &record,
            &mut self.toasts,
            self.exporter.as_ref(),
            self.config.export_file_name(),
        )
        .await;

        match result {
            Ok(Submission::Accepted { path }) => {
                self.status_message = Some(format!("Saved {}", path.display()));
                self.last_export = Some(path);
                if self.config.reset_on_submit() {
                    self.form.reset();
                } else {
                    self.form.clear_errors();
                }
            }
            Ok(Submission::Rejected(errors)) => {
                self.form.show_errors(&errors);
                self.form.focus_first_error();
                self.status_message = Some(format!("{} field(s) need attention", errors.len()));
            }
            Err(err) => {
                tracing::error!("Export failed: {err:#}");
                self.push_error(format!("Export failed: {err:#}"));
            }
        }
    }

    /// Clear the form
    pub fn reset(&mut self) {
        self.form.reset();
        self.status_message = None;
    }
}

fn read_clipboard() -> Result<String> {
    use arboard::Clipboard;
    let mut clipboard = Clipboard::new()?;
    Ok(clipboard.get_text()?)
}
