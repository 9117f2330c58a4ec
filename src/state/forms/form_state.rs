//! Editing state for the registration form

use super::error::{ValidationError, ValidationErrors};
use super::field::FieldKind;
use super::record::FormRecord;
use std::collections::BTreeMap;

/// Index of the action row (Submit / Reset) after the four fields
pub const ACTION_ROW: usize = FieldKind::ALL.len();

/// Buttons on the action row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormButton {
    #[default]
    Submit,
    Reset,
}

impl FormButton {
    pub const ALL: [FormButton; 2] = [FormButton::Submit, FormButton::Reset];

    pub fn label(self) -> &'static str {
        match self {
            FormButton::Submit => "Submit",
            FormButton::Reset => "Reset",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            FormButton::Submit => FormButton::Reset,
            FormButton::Reset => FormButton::Submit,
        }
    }
}

/// Common focus navigation for forms
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// The record being edited plus focus and inline errors
#[derive(Debug, Clone, Default)]
pub struct FormState {
    record: FormRecord,
    /// 0..=3 are fields, [`ACTION_ROW`] is the button row
    pub active_field_index: usize,
    pub selected_button: FormButton,
    errors: BTreeMap<FieldKind, ValidationError>,
}

impl Form for FormState {
    fn field_count(&self) -> usize {
        ACTION_ROW + 1
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(ACTION_ROW);
    }
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self) -> &FormRecord {
        &self.record
    }

    /// Field under the cursor, `None` on the action row
    pub fn active_kind(&self) -> Option<FieldKind> {
        FieldKind::from_index(self.active_field_index)
    }

    pub fn is_action_row_active(&self) -> bool {
        self.active_field_index == ACTION_ROW
    }

    pub fn error(&self, field: FieldKind) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Append a typed character to the active field
    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.active_kind() {
            let mut raw = self.record.get(field).to_string();
            raw.push(c);
            self.apply(field, &raw);
        }
    }

    /// Append pasted text to the active field
    pub fn paste(&mut self, text: &str) {
        if let Some(field) = self.active_kind() {
            let raw = format!("{}{}", self.record.get(field), text);
            self.apply(field, &raw);
        }
    }

    /// Remove the last character of the active field
    pub fn backspace(&mut self) {
        if let Some(field) = self.active_kind() {
            let mut raw = self.record.get(field).to_string();
            if raw.pop().is_none() {
                return;
            }
            self.apply(field, &raw);
        }
    }

    /// Run raw input through the field formatter and re-check that field only
    fn apply(&mut self, field: FieldKind, raw: &str) {
        self.record = self.record.with_input(field, raw);
        self.revalidate(field);
    }

    fn revalidate(&mut self, field: FieldKind) {
        match field.rule().validate(self.record.get(field)) {
            Ok(()) => {
                self.errors.remove(&field);
            }
            Err(err) => {
                self.errors.insert(field, err);
            }
        }
    }

    /// Replace all inline errors with the result of a whole-form validation
    pub fn show_errors(&mut self, errors: &ValidationErrors) {
        self.errors = errors.iter().map(|e| (e.field(), e.clone())).collect();
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    /// Move focus to the first field that has an error
    pub fn focus_first_error(&mut self) {
        if let Some(field) = self.errors.keys().next() {
            self.active_field_index = field.index();
        }
    }

    /// Back to an empty record with no errors
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn next_button(&mut self) {
        self.selected_button = self.selected_button.toggle();
    }
}
