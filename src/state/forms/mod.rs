//! Form domain layer
//!
//! This module provides the field rule table, the immutable record and the
//! editing state that the terminal UI drives.

mod error;
mod field;
mod form_state;
mod record;

pub use error::{ValidationError, ValidationErrors};
pub use field::{
    format, format_passport_id, format_password, format_phone, format_username, validate,
    validate_passport_id, validate_password, validate_phone, validate_username, FieldKind,
    FieldRule, PASSPORT_DIGITS, PASSPORT_LETTERS, PASSWORD_LEN, PHONE_LEN,
};
pub use form_state::{Form, FormButton, FormState, ACTION_ROW};
pub use record::FormRecord;
