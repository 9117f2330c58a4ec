//! Field rules: one table entry per form field
//!
//! Every field owns a format regex, its two error messages and a formatter
//! that normalizes raw keystroke input. The UI, the validator and the
//! exporter all read from the same table.

use super::error::ValidationError;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

/// Maximum password length in digits
pub const PASSWORD_LEN: usize = 9;
/// Maximum phone length including the leading `+`
pub const PHONE_LEN: usize = 13;
/// Letters at the start of a passport ID
pub const PASSPORT_LETTERS: usize = 2;
/// Digits after the passport letters
pub const PASSPORT_DIGITS: usize = 7;

/// The four fields of the registration form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldKind {
    Username,
    Password,
    Phone,
    PassportId,
}

impl FieldKind {
    /// All fields in display order
    pub const ALL: [FieldKind; 4] = [
        FieldKind::Username,
        FieldKind::Password,
        FieldKind::Phone,
        FieldKind::PassportId,
    ];

    /// Position of the field in [`FieldKind::ALL`]
    pub fn index(self) -> usize {
        match self {
            FieldKind::Username => 0,
            FieldKind::Password => 1,
            FieldKind::Phone => 2,
            FieldKind::PassportId => 3,
        }
    }

    /// Field at the given display position
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Rule table entry for this field
    pub fn rule(self) -> &'static FieldRule {
        &RULES[self.index()]
    }

    /// Record key, used for serialization and the spreadsheet header
    pub fn key(self) -> &'static str {
        self.rule().key
    }

    /// Human readable label
    pub fn label(self) -> &'static str {
        self.rule().label
    }
}

/// Validation and formatting configuration for a single field
pub struct FieldRule {
    pub kind: FieldKind,
    pub key: &'static str,
    pub label: &'static str,
    pub placeholder: Option<&'static str>,
    /// `None` means any non-empty value is accepted
    pub pattern: Option<Regex>,
    pub required_message: &'static str,
    pub format_message: &'static str,
    pub max_len: Option<usize>,
    pub formatter: fn(&str) -> String,
}

impl FieldRule {
    /// Normalize raw input for this field
    pub fn format(&self, raw: &str) -> String {
        (self.formatter)(raw)
    }

    /// Check a candidate value against this field's rule
    pub fn validate(&self, value: &str) -> Result<(), ValidationError> {
        if value.is_empty() {
            return Err(ValidationError::Required {
                field: self.kind,
                message: self.required_message,
            });
        }
        match &self.pattern {
            Some(pattern) if !pattern.is_match(value) => Err(ValidationError::InvalidFormat {
                field: self.kind,
                message: self.format_message,
            }),
            _ => Ok(()),
        }
    }
}

impl fmt::Debug for FieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRule")
            .field("kind", &self.kind)
            .field("pattern", &self.pattern.as_ref().map(Regex::as_str))
            .field("max_len", &self.max_len)
            .finish()
    }
}

lazy_static! {
    static ref RULES: [FieldRule; 4] = [
        FieldRule {
            kind: FieldKind::Username,
            key: "username",
            label: "Username",
            placeholder: None,
            pattern: None,
            required_message: "Please input your username!",
            format_message: "Please input your username!",
            max_len: None,
            formatter: format_username,
        },
        FieldRule {
            kind: FieldKind::Password,
            key: "password",
            label: "Password",
            placeholder: Some("Enter 9-digit password"),
            pattern: Some(Regex::new(r"^[0-9]{9}$").unwrap()),
            required_message: "Iltimos parol kiriting !",
            format_message: "Parol 9 ta raqamdan iborat bo'lishi kerak",
            max_len: Some(PASSWORD_LEN),
            formatter: format_password,
        },
        FieldRule {
            kind: FieldKind::Phone,
            key: "phone",
            label: "Phone",
            placeholder: Some("Enter phone number"),
            pattern: Some(Regex::new(r"^\+998[0-9]{9}$").unwrap()),
            required_message: "Iltimos Raqamingizni kiriting!",
            format_message:
                "Raqam +998 bilan boshlanishi hamda 9 ta raqamdan tashkil topishi kerak !",
            max_len: Some(PHONE_LEN),
            formatter: format_phone,
        },
        FieldRule {
            kind: FieldKind::PassportId,
            key: "passportID",
            label: "Passport ID",
            placeholder: None,
            pattern: Some(Regex::new(r"^[A-Z]{2}[0-9]{7}$").unwrap()),
            required_message: "Iltimos ID karta raqamini kiriting ?!",
            format_message:
                "Pasport raqami ikkita harf va 7 ta raqamdan tashkil topishi kerak !?",
            max_len: Some(PASSPORT_LETTERS + PASSPORT_DIGITS),
            formatter: format_passport_id,
        },
    ];
}

/// Format raw input for the given field
pub fn format(field: FieldKind, raw: &str) -> String {
    field.rule().format(raw)
}

/// Validate a value for the given field
pub fn validate(field: FieldKind, value: &str) -> Result<(), ValidationError> {
    field.rule().validate(value)
}

/// Upper-case the whole username
pub fn format_username(raw: &str) -> String {
    raw.to_uppercase()
}

/// Keep ASCII digits only, at most [`PASSWORD_LEN`] of them
pub fn format_password(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(PASSWORD_LEN)
        .collect()
}

/// Keep ASCII digits and a single leading `+`, at most [`PHONE_LEN`] chars
pub fn format_phone(raw: &str) -> String {
    let mut out = String::with_capacity(PHONE_LEN);
    for c in raw.chars() {
        if out.len() == PHONE_LEN {
            break;
        }
        if c.is_ascii_digit() || (c == '+' && out.is_empty()) {
            out.push(c);
        }
    }
    out
}

/// Upper-case, then keep up to two leading letters followed by up to seven digits
pub fn format_passport_id(raw: &str) -> String {
    let mut letters = String::with_capacity(PASSPORT_LETTERS);
    let mut digits = String::with_capacity(PASSPORT_DIGITS);

    for c in raw.chars().flat_map(char::to_uppercase) {
        if c.is_ascii_uppercase() {
            // Letters only count before the numeric suffix starts
            if digits.is_empty() && letters.len() < PASSPORT_LETTERS {
                letters.push(c);
            }
        } else if c.is_ascii_digit() && digits.len() < PASSPORT_DIGITS {
            digits.push(c);
        }
    }

    letters.push_str(&digits);
    letters
}

pub fn validate_username(value: &str) -> Result<(), ValidationError> {
    validate(FieldKind::Username, value)
}

pub fn validate_password(value: &str) -> Result<(), ValidationError> {
    validate(FieldKind::Password, value)
}

pub fn validate_phone(value: &str) -> Result<(), ValidationError> {
    validate(FieldKind::Phone, value)
}

pub fn validate_passport_id(value: &str) -> Result<(), ValidationError> {
    validate(FieldKind::PassportId, value)
}
