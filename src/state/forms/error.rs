//! Field validation errors

use super::field::FieldKind;
use std::fmt;
use thiserror::Error;

/// Why a single field failed validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The field is empty
    #[error("{message}")]
    Required {
        field: FieldKind,
        message: &'static str,
    },
    /// The field has a value that does not match its format
    #[error("{message}")]
    InvalidFormat {
        field: FieldKind,
        message: &'static str,
    },
}

impl ValidationError {
    pub fn field(&self) -> FieldKind {
        match self {
            Self::Required { field, .. } | Self::InvalidFormat { field, .. } => *field,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Required { message, .. } | Self::InvalidFormat { message, .. } => *message,
        }
    }
}

/// Every field error found while validating a whole record
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    /// Error for a specific field, if it failed
    pub fn get(&self, field: FieldKind) -> Option<&ValidationError> {
        self.0.iter().find(|e| e.field() == field)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}: {err}", err.field().key())?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let err = ValidationError::InvalidFormat {
            field: FieldKind::Phone,
            message: "bad phone",
        };
        assert_eq!(err.field(), FieldKind::Phone);
        assert_eq!(err.message(), "bad phone");
        assert_eq!(err.to_string(), "bad phone");
    }

    #[test]
    fn test_errors_display_joins_fields() {
        let errors = ValidationErrors(vec![
            ValidationError::Required {
                field: FieldKind::Username,
                message: "required",
            },
            ValidationError::InvalidFormat {
                field: FieldKind::PassportId,
                message: "format",
            },
        ]);
        assert_eq!(errors.to_string(), "username: required; passportID: format");
        assert!(errors.get(FieldKind::PassportId).is_some());
        assert!(errors.get(FieldKind::Phone).is_none());
    }
}
