//! The submitted record

use super::error::ValidationErrors;
use super::field::{self, FieldKind};
use serde::Serialize;

/// Four field values submitted together
///
/// Fields are private; every change goes through [`FormRecord::with_field`]
/// or [`FormRecord::with_input`] which return a new record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormRecord {
    username: String,
    password: String,
    phone: String,
    #[serde(rename = "passportID")]
    passport_id: String,
}

impl FormRecord {
    /// Build a record from already formatted values
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        phone: impl Into<String>,
        passport_id: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            phone: phone.into(),
            passport_id: passport_id.into(),
        }
    }

    pub fn get(&self, field: FieldKind) -> &str {
        match field {
            FieldKind::Username => &self.username,
            FieldKind::Password => &self.password,
            FieldKind::Phone => &self.phone,
            FieldKind::PassportId => &self.passport_id,
        }
    }

    /// Copy of this record with one field replaced verbatim
    pub fn with_field(&self, field: FieldKind, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let slot = match field {
            FieldKind::Username => &mut next.username,
            FieldKind::Password => &mut next.password,
            FieldKind::Phone => &mut next.phone,
            FieldKind::PassportId => &mut next.passport_id,
        };
        *slot = value.into();
        next
    }

    /// Copy of this record with raw input run through the field's formatter
    pub fn with_input(&self, field: FieldKind, raw: &str) -> Self {
        self.with_field(field, field::format(field, raw))
    }

    /// `(key, value)` pairs in display order
    pub fn entries(&self) -> [(&'static str, &str); 4] {
        FieldKind::ALL.map(|f| (f.key(), self.get(f)))
    }

    pub fn is_empty(&self) -> bool {
        FieldKind::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Validate every field, collecting all failures
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let errors: Vec<_> = FieldKind::ALL
            .iter()
            .filter_map(|f| field::validate(*f, self.get(*f)).err())
            .collect();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ValidationError;
    use pretty_assertions::assert_eq;

    fn valid() -> FormRecord {
        FormRecord::new("ALI", "123456789", "+998912345678", "AB1234567")
    }

    #[test]
    fn test_with_field_leaves_original_and_siblings() {
        let original = valid();
        let next = original.with_field(FieldKind::Phone, "+998");
        assert_eq!(original.get(FieldKind::Phone), "+998912345678");
        assert_eq!(next.get(FieldKind::Phone), "+998");
        for f in [FieldKind::Username, FieldKind::Password, FieldKind::PassportId] {
            assert_eq!(next.get(f), original.get(f));
        }
    }

    #[test]
    fn test_with_input_formats() {
        let record = FormRecord::default()
            .with_input(FieldKind::Username, "ali")
            .with_input(FieldKind::Password, "12-34x")
            .with_input(FieldKind::PassportId, "ab 12");
        assert_eq!(record.get(FieldKind::Username), "ALI");
        assert_eq!(record.get(FieldKind::Password), "1234");
        assert_eq!(record.get(FieldKind::PassportId), "AB12");
        assert_eq!(record.get(FieldKind::Phone), "");
    }

    #[test]
    fn test_entries_order() {
        assert_eq!(
            valid().entries(),
            [
                ("username", "ALI"),
                ("password", "123456789"),
                ("phone", "+998912345678"),
                ("passportID", "AB1234567"),
            ]
        );
    }

    #[test]
    fn test_serializes_with_record_keys() {
        let json = serde_json::to_value(valid()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "username": "ALI",
                "password": "123456789",
                "phone": "+998912345678",
                "passportID": "AB1234567",
            })
        );
    }

    #[test]
    fn test_validate_valid_record() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_validate_collects_every_failure() {
        let errors = FormRecord::default().validate().unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors
            .iter()
            .all(|e| matches!(e, ValidationError::Required { .. })));
    }

    #[test]
    fn test_validate_single_failure() {
        let record = valid().with_field(FieldKind::Password, "12345");
        let errors = record.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            errors.get(FieldKind::Password),
            Some(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_is_empty() {
        assert!(FormRecord::default().is_empty());
        assert!(!valid().is_empty());
    }
}
