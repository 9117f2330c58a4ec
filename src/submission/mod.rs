//! Submission of a completed form
//!
//! Validates the whole record, then hands it to the notifier and the
//! exporter. A record with any invalid field never reaches either.

mod toast;
mod traits;
mod xlsx;

pub use toast::{Toast, ToastNotifier, DEFAULT_TOAST_DURATION};
pub use traits::{Exporter, Notifier};
pub use xlsx::{sanitize_filename, to_xlsx, XlsxExporter, DEFAULT_FILE_NAME};

#[cfg(test)]
pub use traits::{MockExporter, MockNotifier};

use crate::state::{FormRecord, ValidationErrors};
use anyhow::Result;
use std::path::PathBuf;

/// Title of the success notice
pub const SUCCESS_TITLE: &str = "Congratulations!";
/// Body of the success notice
pub const SUCCESS_DESCRIPTION: &str = "Barcha malumotlarni to'g'ri kiritdingiz 👍🎉✔";

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// All fields passed; the record was exported to `path`
    Accepted { path: PathBuf },
    /// At least one field failed; nothing was notified or exported
    Rejected(ValidationErrors),
}

impl Submission {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Submission::Accepted { .. })
    }
}

/// Validate `record` and, when every field passes, notify once and export once
pub async fn submit(
    record: &FormRecord,
    notifier: &mut dyn Notifier,
    exporter: &dyn Exporter,
    base_name: &str,
) -> Result<Submission> {
    if let Err(errors) = record.validate() {
        tracing::warn!("Failed: {errors}");
        return Ok(Submission::Rejected(errors));
    }

    let values = serde_json::to_string(record)?;
    tracing::debug!("Values: {values}");

    notifier.success(SUCCESS_TITLE, SUCCESS_DESCRIPTION);
    let path = exporter
        .export(std::slice::from_ref(record), base_name)
        .await?;

    Ok(Submission::Accepted { path })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FieldKind, ValidationError};
    use mockall::predicate::eq;
    use pretty_assertions::assert_eq;

    fn valid() -> FormRecord {
        FormRecord::new("Ali", "123456789", "+998912345678", "AB1234567")
    }

    #[tokio::test]
    async fn test_valid_record_notifies_and_exports_once() {
        let mut notifier = MockNotifier::new();
        notifier
            .expect_success()
            .with(eq(SUCCESS_TITLE), eq(SUCCESS_DESCRIPTION))
            .times(1)
            .return_const(());

        let expected = valid();
        let mut exporter = MockExporter::new();
        exporter
            .expect_export()
            .withf(move |rows, name| {
                rows.len() == 1 && rows[0] == expected && name.to_string() == "Form_Data"
            })
            .times(1)
            .returning(|_, _| Ok(PathBuf::from("Form_Data.xlsx")));

        let outcome = submit(&valid(), &mut notifier, &exporter, "Form_Data")
            .await
            .unwrap();

        assert_eq!(
            outcome,
            Submission::Accepted {
                path: PathBuf::from("Form_Data.xlsx")
            }
        );
    }

    #[tokio::test]
    async fn test_short_password_is_rejected_without_side_effects() {
        let mut notifier = MockNotifier::new();
        notifier.expect_success().times(0);
        let mut exporter = MockExporter::new();
        exporter.expect_export().times(0);

        let record = valid().with_field(FieldKind::Password, "12345");
        let outcome = submit(&record, &mut notifier, &exporter, "Form_Data")
            .await
            .unwrap();

        let Submission::Rejected(errors) = outcome else {
            panic!("expected rejection");
        };
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            errors.get(FieldKind::Password),
            Some(ValidationError::InvalidFormat { .. })
        ));
    }

    #[tokio::test]
    async fn test_empty_record_reports_every_field() {
        let mut notifier = MockNotifier::new();
        notifier.expect_success().times(0);
        let mut exporter = MockExporter::new();
        exporter.expect_export().times(0);

        let outcome = submit(&FormRecord::default(), &mut notifier, &exporter, "x")
            .await
            .unwrap();

        match outcome {
            Submission::Rejected(errors) => assert_eq!(errors.len(), 4),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_export_failure_propagates() {
        let mut notifier = MockNotifier::new();
        notifier.expect_success().times(1).return_const(());
        let mut exporter = MockExporter::new();
        exporter
            .expect_export()
            .times(1)
            .returning(|_, _| Err(anyhow::anyhow!("disk full")));

        let result = submit(&valid(), &mut notifier, &exporter, "Form_Data").await;

        assert!(result.unwrap_err().to_string().contains("disk full"));
    }

    #[derive(Clone, Default)]
    struct Captured(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_password_stays_out_of_info_logs() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_writer(move || writer.clone())
            .finish();

        let mut notifier = MockNotifier::new();
        notifier.expect_success().return_const(());
        let mut exporter = MockExporter::new();
        exporter
            .expect_export()
            .returning(|_, _| Ok(PathBuf::from("Form_Data.xlsx")));

        tracing::subscriber::with_default(subscriber, || {
            tokio_test::block_on(submit(&valid(), &mut notifier, &exporter, "Form_Data"))
                .unwrap();
        });

        let logs = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(!logs.contains("123456789"), "{logs}");
    }

    #[tokio::test]
    async fn test_resubmit_after_correction() {
        let mut notifier = MockNotifier::new();
        notifier.expect_success().times(1).return_const(());
        let mut exporter = MockExporter::new();
        exporter
            .expect_export()
            .times(1)
            .returning(|_, _| Ok(PathBuf::from("Form_Data.xlsx")));

        let bad = valid().with_field(FieldKind::Phone, "998912345678");
        let first = submit(&bad, &mut notifier, &exporter, "Form_Data")
            .await
            .unwrap();
        assert!(!first.is_accepted());

        let fixed = bad.with_input(FieldKind::Phone, "+998912345678");
        let second = submit(&fixed, &mut notifier, &exporter, "Form_Data")
            .await
            .unwrap();
        assert!(second.is_accepted());
    }
}
