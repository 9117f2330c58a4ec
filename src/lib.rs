//! Registration form library
//!
//! Field rules, the immutable form record, submission handling and the
//! terminal UI. Modules are exposed so the binary stays a thin shell.

pub mod app;
pub mod config;
pub mod platform;
pub mod state;
pub mod submission;
pub mod ui;

pub use app::App;
pub use config::FormConfig;
pub use state::{FieldKind, FormRecord, ValidationError, ValidationErrors};
pub use submission::{submit, Exporter, Notifier, Submission, XlsxExporter};
